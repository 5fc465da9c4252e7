/*!
Platform abstraction traits.

These traits define the contract between core code and platform services.
Platform-specific code (macOS) implements them; core code only uses the
traits, never platform types directly. Tests substitute in-memory fakes.
*/

use crate::a11y::Value;
use crate::types::{ProcessId, Rect, WindowRecord};

/// Attributes fetched from a platform element.
///
/// Every field is optional: an attribute the element's role does not support
/// fails silently to `None` rather than aborting the traversal.
#[derive(Debug, Default, Clone)]
pub(crate) struct ElementAttributes {
  /// Platform role string (e.g. `"AXButton"`).
  pub role: Option<String>,
  pub name: Option<String>,
  pub value: Option<Value>,
  /// Bounding box in screen coordinates.
  pub bounds: Option<Rect>,
}

/// Per-element operations. Clone is cheap (reference-counted handles).
pub(crate) trait ElementProvider: Clone {
  /// Fetch current attributes. Unsupported attributes come back as `None`.
  fn attributes(&self) -> ElementAttributes;

  /// Fetch child elements. Returns empty vec when the element has no
  /// children or does not support the query.
  fn children(&self) -> Vec<Self>;
}

/// Platform-global operations (blocking request/response against the OS).
pub(crate) trait Platform {
  /// Element handle type for this platform.
  type Element: ElementProvider;

  /// Check if accessibility permissions are granted.
  fn has_permissions() -> bool;

  /// Fetch all on-screen windows, frontmost first within each layer.
  fn list_windows() -> Vec<WindowRecord>;

  /// Backing scale factor of the main display (physical pixels per point).
  fn backing_scale_factor() -> f64;

  /// Fetch the window elements the application itself reports.
  fn application_windows(pid: ProcessId) -> Vec<Self::Element>;

  /// Resolve a bundle identifier to the pid owning its on-screen windows.
  fn pid_for_bundle(bundle_id: &str) -> Option<ProcessId>;

  /// Bundle identifiers of applications with at least one on-screen window,
  /// frontmost first.
  fn visible_bundles() -> Vec<String>;
}
