/*! Stub platform for targets without a window-inspection backend.

Keeps the crate (and its platform-independent core) building everywhere;
every query comes back empty and permissions are never granted.
*/

use super::{ElementAttributes, ElementProvider, Platform};
use crate::types::{ProcessId, WindowRecord};

#[derive(Debug, Clone, Copy)]
pub(crate) struct StubElement;

impl ElementProvider for StubElement {
  fn attributes(&self) -> ElementAttributes {
    ElementAttributes::default()
  }

  fn children(&self) -> Vec<Self> {
    Vec::new()
  }
}

pub(crate) struct UnsupportedPlatform;

impl Platform for UnsupportedPlatform {
  type Element = StubElement;

  fn has_permissions() -> bool {
    false
  }

  fn list_windows() -> Vec<WindowRecord> {
    Vec::new()
  }

  fn backing_scale_factor() -> f64 {
    1.0
  }

  fn application_windows(_pid: ProcessId) -> Vec<Self::Element> {
    Vec::new()
  }

  fn pid_for_bundle(_bundle_id: &str) -> Option<ProcessId> {
    None
  }

  fn visible_bundles() -> Vec<String> {
    Vec::new()
  }
}
