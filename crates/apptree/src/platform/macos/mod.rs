/*!
macOS platform implementation.

All macOS-specific code (AXUIElement, CoreFoundation, CoreGraphics) stays
within this module; the rest of the crate only sees the platform traits.
*/

mod cf_utils;
mod element;
mod util;
mod window_list;

use super::Platform;
use crate::types::{ProcessId, WindowRecord};

/// macOS platform backend.
pub(crate) struct MacPlatform;

impl Platform for MacPlatform {
  type Element = element::AxElement;

  fn has_permissions() -> bool {
    util::has_permissions()
  }

  fn list_windows() -> Vec<WindowRecord> {
    window_list::enumerate_windows()
  }

  fn backing_scale_factor() -> f64 {
    util::backing_scale_factor()
  }

  fn application_windows(pid: ProcessId) -> Vec<Self::Element> {
    element::application_windows(pid)
  }

  fn pid_for_bundle(bundle_id: &str) -> Option<ProcessId> {
    window_list::pid_for_bundle(bundle_id)
  }

  fn visible_bundles() -> Vec<String> {
    window_list::visible_bundles()
  }
}
