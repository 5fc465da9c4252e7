/*! Shared utilities for macOS accessibility. */

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_wrap)]

use objc2_application_services::{AXIsProcessTrusted, AXUIElement};
use objc2_core_foundation::CFRetained;

/// Create an `AXUIElement` for an application by PID.
/// Encapsulates the unsafe FFI call.
pub(super) fn app_element(pid: u32) -> CFRetained<AXUIElement> {
  unsafe { AXUIElement::new_application(pid as i32) }
}

/// Check if accessibility permissions are granted.
pub(super) fn has_permissions() -> bool {
  unsafe { AXIsProcessTrusted() }
}

/// Backing scale factor of the main screen (physical pixels per point).
/// Falls back to 1.0 when no screen is attached.
pub(super) fn backing_scale_factor() -> f64 {
  let screen: *mut objc2::runtime::AnyObject =
    unsafe { objc2::msg_send![objc2::class!(NSScreen), mainScreen] };
  if screen.is_null() {
    return 1.0;
  }
  unsafe { objc2::msg_send![&*screen, backingScaleFactor] }
}
