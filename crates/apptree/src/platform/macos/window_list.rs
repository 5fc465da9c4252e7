/*! Window enumeration for macOS.

Uses `CGWindowListCopyWindowInfo` to enumerate on-screen windows front to
back, capturing the stacking layer, opacity, and enumeration ordinal the
occlusion index sorts by.
*/

#![allow(unsafe_code)]
#![allow(
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss,
  clippy::cast_possible_wrap
)]

use super::cf_utils::{
  get_cf_boolean, get_cf_float, get_cf_number, get_cf_string, get_cf_window_bounds,
  retain_cf_dictionary,
};
use crate::types::{ProcessId, Rect, WindowId, WindowRecord};
use objc2_app_kit::NSRunningApplication;
use objc2_core_foundation::{CFArray, CFDictionary};
use objc2_core_graphics::{kCGNullWindowID, CGWindowListCopyWindowInfo, CGWindowListOption};

/// Bundle IDs to always filter out (system UI).
const FILTERED_BUNDLE_IDS: &[&str] = &[
  "com.apple.dock",
  "com.apple.screencaptureui",
  "com.apple.screenshot.launcher",
  "com.apple.ScreenContinuity",
];

/// Menu-bar status item windows carry this name.
const STATUS_BAR_WINDOW_NAME: &str = "Item-0";

/// Windows smaller than this on either axis are chrome, not content.
const MIN_WINDOW_SIZE: f64 = 50.0;

/// Enumerate all on-screen windows.
/// Returns records in z-order (frontmost first); `z_index` preserves that
/// order for windows sharing a stacking layer.
pub(super) fn enumerate_windows() -> Vec<WindowRecord> {
  // IMPORTANT: Wrap in autorelease pool to prevent memory leaks.
  objc2::rc::autoreleasepool(|_pool| enumerate_windows_inner())
}

fn enumerate_windows_inner() -> Vec<WindowRecord> {
  let mut windows = Vec::new();

  let option = CGWindowListOption::OptionOnScreenOnly
    | CGWindowListOption::ExcludeDesktopElements
    | CGWindowListOption::OptionIncludingWindow;

  let Some(window_list_info) = CGWindowListCopyWindowInfo(option, kCGNullWindowID) else {
    return windows;
  };

  let windows_count = CFArray::count(&window_list_info);

  for idx in 0..windows_count {
    let window_cf_dictionary_ref =
      unsafe { CFArray::value_at_index(&window_list_info, idx).cast::<CFDictionary>() };

    let Some(dict) = retain_cf_dictionary(window_cf_dictionary_ref) else {
      continue;
    };

    if !get_cf_boolean(&dict, "kCGWindowIsOnscreen") {
      continue;
    }

    let layer = get_cf_number(&dict, "kCGWindowLayer");
    if !(0..=100).contains(&layer) {
      continue;
    }

    // Must have valid bounds
    let Some(cg_bounds) = get_cf_window_bounds(&dict) else {
      continue;
    };

    if cg_bounds.size.height < MIN_WINDOW_SIZE || cg_bounds.size.width < MIN_WINDOW_SIZE {
      continue;
    }

    // Must have valid PID
    let process_id = get_cf_number(&dict, "kCGWindowOwnerPID");
    if process_id == 0 {
      continue;
    }

    let title = get_cf_string(&dict, "kCGWindowName");
    if title == STATUS_BAR_WINDOW_NAME {
      continue;
    }

    let bundle_id =
      get_running_application(process_id as u32).and_then(get_bundle_identifier);
    if let Some(ref bundle) = bundle_id {
      if FILTERED_BUNDLE_IDS.contains(&bundle.as_str()) {
        continue;
      }
    }

    let app_name = get_cf_string(&dict, "kCGWindowOwnerName");
    let opacity = get_cf_float(&dict, "kCGWindowAlpha");
    let id = get_cf_number(&dict, "kCGWindowNumber");
    let z_index = windows.len() as u32;

    windows.push(WindowRecord {
      id: WindowId(id as u32),
      process_id: ProcessId(process_id as u32),
      app_name,
      bundle_id,
      title: (!title.is_empty()).then_some(title),
      bounds: Rect::new(
        cg_bounds.origin.x,
        cg_bounds.origin.y,
        cg_bounds.size.width,
        cg_bounds.size.height,
      ),
      layer,
      opacity,
      z_index,
    });
  }

  windows
}

/// Resolve a bundle identifier to the pid owning its frontmost window.
pub(super) fn pid_for_bundle(bundle_id: &str) -> Option<ProcessId> {
  enumerate_windows()
    .into_iter()
    .find(|record| record.bundle_id.as_deref() == Some(bundle_id))
    .map(|record| record.process_id)
}

/// Bundle identifiers with at least one on-screen window, frontmost first.
pub(super) fn visible_bundles() -> Vec<String> {
  let mut bundles: Vec<String> = Vec::new();
  for record in enumerate_windows() {
    if let Some(bundle) = record.bundle_id {
      if !bundles.contains(&bundle) {
        bundles.push(bundle);
      }
    }
  }
  bundles
}

fn get_bundle_identifier(app: &NSRunningApplication) -> Option<String> {
  app.bundleIdentifier().map(|s| s.to_string())
}

fn get_running_application(process_id: u32) -> Option<&'static NSRunningApplication> {
  let app: *mut NSRunningApplication = unsafe {
    objc2::msg_send![
        objc2::class!(NSRunningApplication),
        runningApplicationWithProcessIdentifier: process_id as i32
    ]
  };
  if app.is_null() {
    None
  } else {
    Some(unsafe { &*app })
  }
}
