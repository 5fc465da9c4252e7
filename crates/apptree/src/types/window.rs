/*! Window records from the window-list service. */

use super::{ProcessId, Rect, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One on-screen window as reported by the window-list service.
///
/// Records are created fresh on every enumeration and never mutated;
/// an extraction pass consumes them and throws them away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowRecord {
  pub id: WindowId,
  pub process_id: ProcessId,
  pub app_name: String,
  pub bundle_id: Option<String>,
  pub title: Option<String>,
  pub bounds: Rect,
  /// Platform stacking layer. Higher layers draw in front.
  pub layer: i32,
  /// Window opacity in `[0, 1]`. Carried as data; occlusion treats every
  /// window as opaque.
  pub opacity: f64,
  /// Enumeration ordinal: 0 = frontmost, higher = further back within a layer.
  pub z_index: u32,
}
