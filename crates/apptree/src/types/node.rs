/*! UI element tree nodes.

A `UiNode` owns its children outright (strict tree, no parent pointers).
The enclosing window's screen rect is copied into every node so any node can
be converted to screen coordinates without walking up.
*/

use super::{ProcessId, Rect, WindowId};
use crate::a11y::Value;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One UI element with its visibility-clipped geometry.
///
/// `bbox` and `visible_bbox` are window-local (origin at the window's
/// top-left); `window_rect` anchors them in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UiNode {
  /// Open role tag from the provider (e.g. `"AXButton"`).
  pub role: String,
  pub name: Option<String>,
  pub value: Option<Value>,
  /// Raw bounding box, window-local. `None` when the provider reported no
  /// usable geometry for this element.
  pub bbox: Option<Rect>,
  /// Whether any part of the element survives clipping.
  pub visible: bool,
  /// `bbox` clipped to the parent's visible region. `None` iff `!visible`.
  pub visible_bbox: Option<Rect>,
  /// Screen rect of the enclosing window, copied down from the root.
  pub window_rect: Rect,
  pub children: Vec<UiNode>,
}

/// An extracted window: identity plus the root of its clipped element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowTree {
  pub window_id: WindowId,
  pub process_id: ProcessId,
  pub app_name: String,
  pub bundle_id: Option<String>,
  pub root: UiNode,
}
