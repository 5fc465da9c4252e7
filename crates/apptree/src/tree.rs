/*!
Clipped UI element tree construction.

Walks an application's element hierarchy, converting every bounding box to
window-local coordinates and clipping it against the parent's visible region.
The enclosing window's screen rect rides along as immutable context and is
copied into every node, so no parent pointers are needed.

Invisible nodes do not prune their subtree: children are still visited,
clipped against the same unchanged parent region, and stay invisible unless
their own reported geometry escapes it. One policy everywhere.
*/

use crate::platform::ElementProvider;
use crate::types::{Rect, UiNode};

/// Immutable per-window context threaded through the recursion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TreeContext {
  /// Screen rect of the window being extracted.
  pub window_rect: Rect,
  /// Seed clip region for the root, window-local.
  pub visible_seed: Rect,
  /// Depth budget. `None` = unlimited.
  pub max_depth: Option<u32>,
}

/// Build the clipped tree for one window element.
pub(crate) fn build_window_tree<E: ElementProvider>(root: &E, ctx: &TreeContext) -> UiNode {
  build_node(root, ctx.window_rect, ctx.visible_seed, ctx.max_depth)
}

fn build_node<E: ElementProvider>(
  element: &E,
  window_rect: Rect,
  parent_visible: Rect,
  depth: Option<u32>,
) -> UiNode {
  let attrs = element.attributes();

  // Provider geometry is screen-space; the tree keeps window-local boxes.
  let bbox = attrs
    .bounds
    .map(|b| b.translate(-window_rect.x, -window_rect.y));
  let visible_bbox = bbox.and_then(|b| b.intersect(&parent_visible));
  let visible = visible_bbox.is_some();

  // Invisible nodes pass the unchanged parent region down.
  let child_clip = visible_bbox.unwrap_or(parent_visible);

  let children = if depth.map_or(true, |d| d > 0) {
    element
      .children()
      .iter()
      .map(|child| build_node(child, window_rect, child_clip, depth.map(|d| d - 1)))
      .collect()
  } else {
    Vec::new()
  };

  UiNode {
    role: attrs.role.unwrap_or_else(|| "AXUnknown".to_owned()),
    name: attrs.name,
    value: attrs.value,
    bbox,
    visible,
    visible_bbox,
    window_rect,
    children,
  }
}
