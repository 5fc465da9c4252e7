/*!
Annotation support: role colors and overlay geometry.

Pure computation only - callers (the CLI) own the actual pixel drawing.
Overlays come out in physical pixels, converted with an explicit [`Scale`].
*/

use crate::scale::Scale;
use crate::types::{Rect, UiNode, WindowTree};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An 8-bit RGB outline color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}

/// Fallback outline color for roles without a table entry.
pub const DEFAULT_ROLE_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Role to outline color, one entry per role tag.
const ROLE_COLORS: &[(&str, Rgb)] = &[
  ("AXButton", Rgb::new(0, 0, 255)),
  ("AXTextField", Rgb::new(0, 128, 0)),
  ("AXStaticText", Rgb::new(255, 255, 0)),
  ("AXImage", Rgb::new(128, 0, 128)),
  ("AXGroup", Rgb::new(255, 165, 0)),
  ("AXScrollBar", Rgb::new(165, 42, 42)),
  ("AXRow", Rgb::new(255, 192, 203)),
  ("AXColumn", Rgb::new(0, 255, 255)),
  ("AXCell", Rgb::new(255, 0, 255)),
  ("AXTable", Rgb::new(173, 216, 230)),
  ("AXOutline", Rgb::new(144, 238, 144)),
  ("AXLayoutArea", Rgb::new(255, 255, 224)),
  ("AXLayoutItem", Rgb::new(230, 230, 250)),
  ("AXHandle", Rgb::new(255, 218, 185)),
  ("AXSplitter", Rgb::new(255, 160, 122)),
  ("AXIncrementor", Rgb::new(255, 182, 193)),
  ("AXBusyIndicator", Rgb::new(224, 255, 255)),
  ("AXProgressIndicator", Rgb::new(221, 160, 221)),
  ("AXToolbar", Rgb::new(139, 0, 0)),
  ("AXPopover", Rgb::new(0, 0, 139)),
  ("AXMenu", Rgb::new(0, 100, 0)),
  ("AXMenuItem", Rgb::new(128, 128, 0)),
  ("AXMenuBar", Rgb::new(102, 51, 153)),
  ("AXMenuBarItem", Rgb::new(255, 140, 0)),
  ("AXMenuButton", Rgb::new(139, 69, 19)),
  ("AXMenuItemCheckbox", Rgb::new(219, 112, 147)),
  ("AXMenuItemRadio", Rgb::new(0, 139, 139)),
];

/// Outline color for a role tag.
pub fn color_for_role(role: &str) -> Rgb {
  ROLE_COLORS
    .iter()
    .find(|(tag, _)| *tag == role)
    .map_or(DEFAULT_ROLE_COLOR, |(_, color)| *color)
}

/// Preorder flattening of a tree (root first).
pub fn flatten(root: &UiNode) -> Vec<&UiNode> {
  let mut nodes = Vec::new();
  fn walk<'a>(node: &'a UiNode, out: &mut Vec<&'a UiNode>) {
    out.push(node);
    for child in &node.children {
      walk(child, out);
    }
  }
  walk(root, &mut nodes);
  nodes
}

/// One rectangle to draw on a captured image, in physical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Overlay {
  pub rect: Rect,
  pub color: Rgb,
  pub label: Option<String>,
}

/// Overlays for a cropped window image: every visible descendant of the
/// window root, outlined in its role color, in window-local pixels.
pub fn window_overlays(tree: &WindowTree, scale: Scale) -> Vec<Overlay> {
  flatten(&tree.root)
    .into_iter()
    .skip(1) // the window itself is the image, not an annotation
    .filter_map(|node| {
      let visible_bbox = node.visible_bbox?;
      Some(Overlay {
        rect: scale.to_pixels(&visible_bbox),
        color: color_for_role(&node.role),
        label: None,
      })
    })
    .collect()
}

/// Overlays for a full-screen image: every visible node of every tree,
/// anchored by its window rect, labeled with element and app name.
pub fn screen_overlays(trees: &[WindowTree], scale: Scale) -> Vec<Overlay> {
  let mut overlays = Vec::new();
  for tree in trees {
    for node in flatten(&tree.root) {
      let Some(visible_bbox) = node.visible_bbox else {
        continue;
      };
      let screen = visible_bbox.translate(tree.root.window_rect.x, tree.root.window_rect.y);
      let label = match &node.name {
        Some(name) => format!("{name} ({})", tree.app_name),
        None => tree.app_name.clone(),
      };
      overlays.push(Overlay {
        rect: scale.to_pixels(&screen),
        color: DEFAULT_ROLE_COLOR,
        label: (!label.is_empty()).then_some(label),
      });
    }
  }
  overlays
}
