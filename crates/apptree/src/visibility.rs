/*!
Occlusion index: per-window visible regions under front-to-back stacking.

Windows are processed front-to-back; each window's bounds are subtracted
against everything already seen, and then join the occluder set for the
windows behind it. A fully covered window keeps its (empty) entry so callers
can tell "present but hidden" from "absent".
*/

use crate::types::{ProcessId, Rect, WindowId, WindowRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visible regions of one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisibilityEntry {
  pub window_id: WindowId,
  pub process_id: ProcessId,
  /// Full window bounds, screen space.
  pub bounds: Rect,
  /// Disjoint fragments of the window not covered by any window in front of
  /// it. Empty when the window is fully occluded.
  pub visible: Vec<Rect>,
}

/// Build the occlusion index from one window enumeration.
///
/// Front-to-back order is descending stacking layer, then ascending
/// enumeration ordinal (lower ordinal = closer to the front within a layer).
pub fn build_visibility_index(records: &[WindowRecord]) -> Vec<VisibilityEntry> {
  let mut ordered: Vec<&WindowRecord> = records.iter().collect();
  ordered.sort_by(|a, b| b.layer.cmp(&a.layer).then(a.z_index.cmp(&b.z_index)));

  let mut seen: Vec<Rect> = Vec::new();
  let mut index = Vec::with_capacity(ordered.len());
  for record in ordered {
    let visible = record.bounds.subtract(&seen);
    log::trace!(
      "window {} ({}): {} visible fragment(s)",
      record.id,
      record.app_name,
      visible.len()
    );
    index.push(VisibilityEntry {
      window_id: record.id,
      process_id: record.process_id,
      bounds: record.bounds,
      visible,
    });
    seen.push(record.bounds);
  }
  index
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(id: u32, pid: u32, bounds: Rect, layer: i32, z_index: u32) -> WindowRecord {
    WindowRecord {
      id: WindowId(id),
      process_id: ProcessId(pid),
      app_name: format!("app-{pid}"),
      bundle_id: None,
      title: None,
      bounds,
      layer,
      opacity: 1.0,
      z_index,
    }
  }

  fn total_area(rects: &[Rect]) -> f64 {
    rects.iter().map(Rect::area).sum()
  }

  #[test]
  fn frontmost_window_fully_visible() {
    let records = [
      record(1, 10, Rect::new(0.0, 0.0, 100.0, 100.0), 1, 0),
      record(2, 20, Rect::new(50.0, 50.0, 100.0, 100.0), 0, 1),
    ];
    let index = build_visibility_index(&records);
    let front = index.iter().find(|e| e.window_id == WindowId(1)).unwrap();
    assert_eq!(front.visible, vec![front.bounds], "nothing occludes the front");
  }

  #[test]
  fn two_window_overlap_scenario() {
    // A at (0,0,100,100) layer 1 in front of B at (50,50,100,100) layer 0:
    // B keeps 10000 - 2500 = 7500, none of it inside A.
    let a_bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let records = [
      record(1, 10, a_bounds, 1, 0),
      record(2, 20, Rect::new(50.0, 50.0, 100.0, 100.0), 0, 1),
    ];
    let index = build_visibility_index(&records);
    let back = index.iter().find(|e| e.window_id == WindowId(2)).unwrap();
    assert!(
      (total_area(&back.visible) - 7500.0).abs() < 1e-6,
      "expected 7500 visible, got {}",
      total_area(&back.visible)
    );
    for frag in &back.visible {
      assert_eq!(frag.intersect(&a_bounds), None, "{frag:?} leaks under A");
    }
  }

  #[test]
  fn same_layer_orders_by_ordinal() {
    // Same layer: lower ordinal is closer to the front.
    let records = [
      record(1, 10, Rect::new(0.0, 0.0, 100.0, 100.0), 0, 0),
      record(2, 20, Rect::new(0.0, 0.0, 100.0, 100.0), 0, 1),
    ];
    let index = build_visibility_index(&records);
    let first = index.iter().find(|e| e.window_id == WindowId(1)).unwrap();
    let second = index.iter().find(|e| e.window_id == WindowId(2)).unwrap();
    assert_eq!(first.visible.len(), 1, "ordinal 0 wins the layer tie");
    assert!(second.visible.is_empty(), "ordinal 1 is fully covered");
  }

  #[test]
  fn layer_beats_ordinal() {
    // Higher layer is in front even with a later ordinal.
    let records = [
      record(1, 10, Rect::new(0.0, 0.0, 100.0, 100.0), 0, 0),
      record(2, 20, Rect::new(0.0, 0.0, 100.0, 100.0), 5, 1),
    ];
    let index = build_visibility_index(&records);
    let low = index.iter().find(|e| e.window_id == WindowId(1)).unwrap();
    assert!(low.visible.is_empty(), "layer 0 sits behind layer 5");
  }

  #[test]
  fn fully_occluded_window_is_retained() {
    let records = [
      record(1, 10, Rect::new(0.0, 0.0, 200.0, 200.0), 1, 0),
      record(2, 20, Rect::new(50.0, 50.0, 20.0, 20.0), 0, 1),
    ];
    let index = build_visibility_index(&records);
    assert_eq!(index.len(), 2, "hidden windows keep their entries");
    let hidden = index.iter().find(|e| e.window_id == WindowId(2)).unwrap();
    assert!(hidden.visible.is_empty());
  }

  #[test]
  fn empty_enumeration_yields_empty_index() {
    assert!(build_visibility_index(&[]).is_empty());
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  fn rect() -> impl Strategy<Value = Rect> {
    (-50i32..50, -50i32..50, 1i32..40, 1i32..40).prop_map(|(x, y, w, h)| {
      Rect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
    })
  }

  fn stack() -> impl Strategy<Value = Vec<WindowRecord>> {
    proptest::collection::vec((rect(), 0i32..3), 0..8).prop_map(|entries| {
      entries
        .into_iter()
        .enumerate()
        .map(|(i, (bounds, layer))| WindowRecord {
          id: WindowId(i as u32),
          process_id: ProcessId(100 + i as u32),
          app_name: String::new(),
          bundle_id: None,
          title: None,
          bounds,
          layer,
          opacity: 1.0,
          z_index: i as u32,
        })
        .collect()
    })
  }

  /// Front-to-back comparison mirroring the index's sort key.
  fn in_front(a: &WindowRecord, b: &WindowRecord) -> bool {
    a.layer > b.layer || (a.layer == b.layer && a.z_index < b.z_index)
  }

  proptest! {
    /// No visible fragment of a window intersects any window in front of it.
    #[test]
    fn fragments_never_under_fronting_windows(records in stack()) {
      let index = build_visibility_index(&records);
      for entry in &index {
        let own = records.iter().find(|r| r.id == entry.window_id).unwrap();
        for other in &records {
          if !in_front(other, own) {
            continue;
          }
          for frag in &entry.visible {
            prop_assert_eq!(
              frag.intersect(&other.bounds), None,
              "fragment of {:?} lies under fronting window {:?}", own.id, other.id
            );
          }
        }
      }
    }

    /// Every window keeps an entry, and fragments stay inside their window.
    #[test]
    fn entries_complete_and_contained(records in stack()) {
      let index = build_visibility_index(&records);
      prop_assert_eq!(index.len(), records.len());
      for entry in &index {
        for frag in &entry.visible {
          prop_assert_eq!(entry.bounds.intersect(frag), Some(*frag));
        }
      }
    }
  }
}
