/*!
Matching application-reported windows to window-list entries.

The element provider and the window-list service describe the same window
with different precision and conventions, so entries are matched by maximal
overlap ratio (IOU) rather than by equality.
*/

use crate::types::{ProcessId, Rect};
use crate::visibility::VisibilityEntry;

/// Pick the index entry owned by `pid` whose bounds best overlap the
/// reported geometry.
///
/// The first entry reaching the best ratio wins (stable given input order).
/// A best ratio of exactly zero means nothing overlaps: the caller should
/// skip the window rather than assign a default.
pub fn best_match<'a>(
  reported: &Rect,
  pid: ProcessId,
  index: &'a [VisibilityEntry],
) -> Option<&'a VisibilityEntry> {
  let mut best: Option<&VisibilityEntry> = None;
  let mut best_ratio = 0.0;
  for entry in index.iter().filter(|e| e.process_id == pid) {
    let ratio = reported.overlap_ratio(&entry.bounds);
    if ratio > best_ratio {
      best_ratio = ratio;
      best = Some(entry);
    }
  }
  best
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::WindowId;

  fn entry(id: u32, pid: u32, bounds: Rect) -> VisibilityEntry {
    VisibilityEntry {
      window_id: WindowId(id),
      process_id: ProcessId(pid),
      bounds,
      visible: vec![bounds],
    }
  }

  #[test]
  fn picks_highest_overlap() {
    let index = [
      entry(1, 10, Rect::new(0.0, 0.0, 100.0, 100.0)),
      entry(2, 10, Rect::new(5.0, 5.0, 100.0, 100.0)),
    ];
    let reported = Rect::new(4.0, 4.0, 100.0, 100.0);
    let best = best_match(&reported, ProcessId(10), &index).unwrap();
    assert_eq!(best.window_id, WindowId(2), "closer entry should win");
  }

  #[test]
  fn ignores_other_processes() {
    let index = [
      entry(1, 99, Rect::new(0.0, 0.0, 100.0, 100.0)),
      entry(2, 10, Rect::new(200.0, 200.0, 50.0, 50.0)),
    ];
    let reported = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
      best_match(&reported, ProcessId(10), &index),
      None,
      "a perfect match owned by another pid must not be considered"
    );
  }

  #[test]
  fn zero_overlap_is_no_match() {
    let index = [entry(1, 10, Rect::new(500.0, 500.0, 50.0, 50.0))];
    let reported = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(best_match(&reported, ProcessId(10), &index), None);
  }

  #[test]
  fn tie_break_keeps_first_entry() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let index = [entry(1, 10, bounds), entry(2, 10, bounds)];
    let best = best_match(&bounds, ProcessId(10), &index).unwrap();
    assert_eq!(
      best.window_id,
      WindowId(1),
      "first entry at the best ratio should win"
    );
  }

  #[test]
  fn empty_index_is_no_match() {
    let reported = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(best_match(&reported, ProcessId(10), &[]), None);
  }
}
