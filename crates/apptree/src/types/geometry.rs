/*! Rectangle algebra for screen coordinates.

All geometry lives in logical points with a top-left screen origin.
A rect with zero (or negative) area is degenerate and treated as absent:
operations that could produce one return `None` or drop it instead.
*/

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Epsilon added to IOU denominators so two degenerate rects divide cleanly.
const IOU_EPSILON: f64 = 1e-9;

/// Rectangle bounds in screen coordinates (top-left origin).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Rect {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Rect {
  pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self { x, y, w, h }
  }

  pub fn area(&self) -> f64 {
    self.w * self.h
  }

  /// A rect with no positive extent on either axis carries no region.
  pub fn is_degenerate(&self) -> bool {
    self.w <= 0.0 || self.h <= 0.0
  }

  /// Right edge (`x + w`).
  pub fn right(&self) -> f64 {
    self.x + self.w
  }

  /// Bottom edge (`y + h`).
  pub fn bottom(&self) -> f64 {
    self.y + self.h
  }

  /// Shift the rect by an offset, keeping its size.
  pub fn translate(&self, dx: f64, dy: f64) -> Rect {
    Rect::new(self.x + dx, self.y + dy, self.w, self.h)
  }

  /// AABB intersection. Touching edges do not count as overlap:
  /// the result must have positive extent on both axes.
  pub fn intersect(&self, other: &Rect) -> Option<Rect> {
    let ix1 = self.x.max(other.x);
    let iy1 = self.y.max(other.y);
    let ix2 = self.right().min(other.right());
    let iy2 = self.bottom().min(other.bottom());

    if ix1 < ix2 && iy1 < iy2 {
      Some(Rect::new(ix1, iy1, ix2 - ix1, iy2 - iy1))
    } else {
      None
    }
  }

  /// Intersection-over-union in `[0, 1]`. Symmetric.
  pub fn overlap_ratio(&self, other: &Rect) -> f64 {
    let inter = self.intersect(other).map_or(0.0, |r| r.area());
    let union = self.area() + other.area() - inter;
    inter / (union + IOU_EPSILON)
  }

  /// Subtract every occluder from this rect, producing disjoint remainder
  /// fragments. Each occluder splits every intersecting fragment into up to
  /// four strips (above, below, left of, right of the intersection); the
  /// left/right strips span only the intersection's rows. Zero-area strips
  /// are never emitted.
  ///
  /// Fragment boundaries depend on occluder order; total area and covered
  /// region do not.
  pub fn subtract(&self, occluders: &[Rect]) -> Vec<Rect> {
    let mut remaining = if self.is_degenerate() {
      Vec::new()
    } else {
      vec![*self]
    };

    for occluder in occluders {
      let mut next = Vec::with_capacity(remaining.len());
      for frag in remaining {
        let Some(inter) = frag.intersect(occluder) else {
          next.push(frag);
          continue;
        };
        // top strip
        if inter.y > frag.y {
          next.push(Rect::new(frag.x, frag.y, frag.w, inter.y - frag.y));
        }
        // bottom strip
        if inter.bottom() < frag.bottom() {
          next.push(Rect::new(
            frag.x,
            inter.bottom(),
            frag.w,
            frag.bottom() - inter.bottom(),
          ));
        }
        // left strip
        if inter.x > frag.x {
          next.push(Rect::new(frag.x, inter.y, inter.x - frag.x, inter.h));
        }
        // right strip
        if inter.right() < frag.right() {
          next.push(Rect::new(
            inter.right(),
            inter.y,
            frag.right() - inter.right(),
            inter.h,
          ));
        }
      }
      remaining = next;
    }
    remaining
  }

  /// Bounding box of a set of rects. `None` for an empty set.
  pub fn bounding(rects: &[Rect]) -> Option<Rect> {
    let first = rects.first()?;
    let mut x1 = first.x;
    let mut y1 = first.y;
    let mut x2 = first.right();
    let mut y2 = first.bottom();
    for r in &rects[1..] {
      x1 = x1.min(r.x);
      y1 = y1.min(r.y);
      x2 = x2.max(r.right());
      y2 = y2.max(r.bottom());
    }
    Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn total_area(rects: &[Rect]) -> f64 {
    rects.iter().map(Rect::area).sum()
  }

  mod intersect {
    use super::*;

    #[test]
    fn overlapping_rects() {
      let a = Rect::new(0.0, 0.0, 100.0, 100.0);
      let b = Rect::new(50.0, 50.0, 100.0, 100.0);
      assert_eq!(
        a.intersect(&b),
        Some(Rect::new(50.0, 50.0, 50.0, 50.0)),
        "overlapping corner region"
      );
    }

    #[test]
    fn disjoint_rects() {
      let a = Rect::new(0.0, 0.0, 10.0, 10.0);
      let b = Rect::new(20.0, 20.0, 10.0, 10.0);
      assert_eq!(a.intersect(&b), None, "disjoint rects have no intersection");
    }

    #[test]
    fn touching_edges_do_not_overlap() {
      let a = Rect::new(0.0, 0.0, 10.0, 10.0);
      let b = Rect::new(10.0, 0.0, 10.0, 10.0);
      assert_eq!(
        a.intersect(&b),
        None,
        "shared edge must not count as overlap"
      );
    }

    #[test]
    fn contained_rect() {
      let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
      let inner = Rect::new(25.0, 25.0, 10.0, 10.0);
      assert_eq!(
        outer.intersect(&inner),
        Some(inner),
        "contained rect is its own intersection"
      );
    }

    #[test]
    fn degenerate_rect_never_intersects() {
      let a = Rect::new(0.0, 0.0, 100.0, 100.0);
      let empty = Rect::new(50.0, 50.0, 0.0, 10.0);
      assert_eq!(a.intersect(&empty), None, "zero-width rect carries no area");
    }
  }

  mod overlap_ratio {
    use super::*;

    #[test]
    fn identical_rects_ratio_one() {
      let a = Rect::new(10.0, 10.0, 50.0, 50.0);
      let ratio = a.overlap_ratio(&a);
      assert!((ratio - 1.0).abs() < 1e-6, "self-IOU should be ~1, got {ratio}");
    }

    #[test]
    fn disjoint_rects_ratio_zero() {
      let a = Rect::new(0.0, 0.0, 10.0, 10.0);
      let b = Rect::new(100.0, 100.0, 10.0, 10.0);
      assert_eq!(a.overlap_ratio(&b), 0.0, "no overlap, no ratio");
    }

    #[test]
    fn quarter_overlap() {
      // Intersection 2500, union 17500.
      let a = Rect::new(0.0, 0.0, 100.0, 100.0);
      let b = Rect::new(50.0, 50.0, 100.0, 100.0);
      let ratio = a.overlap_ratio(&b);
      assert!(
        (ratio - 2500.0 / 17500.0).abs() < 1e-6,
        "expected 1/7, got {ratio}"
      );
    }

    #[test]
    fn both_degenerate_is_zero_not_nan() {
      let a = Rect::new(0.0, 0.0, 0.0, 0.0);
      let ratio = a.overlap_ratio(&a);
      assert_eq!(ratio, 0.0, "degenerate pair should divide to 0, got {ratio}");
    }
  }

  mod subtract {
    use super::*;

    #[test]
    fn no_occluders_returns_rect_unchanged() {
      let a = Rect::new(5.0, 5.0, 20.0, 20.0);
      assert_eq!(a.subtract(&[]), vec![a], "empty occluder list is identity");
    }

    #[test]
    fn disjoint_occluder_passes_through() {
      let a = Rect::new(0.0, 0.0, 10.0, 10.0);
      let occ = Rect::new(50.0, 50.0, 10.0, 10.0);
      assert_eq!(a.subtract(&[occ]), vec![a]);
    }

    #[test]
    fn full_cover_leaves_nothing() {
      let a = Rect::new(10.0, 10.0, 20.0, 20.0);
      let occ = Rect::new(0.0, 0.0, 100.0, 100.0);
      assert!(a.subtract(&[occ]).is_empty(), "fully covered rect vanishes");
    }

    #[test]
    fn corner_occluder_area() {
      // A 100x100 with a 50x50 bite out of one corner.
      let a = Rect::new(0.0, 0.0, 100.0, 100.0);
      let occ = Rect::new(50.0, 50.0, 100.0, 100.0);
      let frags = a.subtract(&[occ]);
      assert!(
        (total_area(&frags) - 7500.0).abs() < 1e-6,
        "remaining area should be 7500, got {}",
        total_area(&frags)
      );
      for f in &frags {
        assert_eq!(f.intersect(&occ), None, "fragment {f:?} overlaps occluder");
      }
    }

    #[test]
    fn center_hole_leaves_four_strips() {
      let a = Rect::new(0.0, 0.0, 30.0, 30.0);
      let occ = Rect::new(10.0, 10.0, 10.0, 10.0);
      let frags = a.subtract(&[occ]);
      assert_eq!(frags.len(), 4, "center hole should split into four strips");
      assert!((total_area(&frags) - 800.0).abs() < 1e-6);
    }

    #[test]
    fn fragments_are_disjoint() {
      let a = Rect::new(0.0, 0.0, 100.0, 100.0);
      let occs = [
        Rect::new(-10.0, -10.0, 40.0, 40.0),
        Rect::new(60.0, 60.0, 80.0, 80.0),
        Rect::new(20.0, 40.0, 30.0, 10.0),
      ];
      let frags = a.subtract(&occs);
      for (i, f1) in frags.iter().enumerate() {
        for f2 in &frags[i + 1..] {
          assert_eq!(f1.intersect(f2), None, "{f1:?} overlaps {f2:?}");
        }
      }
    }

    #[test]
    fn degenerate_input_yields_nothing() {
      let a = Rect::new(0.0, 0.0, 0.0, 50.0);
      assert!(a.subtract(&[]).is_empty(), "degenerate rect has no fragments");
    }
  }

  mod bounding {
    use super::*;

    #[test]
    fn empty_set_has_no_bounds() {
      assert_eq!(Rect::bounding(&[]), None);
    }

    #[test]
    fn spans_all_rects() {
      let rects = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(40.0, 20.0, 10.0, 30.0),
      ];
      assert_eq!(
        Rect::bounding(&rects),
        Some(Rect::new(0.0, 0.0, 50.0, 50.0))
      );
    }
  }
}
