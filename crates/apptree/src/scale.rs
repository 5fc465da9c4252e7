/*!
Logical-point to physical-pixel conversion.

Tree geometry stays in logical points everywhere; `Scale` is applied only at
the boundary to pixel-based image operations. The factor is an explicit value
captured once per pass and threaded through calls, never ambient state, so a
pass can't observe a factor that changed under it.
*/

use crate::types::Rect;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Backing scale factor of a display (physical pixels per logical point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scale {
  pub factor: f64,
}

impl Scale {
  /// 1:1 mapping (non-retina display).
  pub const IDENTITY: Scale = Scale { factor: 1.0 };

  pub const fn new(factor: f64) -> Self {
    Self { factor }
  }

  /// Convert a logical-point rect to physical pixels, per axis.
  pub fn to_pixels(&self, rect: &Rect) -> Rect {
    Rect::new(
      rect.x * self.factor,
      rect.y * self.factor,
      rect.w * self.factor,
      rect.h * self.factor,
    )
  }

  /// Convert a physical-pixel rect back to logical points.
  pub fn to_points(&self, rect: &Rect) -> Rect {
    Rect::new(
      rect.x / self.factor,
      rect.y / self.factor,
      rect.w / self.factor,
      rect.h / self.factor,
    )
  }
}

impl Default for Scale {
  fn default() -> Self {
    Self::IDENTITY
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn retina_doubles_each_axis() {
    let scale = Scale::new(2.0);
    let px = scale.to_pixels(&Rect::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(px, Rect::new(20.0, 40.0, 60.0, 80.0));
  }

  #[test]
  fn to_points_inverts_to_pixels() {
    let scale = Scale::new(2.0);
    let rect = Rect::new(15.0, 25.0, 35.0, 45.0);
    assert_eq!(scale.to_points(&scale.to_pixels(&rect)), rect);
  }

  #[test]
  fn identity_is_noop() {
    let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Scale::IDENTITY.to_pixels(&rect), rect);
  }
}
