/*!
Screenshot capture and annotation.

The library computes overlay geometry in pixel space; this module owns the
actual pixels: full-screen capture, per-window crops, and outline drawing.
*/

use anyhow::{Context, Result};
use apptree::annotate::{screen_overlays, window_overlays, Rgb};
use apptree::{Rect, Scale, WindowTree};
use image::{Rgba, RgbaImage};
use serde::Serialize;
use std::path::{Path, PathBuf};

const SCREEN_OUTLINE_WIDTH: i64 = 3;
const WINDOW_OUTLINE_WIDTH: i64 = 2;

/// Saved images for one extracted window.
#[derive(Debug, Serialize)]
pub struct ShotInfo {
  pub app: String,
  pub window_name: String,
  pub cropped_screenshot_path: PathBuf,
  pub segmented_screenshot_path: PathBuf,
}

/// Everything one capture pass wrote to disk.
#[derive(Debug, Serialize)]
pub struct CaptureManifest {
  pub full_screen_path: PathBuf,
  pub annotated_path: PathBuf,
  pub windows: Vec<ShotInfo>,
}

/// Capture the screen once, crop every extracted window out of it, draw the
/// per-role outlines, and annotate the full screen.
pub fn capture_and_annotate(
  trees: &[WindowTree],
  scale: Scale,
  dir: &Path,
) -> Result<CaptureManifest> {
  std::fs::create_dir_all(dir)
    .with_context(|| format!("creating screenshot dir {}", dir.display()))?;

  let screen = capture_primary_monitor()?;
  let full_screen_path = dir.join("full_screen.png");
  screen
    .save(&full_screen_path)
    .context("saving full-screen capture")?;
  log::info!("full-screen capture saved to {}", full_screen_path.display());

  let mut windows = Vec::with_capacity(trees.len());
  for tree in trees {
    windows.push(save_window_images(tree, &screen, scale, dir)?);
  }

  let mut annotated = screen;
  for overlay in screen_overlays(trees, scale) {
    draw_rect_outline(
      &mut annotated,
      &overlay.rect,
      rgba(overlay.color),
      SCREEN_OUTLINE_WIDTH,
    );
  }
  let annotated_path = dir.join("full_screen_annotated.png");
  annotated
    .save(&annotated_path)
    .context("saving annotated full screen")?;

  Ok(CaptureManifest {
    full_screen_path,
    annotated_path,
    windows,
  })
}

fn capture_primary_monitor() -> Result<RgbaImage> {
  let monitors = xcap::Monitor::all().context("enumerating monitors")?;
  let monitor = monitors
    .into_iter()
    .find(|m| m.is_primary().unwrap_or(false))
    .context("no primary monitor found")?;
  monitor.capture_image().context("capturing screen")
}

fn save_window_images(
  tree: &WindowTree,
  screen: &RgbaImage,
  scale: Scale,
  dir: &Path,
) -> Result<ShotInfo> {
  let window_name = tree
    .root
    .name
    .clone()
    .unwrap_or_else(|| tree.app_name.clone())
    .replace(' ', "_");

  let window_px = scale.to_pixels(&tree.root.window_rect);
  let cropped = crop_to(screen, &window_px);
  let cropped_screenshot_path = dir.join(format!("{}_{}_cropped.png", tree.app_name, window_name));
  cropped
    .save(&cropped_screenshot_path)
    .context("saving window crop")?;

  let mut segmented = cropped;
  for overlay in window_overlays(tree, scale) {
    draw_rect_outline(
      &mut segmented,
      &overlay.rect,
      rgba(overlay.color),
      WINDOW_OUTLINE_WIDTH,
    );
  }
  let segmented_screenshot_path =
    dir.join(format!("{}_{}_segmented.png", tree.app_name, window_name));
  segmented
    .save(&segmented_screenshot_path)
    .context("saving segmented window")?;

  Ok(ShotInfo {
    app: tree.app_name.clone(),
    window_name,
    cropped_screenshot_path,
    segmented_screenshot_path,
  })
}

/// Crop a pixel-space rect out of an image, clamped to the image bounds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn crop_to(img: &RgbaImage, rect: &Rect) -> RgbaImage {
  let x = rect.x.max(0.0) as u32;
  let y = rect.y.max(0.0) as u32;
  let w = (rect.right().min(f64::from(img.width())) - f64::from(x)).max(1.0) as u32;
  let h = (rect.bottom().min(f64::from(img.height())) - f64::from(y)).max(1.0) as u32;
  image::imageops::crop_imm(img, x, y, w, h).to_image()
}

const fn rgba(color: Rgb) -> Rgba<u8> {
  Rgba([color.r, color.g, color.b, 255])
}

/// Draw a hollow rectangle, clipping silently at the image edges.
#[allow(clippy::cast_possible_truncation)]
fn draw_rect_outline(img: &mut RgbaImage, rect: &Rect, color: Rgba<u8>, thickness: i64) {
  let x1 = rect.x.round() as i64;
  let y1 = rect.y.round() as i64;
  let x2 = rect.right().round() as i64;
  let y2 = rect.bottom().round() as i64;

  for t in 0..thickness {
    for x in x1..=x2 {
      put_pixel_checked(img, x, y1 + t, color);
      put_pixel_checked(img, x, y2 - t, color);
    }
    for y in y1..=y2 {
      put_pixel_checked(img, x1 + t, y, color);
      put_pixel_checked(img, x2 - t, y, color);
    }
  }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn put_pixel_checked(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
  if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
    img.put_pixel(x as u32, y as u32, color);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn outline_stays_inside_image() {
    let mut img = RgbaImage::new(20, 20);
    // Rect hanging off every edge must not panic.
    draw_rect_outline(
      &mut img,
      &Rect::new(-5.0, -5.0, 40.0, 40.0),
      Rgba([255, 0, 0, 255]),
      2,
    );
  }

  #[test]
  fn outline_draws_edge_pixels() {
    let mut img = RgbaImage::new(20, 20);
    let red = Rgba([255, 0, 0, 255]);
    draw_rect_outline(&mut img, &Rect::new(2.0, 2.0, 10.0, 10.0), red, 1);
    assert_eq!(img.get_pixel(2, 2), &red, "corner should be outlined");
    assert_eq!(img.get_pixel(7, 2), &red, "top edge should be outlined");
    assert_eq!(
      img.get_pixel(7, 7),
      &Rgba([0, 0, 0, 0]),
      "interior must stay untouched"
    );
  }

  #[test]
  fn crop_clamps_to_image_bounds() {
    let img = RgbaImage::new(30, 30);
    let cropped = crop_to(&img, &Rect::new(20.0, 20.0, 50.0, 50.0));
    assert_eq!(cropped.dimensions(), (10, 10));
  }
}
