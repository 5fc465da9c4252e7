/*!
Extraction pipeline - the public API.

One pass: enumerate windows, build the occlusion index, then per application
match each provider-reported window to its index entry, seed the tree builder
with the window-local visible region, and build the clipped element tree.

Everything is sequential and blocking; a slow target application stalls the
pass. A per-application failure never aborts the remaining applications.
*/

use crate::matching::best_match;
use crate::platform::{CurrentPlatform, ElementProvider, Platform};
use crate::scale::Scale;
use crate::tree::{build_window_tree, TreeContext};
use crate::types::{AppTreeError, AppTreeResult, ProcessId, Rect, WindowRecord, WindowTree};
use crate::visibility::{build_visibility_index, VisibilityEntry};

/// Options for one extraction pass.
///
/// # Example
///
/// ```
/// use apptree::ExtractOptions;
///
/// let options = ExtractOptions::new().max_depth(5);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[must_use]
pub struct ExtractOptions {
  max_depth: Option<u32>,
}

impl ExtractOptions {
  pub const fn new() -> Self {
    Self { max_depth: None }
  }

  /// Limit tree depth. Unlimited when unset.
  pub const fn max_depth(mut self, depth: u32) -> Self {
    self.max_depth = Some(depth);
    self
  }
}

/// Result of a multi-application pass.
#[derive(Debug)]
pub struct Extraction {
  /// One tree per successfully extracted window.
  pub trees: Vec<WindowTree>,
  /// The occlusion index the pass ran against, for reuse by screenshot
  /// cropping.
  pub index: Vec<VisibilityEntry>,
  /// Per-application failures. The pass continues past these.
  pub failures: Vec<(String, AppTreeError)>,
}

/// Extraction session against the current platform.
///
/// Construction verifies accessibility permissions and captures the display
/// scale factor for the session.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
  scale: Scale,
}

impl Extractor {
  pub fn new() -> AppTreeResult<Self> {
    if !CurrentPlatform::has_permissions() {
      if cfg!(target_os = "macos") {
        return Err(AppTreeError::PermissionDenied);
      }
      return Err(AppTreeError::NotSupported(
        "window inspection is only implemented on macOS".to_owned(),
      ));
    }
    let scale = Scale::new(CurrentPlatform::backing_scale_factor());
    log::debug!("display scale factor: {}", scale.factor);
    Ok(Self { scale })
  }

  /// Display scale factor captured at construction.
  pub const fn scale(&self) -> Scale {
    self.scale
  }

  /// Raw window records, frontmost first within each layer.
  pub fn list_windows(&self) -> Vec<WindowRecord> {
    CurrentPlatform::list_windows()
  }

  /// Bundle identifiers of applications with on-screen windows.
  pub fn visible_bundles(&self) -> Vec<String> {
    CurrentPlatform::visible_bundles()
  }

  /// Extract the clipped trees for every visible window of one process.
  pub fn extract_process(
    &self,
    pid: ProcessId,
    options: &ExtractOptions,
  ) -> AppTreeResult<Vec<WindowTree>> {
    let records = CurrentPlatform::list_windows();
    let index = build_visibility_index(&records);
    let windows = CurrentPlatform::application_windows(pid);
    extract_app_windows(&windows, pid, options, &records, &index)
  }

  /// Extract the clipped trees for one application by bundle identifier.
  pub fn extract_bundle(
    &self,
    bundle_id: &str,
    options: &ExtractOptions,
  ) -> AppTreeResult<Vec<WindowTree>> {
    let records = CurrentPlatform::list_windows();
    let index = build_visibility_index(&records);
    self.extract_bundle_with_index(bundle_id, options, &records, &index)
  }

  /// Extract several applications against one shared window enumeration.
  ///
  /// Per-application failures are logged and collected; the remaining
  /// applications still run.
  pub fn extract_bundles(&self, bundle_ids: &[String], options: &ExtractOptions) -> Extraction {
    let records = CurrentPlatform::list_windows();
    let index = build_visibility_index(&records);

    let mut trees = Vec::new();
    let mut failures = Vec::new();
    for bundle_id in bundle_ids {
      log::info!("processing application: {bundle_id}");
      match self.extract_bundle_with_index(bundle_id, options, &records, &index) {
        Ok(mut extracted) => trees.append(&mut extracted),
        Err(err) => {
          log::warn!("{bundle_id}: {err}");
          failures.push((bundle_id.clone(), err));
        }
      }
    }
    Extraction {
      trees,
      index,
      failures,
    }
  }

  fn extract_bundle_with_index(
    &self,
    bundle_id: &str,
    options: &ExtractOptions,
    records: &[WindowRecord],
    index: &[VisibilityEntry],
  ) -> AppTreeResult<Vec<WindowTree>> {
    let pid = CurrentPlatform::pid_for_bundle(bundle_id)
      .ok_or_else(|| AppTreeError::AppNotRunning(bundle_id.to_owned()))?;
    let windows = CurrentPlatform::application_windows(pid);
    extract_app_windows(&windows, pid, options, records, index)
  }
}

/// Core per-application pass, generic over the element provider.
fn extract_app_windows<E: ElementProvider>(
  app_windows: &[E],
  pid: ProcessId,
  options: &ExtractOptions,
  records: &[WindowRecord],
  index: &[VisibilityEntry],
) -> AppTreeResult<Vec<WindowTree>> {
  if app_windows.is_empty() {
    return Err(AppTreeError::NoWindows(pid));
  }

  let mut trees = Vec::new();
  let mut reported_any = false;
  let mut matched_any = false;

  for element in app_windows {
    let attrs = element.attributes();
    let Some(window_rect) = attrs.bounds else {
      log::debug!("process {pid}: window without reported geometry, skipping");
      continue;
    };
    if window_rect.is_degenerate() {
      continue;
    }
    reported_any = true;

    let Some(entry) = best_match(&window_rect, pid, index) else {
      log::debug!("process {pid}: no window-list entry overlaps {window_rect:?}");
      continue;
    };
    matched_any = true;

    if entry.visible.is_empty() {
      log::debug!("window {} is fully occluded, skipping", entry.window_id);
      continue;
    }
    let Some(seed) = visible_seed(&window_rect, &entry.visible) else {
      continue;
    };

    let ctx = TreeContext {
      window_rect,
      visible_seed: seed,
      max_depth: options.max_depth,
    };
    let root = build_window_tree(element, &ctx);

    let record = records.iter().find(|r| r.id == entry.window_id);
    trees.push(WindowTree {
      window_id: entry.window_id,
      process_id: pid,
      app_name: record.map(|r| r.app_name.clone()).unwrap_or_default(),
      bundle_id: record.and_then(|r| r.bundle_id.clone()),
      root,
    });
  }

  // Windows that reported geometry but matched nothing mean the two services
  // disagree about this process; surface that rather than an empty result.
  if trees.is_empty() && reported_any && !matched_any {
    return Err(AppTreeError::NoOverlapMatch(pid));
  }
  Ok(trees)
}

/// Window-local clip seed: the bounding box of the visible fragments,
/// intersected with the window's own rect. `None` when the overlap between
/// the two services' geometry collapses to nothing.
fn visible_seed(window_rect: &Rect, fragments: &[Rect]) -> Option<Rect> {
  let bounds = Rect::bounding(fragments)?;
  let clipped = window_rect.intersect(&bounds)?;
  Some(clipped.translate(-window_rect.x, -window_rect.y))
}
