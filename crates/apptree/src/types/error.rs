/*! Error types for apptree operations. */

use super::ProcessId;

/// Errors that can occur during extraction.
///
/// Unsupported element attributes are not represented here: the element
/// provider recovers them locally as missing data and traversal continues.
#[derive(Debug, thiserror::Error)]
pub enum AppTreeError {
  #[error("Accessibility permissions not granted")]
  PermissionDenied,

  #[error("Application not running: {0}")]
  AppNotRunning(String),

  #[error("No windows for process: {0}")]
  NoWindows(ProcessId),

  #[error("No window-list entry overlaps any reported window of process {0}")]
  NoOverlapMatch(ProcessId),

  #[error("Operation not supported: {0}")]
  NotSupported(String),

  #[error("Internal error: {0}")]
  Internal(String),
}

/// Result type for apptree operations.
pub type AppTreeResult<T> = Result<T, AppTreeError>;
