/*! Core types for apptree. */

#![allow(missing_docs)]

mod error;
mod geometry;
mod ids;
mod node;
mod window;

pub use error::{AppTreeError, AppTreeResult};
pub use geometry::Rect;
pub use ids::{ProcessId, WindowId};
pub use node::{UiNode, WindowTree};
pub use window::WindowRecord;
