/*! Branded ID types for type-safe entity references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Window identifier, as reported by the window-list service.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct WindowId(pub u32);

/// Process ID - branded type to distinguish from other u32 values.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct ProcessId(pub u32);
