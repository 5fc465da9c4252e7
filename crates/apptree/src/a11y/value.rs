/*!
Element values.

Values represent the current state of an element as read from the provider:
text content, numeric positions, boolean states.
*/

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Typed value for an accessibility element.
///
/// Number is unified f64 for JSON/TypeScript compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value")]
#[ts(export)]
pub enum Value {
  /// Text content (text fields, labels)
  String(String),

  /// Numeric value (sliders, steppers, progress bars)
  Number(f64),

  /// Boolean state (checkboxes, switches)
  Boolean(bool),
}

impl Value {
  /// Get as string reference if this is a String value.
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::String(s) => Some(s),
      Self::Number(_) | Self::Boolean(_) => None,
    }
  }

  /// Get as owned String, converting numbers/bools to their display form.
  #[allow(clippy::cast_possible_truncation)] // Intentional: formatting display value
  pub fn into_string(self) -> String {
    match self {
      Self::String(s) => s,
      Self::Number(n) => {
        // Format integers without decimal point
        if n.fract() == 0.0 {
          format!("{}", n as i64)
        } else {
          n.to_string()
        }
      }
      Self::Boolean(b) => b.to_string(),
    }
  }
}
