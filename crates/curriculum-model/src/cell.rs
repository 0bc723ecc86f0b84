//! Spreadsheet cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-blank spreadsheet cell.
///
/// Blank cells never reach this type: sheet grids store `Option<CellValue>`
/// and every decoding rule works on "present value or absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            // Integral floats print without a trailing ".0"
            Self::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.0}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integral_float() {
        assert_eq!(CellValue::Float(34.0).to_string(), "34");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_display_text_and_int() {
        assert_eq!(CellValue::from("Б1.О.1").to_string(), "Б1.О.1");
        assert_eq!(CellValue::Int(7).to_string(), "7");
    }
}
