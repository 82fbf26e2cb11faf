//! Scalar cell values and column identifiers.

use std::fmt::{self, Display};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A single cell of a row record.
///
/// Numbers share one `f64` representation, so `23` read from CSV and `23`
/// read from JSON compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Build a number from any primitive numeric type
    pub fn number<N: ToPrimitive>(n: N) -> Self {
        n.to_f64().map_or(Value::Null, Value::Number)
    }

    /// Coerce a trimmed text field: numeric text becomes a number, everything
    /// else stays a string.
    ///
    /// Empty text and the literal `NaN` are kept as strings.
    pub fn parse_scalar(text: &str) -> Self {
        match parse_decimal(text) {
            Some(n) => Value::Number(n),
            None => Value::String(text.to_string()),
        }
    }

    /// Convert a JSON scalar. Arrays and objects are not cells.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// True only for a number holding NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Canonical string form, used as the group key in `group_by`
    pub fn key_string(&self) -> String {
        self.to_string()
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let n = match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            // Rust also accepts "inf"/"nan" spellings; decimal text only
            if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
                return None;
            }
            text.parse::<f64>().ok()?
        }
    };
    Some(n)
}

fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // 1e21 -> 1e+21, 1.5e-7 stays as is
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => write!(f, "{}", exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => format_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::number(n)
                }
            }
        )*
    };
}

impl_from_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Column identifier: a string label, or a position for unlabeled 2-D data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnKey {
    Position(usize),
    Name(String),
}

impl ColumnKey {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            ColumnKey::Name(name) => Some(name),
            ColumnKey::Position(_) => None,
        }
    }
}

impl Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Position(pos) => write!(f, "{}", pos),
            ColumnKey::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        ColumnKey::Name(name.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(name: String) -> Self {
        ColumnKey::Name(name)
    }
}

impl From<&String> for ColumnKey {
    fn from(name: &String) -> Self {
        ColumnKey::Name(name.clone())
    }
}

impl From<usize> for ColumnKey {
    fn from(pos: usize) -> Self {
        ColumnKey::Position(pos)
    }
}

impl From<&ColumnKey> for ColumnKey {
    fn from(key: &ColumnKey) -> Self {
        key.clone()
    }
}
