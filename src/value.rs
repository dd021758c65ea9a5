//! Field values carried between the driver, the coercion engine and records.

use std::fmt;

use chrono::NaiveDate;

/// Date format applied when a column declares no custom format.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single field value.
///
/// The connector produces driver-native variants (`Null`, `Bool`, `Int`,
/// `Float`, `Text`); the coercion engine refines `Text` into `Date`, `Enum`
/// or trimmed text according to the column metadata before handing the value
/// to the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL / absent value.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (any width, widened by the driver).
    Int(i64),

    /// Floating point value.
    Float(f64),

    /// Text data.
    Text(String),

    /// Date without time component.
    Date(NaiveDate),

    /// Enumeration value, carried as the variant name (or, after coercion
    /// from a raw row, as the stored single character).
    Enum(String),
}

impl Value {
    /// Create an enum value from a variant name.
    #[must_use]
    pub fn enum_name(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the textual content of `Text` and `Enum` values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// First character of an `Enum` value's name, the form the legacy
    /// store persists enumerations in.
    #[must_use]
    pub fn enum_char(&self) -> Option<char> {
        match self {
            Value::Enum(name) => name.chars().next(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value the way it is embedded in SQL text (before quote
    /// adjustment): dates with the default format, enums as their first
    /// character, NULL as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{}", v.format(DEFAULT_DATE_FORMAT)),
            Value::Enum(name) => match name.chars().next() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}
