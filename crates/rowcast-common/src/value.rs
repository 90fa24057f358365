use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single raw value from one row of a tabular source.
///
/// `Null` is the source's distinguished null marker, distinct from every
/// domain value. A null is never assigned to a field; the binder skips it
/// and the field keeps its default.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Boolean(bool),
    Int(i64),
    Number(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// The runtime kind of this value, or `None` for the null marker.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            CellValue::Null => None,
            CellValue::Boolean(_) => Some(ValueKind::Boolean),
            CellValue::Int(_) => Some(ValueKind::Int),
            CellValue::Number(_) => Some(ValueKind::Number),
            CellValue::Text(_) => Some(ValueKind::Text),
            CellValue::Date(_) => Some(ValueKind::Date),
            CellValue::DateTime(_) => Some(ValueKind::DateTime),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Kind name used in mismatch diagnostics. The null marker renders as
    /// the literal token `NULL`.
    pub fn type_token(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.name(),
            None => "NULL",
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Boolean(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Boolean(v)
    }
}
impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}
impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}
impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}
impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}
impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}
impl From<NaiveDateTime> for CellValue {
    fn from(v: NaiveDateTime) -> Self {
        CellValue::DateTime(v)
    }
}

/// `None` maps to the null marker.
impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// The declared type of a record field.
///
/// One variant per non-null [`CellValue`] variant. Compatibility at the
/// assignment boundary is exact kind equality; there is no cross-kind
/// coercion (an `Int` column does not fill a `Number` field).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Boolean,
    Int,
    Number,
    Text,
    Date,
    DateTime,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "Boolean",
            ValueKind::Int => "Int",
            ValueKind::Number => "Number",
            ValueKind::Text => "Text",
            ValueKind::Date => "Date",
            ValueKind::DateTime => "DateTime",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
