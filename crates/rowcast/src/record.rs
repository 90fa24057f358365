//! The introspection seam: how a record type describes its own shape.

use chrono::{NaiveDate, NaiveDateTime};
use rowcast_common::{CellValue, ValueKind};
use std::fmt;

/// A mappable record type: default-constructible, with a stable set of
/// named, typed fields.
///
/// Implement by hand for full control, or via [`impl_record!`] for plain
/// structs whose fields all convert through [`FromCell`].
///
/// [`impl_record!`]: crate::impl_record
pub trait Record: Default + Sized + 'static {
    /// Short type name used in diagnostics.
    fn type_name() -> &'static str;

    /// Enumerate the type's fields.
    ///
    /// Called once per registration (or once per [`map_dynamic`] call);
    /// the result must be stable for the process lifetime, since a compiled
    /// binding table never reflects later changes.
    ///
    /// [`map_dynamic`]: crate::map_dynamic
    fn fields() -> Vec<FieldDescriptor<Self>>;
}

/// One field discovered on a record type: its column name, declared kind,
/// and the assignment op that writes an already-kind-checked value.
///
/// `assign: None` marks a field with no public setter; such fields are
/// carried through binding as no-ops.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub kind: ValueKind,
    pub assign: Option<fn(&mut T, CellValue)>,
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("settable", &self.assign.is_some())
            .finish()
    }
}

impl<T> FieldDescriptor<T> {
    pub fn is_settable(&self) -> bool {
        self.assign.is_some()
    }
}

/// Conversion seam between source values and Rust field types.
///
/// Extraction is exact-variant only: `from_cell` returns `None` for the
/// null marker and for any cross-kind value. Rust has no implicit numeric
/// conversions at this boundary, so the check the binder performs is strict
/// kind equality.
pub trait FromCell: Sized {
    /// Declared kind a field of this type binds against.
    const KIND: ValueKind;

    fn from_cell(value: CellValue) -> Option<Self>;
}

impl FromCell for bool {
    const KIND: ValueKind = ValueKind::Boolean;
    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl FromCell for i64 {
    const KIND: ValueKind = ValueKind::Int;
    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl FromCell for f64 {
    const KIND: ValueKind = ValueKind::Number;
    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl FromCell for String {
    const KIND: ValueKind = ValueKind::Text;
    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl FromCell for NaiveDate {
    const KIND: ValueKind = ValueKind::Date;
    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl FromCell for NaiveDateTime {
    const KIND: ValueKind = ValueKind::DateTime;
    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}
