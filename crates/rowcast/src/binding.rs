//! Compiled assignment ops: one [`FieldBinding`] per field, owned by a
//! per-type [`TypeBindings`] table built once at registration.

use crate::record::{FieldDescriptor, Record};
use rowcast_common::{BindError, CellValue, ValueKind};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Reject ambiguous column headers before any assignment runs.
pub(crate) fn check_duplicate_names<'a, I>(names: I) -> Result<(), BindError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    for name in names {
        if !seen.insert(name) {
            return Err(BindError::DuplicateColumn(name.to_string()));
        }
    }
    Ok(())
}

/// The assignment op for one field of one record type.
///
/// `set` carries the whole per-value contract: null values are skipped, the
/// value's runtime kind must equal the field's declared kind, and a
/// mismatch produces a [`BindError::FieldTypeMismatch`] with full context.
/// A binding over a field with no setter ignores every value.
pub struct FieldBinding<T> {
    record_type: &'static str,
    field: &'static str,
    kind: ValueKind,
    assign: Option<fn(&mut T, CellValue)>,
}

impl<T> FieldBinding<T> {
    pub(crate) fn bind(record_type: &'static str, desc: FieldDescriptor<T>) -> Self {
        Self {
            record_type,
            field: desc.name,
            kind: desc.kind,
            assign: desc.assign,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_settable(&self) -> bool {
        self.assign.is_some()
    }

    /// Assign `value` to this binding's field on `record`.
    ///
    /// The null marker is never assigned, even to a field that could
    /// represent it: the field keeps its current value and the call
    /// succeeds. Errors are never swallowed here; the caller of the batch
    /// that triggered the mismatch sees it directly.
    pub fn set(&self, record: &mut T, value: CellValue) -> Result<(), BindError> {
        let Some(assign) = self.assign else {
            // No setter: the field exists but is read-only. Not an error.
            return Ok(());
        };
        match value.kind() {
            None => Ok(()),
            Some(kind) if kind == self.kind => {
                assign(record, value);
                Ok(())
            }
            Some(_) => Err(self.mismatch(&value)),
        }
    }

    fn mismatch(&self, value: &CellValue) -> BindError {
        BindError::FieldTypeMismatch {
            record_type: self.record_type,
            field: self.field,
            declared: self.kind,
            actual: value.type_token(),
            value: value.to_string(),
        }
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("record_type", &self.record_type)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("settable", &self.is_settable())
            .finish()
    }
}

/// The complete binding table for one record type, keyed by field name.
///
/// Built exactly once per type by enumerating [`Record::fields`]; read-only
/// afterwards, so a shared reference may be used concurrently from any
/// number of mapping calls.
pub struct TypeBindings<T> {
    record_type: &'static str,
    by_name: FxHashMap<&'static str, FieldBinding<T>>,
}

impl<T: Record> TypeBindings<T> {
    pub fn new() -> Self {
        let record_type = T::type_name();
        let mut by_name = FxHashMap::default();
        for desc in T::fields() {
            by_name.insert(desc.name, FieldBinding::bind(record_type, desc));
        }
        Self {
            record_type,
            by_name,
        }
    }
}

impl<T: Record> Default for TypeBindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypeBindings<T> {
    pub fn record_type(&self) -> &'static str {
        self.record_type
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldBinding<T>> {
        self.by_name.get(name)
    }

    /// Apply every recognised column across a batch of records.
    ///
    /// `rows` must be positionally aligned with `columns`; sources built
    /// through [`RowTable`] guarantee this at insert time. Iteration is
    /// columns outer, rows inner, so when several mismatches exist in one
    /// batch the earliest mismatching column surfaces first. Columns absent
    /// from the binding table are skipped for all rows.
    ///
    /// [`RowTable`]: crate::source::RowTable
    pub fn apply_batch(
        &self,
        records: &mut [T],
        columns: &[String],
        rows: &[Vec<CellValue>],
    ) -> Result<(), BindError> {
        check_duplicate_names(columns.iter().map(String::as_str))?;
        for (c, name) in columns.iter().enumerate() {
            let Some(binding) = self.by_name.get(name.as_str()) else {
                continue;
            };
            for (record, row) in records.iter_mut().zip(rows) {
                binding.set(record, row[c].clone())?;
            }
        }
        Ok(())
    }

    /// Same lookup-and-set semantics as [`apply_batch`], for one record.
    ///
    /// [`apply_batch`]: Self::apply_batch
    pub fn apply_single(
        &self,
        record: &mut T,
        values: &[(String, CellValue)],
    ) -> Result<(), BindError> {
        check_duplicate_names(values.iter().map(|(name, _)| name.as_str()))?;
        for (name, value) in values {
            if let Some(binding) = self.by_name.get(name.as_str()) {
                binding.set(record, value.clone())?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for TypeBindings<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeBindings")
            .field("record_type", &self.record_type)
            .field("fields", &self.by_name.len())
            .finish()
    }
}
