//! The registry of compiled binding tables, plus the two mapping entry
//! points.
//!
//! The registry is state the caller owns and threads through explicitly —
//! construct one at startup, register every record type once, then share
//! `&BindingRegistry` freely. Registration takes `&mut self` and mapping
//! takes `&self`, so "register everything before concurrent reads begin"
//! is enforced by the borrow checker rather than by convention.

use crate::binding::{FieldBinding, TypeBindings, check_duplicate_names};
use crate::record::Record;
use crate::source::RowSource;
use rowcast_common::{BindError, CellValue};
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};

/// Process-wide cache mapping a record type's identity to its compiled
/// [`TypeBindings`] table.
///
/// Entries are added by [`register`](Self::register) and never removed or
/// overwritten; the registry lives as long as the caller keeps it.
#[derive(Default)]
pub struct BindingRegistry {
    entries: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and store the binding table for `T`.
    ///
    /// Introspection happens here, once; every later
    /// [`map_cached`](Self::map_cached) call for `T` reuses the result.
    /// Registering the same type twice is rejected and the first table
    /// stays in place.
    pub fn register<T: Record>(&mut self) -> Result<(), BindError> {
        let id = TypeId::of::<T>();
        if self.entries.contains_key(&id) {
            return Err(BindError::DuplicateRegistration(T::type_name()));
        }
        let bindings = TypeBindings::<T>::new();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            record_type = T::type_name(),
            fields = bindings.len(),
            "registered binding table"
        );
        self.entries.insert(id, Box::new(bindings));
        Ok(())
    }

    pub fn is_registered<T: Record>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// The compiled binding table for `T`, for callers that drive
    /// [`TypeBindings::apply_batch`] or
    /// [`TypeBindings::apply_single`] themselves.
    pub fn bindings<T: Record>(&self) -> Result<&TypeBindings<T>, BindError> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<TypeBindings<T>>())
            .ok_or(BindError::UnregisteredType(T::type_name()))
    }

    /// Map every row of `source` into a freshly default-constructed `T`,
    /// in source row order, through the registered binding table.
    pub fn map_cached<T, S>(&self, source: &S) -> Result<Vec<T>, BindError>
    where
        T: Record,
        S: RowSource + ?Sized,
    {
        let bindings = self.bindings::<T>()?;
        let rows: Vec<Vec<CellValue>> = source.iter_rows().collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            record_type = T::type_name(),
            rows = rows.len(),
            "mapping batch through cached bindings"
        );
        let mut records: Vec<T> = Vec::with_capacity(rows.len());
        records.resize_with(rows.len(), T::default);
        bindings.apply_batch(&mut records, source.columns(), &rows)?;
        Ok(records)
    }
}

impl std::fmt::Debug for BindingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingRegistry")
            .field("types", &self.entries.len())
            .finish()
    }
}

/// Map rows without consulting any registry.
///
/// `T`'s fields are introspected on every call and matched by name against
/// the source's columns per row, with the same null-skip, kind-check and
/// duplicate-column semantics as the cached path. Convenient for one-off
/// mappings; strictly slower than [`BindingRegistry::map_cached`] under
/// repeated use for the same type, since the introspection repeats.
pub fn map_dynamic<T, S>(source: &S) -> Result<Vec<T>, BindError>
where
    T: Record,
    S: RowSource + ?Sized,
{
    let columns = source.columns();
    check_duplicate_names(columns.iter().map(String::as_str))?;

    // Transient bindings, rebuilt per call and dropped at the end.
    let record_type = T::type_name();
    let mut by_name = FxHashMap::default();
    for desc in T::fields() {
        by_name.insert(desc.name, FieldBinding::bind(record_type, desc));
    }

    let mut records = Vec::with_capacity(source.row_count());
    for row in source.iter_rows() {
        let mut record = T::default();
        for (c, name) in columns.iter().enumerate() {
            if let Some(binding) = by_name.get(name.as_str()) {
                binding.set(&mut record, row[c].clone())?;
            }
        }
        records.push(record);
    }
    Ok(records)
}
