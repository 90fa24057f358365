//! rowcast — cached column-to-field binding.
//!
//! Rows from a tabular source are mapped into instances of a statically
//! known record type, matching columns to fields by exact name. The
//! expensive part — discovering which fields exist and how to assign them —
//! happens once per type, at registration: [`BindingRegistry::register`]
//! compiles a [`TypeBindings`] table of [`FieldBinding`] assignment ops, and
//! every later [`BindingRegistry::map_cached`] call reuses it. The hot path
//! is hash lookups and fn-pointer calls only.
//!
//! [`map_dynamic`] is the uncached alternative: it introspects the record
//! type on every call, for one-off mappings where registration is not worth
//! the setup.
//!
//! Schema drift between source and record is tolerated by design: unknown
//! columns and unmatched fields are silently ignored, and a null source
//! value always leaves the field at its default. The only mapping-time
//! failures are a kind mismatch ([`BindError::FieldTypeMismatch`]), an
//! unregistered type, and duplicate column names.

pub mod binding;
mod macros;
pub mod record;
pub mod registry;
pub mod source;

pub use binding::{FieldBinding, TypeBindings};
pub use record::{FieldDescriptor, FromCell, Record};
pub use registry::{BindingRegistry, map_dynamic};
pub use source::{RowSource, RowTable};

// Re-export the shared types so callers need only one crate.
pub use rowcast_common::{BindError, CellValue, ValueKind};
