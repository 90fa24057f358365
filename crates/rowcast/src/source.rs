//! The tabular input seam.
//!
//! Reading rows out of a file, query result or wire format is someone
//! else's job; mapping only needs ordered column names and positionally
//! aligned row values. [`RowTable`] is the in-memory implementation used by
//! tests and small callers.

use rowcast_common::{BindError, CellValue};

/// An ordered sequence of column names plus, per row, a sequence of raw
/// values aligned positionally with those names.
///
/// Implementations must keep every row exactly as wide as `columns()`.
/// Duplicate column names are tolerated here and rejected at mapping time.
pub trait RowSource {
    /// Ordered column headers.
    fn columns(&self) -> &[String];

    fn row_count(&self) -> usize;

    /// Values for one row, aligned with `columns()`.
    fn row(&self, index: usize) -> Vec<CellValue>;

    fn iter_rows<'a>(&'a self) -> Box<dyn Iterator<Item = Vec<CellValue>> + 'a> {
        Box::new((0..self.row_count()).map(move |r| self.row(r)))
    }
}

/// An owned, in-memory row source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl RowTable {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append one row. The row must line up with the declared columns;
    /// misaligned rows are rejected here so they can never skew matching
    /// later.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), BindError> {
        if row.len() != self.columns.len() {
            return Err(BindError::RowWidthMismatch {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Build a table from pre-collected rows, validating each row's width.
    pub fn with_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> Result<Self, BindError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }
}

impl RowSource for RowTable {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Vec<CellValue> {
        self.rows[index].clone()
    }

    fn iter_rows<'a>(&'a self) -> Box<dyn Iterator<Item = Vec<CellValue>> + 'a> {
        Box::new(self.rows.iter().cloned())
    }
}
