use std::fmt;

use crate::error::{Error, Result};
use crate::frame::attr::{ATTR_LABEL, ATTR_LABELS, AttrValue, Attributes};
use crate::frame::labels::ValueLabel;

/// Sentinel stored in integer cells that are missing.
pub const MISSING_INT: i32 = i32::MIN;

/// Storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Real,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// Typed cell storage of one column.
#[derive(Debug, Clone, PartialEq)]
pub enum Cells {
    Text(Vec<String>),
    Integer(Vec<i32>),
    Real(Vec<f64>),
}

impl Cells {
    fn with_len(kind: ColumnKind, len: usize) -> Self {
        match kind {
            ColumnKind::Text => Self::Text(vec![String::new(); len]),
            ColumnKind::Integer => Self::Integer(vec![MISSING_INT; len]),
            ColumnKind::Real => Self::Real(vec![f64::NAN; len]),
        }
    }

    const fn kind(&self) -> ColumnKind {
        match self {
            Self::Text(_) => ColumnKind::Text,
            Self::Integer(_) => ColumnKind::Integer,
            Self::Real(_) => ColumnKind::Real,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Text(cells) => cells.len(),
            Self::Integer(cells) => cells.len(),
            Self::Real(cells) => cells.len(),
        }
    }
}

/// One pre-sized column buffer.
///
/// Every cell starts out missing (empty string, [`MISSING_INT`], or NaN by
/// kind) so unwritten positions read back as missing without bookkeeping.
/// Writes address cells by row and never grow the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    cells: Cells,
    attributes: Attributes,
}

impl Column {
    #[must_use]
    pub fn new(kind: ColumnKind, len: usize) -> Self {
        Self {
            cells: Cells::with_len(kind, len),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        self.cells.kind()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Text cells, when this is a text column.
    #[must_use]
    pub fn as_text(&self) -> Option<&[String]> {
        match &self.cells {
            Cells::Text(cells) => Some(cells),
            _ => None,
        }
    }

    /// Integer cells, when this is an integer column. Missing cells hold
    /// [`MISSING_INT`].
    #[must_use]
    pub fn as_integer(&self) -> Option<&[i32]> {
        match &self.cells {
            Cells::Integer(cells) => Some(cells),
            _ => None,
        }
    }

    /// Real cells, when this is a real column. Missing cells hold NaN.
    #[must_use]
    pub fn as_real(&self) -> Option<&[f64]> {
        match &self.cells {
            Cells::Real(cells) => Some(cells),
            _ => None,
        }
    }

    /// Writes a text cell.
    ///
    /// # Errors
    ///
    /// Returns a protocol error when the row is out of bounds or the column
    /// is not textual.
    pub fn set_text(&mut self, row: usize, text: impl Into<String>) -> Result<()> {
        match &mut self.cells {
            Cells::Text(cells) => {
                let len = cells.len();
                let cell = cells
                    .get_mut(row)
                    .ok_or_else(|| row_out_of_bounds(row, len))?;
                *cell = text.into();
                Ok(())
            }
            _ => Err(kind_mismatch(ColumnKind::Text, self.kind())),
        }
    }

    /// Writes an integer cell; `None` stores the missing sentinel.
    ///
    /// # Errors
    ///
    /// Returns a protocol error when the row is out of bounds or the column
    /// is not integral.
    pub fn set_integer(&mut self, row: usize, value: Option<i32>) -> Result<()> {
        match &mut self.cells {
            Cells::Integer(cells) => {
                let len = cells.len();
                let cell = cells
                    .get_mut(row)
                    .ok_or_else(|| row_out_of_bounds(row, len))?;
                *cell = value.unwrap_or(MISSING_INT);
                Ok(())
            }
            _ => Err(kind_mismatch(ColumnKind::Integer, self.kind())),
        }
    }

    /// Writes a real cell; `None` stores NaN.
    ///
    /// # Errors
    ///
    /// Returns a protocol error when the row is out of bounds or the column
    /// is not real-valued.
    pub fn set_real(&mut self, row: usize, value: Option<f64>) -> Result<()> {
        match &mut self.cells {
            Cells::Real(cells) => {
                let len = cells.len();
                let cell = cells
                    .get_mut(row)
                    .ok_or_else(|| row_out_of_bounds(row, len))?;
                *cell = value.unwrap_or(f64::NAN);
                Ok(())
            }
            _ => Err(kind_mismatch(ColumnKind::Real, self.kind())),
        }
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: AttrValue) {
        self.attributes.set(name, value);
    }

    /// Display label attached at declaration time, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.attributes.get(ATTR_LABEL).and_then(AttrValue::as_text)
    }

    /// Value-label pairs attached at output time, if the column cited a
    /// label set that materialized.
    #[must_use]
    pub fn value_label_pairs(&self) -> Option<&[ValueLabel]> {
        match self.attributes.get(ATTR_LABELS) {
            Some(AttrValue::Labels(pairs)) => Some(pairs),
            _ => None,
        }
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

fn row_out_of_bounds(row: usize, len: usize) -> Error {
    Error::protocol_owned(format!("cell row {row} outside column of length {len}"))
}

fn kind_mismatch(written: ColumnKind, declared: ColumnKind) -> Error {
    Error::protocol_owned(format!("{written} value written to {declared} column"))
}
