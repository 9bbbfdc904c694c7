mod attr;
mod column;
mod labels;

pub use attr::{
    ATTR_CLASS, ATTR_LABEL, ATTR_LABELS, ATTR_NAMES, ATTR_ROW_NAMES, AttrValue, Attributes,
    FRAME_CLASS,
};
pub use column::{Cells, Column, ColumnKind, MISSING_INT};
pub use labels::{LabelRegistry, LabelSet, ValueLabel};

/// Column-oriented result of one parse.
///
/// Columns sit in declaration order; their names, the class vector, and the
/// row-name encoding live in the frame attributes the same way consumers
/// will re-attach them on their side.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    n_rows: usize,
    columns: Vec<Column>,
    attributes: Attributes,
}

impl Frame {
    pub(crate) const fn new(n_rows: usize, columns: Vec<Column>, attributes: Attributes) -> Self {
        Self {
            n_rows,
            columns,
            attributes,
        }
    }

    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub const fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Column names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self.attributes.get(ATTR_NAMES) {
            Some(AttrValue::TextVec(names)) => names,
            _ => &[],
        }
    }

    #[must_use]
    pub fn class(&self) -> &[String] {
        match self.attributes.get(ATTR_CLASS) {
            Some(AttrValue::TextVec(class)) => class,
            _ => &[],
        }
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Looks a column up by name.
    ///
    /// An exact match wins; otherwise trailing blanks are ignored on both
    /// sides, since declared names may carry padding.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        let names = self.names();
        if let Some(index) = names.iter().position(|candidate| candidate == name) {
            return self.columns.get(index);
        }
        let trimmed = name.trim_end();
        names
            .iter()
            .position(|candidate| candidate.trim_end() == trimmed)
            .and_then(|index| self.columns.get(index))
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
