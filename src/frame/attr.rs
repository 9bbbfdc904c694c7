use smallvec::SmallVec;

use super::labels::ValueLabel;

pub const ATTR_NAMES: &str = "names";
pub const ATTR_CLASS: &str = "class";
pub const ATTR_ROW_NAMES: &str = "row.names";
pub const ATTR_LABEL: &str = "label";
pub const ATTR_LABELS: &str = "labels";

/// Class vector stamped on every finished frame, in precedence order.
pub const FRAME_CLASS: [&str; 3] = ["tbl_df", "tbl", "data.frame"];

/// Value of a single named attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    TextVec(Vec<String>),
    IntVec(Vec<i32>),
    Labels(Vec<ValueLabel>),
}

impl AttrValue {
    /// Borrows the text payload when the attribute holds a single string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Ordered attribute list.
///
/// Holders carry very few attributes (a column has at most `label` and
/// `labels`, a frame exactly three), so entries live inline and lookup is a
/// linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: SmallVec<[(String, AttrValue); 2]>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any existing value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
