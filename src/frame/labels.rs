use std::collections::HashMap;

/// One `value -> label` pair inside a label set.
///
/// The value is kept in its stringified form so one set can label variables
/// of any element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLabel {
    pub label: String,
    pub value: String,
}

/// Named dictionary of value labels, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub name: String,
    pub labels: Vec<ValueLabel>,
}

impl LabelSet {
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            labels: Vec::new(),
        }
    }

    /// Appends a pair without deduplication.
    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.labels.push(ValueLabel {
            label: label.into(),
            value: value.into(),
        });
    }

    /// Index of the first pair carrying the given label text.
    #[must_use]
    pub fn find_label(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|pair| pair.label == label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Owning registry of label sets keyed by set name.
///
/// Sets come into existence when their first pair arrives; a variable citing
/// a set that never materializes simply ends up unlabelled.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    sets: HashMap<String, LabelSet>,
}

impl LabelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, name: &str) -> &mut LabelSet {
        self.sets
            .entry(name.to_string())
            .or_insert_with(|| LabelSet::new(name.to_string()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LabelSet> {
        self.sets.get(name)
    }

    /// Names of the sets collected so far, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
