use crate::error::Result;
use crate::value::{ElementType, Value};

/// Variable metadata mirroring the decoder's column descriptor.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Zero-based column position within the frame.
    pub index: usize,
    pub name: String,
    /// Human-readable display label, distinct from value labels.
    pub label: Option<String>,
    pub format: Option<String>,
    /// Name of the label set this variable cites, if any.
    pub value_labels: Option<String>,
    pub element_type: ElementType,
}

impl Variable {
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            index,
            name: name.into(),
            label: None,
            format: None,
            value_labels: None,
            element_type,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, set: impl Into<String>) -> Self {
        self.value_labels = Some(set.into());
        self
    }
}

/// Trait implemented by sinks that consume the event stream of a
/// statistical-file decoder.
///
/// Decoders call the handlers in a fixed shape: `info` exactly once before
/// anything else, `variable` once per column in any order, then `value` for
/// the cells. `value_label` may arrive at any point in the stream. `error`
/// carries non-fatal diagnostics and never ends the parse.
///
/// Returning `Err` from any handler instructs the decoder to abandon the
/// file; the error travels back out through the driver unchanged.
pub trait EventSink {
    /// Called once with the dataset dimensions before any other event.
    fn info(&mut self, row_count: usize, column_count: usize) -> Result<()>;

    /// Declares one variable and its storage type.
    fn variable(&mut self, variable: Variable) -> Result<()>;

    /// Delivers one cell, addressed by zero-based row and column.
    fn value(&mut self, row: usize, column: usize, value: Value<'_>) -> Result<()>;

    /// Records one `value -> label` pair belonging to the named label set.
    fn value_label(&mut self, set: &str, value: Value<'_>, label: &str) -> Result<()>;

    /// Receives a decoder diagnostic that does not end the parse.
    fn error(&mut self, _message: &str) {}
}
