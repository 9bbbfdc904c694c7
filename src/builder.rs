use crate::error::{Error, Result};
use crate::events::{EventSink, Variable};
use crate::frame::{
    ATTR_CLASS, ATTR_LABEL, ATTR_LABELS, ATTR_NAMES, ATTR_ROW_NAMES, AttrValue, Attributes,
    Column, ColumnKind, FRAME_CLASS, Frame, LabelRegistry, MISSING_INT,
};
use crate::interrupt::Interrupt;
use crate::logger;
use crate::value::Value;

/// Cells between interrupt polls along either axis.
const INTERRUPT_STRIDE: usize = 1000;

/// Assembles a [`Frame`] from a decoder's event stream.
///
/// The builder is the sink a decoder drives: dimensions arrive first and fix
/// the shape, variable declarations allocate typed columns, and cells land by
/// row and column index. Columns start fully missing, so sparse streams are
/// valid and unwritten cells simply stay missing. Any event that breaks the
/// protocol aborts the parse with [`Error::Protocol`]; the decoder sees the
/// abort as its handler's failure return.
///
/// When an [`Interrupt`] is attached, the builder polls it every
/// [`INTERRUPT_STRIDE`]th row or column index and aborts with
/// [`Error::Interrupted`] once the flag is up.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    n_rows: usize,
    n_cols: usize,
    sized: bool,
    columns: Vec<Option<Column>>,
    names: Vec<String>,
    value_label_refs: Vec<Option<String>>,
    registry: LabelRegistry,
    interrupt: Option<Interrupt>,
}

impl FrameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a cancellation flag polled while cells stream in.
    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Label sets collected so far, keyed by set name.
    #[must_use]
    pub const fn label_sets(&self) -> &LabelRegistry {
        &self.registry
    }

    /// Finishes the build and hands out the frame.
    ///
    /// Columns citing a label set that materialized get the set's pairs as
    /// their `labels` attribute. The frame itself receives `names`, the
    /// class vector, and the compact `row.names` encoding, whose row count
    /// saturates at `i32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if any column slot never saw its
    /// declaration; a frame with holes is never produced.
    pub fn output(self) -> Result<Frame> {
        let Self {
            n_rows,
            columns,
            names,
            value_label_refs,
            registry,
            ..
        } = self;

        let mut finished = Vec::with_capacity(columns.len());
        for (index, slot) in columns.into_iter().enumerate() {
            let Some(mut column) = slot else {
                return Err(Error::protocol_owned(format!(
                    "column {index} was never declared"
                )));
            };
            if let Some(set_name) = &value_label_refs[index]
                && let Some(set) = registry.get(set_name)
            {
                column.set_attr(ATTR_LABELS, AttrValue::Labels(set.labels.clone()));
            }
            finished.push(column);
        }

        let mut attributes = Attributes::new();
        attributes.set(ATTR_NAMES, AttrValue::TextVec(names));
        attributes.set(
            ATTR_CLASS,
            AttrValue::TextVec(
                FRAME_CLASS
                    .iter()
                    .map(std::string::ToString::to_string)
                    .collect(),
            ),
        );
        let capped = i32::try_from(n_rows).unwrap_or(i32::MAX);
        attributes.set(ATTR_ROW_NAMES, AttrValue::IntVec(vec![MISSING_INT, -capped]));

        Ok(Frame::new(n_rows, finished, attributes))
    }
}

impl EventSink for FrameBuilder {
    fn info(&mut self, row_count: usize, column_count: usize) -> Result<()> {
        if self.sized {
            return Err(Error::protocol("dataset dimensions delivered twice"));
        }
        self.sized = true;
        self.n_rows = row_count;
        self.n_cols = column_count;
        self.columns = vec![None; column_count];
        self.names = vec![String::new(); column_count];
        self.value_label_refs = vec![None; column_count];
        Ok(())
    }

    fn variable(&mut self, variable: Variable) -> Result<()> {
        if !self.sized {
            return Err(Error::protocol(
                "variable declared before dataset dimensions",
            ));
        }
        let Variable {
            index,
            name,
            label,
            format: _,
            value_labels,
            element_type,
        } = variable;

        let n_cols = self.n_cols;
        let slot = self.columns.get_mut(index).ok_or_else(|| {
            Error::protocol_owned(format!(
                "variable index {index} outside frame of {n_cols} columns"
            ))
        })?;
        if slot.is_some() {
            return Err(Error::protocol_owned(format!(
                "variable index {index} declared twice"
            )));
        }

        let mut column = Column::new(element_type.column_kind(), self.n_rows);
        if let Some(label) = label {
            column.set_attr(ATTR_LABEL, AttrValue::Text(label));
        }
        *slot = Some(column);
        self.names[index] = name;
        self.value_label_refs[index] = value_labels;
        Ok(())
    }

    fn value(&mut self, row: usize, column: usize, value: Value<'_>) -> Result<()> {
        // Poll for cancellation every 1000 rows or columns.
        if (row % INTERRUPT_STRIDE == 0 || column % INTERRUPT_STRIDE == 0)
            && let Some(interrupt) = &self.interrupt
            && interrupt.is_requested()
        {
            return Err(Error::Interrupted);
        }

        if !self.sized {
            return Err(Error::protocol("cell delivered before dataset dimensions"));
        }
        let n_cols = self.n_cols;
        let slot = self.columns.get_mut(column).ok_or_else(|| {
            Error::protocol_owned(format!(
                "cell column {column} outside frame of {n_cols} columns"
            ))
        })?;
        let Some(target) = slot.as_mut() else {
            return Err(Error::protocol_owned(format!(
                "cell delivered for undeclared column {column}"
            )));
        };
        if value.column_kind() != target.kind() {
            return Err(Error::protocol_owned(format!(
                "{} value for {} column {column}",
                value.column_kind(),
                target.kind()
            )));
        }

        match target.kind() {
            // Missing text and the empty string are identical downstream.
            ColumnKind::Text => {
                let text = match value {
                    Value::Str(text) => text.into_owned(),
                    Value::Char(c) => c.to_string(),
                    _ => String::new(),
                };
                target.set_text(row, text)
            }
            ColumnKind::Integer => target.set_integer(row, value.as_int32()),
            ColumnKind::Real => target.set_real(row, value.as_double()),
        }
    }

    fn value_label(&mut self, set: &str, value: Value<'_>, label: &str) -> Result<()> {
        self.registry
            .get_or_create(set)
            .add(label, value.to_string());
        Ok(())
    }

    fn error(&mut self, message: &str) {
        logger::log_error(message);
    }
}
