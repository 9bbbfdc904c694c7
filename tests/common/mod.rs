use std::path::{Path, PathBuf};

use serde_json::{Value as JsonValue, json};
use statframe::{
    Cells, Column, DecodeError, DecodeResult, DecoderLibrary, EventSink, Frame, Interrupt,
    MISSING_INT, Value, Variable,
};

/// One owned, replayable decoder event.
#[allow(dead_code)]
pub enum Event {
    Info {
        rows: usize,
        cols: usize,
    },
    Variable(Variable),
    Value {
        row: usize,
        column: usize,
        value: Value<'static>,
    },
    ValueLabel {
        set: String,
        value: Value<'static>,
        label: String,
    },
    Diagnostic(String),
    /// Raises the given interrupt flag when replay reaches this point.
    RaiseInterrupt(Interrupt),
    /// The decoder gives up with its own diagnostic.
    Fail(String),
}

#[allow(dead_code)]
pub fn info(rows: usize, cols: usize) -> Event {
    Event::Info { rows, cols }
}

#[allow(dead_code)]
pub fn value(row: usize, column: usize, value: Value<'static>) -> Event {
    Event::Value { row, column, value }
}

#[allow(dead_code)]
pub fn value_label(set: &str, value: Value<'static>, label: &str) -> Event {
    Event::ValueLabel {
        set: set.to_string(),
        value,
        label: label.to_string(),
    }
}

fn replay<I>(events: I, sink: &mut dyn EventSink) -> DecodeResult
where
    I: Iterator<Item = Event>,
{
    for event in events {
        match event {
            Event::Info { rows, cols } => sink.info(rows, cols)?,
            Event::Variable(variable) => sink.variable(variable)?,
            Event::Value { row, column, value } => sink.value(row, column, value)?,
            Event::ValueLabel { set, value, label } => sink.value_label(&set, value, &label)?,
            Event::Diagnostic(message) => sink.error(&message),
            Event::RaiseInterrupt(interrupt) => interrupt.request(),
            Event::Fail(message) => return Err(DecodeError::failed(message)),
        }
    }
    Ok(())
}

/// Builds a synthetic decoder that replays a fixed event script once.
#[allow(dead_code)]
pub fn scripted(mut events: Vec<Event>) -> impl FnMut(&Path, &mut dyn EventSink) -> DecodeResult {
    move |_path, sink| replay(events.drain(..), sink)
}

/// Four-format decoding library that replays one script and records which
/// routine each call dispatched to.
#[allow(dead_code)]
pub struct ScriptedLibrary {
    events: Vec<Event>,
    pub calls: Vec<(&'static str, PathBuf)>,
}

#[allow(dead_code)]
impl ScriptedLibrary {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            calls: Vec::new(),
        }
    }

    fn replay_as(
        &mut self,
        format: &'static str,
        path: &Path,
        sink: &mut dyn EventSink,
    ) -> DecodeResult {
        self.calls.push((format, path.to_path_buf()));
        replay(self.events.drain(..), sink)
    }
}

impl DecoderLibrary for ScriptedLibrary {
    fn parse_sas7bdat(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult {
        self.replay_as("sas7bdat", path, sink)
    }

    fn parse_dta(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult {
        self.replay_as("dta", path, sink)
    }

    fn parse_por(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult {
        self.replay_as("por", path, sink)
    }

    fn parse_sav(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult {
        self.replay_as("sav", path, sink)
    }
}

/// Structural JSON view of a frame; missing cells become `null` so expected
/// values can be written as `json!` literals.
#[allow(dead_code)]
pub fn frame_to_json(frame: &Frame) -> JsonValue {
    json!({
        "names": frame.names(),
        "class": frame.class(),
        "n_rows": frame.n_rows(),
        "columns": frame.columns().iter().map(column_to_json).collect::<Vec<_>>(),
    })
}

#[allow(dead_code)]
pub fn column_to_json(column: &Column) -> JsonValue {
    let cells = match column.cells() {
        Cells::Text(values) => json!(values),
        Cells::Integer(values) => JsonValue::Array(
            values
                .iter()
                .map(|&cell| {
                    if cell == MISSING_INT {
                        JsonValue::Null
                    } else {
                        json!(cell)
                    }
                })
                .collect(),
        ),
        Cells::Real(values) => JsonValue::Array(
            values
                .iter()
                .map(|&cell| {
                    if cell.is_nan() {
                        JsonValue::Null
                    } else {
                        json!(cell)
                    }
                })
                .collect(),
        ),
    };
    json!({
        "kind": column.kind().to_string(),
        "label": column.label(),
        "labels": column.value_label_pairs().map(|pairs| {
            pairs
                .iter()
                .map(|pair| json!([pair.label, pair.value]))
                .collect::<Vec<_>>()
        }),
        "cells": cells,
    })
}
