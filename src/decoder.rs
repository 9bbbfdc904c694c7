use std::borrow::Cow;
use std::path::Path;

use crate::error::Error;
use crate::events::EventSink;

/// Outcome of one decoder run.
pub type DecodeResult = std::result::Result<(), DecodeError>;

/// Failure modes of a decoder run.
///
/// The two variants keep "the decoder gave up" apart from "the sink told the
/// decoder to stop": only the former is reported as a parse failure, the
/// latter carries the sink's own error back out unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The decoder failed on its own; the message is its diagnostic.
    #[error("{message}")]
    Failed { message: Cow<'static, str> },

    /// A sink handler returned an error and the decoder abandoned the file.
    #[error(transparent)]
    Aborted(#[from] Error),
}

impl DecodeError {
    #[must_use]
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// One file-format decoding routine.
///
/// Implementations read the file at `path` and push its contents into `sink`
/// as events, honoring the sink's handler results: an `Err` from a handler
/// means stop immediately and return it as [`DecodeError::Aborted`], which
/// the `?` operator produces from the sink's error type.
///
/// Any `FnMut(&Path, &mut dyn EventSink) -> DecodeResult` is a decoder.
pub trait Decoder {
    /// Decodes the file at `path` into `sink`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Failed`] when the file cannot be decoded,
    /// [`DecodeError::Aborted`] when a sink handler ended the run.
    fn decode(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult;
}

impl<F> Decoder for F
where
    F: FnMut(&Path, &mut dyn EventSink) -> DecodeResult,
{
    fn decode(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult {
        self(path, sink)
    }
}

/// A decoding library covering the four supported file formats.
///
/// `&mut self` lets implementations keep per-run scratch state, caches, or
/// handles to an external engine between calls.
pub trait DecoderLibrary {
    /// Decodes a SAS `sas7bdat` file.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    fn parse_sas7bdat(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult;

    /// Decodes a Stata `dta` file.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    fn parse_dta(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult;

    /// Decodes an SPSS portable `por` file.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    fn parse_por(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult;

    /// Decodes an SPSS system `sav` file.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    fn parse_sav(&mut self, path: &Path, sink: &mut dyn EventSink) -> DecodeResult;
}
