use std::path::Path;

use crate::builder::FrameBuilder;
use crate::decoder::{DecodeError, Decoder, DecoderLibrary};
use crate::error::{Error, Result};
use crate::events::EventSink;
use crate::frame::Frame;
use crate::interrupt::Interrupt;
use crate::logger;

/// Configures how the parse entry points run a decoder.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    interrupt: Option<Interrupt>,
}

impl ParseOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { interrupt: None }
    }

    /// Attaches a cancellation flag the running parse will poll.
    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = Some(interrupt);
        self
    }
}

fn run<D: Decoder + ?Sized>(decoder: &mut D, path: &Path, options: &ParseOptions) -> Result<Frame> {
    let _source = logger::set_source(path.display().to_string());

    let mut builder = FrameBuilder::new();
    if let Some(interrupt) = &options.interrupt {
        builder = builder.with_interrupt(interrupt.clone());
    }

    match decoder.decode(path, &mut builder) {
        Ok(()) => builder.output(),
        Err(DecodeError::Aborted(error)) => Err(error),
        Err(DecodeError::Failed { message }) => Err(Error::Parse {
            filename: path.to_path_buf(),
            message: message.into_owned(),
        }),
    }
}

/// Parses one file through an arbitrary decoder into a frame.
///
/// This is the generic driver behind the per-format entry points; use it
/// directly for decoders outside the four standard formats.
///
/// # Errors
///
/// Returns [`Error::Parse`] wrapping the decoder's diagnostic when the file
/// cannot be decoded, or the sink's own error when a handler aborted the run
/// (cancellation surfaces as [`Error::Interrupted`]).
pub fn parse_with<D: Decoder + ?Sized>(decoder: &mut D, path: impl AsRef<Path>) -> Result<Frame> {
    run(decoder, path.as_ref(), &ParseOptions::new())
}

/// Like [`parse_with`], with explicit options.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_with_options<D: Decoder + ?Sized>(
    decoder: &mut D,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Frame> {
    run(decoder, path.as_ref(), options)
}

/// Reads a SAS `sas7bdat` file into a frame.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_sas<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
) -> Result<Frame> {
    parse_sas_with(library, path, &ParseOptions::new())
}

/// Like [`parse_sas`], with explicit options.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_sas_with<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Frame> {
    let mut decoder =
        |p: &Path, sink: &mut dyn EventSink| library.parse_sas7bdat(p, sink);
    run(&mut decoder, path.as_ref(), options)
}

/// Reads a Stata `dta` file into a frame.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_dta<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
) -> Result<Frame> {
    parse_dta_with(library, path, &ParseOptions::new())
}

/// Like [`parse_dta`], with explicit options.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_dta_with<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Frame> {
    let mut decoder = |p: &Path, sink: &mut dyn EventSink| library.parse_dta(p, sink);
    run(&mut decoder, path.as_ref(), options)
}

/// Reads an SPSS portable `por` file into a frame.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_por<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
) -> Result<Frame> {
    parse_por_with(library, path, &ParseOptions::new())
}

/// Like [`parse_por`], with explicit options.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_por_with<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Frame> {
    let mut decoder = |p: &Path, sink: &mut dyn EventSink| library.parse_por(p, sink);
    run(&mut decoder, path.as_ref(), options)
}

/// Reads an SPSS system `sav` file into a frame.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_sav<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
) -> Result<Frame> {
    parse_sav_with(library, path, &ParseOptions::new())
}

/// Like [`parse_sav`], with explicit options.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_sav_with<L: DecoderLibrary + ?Sized>(
    library: &mut L,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Frame> {
    let mut decoder = |p: &Path, sink: &mut dyn EventSink| library.parse_sav(p, sink);
    run(&mut decoder, path.as_ref(), options)
}
