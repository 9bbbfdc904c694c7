use std::borrow::Cow;
use std::path::PathBuf;

/// Result type used across the frame-building pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// High-level error type surfaced by the frame builder and parse driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The decoder reported a fatal failure while reading a file.
    ///
    /// The message is the decoder's own diagnostic, reproduced verbatim
    /// between the filename and the closing period.
    #[error("Failed to parse {}: {message}.", filename.display())]
    Parse {
        filename: PathBuf,
        message: String,
    },

    /// The host requested cancellation and the builder stopped the decoder.
    #[error("parse interrupted")]
    Interrupted,

    /// The decoder violated the event protocol.
    #[error("event protocol violation: {details}")]
    Protocol { details: Cow<'static, str> },
}

impl Error {
    /// Helper constructor for protocol violations with a static description.
    #[must_use]
    pub const fn protocol(details: &'static str) -> Self {
        Self::Protocol {
            details: Cow::Borrowed(details),
        }
    }

    pub(crate) fn protocol_owned(details: String) -> Self {
        Self::Protocol {
            details: Cow::Owned(details),
        }
    }
}
