use std::io;
use thiserror::Error;

/// The error type for the stream and random-source operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying reader or writer failed while handling the byte
    /// at the given 0-based position.
    #[error("byte [{index}]: {source}")]
    Io {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// A checked decode was handed a slice of the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
