//! Error types for crlfkit.
//!
//! The transforms themselves never fail: running out of output space is a
//! [`Transformed::DestinationShort`](crate::Transformed::DestinationShort)
//! outcome, not an error. [`TransformError`] covers the layers above them.

use std::io;

use thiserror::Error;

/// Errors raised by configuration and the I/O adapters.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An I/O error occurred in the wrapped reader or writer.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A transform reported a short destination without writing or
    /// consuming anything, so retrying with the same buffers cannot help.
    #[error("transform made no progress with {capacity} bytes of output space")]
    NoProgress {
        /// Output capacity offered to the stalled call.
        capacity: usize,
    },
}

impl From<TransformError> for io::Error {
    fn from(e: TransformError) -> Self {
        match e {
            TransformError::Io(e) => e,
            TransformError::InvalidConfig { .. } => io::Error::new(io::ErrorKind::InvalidInput, e),
            TransformError::NoProgress { .. } => io::Error::other(e),
        }
    }
}
