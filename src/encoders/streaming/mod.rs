mod decoder;
mod encoder;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;

use crate::encoders::algorithms::DecodeError;
use std::fmt;

/// Errors from [`StreamingDecoder`].
#[derive(Debug)]
pub enum StreamError {
    Io(std::io::Error),
    Decode(DecodeError),
    /// The input is not valid UTF-8 at this byte offset
    InvalidUtf8 { offset: usize },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "error: {}", e),
            StreamError::Decode(e) => e.fmt(f),
            StreamError::InvalidUtf8 { offset } => {
                write!(f, "error: input is not valid UTF-8 at byte {}", offset)
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode(e) => Some(e),
            StreamError::InvalidUtf8 { .. } => None,
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(e: std::io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        StreamError::Decode(e)
    }
}
