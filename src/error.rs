use thiserror::Error;

/// Result type alias for image and scan operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors that can occur while reading an image or scanning its tracks
#[derive(Debug, Error)]
pub enum CheckError {
    /// I/O error occurred while reading the image or writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unrecognized DSK file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Parse error at specific offset
    #[error("Parse error at offset {offset}: {message}")]
    ParseError {
        /// Byte offset where error occurred
        offset: usize,
        /// Error message
        message: String,
    },

    /// The image reader could not position at a track/side
    #[error("Seek error on track {track}, side {side}")]
    SeekFault {
        /// Track number
        track: u8,
        /// Side number
        side: u8,
    },

    /// A sector buffer could not be allocated
    #[error("Failed to allocate {bytes} bytes for sector buffer")]
    BufferAllocation {
        /// Requested buffer size
        bytes: usize,
    },

    /// A formatted range list would not fit in its output bound
    #[error("Range list exceeds {limit} characters")]
    RangeFormatOverflow {
        /// Maximum permitted output length
        limit: usize,
    },
}

impl CheckError {
    /// Create a parse error with context
    pub fn parse<S: Into<String>>(offset: usize, message: S) -> Self {
        CheckError::ParseError {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        CheckError::InvalidFormat(message.into())
    }
}
