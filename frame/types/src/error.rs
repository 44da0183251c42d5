/*!
    Error types for the frame scaling pipeline.
*/

use thiserror::Error;

/**
    Error type for the frame scaling pipeline.
*/
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from a frame source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Upstream failure (decode error, closed device, etc.)
    #[error("upstream error: {message}")]
    Upstream { message: String },
    /// Invalid data (planes that do not cover the frame)
    #[error("invalid data: {message}")]
    InvalidData { message: String },
    /// Unsupported format (valid but not handled)
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },
    /// Resampling failed inside a scaling kernel
    #[error("scaling failed: {message}")]
    Scaling { message: String },
    /// Invalid stage configuration
    #[error("configuration error: {message}")]
    Configuration { message: String },
    /// End of stream (not really an error, but part of control flow)
    #[error("end of stream")]
    Eof,
}

impl Error {
    /**
        Create an upstream error with the given message.
    */
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /**
        Create an invalid data error with the given message.
    */
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /**
        Create an unsupported format error with the given message.
    */
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /**
        Create a scaling error with the given message.
    */
    pub fn scaling(message: impl Into<String>) -> Self {
        Self::Scaling {
            message: message.into(),
        }
    }

    /**
        Create a configuration error with the given message.
    */
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /**
        Returns true if this is an EOF error.
    */
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /**
        Returns true if this is an unsupported format error.
    */
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}

/**
    Result type alias for the frame scaling pipeline.
*/
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display() {
        let e = Error::upstream("camera unplugged");
        assert_eq!(format!("{e}"), "upstream error: camera unplugged");

        let e = Error::invalid_data("plane too short");
        assert_eq!(format!("{e}"), "invalid data: plane too short");

        let e = Error::unsupported_format("nv12");
        assert_eq!(format!("{e}"), "unsupported format: nv12");

        let e = Error::scaling("buffer too small");
        assert_eq!(format!("{e}"), "scaling failed: buffer too small");

        let e = Error::configuration("at least one dimension must be positive");
        assert_eq!(
            format!("{e}"),
            "configuration error: at least one dimension must be positive"
        );

        let e = Error::Eof;
        assert_eq!(format!("{e}"), "end of stream");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "device not found");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(format!("{e}").contains("device not found"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn error_predicates() {
        assert!(Error::Eof.is_eof());
        assert!(!Error::upstream("test").is_eof());
        assert!(Error::unsupported_format("x").is_unsupported_format());
        assert!(!Error::Eof.is_unsupported_format());
    }
}
