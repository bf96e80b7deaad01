//! Centralized error handling for vimode
//! Defines the common error type, error kinds, and error codes

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Host surface rejected an operation (bad offset, failed mutation)
    Surface,
    /// File system or I/O errors
    Io,
    /// Snapshot encoding or decoding errors
    Encoding,
    /// Rendering or terminal backend errors
    Terminal,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface => write!(f, "Surface"),
            Self::Io => write!(f, "IO"),
            Self::Encoding => write!(f, "Encoding"),
            Self::Terminal => write!(f, "Terminal"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in vimode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VimodeError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "OFFSET_OUT_OF_BOUNDS")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl VimodeError {
    /// Create a new error
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for VimodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for VimodeError {}

impl From<std::io::Error> for VimodeError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, crate::constants::errors::IO_ERROR, err.to_string())
    }
}

/// Result alias for vimode operations
pub type Result<T> = std::result::Result<T, VimodeError>;
