use std::fmt;

/// Result type alias for document operations
pub type ParseResult<T> = Result<T, IniError>;

/// Errors that can occur while reading typed values or persisting a document
#[derive(Debug, Clone)]
pub enum IniError {
    /// Stored property text could not be converted to the requested type
    Conversion { value: String, expected: String },

    /// File I/O error
    Io { path: String, message: String },
}

impl IniError {
    /// Create a conversion error
    pub fn conversion(value: impl Into<String>, expected: impl Into<String>) -> Self {
        IniError::Conversion {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        IniError::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::Conversion { value, expected } => {
                write!(f, "Cannot convert '{}' to {}", value, expected)
            }
            IniError::Io { path, message } => {
                write!(f, "I/O error for '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for IniError {}
