use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to read {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    EncodingError {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Write to output failed: {0}")]
    OutputError(#[source] std::io::Error),

    #[error("JSON syntax error: {0}")]
    SyntaxError(#[source] serde_json::Error),

    #[error("Expected a top-level JSON array, found {found}")]
    NotAnArrayError { found: &'static str },

    #[error("Entry {index} is not a header object with a string `key`: {source}")]
    InvalidEntryError {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Syntax,
    Shape,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::IoError { .. }
            | ExportError::EncodingError { .. }
            | ExportError::OutputError(_) => ErrorCategory::Io,
            ExportError::SyntaxError(_) => ErrorCategory::Syntax,
            ExportError::NotAnArrayError { .. } | ExportError::InvalidEntryError { .. } => {
                ErrorCategory::Shape
            }
        }
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 1,
            ErrorCategory::Syntax => 2,
            ErrorCategory::Shape => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access the input: {}", self),
            ErrorCategory::Syntax => format!("Input is not valid JSON: {}", self),
            ErrorCategory::Shape => format!("Input has an unexpected shape: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and is readable",
            ErrorCategory::Syntax => "Fix the JSON syntax of the input file",
            ErrorCategory::Shape => {
                "The input must be an array of objects, each with a string \"key\" field"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
