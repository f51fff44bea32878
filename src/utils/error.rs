//! Error handling for Lexrtf rendering
//!
//! This module provides a unified error type and result type for all
//! rendering operations. Only table layout can fail fatally; everything
//! else in the fragment model renders by construction.

use std::fmt;

/// Rendering error type
#[derive(Debug, Clone)]
pub enum RtfError {
    /// Invalid column width specification
    InvalidWidth { column: usize, message: String },
    /// A table mixed percentage widths with absolute twip widths
    MixedWidths,
    /// A table was declared with no usable columns
    EmptyTable { message: String },
    /// Left margin leaves no room for content
    InvalidMargin { margin: i32, available: i32 },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for RtfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtfError::InvalidWidth { column, message } => {
                write!(f, "Invalid width for column {}: {}", column, message)
            }
            RtfError::MixedWidths => {
                write!(
                    f,
                    "All column widths must be the same kind, either percent or twips"
                )
            }
            RtfError::EmptyTable { message } => {
                write!(f, "Empty table: {}", message)
            }
            RtfError::InvalidMargin { margin, available } => {
                write!(
                    f,
                    "Left margin of {} twips exceeds the available content width of {} twips",
                    margin, available
                )
            }
            RtfError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for RtfError {}

impl From<std::io::Error> for RtfError {
    fn from(err: std::io::Error) -> Self {
        RtfError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for rendering operations
pub type RtfResult<T> = Result<T, RtfError>;

// Convenience constructors for errors
impl RtfError {
    pub fn invalid_width(column: usize, message: impl Into<String>) -> Self {
        RtfError::InvalidWidth {
            column,
            message: message.into(),
        }
    }

    pub fn empty_table(message: impl Into<String>) -> Self {
        RtfError::EmptyTable {
            message: message.into(),
        }
    }
}
