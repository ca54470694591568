//! Error types for grid normalization, input validation and simulation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulator operations
#[derive(Debug)]
pub enum SimulationError {
    /// Input could not be converted into an integer grid
    ///
    /// Raised for non-numeric elements and for ragged rows.
    TypeConversion {
        /// Description of the element or row that failed
        reason: String,
    },

    /// Grid does not have exactly two dimensions
    Shape {
        /// Actual shape of the rejected input
        shape: Vec<usize>,
    },

    /// Grid contains a value other than 0 or 1
    Domain {
        /// Offending value after integer conversion
        value: i64,
        /// Position of the offending value (row, col)
        position: (usize, usize),
    },

    /// Rule string does not match `S<digits>B<digits>`
    RuleSyntax {
        /// The rejected rule string
        rule: String,
    },

    /// Start choice is neither a registered preset nor a reserved synonym
    UnknownPreset {
        /// The rejected name
        name: String,
        /// Every name that would have been accepted
        available: Vec<String>,
    },

    /// Parameter text could not be parsed as the expected type
    InvalidType {
        /// Name of the parameter
        parameter: &'static str,
        /// Raw value as supplied
        value: String,
        /// Type that was expected
        expected: &'static str,
    },

    /// Parameter parsed but lies outside its permitted range
    OutOfRange {
        /// Name of the parameter
        parameter: &'static str,
        /// Raw value as supplied
        value: String,
        /// Explanation of the permitted range
        reason: String,
    },

    /// Seed is neither an unsigned integer nor `none`
    Seed {
        /// Raw value as supplied
        value: String,
    },

    /// Engine was asked to do something its configuration cannot support
    Configuration {
        /// Description of the missing or inconsistent setting
        reason: String,
    },

    /// Render symbol set failed validation
    InvalidSymbols {
        /// Explanation of why the symbols were rejected
        reason: String,
    },

    /// Failed to encode or export a recording
    Recording {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system or terminal operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeConversion { reason } => {
                write!(f, "Grid could not be converted to integers: {reason}")
            }
            Self::Shape { shape } => {
                write!(
                    f,
                    "Grid must have exactly 2 dimensions, got shape {shape:?}"
                )
            }
            Self::Domain { value, position } => {
                write!(
                    f,
                    "Grid must be binary: found {value} at ({}, {})",
                    position.0, position.1
                )
            }
            Self::RuleSyntax { rule } => {
                write!(
                    f,
                    "Invalid rule string '{rule}': must follow the pattern S<digits>B<digits> with no other characters"
                )
            }
            Self::UnknownPreset { name, available } => {
                write!(
                    f,
                    "Unknown start choice '{name}': expected one of {}",
                    available.join(", ")
                )
            }
            Self::InvalidType {
                parameter,
                value,
                expected,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': must be {expected}")
            }
            Self::OutOfRange {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Seed { value } => {
                write!(
                    f,
                    "Invalid seed '{value}': must be a non-negative integer or 'none'"
                )
            }
            Self::Configuration { reason } => {
                write!(f, "Configuration error: {reason}")
            }
            Self::InvalidSymbols { reason } => {
                write!(f, "Invalid render symbols: {reason}")
            }
            Self::Recording { path, source } => {
                write!(
                    f,
                    "Failed to export recording to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Recording { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulator results
pub type Result<T> = std::result::Result<T, SimulationError>;

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<terminal>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an out-of-range parameter error
pub fn out_of_range(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::OutOfRange {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parameter type error
pub fn invalid_type(
    parameter: &'static str,
    value: &impl ToString,
    expected: &'static str,
) -> SimulationError {
    SimulationError::InvalidType {
        parameter,
        value: value.to_string(),
        expected,
    }
}

/// Create a grid conversion error
pub fn type_conversion(reason: &impl ToString) -> SimulationError {
    SimulationError::TypeConversion {
        reason: reason.to_string(),
    }
}
