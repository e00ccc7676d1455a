//! Custom error types for CRS operations

use std::fmt;
use std::io;

/// CRS-specific error types
#[derive(Debug)]
pub enum CrsError {
    /// I/O error
    IoError(io::Error),
    /// EPSG code outside the supported projection set
    UnknownProjection(u32),
    /// Misuse of an operation, e.g. requesting grid parameters
    /// for the geodetic system
    InvalidArgument(String),
    /// Projection definition table is malformed or inconsistent
    InvalidDefinition(String),
}

impl fmt::Display for CrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsError::IoError(e) => write!(f, "I/O error: {}", e),
            CrsError::UnknownProjection(code) => write!(f, "Unknown projection: EPSG:{}", code),
            CrsError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CrsError::InvalidDefinition(msg) => write!(f, "Invalid projection definition: {}", msg),
        }
    }
}

impl std::error::Error for CrsError {}

impl From<io::Error> for CrsError {
    fn from(error: io::Error) -> Self {
        CrsError::IoError(error)
    }
}

/// Result type for CRS operations
pub type CrsResult<T> = Result<T, CrsError>;

impl From<String> for CrsError {
    fn from(msg: String) -> Self {
        CrsError::InvalidArgument(msg)
    }
}
