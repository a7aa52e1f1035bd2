//! Centralized error handling for IceSeason
//!
//! This module provides structured error types instead of a generic
//! `Box<dyn Error>`, so callers can match on the failure they care about.

use std::fmt;

/// Main error type for IceSeason operations
#[derive(Debug)]
pub enum IceSeasonError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// Malformed phenology input: a threshold outside (0, 1), a bad run
    /// length, or a time axis that does not match the declared sea-ice year
    InvalidInput { message: String },

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Dimension not found in variable
    DimensionNotFound { var: String, dim: String },

    /// I/O operation errors
    IoError(std::io::Error),

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for anything without a dedicated variant
    Generic(String),
}

impl fmt::Display for IceSeasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IceSeasonError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            IceSeasonError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            IceSeasonError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            IceSeasonError::DimensionNotFound { var, dim } => {
                write!(f, "Dimension '{}' not found in variable '{}'", dim, var)
            }
            IceSeasonError::IoError(e) => write!(f, "I/O error: {}", e),
            IceSeasonError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            IceSeasonError::ArrayError(e) => write!(f, "Array error: {}", e),
            IceSeasonError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for IceSeasonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IceSeasonError::NetCDFError(e) => Some(e),
            IceSeasonError::IoError(e) => Some(e),
            IceSeasonError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for IceSeasonError {
    fn from(error: netcdf::Error) -> Self {
        IceSeasonError::NetCDFError(error)
    }
}

impl From<std::io::Error> for IceSeasonError {
    fn from(error: std::io::Error) -> Self {
        IceSeasonError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for IceSeasonError {
    fn from(error: ndarray::ShapeError) -> Self {
        IceSeasonError::ArrayError(error)
    }
}

impl From<String> for IceSeasonError {
    fn from(error: String) -> Self {
        IceSeasonError::Generic(error)
    }
}

impl From<&str> for IceSeasonError {
    fn from(error: &str) -> Self {
        IceSeasonError::Generic(error.to_string())
    }
}

/// Result type alias for IceSeason operations
pub type Result<T> = std::result::Result<T, IceSeasonError>;
