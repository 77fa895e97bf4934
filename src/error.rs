//! Error types for the LBA crate.

use thiserror::Error;

/// LBA error type
#[derive(Error, Debug)]
pub enum Error {
    /// Contract violation at a public boundary (arity, shape, parameter domain)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Arithmetic produced a result the model cannot interpret
    #[error("Computation error: {0}")]
    Computation(String),

    /// Tabulated input whose normalization is undefined
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
