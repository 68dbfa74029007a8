//! Pot error types.

use thiserror::Error;

use super::models::Chips;

/// Pot errors
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PotError {
    /// Invalid amount (must be non-negative)
    #[error("Invalid amount: {0}")]
    InvalidAmount(Chips),
}

/// Result type for pot operations
pub type PotResult<T> = Result<T, PotError>;
