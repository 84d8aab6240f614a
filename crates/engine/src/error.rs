//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`ExistingKey`] thrown when a caller-supplied id already exists.
//! - [`InvalidTransition`] thrown when a status change is not allowed.
//! - [`InvalidInput`] thrown when a payload is missing or malformed.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidTransition`]: EngineError::InvalidTransition
//!  [`InvalidInput`]: EngineError::InvalidInput
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
