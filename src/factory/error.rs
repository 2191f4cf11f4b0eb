//! Error types for the factories.

use thiserror::Error;

/// Errors that can occur when a factory is asked for something it cannot make.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactoryError {
    /// No animal factory is registered under this key.
    #[error("Type not found: {0}")]
    UnknownType(String),

    /// The name does not match any config parser family.
    #[error("Unknown config format: {0}")]
    UnknownFormat(String),
}
