//! Runtime errors

use thiserror::Error;

use helm_core::config::ValidationError;
use helm_core::events::TaxonomyError;
use helm_protocol::EncodeError;

use crate::config::ConfigError;

/// Errors that stop the control loop
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Event table failed validation at startup
    #[error("event taxonomy rejected: {0:?}")]
    Taxonomy(TaxonomyError),
    /// A frame did not match its signal layout
    #[error("frame encoding failed: {0:?}")]
    Encode(EncodeError),
    #[error("report encoding failed: {0}")]
    Report(#[from] postcard::Error),
}

impl From<ValidationError> for RuntimeError {
    fn from(e: ValidationError) -> Self {
        RuntimeError::Config(ConfigError::Invalid(e))
    }
}

impl From<TaxonomyError> for RuntimeError {
    fn from(e: TaxonomyError) -> Self {
        RuntimeError::Taxonomy(e)
    }
}

impl From<EncodeError> for RuntimeError {
    fn from(e: EncodeError) -> Self {
        RuntimeError::Encode(e)
    }
}
