//! Mobile-friendly error types.

use matchbook_core::ContactsError;

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ContactsError> for MobileError {
    fn from(err: ContactsError) -> Self {
        match err {
            ContactsError::Configuration(message) => MobileError::Configuration(message),
            ContactsError::Serialization(e) => MobileError::Serialization(e.to_string()),
            other => MobileError::Internal(other.to_string()),
        }
    }
}
