// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for contact import operations.
//!
//! The coordinator never translates remote failures: whatever the matching
//! service reports is handed to the caller's callback as-is.

use thiserror::Error;

/// Unified error type for Matchbook operations.
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The matching service answered with an error status.
    #[error("api error: {message}")]
    Api {
        /// Service-specific error code, when the service sent one.
        code: Option<i32>,
        /// Human-readable description.
        message: String,
    },

    /// The session is not authorized to use the contacts endpoints.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The service rejected the request because of rate limiting.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Matchbook operations.
pub type ContactsResult<T> = Result<T, ContactsError>;
