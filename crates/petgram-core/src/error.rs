//! Domain-level error types.

use serde::Serialize;
use thiserror::Error;

/// Field-scoped validation failures - user-correctable, reported in-state.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("invalid email format")]
    InvalidEmailFormat,

    #[error("email is already registered")]
    EmailTaken,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Non-field authentication failures, reported as a general error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("credential store failure: {0}")]
    Store(String),
}

/// Credential store errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("email already registered")]
    Duplicate,

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Posts gateway errors. The feed treats every variant identically.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}
