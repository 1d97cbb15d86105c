// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for the XFabric composition function

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::state_machine::TransitionError;

/// Classification reported to the caller alongside an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// The request itself is unacceptable; retrying it unchanged will fail again
    InvalidArgument,

    /// The function could not complete for reasons unrelated to the request
    Internal,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            StatusCode::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Errors produced while running the function against one request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// Observed composite declares an apiVersion other than the supported one
    #[error("unsupported composite apiVersion: {0}")]
    UnsupportedApiVersion(String),

    /// Observed composite declares a kind other than the supported one
    #[error("unsupported composite kind: {0}")]
    UnsupportedKind(String),

    /// A required field is missing or has the wrong shape
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The invocation lifecycle was driven through a move it does not allow
    #[error("internal error: {0}")]
    Lifecycle(#[from] TransitionError),
}

impl FunctionError {
    /// Status classification surfaced to the caller.
    ///
    /// Failures caused by the request are `InvalidArgument` and not worth
    /// retrying. A lifecycle fault is a defect in the function, so `Internal`.
    pub fn status(&self) -> StatusCode {
        match self {
            FunctionError::UnsupportedApiVersion(_)
            | FunctionError::UnsupportedKind(_)
            | FunctionError::MalformedInput(_) => StatusCode::InvalidArgument,
            FunctionError::Lifecycle(_) => StatusCode::Internal,
        }
    }
}

/// Result type for function operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Errors that can occur in the transport plumbing around the function
#[derive(Debug, Error)]
pub enum TransportError {
    /// NATS connection error
    #[error("NATS connection error: {0}")]
    Connection(String),

    /// NATS subscribe error
    #[error("NATS subscribe error: {0}")]
    Subscribe(String),

    /// NATS publish error
    #[error("NATS publish error: {0}")]
    Publish(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Serialization(err.to_string())
    }
}
