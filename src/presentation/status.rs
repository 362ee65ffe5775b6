// src/presentation/status.rs
//! Transport-agnostic error surface. Whatever carries the API (gRPC, HTTP,
//! a test harness) maps `Code` onto its own numbering; the message is final.

use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Shown whenever the underlying failure would leak store or dependency
/// detail the caller has no business seeing.
const GENERIC_MESSAGE: &str = "internal server error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    Unauthenticated,
    InvalidArgument,
    NotFound,
    PermissionDenied,
    Aborted,
    Internal,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Unauthenticated => "UNAUTHENTICATED",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::NotFound => "NOT_FOUND",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::Aborted => "ABORTED",
            Code::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{code}: {message}")]
pub struct Status {
    code: Code,
    message: String,
}

impl Status {
    fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApplicationError> for Status {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Unauthenticated(msg) => Self::new(Code::Unauthenticated, msg),
            ApplicationError::Validation(msg) => Self::new(Code::InvalidArgument, msg),
            ApplicationError::NotFound(msg) => Self::new(Code::NotFound, msg),
            ApplicationError::Forbidden(msg) => Self::new(Code::PermissionDenied, msg),
            ApplicationError::Conflict(msg) => {
                tracing::error!(error = %msg, "conflict reported generically");
                Self::new(Code::Aborted, GENERIC_MESSAGE)
            }
            ApplicationError::Dependency(msg) => {
                tracing::error!(error = %msg, "dependency failure reported generically");
                Self::new(Code::Aborted, GENERIC_MESSAGE)
            }
            ApplicationError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure reported generically");
                Self::new(Code::Internal, GENERIC_MESSAGE)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }
}

impl Status {
    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(Code::InvalidArgument, msg),
            DomainError::NotFound(msg) => Self::new(Code::NotFound, msg),
            DomainError::Conflict(msg) => {
                tracing::error!(error = %msg, "store conflict reported generically");
                Self::new(Code::Aborted, GENERIC_MESSAGE)
            }
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "store failure reported generically");
                Self::new(Code::Aborted, GENERIC_MESSAGE)
            }
        }
    }
}

pub type StatusResult<T> = Result<T, Status>;

pub trait IntoStatusResult<T> {
    fn into_status(self) -> StatusResult<T>;
}

impl<T> IntoStatusResult<T> for ApplicationResult<T> {
    fn into_status(self) -> StatusResult<T> {
        self.map_err(Status::from)
    }
}
