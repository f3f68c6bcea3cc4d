// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(String),

    /// Accumulated field-level complaints; handlers collect every violation
    /// before reporting instead of failing on the first.
    #[error("{}", .0.join(", "))]
    ValidationMany(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn validation_many(errors: Vec<String>) -> Self {
        Self::ValidationMany(errors)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Field complaints carried by this error, when it is a validation error.
    pub fn field_errors(&self) -> Option<Vec<String>> {
        match self {
            Self::Validation(msg) => Some(vec![msg.clone()]),
            Self::ValidationMany(errors) => Some(errors.clone()),
            Self::Domain(DomainError::Validation(msg)) => Some(vec![msg.clone()]),
            _ => None,
        }
    }
}
