// src/domain/errors.rs
use std::sync::PoisonError;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// A panicked writer leaves in-process storage unusable.
impl<T> From<PoisonError<T>> for DomainError {
    fn from(_: PoisonError<T>) -> Self {
        DomainError::Persistence("in-memory store poisoned".into())
    }
}
