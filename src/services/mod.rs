//! Transport-free service layer.
//!
//! Service functions enforce the business rules and surface failures as
//! [`ServiceError`] values. The routing layer maps those onto HTTP responses;
//! the service layer never depends on a transport format.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod client;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Structural invalidity of input fields. Always detected before any
    /// store access.
    #[error("Bad Request")]
    BadArguments,

    /// Uniqueness conflict on id or email. Detected only after structural
    /// validation passes.
    #[error("Already exists")]
    AlreadyExists,

    /// Referenced id has no corresponding record.
    #[error("Entity not found")]
    NotFound,

    /// Infrastructure failure surfaced by the store.
    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            // A unique constraint trip means a concurrent writer won the
            // insert race after our pre-checks passed.
            RepositoryError::ConstraintViolation(_) => ServiceError::AlreadyExists,
            other => ServiceError::Repository(other),
        }
    }
}
