//! Rooms service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::storage::StorageFailure;

#[derive(Debug, Error)]
pub enum RoomsServiceError {
    #[error("room number already exists")]
    AlreadyExists,

    #[error("room not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for RoomsServiceError {
    fn from(error: Error) -> Self {
        match StorageFailure::of(&error) {
            StorageFailure::RowNotFound => Self::NotFound,
            StorageFailure::Duplicate => Self::AlreadyExists,
            StorageFailure::DanglingReference => Self::InvalidReference,
            StorageFailure::MissingValue => Self::MissingRequiredData,
            StorageFailure::RejectedValue => Self::InvalidData,
            StorageFailure::Other => Self::Sql(error),
        }
    }
}
