//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::{pricing::PricingError, storage::StorageFailure};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart line already exists")]
    AlreadyExists,

    #[error("cart line not found")]
    NotFound,

    /// The room or product does not exist or is not listed.
    #[error("item not found")]
    ItemNotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
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

impl From<PricingError> for CartsServiceError {
    fn from(_: PricingError) -> Self {
        Self::InvalidData
    }
}
