//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::{
    orders::records::OrderStatus, pricing::PricingError, storage::StorageFailure,
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
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

impl From<PricingError> for OrdersServiceError {
    fn from(_: PricingError) -> Self {
        Self::InvalidData
    }
}
