//! Room Handlers

pub(crate) mod availability;
pub(crate) mod get;
pub(crate) mod index;
