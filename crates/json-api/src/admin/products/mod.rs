//! Admin Products

pub(crate) mod create;
