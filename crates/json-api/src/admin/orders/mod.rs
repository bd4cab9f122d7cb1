//! Admin Orders

pub(crate) mod index;
pub(crate) mod update;
