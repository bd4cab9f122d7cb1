//! Admin Rooms

pub(crate) mod create;
