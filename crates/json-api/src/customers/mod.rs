//! Customer identity

pub(crate) mod middleware;
