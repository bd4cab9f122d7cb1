//! Extension traits

mod customer;
mod dates;
mod depot;
mod result;

pub(crate) use customer::{CustomerClaims, CustomerExt as _};
pub(crate) use dates::parse_stay;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
