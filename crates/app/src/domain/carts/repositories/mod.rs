//! Cart Repositories

mod catalog;
mod lines;

pub(crate) use catalog::PgCartCatalogRepository;
pub(crate) use lines::{PgCartLinesRepository, PricedLineRow};
