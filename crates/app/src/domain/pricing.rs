//! Line Pricing

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("amount overflows the supported range")]
    Overflow,
}

/// Total for a single line: `unit_price × nights × quantity`.
///
/// Product lines pass one night.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the product does not fit in a `u64`.
pub fn line_total(unit_price: u64, nights: u32, quantity: u32) -> Result<u64, PricingError> {
    unit_price
        .checked_mul(u64::from(nights))
        .and_then(|amount| amount.checked_mul(u64::from(quantity)))
        .ok_or(PricingError::Overflow)
}

/// Sum line totals into an order total.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the sum does not fit in a `u64`.
pub fn sum_totals<I>(totals: I) -> Result<u64, PricingError>
where
    I: IntoIterator<Item = u64>,
{
    totals
        .into_iter()
        .try_fold(0_u64, u64::checked_add)
        .ok_or(PricingError::Overflow)
}
