//! Stay date parsing for request bodies.

use jiff::civil::Date;
use salvo::prelude::StatusError;

use stayshop_app::domain::stays::StayRange;

use crate::extensions::*;

/// Parse `YYYY-MM-DD` check-in and check-out dates. The range is not
/// validated; inverted or empty ranges bill as one night.
pub(crate) fn parse_stay(check_in: &str, check_out: &str) -> Result<StayRange, StatusError> {
    let check_in: Date = check_in.trim().parse().or_400("invalid check_in_date")?;
    let check_out: Date = check_out.trim().parse().or_400("invalid check_out_date")?;

    Ok(StayRange::new(check_in, check_out))
}
