//! Column conversions shared by the repositories.
//!
//! Amounts and counts are unsigned in the domain and signed in `PostgreSQL`;
//! these helpers convert at the boundary and surface failures as sqlx errors.

use jiff::{Timestamp, civil::Date};
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{Row, postgres::PgRow};

use crate::domain::{items::ItemKind, stays::StayRange};

pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_timestamp(row: &PgRow, col: &str) -> Result<Timestamp, sqlx::Error> {
    Ok(row.try_get::<SqlxTimestamp, _>(col)?.to_jiff())
}

pub(crate) fn try_get_date(row: &PgRow, col: &str) -> Result<Option<Date>, sqlx::Error> {
    Ok(row.try_get::<Option<SqlxDate>, _>(col)?.map(SqlxDate::to_jiff))
}

/// Read a `check_in_date`/`check_out_date` pair, requiring both to be set.
pub(crate) fn try_get_stay(row: &PgRow) -> Result<StayRange, sqlx::Error> {
    let check_in = try_get_date(row, "check_in_date")?;
    let check_out = try_get_date(row, "check_out_date")?;

    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => Ok(StayRange::new(check_in, check_out)),
        (None, _) => Err(missing_column("check_in_date")),
        (Some(_), None) => Err(missing_column("check_out_date")),
    }
}

pub(crate) fn missing_column(col: &str) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: format!("`{col}` is required for this row").into(),
    }
}

pub(crate) fn amount_param(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn count_param(count: u32, col: &str) -> Result<i32, sqlx::Error> {
    i32::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn date_param(date: Date) -> SqlxDate {
    SqlxDate::from(date)
}

pub(crate) fn try_get_item_kind(row: &PgRow) -> Result<ItemKind, sqlx::Error> {
    let kind: String = row.try_get("item_kind")?;

    kind.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "item_kind".to_string(),
        source: Box::new(e),
    })
}
