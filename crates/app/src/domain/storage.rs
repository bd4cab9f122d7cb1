//! Storage failure classification shared by the service error types.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};

/// `numeric_value_out_of_range`, raised when arithmetic overflows a column type.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// What a failed statement means for the caller, independent of which
/// service ran it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageFailure {
    /// A `fetch_one` matched nothing.
    RowNotFound,

    /// Unique constraint violated.
    Duplicate,

    /// Foreign key points nowhere.
    DanglingReference,

    /// Not-null constraint violated.
    MissingValue,

    /// Check constraint violated or a value does not fit its column.
    RejectedValue,

    /// Connection, timeout, decode or anything else.
    Other,
}

impl StorageFailure {
    pub(crate) fn of(error: &Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::RowNotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Other;
        };

        match database_error.kind() {
            ErrorKind::UniqueViolation => Self::Duplicate,
            ErrorKind::ForeignKeyViolation => Self::DanglingReference,
            ErrorKind::NotNullViolation => Self::MissingValue,
            ErrorKind::CheckViolation => Self::RejectedValue,
            ErrorKind::Other | _ if is_out_of_range(database_error) => Self::RejectedValue,
            ErrorKind::Other | _ => Self::Other,
        }
    }
}

fn is_out_of_range(error: &dyn DatabaseError) -> bool {
    error
        .code()
        .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE)
}
