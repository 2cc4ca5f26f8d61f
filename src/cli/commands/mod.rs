pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument.
pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn parse_optional_date(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    s.map(|d| parse_date_arg(d)).transpose()
}
