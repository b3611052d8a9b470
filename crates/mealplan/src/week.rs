use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::error::{PlanError, PlanResult};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Canonical key for the week containing `date`: the ISO date of the
/// Monday on or before it. Every date in one Monday-Sunday span maps to
/// the same key.
pub fn week_key(date: Date) -> String {
    let monday = date - Duration::days(date.weekday().number_days_from_monday() as i64);
    monday.format(ISO_DATE).expect("date-only format")
}

/// Week key for today (UTC).
pub fn week_key_today() -> String {
    week_key(OffsetDateTime::now_utc().date())
}

pub fn parse_date(input: &str) -> PlanResult<Date> {
    Date::parse(input, ISO_DATE).map_err(|_| PlanError::InvalidDate(input.to_string()))
}
