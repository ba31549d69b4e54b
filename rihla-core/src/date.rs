use chrono::NaiveDate;
use crate::query::ParseFailure;

/// Zero-pad day and month of a `D[D]/M[M]/YYYY` string to `DD/MM/YYYY`.
/// The year is passed through unchanged.
pub fn correct_date(raw: &str) -> String {
    let mut parts = raw.splitn(3, '/');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();
    format!("{:0>2}/{:0>2}/{}", day, month, year)
}

/// Build the calendar day named by a corrected `DD/MM/YYYY` string.
/// Nonexistent days (31 April, month 13, day 0) yield `None` instead of
/// rolling over into the next month.
pub fn calendar_date(corrected: &str) -> Option<NaiveDate> {
    let mut parts = corrected.splitn(3, '/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validate a corrected date against `today` (the local calendar day).
pub fn validate_travel_date(corrected: &str, today: NaiveDate) -> Result<NaiveDate, ParseFailure> {
    let date = calendar_date(corrected).ok_or(ParseFailure::Malformed)?;
    if date < today {
        return Err(ParseFailure::PastDate);
    }
    Ok(date)
}
