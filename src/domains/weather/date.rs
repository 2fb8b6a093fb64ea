//! Date parameter validation.

use chrono::NaiveDate;

use super::error::{WeatherError, WeatherResult};

/// Ensure `dt` is a calendar date in strict `YYYY-MM-DD` form.
///
/// The shape is checked first (4-digit year, 2-digit month and day) since
/// chrono alone accepts unpadded fields; chrono then rejects impossible
/// dates such as `2023-02-29`.
pub fn validate_date(dt: &str) -> WeatherResult<()> {
    let bytes = dt.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if shape_ok && NaiveDate::parse_from_str(dt, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(WeatherError::invalid_argument(format!(
            "Invalid date: {dt}. Use YYYY-MM-DD."
        )))
    }
}
