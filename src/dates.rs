//! Short numeric dates → spoken form.
//!
//! `12/06/25` is read as month/day/two-digit-year and rendered as
//! `December 06, 2025`. Two-digit years are placed with a fixed pivot:
//! years below the pivot land in the 2000s, the rest in the 1900s. The
//! default pivot of 69 covers 1969–2068.

use chrono::NaiveDate;

use crate::error::{NormalizeError, Result};

/// Default two-digit-year pivot (1969–2068).
pub const DEFAULT_CENTURY_PIVOT: u8 = 69;

/// Expand a two-digit year using `pivot`.
pub fn expand_two_digit_year(yy: u32, pivot: u8) -> i32 {
    let yy = (yy % 100) as i32;
    if yy < i32::from(pivot) {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Parse an `MM/DD/YY` or `MM-DD-YY` token into a calendar date.
///
/// Either delimiter is accepted in either position.
pub fn parse_date_token(token: &str, pivot: u8) -> Result<NaiveDate> {
    let invalid = || NormalizeError::InvalidDate { token: token.to_string() };

    let mut fields = token.split(['/', '-']);
    let mut next_field = || -> Result<u32> {
        let field = fields.next().ok_or_else(invalid)?;
        if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        field.parse().map_err(|_| invalid())
    };
    let month = next_field()?;
    let day = next_field()?;
    let yy = next_field()?;
    if fields.next().is_some() {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(expand_two_digit_year(yy, pivot), month, day).ok_or_else(invalid)
}

/// Render a date the way it should be spoken: `Month DD, YYYY`.
pub fn format_spoken(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
