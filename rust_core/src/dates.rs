//! Match-date normalization.
//!
//! Users phrase dates every which way ("2019-04-15", "15 April 2019",
//! "04/15/2019"); the dataset stores them as zero-padded day-month-year.
//! Parsing tries a fixed list of formats and the first hit wins. Slash dates
//! are tried month-first before day-first, matching the upstream dialog
//! manager's interpretation of US-style input. A string no format accepts is
//! an explicit error the caller must handle before filtering.

use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::error::HandlerError;

/// Canonical form of the dataset's date column.
pub const DATASET_DATE_FORMAT: &str = "%d-%m-%Y";

const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

static ORDINAL_SUFFIX: OnceLock<Option<Regex>> = OnceLock::new();

/// "15th April 2019" -> "15 April 2019"
fn strip_ordinal_suffixes(raw: &str) -> Cow<'_, str> {
    let pattern = ORDINAL_SUFFIX
        .get_or_init(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)\b").ok());
    match pattern {
        Some(re) => re.replace_all(raw, "$1"),
        None => Cow::Borrowed(raw),
    }
}

/// Parse an arbitrary human-readable date string into a calendar date.
pub fn parse_match_date(raw: &str) -> Result<NaiveDate, HandlerError> {
    let cleaned = strip_ordinal_suffixes(raw.trim());
    for format in ACCEPTED_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return Ok(date);
        }
    }
    Err(HandlerError::UnparseableDate(raw.to_string()))
}

/// Normalize to the dataset's zero-padded day-month-year form for equality
/// comparison against the date column.
pub fn normalize_match_date(raw: &str) -> Result<String, HandlerError> {
    parse_match_date(raw).map(|date| date.format(DATASET_DATE_FORMAT).to_string())
}
