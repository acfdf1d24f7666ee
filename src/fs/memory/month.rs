//! Calendar month keys naming the monthly log files.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a `YYYY-MM` month key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("invalid month '{0}' (expected YYYY-MM)")]
    Format(String),
    #[error("invalid month '{0}' (month must be between 01 and 12)")]
    OutOfRange(String),
}

/// A calendar month, displayed and parsed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// File name of this month's log, e.g. `memory-log-2025-06.md`.
    pub fn log_file_name(&self) -> String {
        format!("memory-log-{self}.md")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || MonthKeyError::Format(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(format_err)?;
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(year, 4) || !all_digits(month, 2) {
            return Err(format_err());
        }

        let year: i32 = year.parse().map_err(|_| format_err())?;
        let month: u32 = month.parse().map_err(|_| format_err())?;
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::OutOfRange(s.to_string()));
        }

        Ok(Self { year, month })
    }
}
