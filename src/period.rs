//! # Reporting Period
//!
//! The inclusive calendar-date range activity is collected for. When no
//! dates are given on the command line, the period defaults to the most
//! recently completed Monday-Sunday fortnight.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// An inclusive calendar-date range, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Create a period, rejecting ranges that end before they start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if start > end {
            return Err(format!(
                "start date {} is after end date {}",
                start, end
            ));
        }
        Ok(Self { start, end })
    }

    /// The last completed Monday-Sunday fortnight relative to `today`.
    ///
    /// `end` is the most recent Sunday strictly before `today`, and
    /// `start` is thirteen days earlier, so the period covers exactly two
    /// whole Monday-start weeks.
    pub fn default_for(today: NaiveDate) -> Self {
        // number_from_monday is 1 for Monday through 7 for Sunday, so a
        // Sunday run still steps back to the previous, completed Sunday.
        let days_since_sunday = today.weekday().number_from_monday();
        let end = today - Days::new(days_since_sunday as u64);
        let start = end - Days::new(13);
        Self { start, end }
    }

    /// File stem for this period's report, e.g. `2026-08-10_to_2026-08-23`.
    pub fn file_stem(&self) -> String {
        format!("{}_to_{}", self.start, self.end)
    }

    /// File name for this period's report.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
