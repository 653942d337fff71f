//! Birth-date numbers and personal cycles.
//!
//! Birth dates are kept as plain day/month/year numbers instead of a
//! calendar type: the arithmetic only needs digits, and dates that do not
//! exist on a real calendar (31 February) are still accepted.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{NumerologyError, NumerologyResult};
use crate::reduce::{ReductionResult, reduce, reduce_number};

/// A birth date. Only the basic field ranges are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    /// Day of month (1-31).
    pub day: u32,
    /// Month (1-12).
    pub month: u32,
    /// Year. Negative years contribute their absolute value.
    pub year: i32,
}

impl BirthDate {
    /// Create a birth date, checking `day` is 1-31 and `month` is 1-12.
    pub fn new(year: i32, month: u32, day: u32) -> NumerologyResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(NumerologyError::InvalidInput(format!(
                "month {month} is outside 1-12"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(NumerologyError::InvalidInput(format!(
                "day {day} is outside 1-31"
            )));
        }
        Ok(Self { day, month, year })
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> NumerologyResult<Self> {
        let invalid = || NumerologyError::InvalidInput(format!("expected YYYY-MM-DD, got {s:?}"));

        let mut parts = s.trim().rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;

        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Self::new(year, month, day)
    }

    fn year_digits(&self) -> u32 {
        self.year.unsigned_abs()
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Life Path: day, month and year reduced separately, then their sum reduced.
///
/// Karmic-debt tracking is on for all four reductions; the merged list keeps
/// first-occurrence order without duplicates.
pub fn life_path(birth: &BirthDate) -> ReductionResult {
    let parts = [
        reduce_number(birth.day, true),
        reduce_number(birth.month, true),
        reduce_number(birth.year_digits(), true),
    ];
    let total = reduce_number(parts.iter().map(|p| p.final_value).sum(), true);

    let mut karmic: Vec<u32> = Vec::new();
    for n in parts
        .iter()
        .chain(std::iter::once(&total))
        .flat_map(|p| p.karmic_debt_numbers.iter().copied())
    {
        if !karmic.contains(&n) {
            karmic.push(n);
        }
    }

    ReductionResult {
        karmic_debt_numbers: karmic,
        ..total
    }
}

/// Birthday number: the day of month alone.
pub fn birthday_number(birth: &BirthDate) -> u32 {
    reduce(birth.day)
}

/// Personal year, month and day for a given current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCycle {
    /// reduce(birth day + birth month + current year).
    pub year: u32,
    /// reduce(personal year + current month).
    pub month: u32,
    /// reduce(personal month + current day).
    pub day: u32,
}

/// Compute the personal cycle of `birth` on the date `now`.
pub fn personal_cycle(birth: &BirthDate, now: NaiveDate) -> PersonalCycle {
    let year = reduce(
        birth
            .day
            .saturating_add(birth.month)
            .saturating_add(now.year().unsigned_abs()),
    );
    let month = reduce(year + now.month());
    let day = reduce(month + now.day());
    PersonalCycle { year, month, day }
}
