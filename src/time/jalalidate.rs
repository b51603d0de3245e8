use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{
    Datelike,
    Days,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::digits::normalize_digits;
use crate::time::jalaliweekday::JalaliWeekday;
use crate::time::utility::{
    days_from_ce,
    days_of_month,
    ymd_from_days_from_ce,
    MAX_YEAR,
    MIN_YEAR
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JalaliDateError {
    #[error("year {0} is outside {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),

    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),

    #[error("day {day} is invalid for {year}-{month:02}")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32
    },

    #[error("cannot parse '{0}' as a Jalali date")]
    Parse(String),

    #[error("gregorian date {0} is outside the supported Jalali range")]
    GregorianOutOfRange(NaiveDate)
}

/// A date in the Solar Hijri (Jalali) calendar.
///
/// The Gregorian equivalent is resolved once at construction, so ordering,
/// day differences, weekday lookup and day arithmetic all go through
/// `chrono::NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
    gregorian: NaiveDate
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<JalaliDate, JalaliDateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(JalaliDateError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(JalaliDateError::InvalidMonth(month));
        }
        if day == 0 || day > days_of_month(year, month) {
            return Err(JalaliDateError::InvalidDay { year, month, day });
        }

        let gregorian = i32::try_from(days_from_ce(year, month, day))
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(JalaliDateError::YearOutOfRange(year))?;

        Ok(JalaliDate { year, month, day, gregorian })
    }

    pub fn from_gregorian(d: NaiveDate) -> Result<JalaliDate, JalaliDateError> {
        let days = d.num_days_from_ce() as i64;
        if days < days_from_ce(MIN_YEAR, 1, 1) || days > days_from_ce(MAX_YEAR, 12, days_of_month(MAX_YEAR, 12)) {
            return Err(JalaliDateError::GregorianOutOfRange(d));
        }
        let (year, month, day) = ymd_from_days_from_ce(days);
        Ok(JalaliDate { year, month, day, gregorian: d })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    #[inline]
    pub fn weekday(&self) -> JalaliWeekday {
        JalaliWeekday::from(self.gregorian)
    }

    /// The Saturday on or before this date, or `None` when that Saturday
    /// falls before 1 Farvardin of year 1.
    pub fn start_of_week(&self) -> Option<JalaliDate> {
        self.checked_sub_days(Days::new(self.weekday().index() as u64))
    }

    pub fn checked_add_days(&self, days: Days) -> Option<JalaliDate> {
        self.gregorian
            .checked_add_days(days)
            .and_then(|d| JalaliDate::from_gregorian(d).ok())
    }

    pub fn checked_sub_days(&self, days: Days) -> Option<JalaliDate> {
        self.gregorian
            .checked_sub_days(days)
            .and_then(|d| JalaliDate::from_gregorian(d).ok())
    }

    pub fn succ_opt(&self) -> Option<JalaliDate> {
        self.checked_add_days(Days::new(1))
    }

    /// Signed number of days from `other` to `self`.
    #[inline]
    pub fn signed_days_since(&self, other: &JalaliDate) -> i64 {
        (self.gregorian - other.gregorian).num_days()
    }
}

impl Sub<JalaliDate> for JalaliDate {
    type Output = i64;

    fn sub(self, rhs: JalaliDate) -> i64 {
        self.signed_days_since(&rhs)
    }
}

/// # Panics
/// Panics when the result leaves the supported year range, the same way
/// `NaiveDate + Days` panics on overflow.
impl Add<Days> for JalaliDate {
    type Output = JalaliDate;

    fn add(self, days: Days) -> JalaliDate {
        self.checked_add_days(days).expect("`JalaliDate + Days` overflowed")
    }
}

/// # Panics
/// Panics when the result leaves the supported year range.
impl Sub<Days> for JalaliDate {
    type Output = JalaliDate;

    fn sub(self, days: Days) -> JalaliDate {
        self.checked_sub_days(days).expect("`JalaliDate - Days` overflowed")
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Accepts `YYYY-MM-DD` or `YYYY/MM/DD`, in ASCII or Persian digits.
impl FromStr for JalaliDate {
    type Err = JalaliDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s.trim());
        let parts: Vec<&str> = normalized.split(['-', '/']).collect();
        if parts.len() != 3 {
            return Err(JalaliDateError::Parse(s.to_owned()));
        }
        let year = parts[0].parse::<i32>().map_err(|_| JalaliDateError::Parse(s.to_owned()))?;
        let month = parts[1].parse::<u32>().map_err(|_| JalaliDateError::Parse(s.to_owned()))?;
        let day = parts[2].parse::<u32>().map_err(|_| JalaliDateError::Parse(s.to_owned()))?;
        JalaliDate::new(year, month, day)
    }
}

impl TryFrom<String> for JalaliDate {
    type Error = JalaliDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JalaliDate> for String {
    fn from(d: JalaliDate) -> String {
        d.to_string()
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = JalaliDateError;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        JalaliDate::from_gregorian(d)
    }
}
