//! Errors raised while turning day records into holiday dates.

use crate::time::jalalidate::JalaliDateError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    /// The month name is not in the month table.
    #[error("unknown month name '{0}'")]
    UnknownMonthName(String),

    /// An augmentation needs the year of the first holiday but nothing was
    /// extracted.
    #[error("no holiday was extracted, so the reference year is undefined")]
    NoHolidayExtracted,

    /// Raw record text could not be read as numbers.
    #[error("malformed day record: {0}")]
    MalformedRecord(String),

    /// The record's year, month and day do not form a valid date.
    #[error(transparent)]
    InvalidDate(#[from] JalaliDateError),

    #[error("new-year span of {0} days does not fit in Farvardin")]
    InvalidNewYearSpan(u32)
}
