use serde::{
    Serialize,
    Deserialize
};

use crate::digits::parse_number;
use super::holidayerror::HolidayError;

/// Month name and year read from a calendar header such as `"فروردین ۱۴۰۲"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: String,
    pub year: i32
}

impl MonthYear {
    pub fn parse(text: &str) -> Result<MonthYear, HolidayError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        match parts.as_slice() {
            [month, year] => {
                let year = parse_number::<i32>(year).ok_or_else(|| {
                    HolidayError::MalformedRecord(format!("year '{}' in '{}'", year, text))
                })?;
                Ok(MonthYear { month: (*month).to_owned(), year })
            },
            _ => Err(HolidayError::MalformedRecord(format!("expected '<month> <year>', got '{}'", text)))
        }
    }
}

/// One cell of a rendered month grid.
///
/// `is_holiday` is false for the disabled cells a month grid shows to pad
/// the first and last week with days of the neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    month_name: String,
    day: u32,
    year: i32,
    is_holiday: bool
}

impl DayRecord {
    pub fn new(month_name: impl Into<String>, day: u32, year: i32, is_holiday: bool) -> DayRecord {
        DayRecord {
            month_name: month_name.into(),
            day,
            year,
            is_holiday
        }
    }

    /// Builds a record from the raw header and day texts of a calendar cell.
    pub fn from_text(month_year_text: &str, day_text: &str, is_holiday: bool) -> Result<DayRecord, HolidayError> {
        let month_year = MonthYear::parse(month_year_text)?;
        let day = parse_number::<u32>(day_text)
            .ok_or_else(|| HolidayError::MalformedRecord(format!("day '{}'", day_text.trim())))?;
        Ok(DayRecord::new(month_year.month, day, month_year.year, is_holiday))
    }

    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }
}
