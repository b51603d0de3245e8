use crate::time::jalalidate::JalaliDate;
use crate::time::rangeofdates::RangeOfDates;

use super::recurringholiday::RecurringHoliday;

/// Length of the Nowruz break, 1 to 13 Farvardin.
pub const NOWRUZ_SPAN: u32 = 13;

/// The first `span_days` days of Farvardin.
#[derive(Clone)]
pub struct NewYearHoliday {
    span_days: u32
}

impl NewYearHoliday {
    /// Returns `None` unless the span fits inside Farvardin.
    pub fn new(span_days: u32) -> Option<NewYearHoliday> {
        if !(1..=31).contains(&span_days) {
            None
        } else {
            Some(NewYearHoliday { span_days })
        }
    }

    pub fn span_days(&self) -> u32 {
        self.span_days
    }
}

impl Default for NewYearHoliday {
    fn default() -> Self {
        NewYearHoliday { span_days: NOWRUZ_SPAN }
    }
}

impl RecurringHoliday for NewYearHoliday {
    fn get_holiday(&self, year: i32) -> Vec<JalaliDate> {
        match (JalaliDate::new(year, 1, 1), JalaliDate::new(year, 1, self.span_days)) {
            (Ok(first), Ok(last)) => RangeOfDates::new(first, last).to_vec(),
            _ => Vec::new()
        }
    }
}
