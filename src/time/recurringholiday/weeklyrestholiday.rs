use chrono::Days;

use crate::time::jalalidate::JalaliDate;
use crate::time::jalaliweekday::JalaliWeekday;

use super::recurringholiday::RecurringHoliday;

const SEVEN_DAYS: Days = Days::new(7);

/// Every occurrence of one weekday in a year.
#[derive(Clone)]
pub struct WeeklyRestHoliday {
    weekday: JalaliWeekday
}

impl WeeklyRestHoliday {
    pub fn new(weekday: JalaliWeekday) -> WeeklyRestHoliday {
        WeeklyRestHoliday { weekday }
    }

    pub fn weekday(&self) -> JalaliWeekday {
        self.weekday
    }

    /// First matching day within 1..=7 Farvardin.
    pub fn first_occurrence(&self, year: i32) -> Option<JalaliDate> {
        (1..=7)
            .filter_map(|day| JalaliDate::new(year, 1, day).ok())
            .find(|d| d.weekday() == self.weekday)
    }
}

impl RecurringHoliday for WeeklyRestHoliday {
    fn get_holiday(&self, year: i32) -> Vec<JalaliDate> {
        let mut holidays = Vec::with_capacity(53);
        let mut current = self.first_occurrence(year);
        while let Some(d) = current {
            if d.year() != year {
                break;
            }
            holidays.push(d);
            current = d.checked_add_days(SEVEN_DAYS);
        }
        holidays
    }

    #[inline]
    fn is_holiday(&self, d: &JalaliDate) -> bool {
        d.weekday() == self.weekday
    }
}
