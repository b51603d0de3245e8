use chrono::Days;

use crate::time::jalalidate::JalaliDate;

pub struct RangeOfDates {
    start_date: JalaliDate,
    end_date: JalaliDate
}

impl RangeOfDates {
    pub fn new(d1: JalaliDate, d2: JalaliDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> JalaliDate {
        self.start_date
    }

    pub fn end_date(&self) -> JalaliDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date) + 1) as usize
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<JalaliDate> {
        self.iter().collect()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = JalaliDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start_date.checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }
}
