use crate::time::jalalidate::JalaliDate;


pub trait RecurringHoliday: Send + Sync {

    /// Occurrences within `year`, in chronological order.
    fn get_holiday(&self, year: i32) -> Vec<JalaliDate>;

    fn is_holiday(&self, d: &JalaliDate) -> bool {
        self.get_holiday(d.year()).contains(d)
    }
}
