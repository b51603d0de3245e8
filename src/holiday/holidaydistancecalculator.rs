use crate::configuration::DistanceOptions;
use crate::time::jalalidate::JalaliDate;

/// Day distances between a fixed reference day and a set of holidays.
///
/// The holidays are copied and sorted at construction. Distances are index
/// aligned with [`holidays`](Self::holidays): `distances()[i]` is
/// `holidays()[i] - reference_day()`.
#[derive(Debug, Clone)]
pub struct HolidayDistanceCalculator {
    holidays: Vec<JalaliDate>,
    reference_day: JalaliDate,
    include_weekend: bool,
    distances: Vec<i64>
}

impl HolidayDistanceCalculator {
    /// Duplicate dates are kept. When `include_weekend` is false, holidays
    /// on Thursday or Friday are dropped from the sorted list before the
    /// distances are computed.
    pub fn new(holidays: impl AsRef<[JalaliDate]>,
               reference_day: JalaliDate,
               include_weekend: bool) -> HolidayDistanceCalculator {
        let mut sorted = holidays.as_ref().to_vec();
        sorted.sort();
        if !include_weekend {
            sorted.retain(|d| !d.weekday().is_weekend());
        }

        let distances = Self::distances_between(&sorted, reference_day);
        tracing::debug!(
            holidays = sorted.len(),
            reference_day = %reference_day,
            include_weekend,
            "built holiday distance series"
        );

        HolidayDistanceCalculator {
            holidays: sorted,
            reference_day,
            include_weekend,
            distances
        }
    }

    pub fn with_options(holidays: impl AsRef<[JalaliDate]>,
                        reference_day: JalaliDate,
                        options: &DistanceOptions) -> HolidayDistanceCalculator {
        HolidayDistanceCalculator::new(holidays, reference_day, options.include_weekend)
    }

    pub fn holidays(&self) -> &[JalaliDate] {
        &self.holidays
    }

    pub fn reference_day(&self) -> JalaliDate {
        self.reference_day
    }

    pub fn include_weekend(&self) -> bool {
        self.include_weekend
    }

    pub fn distances(&self) -> &[i64] {
        &self.distances
    }

    /// Distances from an arbitrary day, aligned with `holidays()`.
    pub fn distances_from(&self, day: JalaliDate) -> Vec<i64> {
        Self::distances_between(&self.holidays, day)
    }

    /// The `n` nearest future holidays, nearest first. Today is not
    /// included.
    pub fn next_n_holidays(&self, n: usize) -> Vec<i64> {
        let mut upcoming: Vec<i64> = self.distances
            .iter()
            .copied()
            .filter(|&d| d > 0)
            .collect();
        upcoming.sort_unstable();
        upcoming.truncate(n);
        upcoming
    }

    /// The `n` nearest past holidays, today included, nearest first.
    ///
    /// With `absolute_return` the values are "days ago" counts (non-negative),
    /// otherwise the raw non-positive distances.
    pub fn previous_n_holidays(&self, n: usize, absolute_return: bool) -> Vec<i64> {
        let mut past: Vec<i64> = self.distances
            .iter()
            .copied()
            .filter(|&d| d <= 0)
            .collect();
        past.sort_unstable_by(|a, b| b.cmp(a));
        past.truncate(n);
        if absolute_return {
            past.iter_mut().for_each(|d| *d = -*d);
        }
        past
    }

    /// Saturday of the reference day's week. `None` only in the first days
    /// of year 1, whose Saturday is out of range.
    pub fn week_start(&self) -> Option<JalaliDate> {
        self.reference_day.start_of_week()
    }

    /// Offsets from the Saturday of the reference week of the holidays
    /// falling in that week, in holiday order.
    pub fn holidays_this_week(&self) -> Vec<i64> {
        let shift = self.reference_day.weekday().index() as i64;
        self.distances
            .iter()
            .map(|&d| d + shift)
            .filter(|d| (0..7).contains(d))
            .collect()
    }

    pub fn count_holidays_this_week(&self) -> usize {
        self.holidays_this_week().len()
    }

    fn distances_between(holidays: &[JalaliDate], day: JalaliDate) -> Vec<i64> {
        holidays.iter().map(|&h| h - day).collect()
    }
}
