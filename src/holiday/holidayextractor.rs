use std::collections::HashSet;

use crate::configuration::ExtractionOptions;
use crate::time::jalalidate::JalaliDate;
use crate::time::jalaliweekday::JalaliWeekday;
use crate::time::recurringholiday::newyearholiday::NewYearHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weeklyrestholiday::WeeklyRestHoliday;

use super::dayrecord::DayRecord;
use super::holidayerror::HolidayError;
use super::holidaylist::HolidayList;
use super::monthname::month_number;

/// Turns the day cells of a calendar page into holiday dates.
///
/// The new-year span and the weekly rest day are synthesized for the year of
/// the first holiday found on the page.
#[derive(Clone)]
pub struct HolidayExtractor {
    new_year: NewYearHoliday,
    weekly_rest: WeeklyRestHoliday
}

impl Default for HolidayExtractor {
    fn default() -> Self {
        HolidayExtractor {
            new_year: NewYearHoliday::default(),
            weekly_rest: WeeklyRestHoliday::new(JalaliWeekday::Thursday)
        }
    }
}

impl HolidayExtractor {
    pub fn new(new_year: NewYearHoliday, weekly_rest: WeeklyRestHoliday) -> HolidayExtractor {
        HolidayExtractor { new_year, weekly_rest }
    }

    pub fn from_options(options: &ExtractionOptions) -> Result<HolidayExtractor, HolidayError> {
        let new_year = NewYearHoliday::new(options.new_year_span)
            .ok_or(HolidayError::InvalidNewYearSpan(options.new_year_span))?;
        Ok(HolidayExtractor::new(new_year, WeeklyRestHoliday::new(options.weekly_rest_day)))
    }

    pub fn new_year(&self) -> &NewYearHoliday {
        &self.new_year
    }

    pub fn weekly_rest(&self) -> &WeeklyRestHoliday {
        &self.weekly_rest
    }

    /// Collects the holiday cells of `records` in page order, then appends
    /// the requested synthesized holidays that are not already present.
    ///
    /// The result is not sorted.
    ///
    /// # Errors
    /// - `UnknownMonthName` when a holiday cell names a month outside the table.
    /// - `InvalidDate` when a holiday cell does not form a valid date.
    /// - `NoHolidayExtracted` when an augmentation is requested but no cell
    ///   was a holiday.
    pub fn extract<'a, I>(&self,
                          records: I,
                          include_new_year: bool,
                          include_weekly_rest: bool) -> Result<HolidayList, HolidayError>
        where I: IntoIterator<Item = &'a DayRecord> {
        let mut holidays = HolidayList::new();
        let mut skipped = 0usize;

        for record in records {
            if !record.is_holiday() {
                tracing::trace!(day = record.day(), month = record.month_name(), "skipping disabled cell");
                skipped += 1;
                continue;
            }
            holidays.push(Self::resolve(record)?);
        }

        tracing::debug!(extracted = holidays.len(), skipped, "collected holidays from day records");

        if include_new_year || include_weekly_rest {
            let year = holidays
                .first()
                .map(JalaliDate::year)
                .ok_or(HolidayError::NoHolidayExtracted)?;
            let mut seen: HashSet<JalaliDate> = holidays.iter().copied().collect();

            if include_new_year {
                let added = Self::append_missing(&mut holidays, &mut seen, &self.new_year, year);
                tracing::debug!(year, added, "added new-year holidays");
            }
            if include_weekly_rest {
                let added = Self::append_missing(&mut holidays, &mut seen, &self.weekly_rest, year);
                tracing::debug!(year, added, weekday = %self.weekly_rest.weekday(), "added weekly rest days");
            }
        }

        Ok(holidays)
    }

    pub fn extract_with_options<'a, I>(&self,
                                       records: I,
                                       options: &ExtractionOptions) -> Result<HolidayList, HolidayError>
        where I: IntoIterator<Item = &'a DayRecord> {
        self.extract(records, options.include_new_year, options.include_weekly_rest)
    }

    fn resolve(record: &DayRecord) -> Result<JalaliDate, HolidayError> {
        let month = match month_number(record.month_name()) {
            Some(month) => month,
            None => {
                tracing::warn!(month = record.month_name(), "unknown month name in day record");
                return Err(HolidayError::UnknownMonthName(record.month_name().to_owned()));
            }
        };
        Ok(JalaliDate::new(record.year(), month, record.day())?)
    }

    fn append_missing(holidays: &mut HolidayList,
                      seen: &mut HashSet<JalaliDate>,
                      rule: &dyn RecurringHoliday,
                      year: i32) -> usize {
        let mut added = 0;
        for d in rule.get_holiday(year) {
            if seen.insert(d) {
                holidays.push(d);
                added += 1;
            }
        }
        added
    }
}
