pub mod configuration;

pub mod digits;

pub mod holiday {
    pub mod holidayerror;
    pub mod monthname;
    pub mod dayrecord;
    pub mod holidaylist;
    pub mod holidayextractor;
    pub mod holidaydistancecalculator;
}

#[cfg(feature = "html")]
pub mod source {
    pub mod calendarpage;
}

pub mod time {
    pub mod utility;
    pub mod jalaliweekday;
    pub mod jalalidate;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod newyearholiday;
        pub mod weeklyrestholiday;
    }
}

pub use configuration::{
    Configuration,
    ConfigurationError,
    DistanceOptions,
    ExtractionOptions
};
pub use holiday::dayrecord::{DayRecord, MonthYear};
pub use holiday::holidaydistancecalculator::HolidayDistanceCalculator;
pub use holiday::holidayerror::HolidayError;
pub use holiday::holidayextractor::HolidayExtractor;
pub use holiday::holidaylist::HolidayList;
pub use time::jalalidate::{JalaliDate, JalaliDateError};
pub use time::jalaliweekday::JalaliWeekday;
