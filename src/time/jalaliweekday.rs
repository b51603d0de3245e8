use std::fmt;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

/// Day of the Persian week. The week starts on Saturday, so the
/// discriminant is the position within the week.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum JalaliWeekday {
    #[serde(alias = "Shanbeh")]
    Saturday = 0,
    #[serde(alias = "Yekshanbeh")]
    Sunday = 1,
    #[serde(alias = "Doshanbeh")]
    Monday = 2,
    #[serde(alias = "Seshanbeh")]
    Tuesday = 3,
    #[serde(alias = "Chaharshanbeh")]
    Wednesday = 4,
    #[serde(alias = "Panjshanbeh")]
    Thursday = 5,
    #[serde(alias = "Jomeh")]
    Friday = 6
}

/// First index of the two weekend days (Thursday and Friday).
pub const WEEKEND_START_INDEX: u32 = 5;

impl JalaliWeekday {
    pub const ALL: [JalaliWeekday; 7] = [
        JalaliWeekday::Saturday,
        JalaliWeekday::Sunday,
        JalaliWeekday::Monday,
        JalaliWeekday::Tuesday,
        JalaliWeekday::Wednesday,
        JalaliWeekday::Thursday,
        JalaliWeekday::Friday
    ];

    /// Days since the start of the week (Saturday = 0).
    #[inline]
    pub fn index(&self) -> u32 {
        *self as u32
    }

    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.index() >= WEEKEND_START_INDEX
    }
}

impl From<Weekday> for JalaliWeekday {
    fn from(weekday: Weekday) -> Self {
        JalaliWeekday::ALL[((weekday.num_days_from_monday() + 2) % 7) as usize]
    }
}

impl From<JalaliWeekday> for Weekday {
    fn from(weekday: JalaliWeekday) -> Self {
        match weekday {
            JalaliWeekday::Saturday => Weekday::Sat,
            JalaliWeekday::Sunday => Weekday::Sun,
            JalaliWeekday::Monday => Weekday::Mon,
            JalaliWeekday::Tuesday => Weekday::Tue,
            JalaliWeekday::Wednesday => Weekday::Wed,
            JalaliWeekday::Thursday => Weekday::Thu,
            JalaliWeekday::Friday => Weekday::Fri
        }
    }
}

impl From<NaiveDate> for JalaliWeekday {
    fn from(d: NaiveDate) -> Self {
        JalaliWeekday::from(d.weekday())
    }
}

impl fmt::Display for JalaliWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturday_starts_the_week() {
        assert_eq!(JalaliWeekday::from(Weekday::Sat).index(), 0);
        assert_eq!(JalaliWeekday::from(Weekday::Thu).index(), 5);
        assert_eq!(JalaliWeekday::from(Weekday::Fri).index(), 6);
    }

    #[test]
    fn chrono_conversion_round_trips() {
        for weekday in JalaliWeekday::ALL {
            assert_eq!(JalaliWeekday::from(Weekday::from(weekday)), weekday);
        }
    }

    #[test]
    fn only_thursday_and_friday_are_weekend() {
        let weekend: Vec<JalaliWeekday> = JalaliWeekday::ALL
            .into_iter()
            .filter(|w| w.is_weekend())
            .collect();
        assert_eq!(weekend, vec![JalaliWeekday::Thursday, JalaliWeekday::Friday]);
    }

    #[test]
    fn deserializes_english_and_persian_names() {
        let english: JalaliWeekday = serde_json::from_str("\"Thursday\"").unwrap();
        let persian: JalaliWeekday = serde_json::from_str("\"Panjshanbeh\"").unwrap();
        assert_eq!(english, JalaliWeekday::Thursday);
        assert_eq!(persian, JalaliWeekday::Thursday);
        assert_eq!(serde_json::from_str::<JalaliWeekday>("\"Jomeh\"").unwrap(), JalaliWeekday::Friday);
        assert_eq!(serde_json::to_string(&JalaliWeekday::Saturday).unwrap(), "\"Saturday\"");
    }
}
