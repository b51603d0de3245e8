use std::slice::Iter;

use serde::{
    Serialize,
    Deserialize
};

use crate::time::jalalidate::JalaliDate;

/// Holidays in the order they were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayList {
    dates: Vec<JalaliDate>
}

impl HolidayList {
    pub fn new() -> HolidayList {
        HolidayList { dates: Vec::new() }
    }

    pub fn push(&mut self, d: JalaliDate) {
        self.dates.push(d);
    }

    pub fn dates(&self) -> &[JalaliDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first(&self) -> Option<&JalaliDate> {
        self.dates.first()
    }

    pub fn contains(&self, d: &JalaliDate) -> bool {
        self.dates.contains(d)
    }

    pub fn iter(&self) -> Iter<'_, JalaliDate> {
        self.dates.iter()
    }

}

impl AsRef<[JalaliDate]> for HolidayList {
    fn as_ref(&self) -> &[JalaliDate] {
        &self.dates
    }
}

impl From<Vec<JalaliDate>> for HolidayList {
    fn from(dates: Vec<JalaliDate>) -> Self {
        HolidayList { dates }
    }
}

impl FromIterator<JalaliDate> for HolidayList {
    fn from_iter<T: IntoIterator<Item = JalaliDate>>(iter: T) -> Self {
        HolidayList { dates: iter.into_iter().collect() }
    }
}

impl IntoIterator for HolidayList {
    type Item = JalaliDate;
    type IntoIter = std::vec::IntoIter<JalaliDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a HolidayList {
    type Item = &'a JalaliDate;
    type IntoIter = Iter<'a, JalaliDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd(y: i32, m: u32, d: u32) -> JalaliDate {
        JalaliDate::new(y, m, d).unwrap()
    }

    #[test]
    fn keeps_collection_order() {
        let list: HolidayList = vec![jd(1402, 3, 14), jd(1402, 1, 1), jd(1402, 3, 14)].into();
        assert_eq!(list.first(), Some(&jd(1402, 3, 14)));
        assert_eq!(list.len(), 3);
        assert!(list.contains(&jd(1402, 1, 1)));
    }

    #[test]
    fn serializes_as_plain_array() {
        let list: HolidayList = vec![jd(1402, 1, 1), jd(1402, 1, 2)].into();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["1402-01-01","1402-01-02"]"#);
        let back: HolidayList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
