
/// Days from 0001-01-01 (CE) to the day before 1 Farvardin 1 AP.
pub const JALALI_EPOCH_FROM_CE: i64 = 226_894;

pub const MIN_YEAR: i32 = 1;

pub const MAX_YEAR: i32 = 9999;

/// 33-year arithmetic cycle.
#[inline]
pub const fn is_leap (year: i32) -> bool {
    (25 * year as i64 + 11).rem_euclid(33) < 8
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 31, 31, 31,
        31, 31, 30, 30, 30,
        30, 30, 29
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 31, 31, 31,
        31, 31, 30, 30, 30,
        30, 30, 30
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

#[inline]
pub const fn days_before_month (month: u32) -> u32 {
    if month <= 7 {
        31 * (month - 1)
    } else {
        30 * (month - 1) + 6
    }
}

#[inline]
pub fn leap_years_before (year: i32) -> i64 {
    assert!(year > 0);
    (8 * year as i64 + 21).div_euclid(33)
}

/// Days since 0001-01-01 (CE), counting that day as 1.
pub fn days_from_ce (year: i32, month: u32, day: u32) -> i64 {
    JALALI_EPOCH_FROM_CE
        + 365 * (year as i64 - 1)
        + leap_years_before(year)
        + days_before_month(month) as i64
        + day as i64
}

/// Inverse of `days_from_ce`. The caller guarantees the result lies in
/// `MIN_YEAR..=MAX_YEAR`.
pub fn ymd_from_days_from_ce (days: i64) -> (i32, u32, u32) {
    let mut year = (1 + (33 * (days - JALALI_EPOCH_FROM_CE - 1) + 3).div_euclid(12053)) as i32;
    while year > MIN_YEAR && days_from_ce(year, 1, 1) > days {
        year -= 1;
    }
    while days_from_ce(year + 1, 1, 1) <= days {
        year += 1;
    }

    let day_of_year = (days - days_from_ce(year, 1, 1) + 1) as u32;
    let month = if day_of_year <= 186 {
        (day_of_year + 30) / 31
    } else {
        (day_of_year - 6 + 29) / 30
    };
    let day = day_of_year - days_before_month(month);
    (year, month, day)
}
