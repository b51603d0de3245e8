use chrono::Days;
use proptest::prelude::*;

use jalaliholiday::{HolidayDistanceCalculator, JalaliDate, JalaliWeekday};

fn jd(y: i32, m: u32, d: u32) -> JalaliDate {
    JalaliDate::new(y, m, d).unwrap()
}

fn shifted(day: JalaliDate, offset: i64) -> JalaliDate {
    if offset >= 0 {
        day + Days::new(offset as u64)
    } else {
        day - Days::new((-offset) as u64)
    }
}

fn any_date() -> impl Strategy<Value = JalaliDate> {
    (1390i32..1410, 1u32..=12, 1u32..=29).prop_map(|(y, m, d)| jd(y, m, d))
}

#[test]
fn duplicate_past_holidays_scenario() {
    let day = jd(1403, 2, 10);
    let holidays = vec![shifted(day, 3), shifted(day, -2), shifted(day, 10), shifted(day, -2)];
    let calc = HolidayDistanceCalculator::new(&holidays, day, true);
    assert_eq!(calc.distances(), &[-2, -2, 3, 10]);
    assert_eq!(calc.next_n_holidays(1), vec![3]);
    assert_eq!(calc.previous_n_holidays(2, true), vec![2, 2]);
}

#[test]
fn empty_list_scenario() {
    let calc = HolidayDistanceCalculator::new(Vec::<JalaliDate>::new(), jd(1403, 2, 10), true);
    assert!(calc.distances().is_empty());
    assert_eq!(calc.count_holidays_this_week(), 0);
}

#[test]
fn seven_days_after_week_start_is_next_week() {
    let day = jd(1403, 2, 10);
    let start = day.start_of_week().unwrap();
    let calc = HolidayDistanceCalculator::new([shifted(start, 7)], day, true);
    assert!(calc.holidays_this_week().is_empty());

    let calc = HolidayDistanceCalculator::new([shifted(start, 6)], day, true);
    assert_eq!(calc.holidays_this_week(), vec![6]);
}

#[test]
fn requesting_more_than_available_is_not_an_error() {
    let day = jd(1403, 2, 10);
    let calc = HolidayDistanceCalculator::new([shifted(day, 5), shifted(day, -5)], day, true);
    assert_eq!(calc.next_n_holidays(10), vec![5]);
    assert_eq!(calc.previous_n_holidays(10, true), vec![5]);
}

#[test]
fn distances_cross_the_year_boundary() {
    let day = jd(1402, 12, 25);
    let calc = HolidayDistanceCalculator::new([jd(1403, 1, 1), jd(1402, 11, 22)], day, true);
    assert_eq!(calc.next_n_holidays(1), vec![5]);
    assert_eq!(calc.previous_n_holidays(1, true), vec![33]);
}

proptest! {
    #[test]
    fn distances_align_with_sorted_holidays(
        day in any_date(),
        offsets in prop::collection::vec(-400i64..400, 0..60),
        include_weekend in any::<bool>()
    ) {
        let holidays: Vec<JalaliDate> = offsets.iter().map(|&o| shifted(day, o)).collect();
        let calc = HolidayDistanceCalculator::new(&holidays, day, include_weekend);

        prop_assert_eq!(calc.distances().len(), calc.holidays().len());
        prop_assert!(calc.holidays().windows(2).all(|w| w[0] <= w[1]));
        for (h, d) in calc.holidays().iter().zip(calc.distances()) {
            prop_assert_eq!(*h - day, *d);
        }

        let expected = if include_weekend {
            holidays.len()
        } else {
            holidays.iter().filter(|h| !h.weekday().is_weekend()).count()
        };
        prop_assert_eq!(calc.holidays().len(), expected);
        if !include_weekend {
            prop_assert!(calc.holidays().iter().all(|h| h.weekday() != JalaliWeekday::Thursday && h.weekday() != JalaliWeekday::Friday));
        }
    }

    #[test]
    fn next_and_previous_respect_sign_and_order(
        day in any_date(),
        offsets in prop::collection::vec(-100i64..100, 0..40),
        n in 0usize..10
    ) {
        let holidays: Vec<JalaliDate> = offsets.iter().map(|&o| shifted(day, o)).collect();
        let calc = HolidayDistanceCalculator::new(&holidays, day, true);

        let next = calc.next_n_holidays(n);
        prop_assert!(next.len() <= n);
        prop_assert!(next.iter().all(|&d| d > 0));
        prop_assert!(next.windows(2).all(|w| w[0] <= w[1]));
        let future = offsets.iter().filter(|&&o| o > 0).count();
        prop_assert_eq!(next.len(), n.min(future));

        let previous = calc.previous_n_holidays(n, true);
        prop_assert!(previous.len() <= n);
        prop_assert!(previous.iter().all(|&d| d >= 0));
        prop_assert!(previous.windows(2).all(|w| w[0] <= w[1]));

        let raw = calc.previous_n_holidays(n, false);
        prop_assert!(raw.iter().all(|&d| d <= 0));
        prop_assert_eq!(raw.iter().map(|d| -d).collect::<Vec<_>>(), previous);
    }

    #[test]
    fn this_week_is_within_seven_days_of_week_start(
        day in any_date(),
        offsets in prop::collection::vec(-20i64..20, 0..30)
    ) {
        let holidays: Vec<JalaliDate> = offsets.iter().map(|&o| shifted(day, o)).collect();
        let calc = HolidayDistanceCalculator::new(&holidays, day, true);
        let start = calc.week_start().unwrap();

        prop_assert_eq!(start.weekday(), JalaliWeekday::Saturday);
        prop_assert!(day - start >= 0 && day - start < 7);

        let this_week = calc.holidays_this_week();
        prop_assert!(this_week.iter().all(|d| (0..7).contains(d)));
        let expected = holidays.iter().filter(|h| (0..7).contains(&(**h - start))).count();
        prop_assert_eq!(this_week.len(), expected);
        prop_assert_eq!(calc.count_holidays_this_week(), expected);
    }
}
