use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند"
];

/// Name to month number. Mordad has an older spelling that maps to the same
/// month.
static MONTH_NUMBERS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    HashMap::from([
        ("فروردین", 1),
        ("اردیبهشت", 2),
        ("خرداد", 3),
        ("تیر", 4),
        ("مرداد", 5),
        ("اَمرداد", 5),
        ("شهریور", 6),
        ("مهر", 7),
        ("آبان", 8),
        ("آذر", 9),
        ("دی", 10),
        ("بهمن", 11),
        ("اسفند", 12),
    ])
});

pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NUMBERS.get(name.trim()).copied()
}
