//! Reads the day cells of a rendered Jalali year calendar.
//!
//! Expected markup, per month:
//!
//! ```text
//! <div>                                   month block
//!   <a class="jalali">فروردین ۱۴۰۲</a>     month / year header
//!   <div>                                 grid
//!     <div>                               week row
//!       <div class="... [disabled]">      day cell
//!         <div class="holiday">
//!           <div class="jalali">۱</div>
//! ```
//!
//! Only `div.holiday` cells are read. A cell whose parent carries the
//! `disabled` class belongs to a neighbouring month and is reported with
//! `is_holiday == false`, or skipped when its day or header cannot be read.

use std::sync::LazyLock;

use scraper::{
    ElementRef,
    Html,
    Selector
};

use crate::holiday::dayrecord::DayRecord;
use crate::holiday::holidayerror::HolidayError;

static HOLIDAY_CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.holiday").expect("static selector"));
static DAY_NUMBER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.jalali").expect("static selector"));
static MONTH_HEADER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.jalali").expect("static selector"));

/// Ancestor of a holiday cell that holds the month header, counted from the
/// cell's parent.
const MONTH_BLOCK_DEPTH: usize = 3;

const DISABLED_CLASS: &str = "disabled";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("holiday cell #{index} has no {node}")]
    MissingNode {
        index: usize,
        node: &'static str
    },

    #[error("holiday cell #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: HolidayError
    }
}

/// Parses the holiday cells of `html` into `DayRecord`s, in document order.
///
/// Only enabled cells must be well-formed.
pub fn parse_calendar_page(html: &str) -> Result<Vec<DayRecord>, SourceError> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();
    for (index, cell) in document.select(&HOLIDAY_CELL).enumerate() {
        if let Some(record) = parse_holiday_cell(index, cell)? {
            records.push(record);
        }
    }
    tracing::debug!(cells = records.len(), "parsed calendar page");
    Ok(records)
}

fn parse_holiday_cell(index: usize, cell: ElementRef<'_>) -> Result<Option<DayRecord>, SourceError> {
    let is_holiday = !is_disabled(cell);
    match read_holiday_cell(index, cell, is_holiday) {
        Ok(record) => Ok(Some(record)),
        Err(err) if !is_holiday => {
            tracing::trace!(index, error = %err, "skipping unreadable disabled cell");
            Ok(None)
        },
        Err(err) => Err(err)
    }
}

fn read_holiday_cell(index: usize, cell: ElementRef<'_>, is_holiday: bool) -> Result<DayRecord, SourceError> {
    let day_text = cell
        .select(&DAY_NUMBER)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or(SourceError::MissingNode { index, node: "day number" })?;

    let month_year_text = cell
        .ancestors()
        .nth(MONTH_BLOCK_DEPTH)
        .and_then(ElementRef::wrap)
        .and_then(|block| block.select(&MONTH_HEADER).next())
        .map(|e| e.text().collect::<String>())
        .ok_or(SourceError::MissingNode { index, node: "month header" })?;

    DayRecord::from_text(&month_year_text, &day_text, is_holiday)
        .map_err(|source| SourceError::Record { index, source })
}

fn is_disabled(cell: ElementRef<'_>) -> bool {
    cell.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().classes().any(|c| c == DISABLED_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month_block(header: &str, cells: &[(&str, bool)]) -> String {
        let cells: String = cells
            .iter()
            .map(|(day, disabled)| {
                let class = if *disabled { "day disabled" } else { "day" };
                format!(r#"<div class="{}"><div class="holiday"><div class="jalali">{}</div></div></div>"#, class, day)
            })
            .collect();
        format!(
            r#"<div class="month"><div class="header"><a class="jalali">{}</a></div><div class="grid"><div class="week">{}</div></div></div>"#,
            header, cells
        )
    }

    #[test]
    fn reads_enabled_and_disabled_cells() {
        let html = month_block("فروردین ۱۴۰۲", &[("۱", false), ("۱۳", false), ("۲۹", true)]);
        let records = parse_calendar_page(&html).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], DayRecord::new("فروردین", 1, 1402, true));
        assert_eq!(records[1], DayRecord::new("فروردین", 13, 1402, true));
        assert!(!records[2].is_holiday());
    }

    #[test]
    fn each_cell_takes_its_own_month_header() {
        let html = format!(
            "{}{}",
            month_block("فروردین ۱۴۰۲", &[("۱", false)]),
            month_block("خرداد ۱۴۰۲", &[("۱۴", false)])
        );
        let records = parse_calendar_page(&html).unwrap();
        assert_eq!(records[0].month_name(), "فروردین");
        assert_eq!(records[1].month_name(), "خرداد");
        assert_eq!(records[1].day(), 14);
    }

    #[test]
    fn page_without_holidays_is_empty() {
        assert!(parse_calendar_page("<html><body><p>nothing</p></body></html>").unwrap().is_empty());
    }

    #[test]
    fn missing_day_number_is_reported() {
        let html = r#"<div><div><div><div class="day"><div class="holiday"></div></div></div></div></div>"#;
        let err = parse_calendar_page(html).unwrap_err();
        assert_eq!(err, SourceError::MissingNode { index: 0, node: "day number" });
    }

    #[test]
    fn missing_month_header_is_reported() {
        let html = r#"<div class="day"><div class="holiday"><div class="jalali">۱</div></div></div>"#;
        let err = parse_calendar_page(html).unwrap_err();
        assert_eq!(err, SourceError::MissingNode { index: 0, node: "month header" });
    }

    #[test]
    fn unreadable_disabled_cell_is_skipped() {
        let html = month_block("فروردین ۱۴۰۲", &[("x", true), ("۲", false), ("", true)]);
        let records = parse_calendar_page(&html).unwrap();
        assert_eq!(records, vec![DayRecord::new("فروردین", 2, 1402, true)]);
    }

    #[test]
    fn malformed_day_text_is_reported() {
        let html = month_block("فروردین ۱۴۰۲", &[("x", false)]);
        let err = parse_calendar_page(&html).unwrap_err();
        assert!(matches!(err, SourceError::Record { index: 0, source: HolidayError::MalformedRecord(_) }));
    }
}
