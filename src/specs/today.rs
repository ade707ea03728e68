// src/specs/today.rs
//! "Today" summary: one row per calendar, each with a human-readable date
//! (`"چهارشنبه - ۹ آبان ۱۳۹۷"`) and a numeral date (`"1397/8/9"`).
//!
//! The two strings overlap on day and month. Numeric fields and the season are
//! taken from the numeral string; the human string only supplies weekday and
//! month name.

use scraper::{ElementRef, Html};

use crate::config::consts::{
    DATE_NUMERAL, DATE_TEXT, TODAY_DATE, TODAY_GREGORIAN_ROW, TODAY_ROWS, TODAY_SOLAR_ROW,
};
use crate::core::dom::{find, own_text, Query};
use crate::data::{CalendarKind, Date, TodayDates};
use crate::error::ExtractError;
use crate::numerals::{transform_date, transform_numerical_date};

pub fn extract_today_dates(doc: &Html) -> Result<TodayDates, ExtractError> {
    let top = super::top_wrapper(doc)?;
    let wrapper = find(top, &Query::tag("div").class_has(TODAY_DATE))?;
    let rows = find(wrapper, &Query::tag("div").class_is(TODAY_ROWS))?;
    Ok(TodayDates {
        solar: extract_date(rows, CalendarKind::Solar)?,
        gregorian: extract_date(rows, CalendarKind::Gregorian)?,
    })
}

fn row_class(kind: CalendarKind) -> &'static str {
    match kind {
        CalendarKind::Solar => TODAY_SOLAR_ROW,
        CalendarKind::Gregorian => TODAY_GREGORIAN_ROW,
    }
}

fn extract_date(rows: ElementRef<'_>, kind: CalendarKind) -> Result<Date, ExtractError> {
    let row = find(rows, &Query::tag("div").class_has(row_class(kind)))?;
    let human = own_text(find(row, &Query::tag("span").class_is(DATE_TEXT))?)?;
    let numeral = own_text(find(row, &Query::tag("span").class_is(DATE_NUMERAL))?)?;
    date_from_texts(&human, &numeral, kind)
}

/// Combine the two texts of one row into a `Date`. The season follows the row's
/// calendar, whatever separator the numeral uses.
pub fn date_from_texts(human: &str, numeral: &str, kind: CalendarKind) -> Result<Date, ExtractError> {
    let (weekday, (_, month_name, _)) = transform_date(human)?;
    let (year, (season_name, season), month, day) = transform_numerical_date(numeral, Some(kind))?;
    Ok(Date {
        year,
        season: s!(season),
        season_name: s!(season_name),
        month,
        month_name,
        day,
        weekday,
    })
}
