// src/specs/month.rs
//! Month grid: the `dayList` container holds one cell per day (35 or 42 of them,
//! i.e. 5 or 6 full weeks starting on Saturday), separated by `<br>` markers.
//!
//! ```html
//! <div class="dayList">
//!   <div class="disabled"><div class=""><div class="jalali">۲۹</div><div class="miladi">20</div><div class="qamari">١١</div></div></div>
//!   <div class="today"><div class="holiday">…</div></div>
//!   <br/>
//! </div>
//! ```
//!
//! Output order is document order, so position `i` sits at column `i % 7`,
//! week `i / 7`.

use scraper::{ElementRef, Html};

use crate::config::consts::{
    CALENDAR_CONTAINER, CALENDAR_WRAPPER, DAY_LIST, EVENT_CALENDAR, MAIN_CALENDAR,
};
use crate::core::dom::{child_elements, find, has_class_token, own_text, Matcher, Query};
use crate::data::Day;
use crate::error::ExtractError;
use crate::numerals::transform_number;

pub fn extract_month_grid(doc: &Html) -> Result<Vec<Day>, ExtractError> {
    let day_list = find_day_list(doc)?;
    child_elements(day_list)
        .filter(|cell| cell.value().name() != "br")
        .map(parse_day)
        .collect()
}

fn find_day_list(doc: &Html) -> Result<ElementRef<'_>, ExtractError> {
    let top = super::top_wrapper(doc)?;
    let wrapper = find(top, &Query::tag("div").class_has(CALENDAR_WRAPPER))?;
    let container = find(
        wrapper,
        &Query::tag("div").attr(Matcher::Exact("id"), Matcher::Contains(CALENDAR_CONTAINER)),
    )?;
    let event = find(container, &Query::tag("div").class_is(EVENT_CALENDAR))?;
    let main = find(event, &Query::tag("div").class_is(MAIN_CALENDAR))?;
    find(main, &Query::tag("div").class_is(DAY_LIST))
}

/// Classify one grid cell.
///
/// `disabled` takes precedence over `today` on the cell's own class; the
/// holiday flag lives on the cell's first child.
pub fn parse_day(cell: ElementRef<'_>) -> Result<Day, ExtractError> {
    let is_disabled = has_class_token(&cell, "disabled");
    let is_today = !is_disabled && has_class_token(&cell, "today");

    let info = child_elements(cell).next().ok_or_else(|| ExtractError::NotFound {
        tag: s!("*"),
        attr: None,
        value: None,
    })?;
    let is_holiday = has_class_token(&info, "holiday");

    let number = |class: &str| -> Result<String, ExtractError> {
        let node = find(info, &Query::tag("div").class_has(class))?;
        transform_number(&own_text(node)?)
    };

    Ok(Day {
        is_disabled,
        is_today,
        is_holiday,
        solar: number("jalali")?,
        gregorian: number("miladi")?,
        qamari: number("qamari")?,
    })
}
