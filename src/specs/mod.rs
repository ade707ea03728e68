// src/specs/mod.rs
//! # Page readers for time.ir
//!
//! Each reader knows *where the ground truth lives* on the time.ir front page
//! and walks a fixed anchor path down to it with `core::dom::find`:
//!
//! ```text
//! topWrapper ─┬─ todayDate ─ row ─┬─ today-shamsi    ─ show date / show numeral
//!             │                   └─ today-gregorian ─ show date / show numeral
//!             ├─ calendarWrapper ─ #CalendarContainer ─ eventCalendar ─ mainCalendar ─ dayList ─ cells…
//!             └─ randomQuote ─ quoteAuthor / quoteText
//! ```
//!
//! Raw text goes through `numerals` before it lands in the typed records of
//! `data`. Readers do not fetch, cache, or print; they only read a parsed document.
//!
//! A page that no longer has this shape fails with `ExtractError::NotFound` at the
//! first level that moved. There is no partial result and no fallback selector.

pub mod month;
pub mod quote;
pub mod today;

use scraper::{ElementRef, Html};

use crate::config::consts::TOP_WRAPPER;
use crate::core::dom::{find, Query};
use crate::data::Calendar;
use crate::error::ExtractError;

/// The `topWrapper` container every anchor path starts from.
pub(crate) fn top_wrapper(doc: &Html) -> Result<ElementRef<'_>, ExtractError> {
    find(doc.root_element(), &Query::tag("div").class_is(TOP_WRAPPER))
}

impl Calendar {
    /// Parse the page once and read dates, grid and quote from it.
    pub fn parse(html: &str) -> Result<Self, ExtractError> {
        let doc = Html::parse_document(html);
        Ok(Self {
            dates: today::extract_today_dates(&doc)?,
            days: month::extract_month_grid(&doc)?,
            quote: quote::extract_quote(&doc)?,
        })
    }
}
