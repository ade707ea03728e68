// src/specs/quote.rs
use scraper::Html;

use crate::config::consts::{QUOTE_AUTHOR, QUOTE_TEXT, RANDOM_QUOTE};
use crate::core::dom::{find, own_text, Query};
use crate::data::Quote;
use crate::error::ExtractError;

pub fn extract_quote(doc: &Html) -> Result<Quote, ExtractError> {
    let top = super::top_wrapper(doc)?;
    let block = find(top, &Query::tag("div").class_is(RANDOM_QUOTE))?;
    let author = own_text(find(block, &Query::tag("a").class_has(QUOTE_AUTHOR))?)?;
    let text = own_text(find(block, &Query::tag("span").class_has(QUOTE_TEXT))?)?;
    Ok(Quote { author, text })
}
