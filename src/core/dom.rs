// src/core/dom.rs
//! Tree search over a parsed HTML document.
//!
//! One primitive: [`find`] returns the first descendant (document order,
//! depth-first, pre-order) with a given tag name and, optionally, an attribute
//! whose name and value satisfy a pair of [`Matcher`]s. The page readers in
//! `specs` call it repeatedly to drill down fixed anchor paths; any deviation in
//! the page surfaces as `ExtractError::NotFound` at the first level that broke.

use std::fmt;

use scraper::ElementRef;

use crate::core::sanitize::normalize_ws;
use crate::error::ExtractError;

/// How an attribute name or value is compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matcher<'q> {
    /// Whole string must be equal.
    Exact(&'q str),
    /// Needle must occur somewhere in the string (e.g. one class among several).
    Contains(&'q str),
}

impl Matcher<'_> {
    pub fn matches(&self, s: &str) -> bool {
        match *self {
            Matcher::Exact(want) => s == want,
            Matcher::Contains(needle) => s.contains(needle),
        }
    }
}

impl fmt::Display for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Exact(s) => write!(f, "{s:?}"),
            Matcher::Contains(s) => write!(f, "which should contain {s:?}"),
        }
    }
}

/// Tag name plus an optional (attribute name, attribute value) constraint.
#[derive(Clone, Copy, Debug)]
pub struct Query<'q> {
    pub tag: &'q str,
    pub attr: Option<(Matcher<'q>, Matcher<'q>)>,
}

impl<'q> Query<'q> {
    pub fn tag(tag: &'q str) -> Self {
        Self { tag, attr: None }
    }

    pub fn attr(mut self, name: Matcher<'q>, value: Matcher<'q>) -> Self {
        self.attr = Some((name, value));
        self
    }

    /// `class` exactly equal to `value`.
    pub fn class_is(self, value: &'q str) -> Self {
        self.attr(Matcher::Exact("class"), Matcher::Exact(value))
    }

    /// `class` containing `token`.
    pub fn class_has(self, token: &'q str) -> Self {
        self.attr(Matcher::Exact("class"), Matcher::Contains(token))
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let node = el.value();
        if node.name() != self.tag {
            return false;
        }
        match self.attr {
            None => true,
            Some((name, value)) => node
                .attrs()
                .any(|(n, v)| name.matches(n) && value.matches(v)),
        }
    }

    fn not_found(&self) -> ExtractError {
        ExtractError::NotFound {
            tag: s!(self.tag),
            attr: self.attr.map(|(n, _)| n.to_string()),
            value: self.attr.map(|(_, v)| v.to_string()),
        }
    }
}

/// First descendant of `root` matching `query`. `root` itself is never a candidate.
pub fn find<'a>(root: ElementRef<'a>, query: &Query<'_>) -> Result<ElementRef<'a>, ExtractError> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| query.matches(el))
        .ok_or_else(|| query.not_found())
}

/// Element children in document order (text and comment nodes skipped).
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Substring test on the element's own `class` attribute.
pub fn has_class_token(el: &ElementRef<'_>, token: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|c| c.contains(token))
}

/// Text directly inside `el` (not inside its child elements), whitespace-normalized.
///
/// Every direct text node is joined, including ones after a child element, so
/// `<span>a<b>x</b>c</span>` gives `"ac"`. The anchors read here hold a single
/// text node with no child elements, where this is the same as the text before
/// the first child.
pub fn own_text(el: ElementRef<'_>) -> Result<String, ExtractError> {
    let mut raw = s!();
    for child in el.children() {
        if let Some(t) = child.value().as_text() {
            raw.push_str(t);
        }
    }
    let text = normalize_ws(&raw);
    if text.is_empty() {
        return Err(ExtractError::EmptyText(s!(el.value().name())));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn doc(body: &str) -> Html {
        Html::parse_document(&join!("<html><body>", body, "</body></html>"))
    }

    #[test]
    fn exact_and_contains_on_class() {
        let html = doc(r#"<div class="col todayDate"><span class="show date">x</span></div>"#);
        let root = html.root_element();

        assert!(find(root, &Query::tag("div").class_has("todayDate")).is_ok());
        assert!(find(root, &Query::tag("div").class_is("todayDate")).is_err());
        assert!(find(root, &Query::tag("span").class_is("show date")).is_ok());
    }

    #[test]
    fn first_match_in_document_order_wins() {
        // The first <div> child does not carry the class; its own child does.
        // That grandchild precedes the later sibling in document order.
        let html = doc(
            r#"<div id="a"><div id="b" class="hit"></div></div>
               <div id="c" class="hit"></div>"#,
        );
        let hit = find(html.root_element(), &Query::tag("div").class_is("hit")).unwrap();
        assert_eq!(hit.value().attr("id"), Some("b"));
    }

    #[test]
    fn no_attribute_constraint_returns_first_tag() {
        let html = doc(r#"<p>one</p><span id="x"></span><span id="y"></span>"#);
        let hit = find(html.root_element(), &Query::tag("span")).unwrap();
        assert_eq!(hit.value().attr("id"), Some("x"));
    }

    #[test]
    fn root_is_not_a_candidate() {
        let html = doc(r#"<div class="outer"><p></p></div>"#);
        let outer = find(html.root_element(), &Query::tag("div").class_is("outer")).unwrap();
        assert!(find(outer, &Query::tag("div").class_is("outer")).is_err());
    }

    #[test]
    fn contains_applies_to_attribute_name_too() {
        let html = doc(r#"<div data-calendar-id="ctl00_CalendarContainer"></div>"#);
        let q = Query::tag("div").attr(Matcher::Contains("calendar"), Matcher::Contains("CalendarContainer"));
        assert!(find(html.root_element(), &q).is_ok());

        let q = Query::tag("div").attr(Matcher::Exact("id"), Matcher::Contains("CalendarContainer"));
        assert!(find(html.root_element(), &q).is_err());
    }

    #[test]
    fn not_found_carries_query() {
        let html = doc("<div></div>");
        let err = find(html.root_element(), &Query::tag("div").class_has("todayDate")).unwrap_err();
        assert_eq!(
            err,
            ExtractError::NotFound {
                tag: s!("div"),
                attr: Some(s!("\"class\"")),
                value: Some(s!("which should contain \"todayDate\"")),
            }
        );
    }

    #[test]
    fn own_text_skips_child_elements() {
        let html = doc("<span>  hello <b>bold</b>  world </span><i></i>");
        let span = find(html.root_element(), &Query::tag("span")).unwrap();
        assert_eq!(own_text(span).unwrap(), "hello world");

        let html2 = doc("<span>a<b>x</b>c</span>");
        let span = find(html2.root_element(), &Query::tag("span")).unwrap();
        assert_eq!(own_text(span).unwrap(), "ac");

        let i = find(html.root_element(), &Query::tag("i")).unwrap();
        assert_eq!(own_text(i), Err(ExtractError::EmptyText(s!("i"))));
    }
}
