// src/core/net.rs
// Blocking HTTP GET of one page on HOST.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, warn};

use crate::config::consts::{ACCEPT, FALLBACK_PATH, HOST, MAIN_PATH, MIN_BODY_LEN, TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

pub fn url_for(path: &str) -> String {
    join!("http://", HOST, path)
}

/// Default headers overlaid with `extra`. A browser user agent is added unless
/// `extra` already carries one (name compared case-insensitively).
pub fn request_headers(extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = vec![(s!("accept"), s!(ACCEPT))];
    for (k, v) in extra {
        match out.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(k)) {
            Some(slot) => slot.1 = s!(*v),
            None => out.push((s!(*k), s!(*v))),
        }
    }
    if !out.iter().any(|(name, _)| name.eq_ignore_ascii_case("user-agent")) {
        out.push((s!("user-agent"), s!(USER_AGENT)));
    }
    out
}

fn header_map(headers: &[(String, String)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (k, v) in headers {
        match (HeaderName::from_bytes(k.as_bytes()), HeaderValue::from_str(v)) {
            (Ok(name), Ok(value)) => { map.insert(name, value); }
            _ => warn!("dropping invalid header {k:?}"),
        }
    }
    map
}

/// GET `http://HOST<path>` and return the body.
pub fn http_get(path: &str, headers: &[(&str, &str)]) -> Result<String, FetchError> {
    let url = url_for(path);
    let http_err = |source| FetchError::Http { url: url.clone(), source };

    let client = Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .default_headers(header_map(&request_headers(headers)))
        .build()
        .map_err(http_err)?;

    debug!("GET {url}");
    let resp = client.get(&url).send().map_err(http_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url });
    }
    let body = resp.text().map_err(http_err)?;
    info!("fetched {url} ({} bytes)", body.len());
    Ok(body)
}

/// Fetch the front page. A body too small to be the real page gets one retry on
/// `FALLBACK_PATH`; if that is short too, the fetch fails instead of handing the
/// parser an error page.
pub fn fetch_page() -> Result<String, FetchError> {
    fetch_with(|path| http_get(path, &[]))
}

pub(crate) fn fetch_with<F>(mut get: F) -> Result<String, FetchError>
where
    F: FnMut(&str) -> Result<String, FetchError>,
{
    let body = get(MAIN_PATH)?;
    if body.len() >= MIN_BODY_LEN {
        return Ok(body);
    }
    warn!("{} returned only {} bytes; trying {FALLBACK_PATH}", url_for(MAIN_PATH), body.len());

    let body = get(FALLBACK_PATH)?;
    if body.len() >= MIN_BODY_LEN {
        return Ok(body);
    }
    Err(FetchError::TooShort { len: body.len(), url: url_for(FALLBACK_PATH) })
}
