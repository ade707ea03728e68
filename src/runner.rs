// src/runner.rs
//! One run: get today's page (cache or network), read it, print what was asked
//! for, send the requested notifications, and cache a freshly fetched page.

use std::io::Write;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::{
    config::options::AppOptions,
    core::net::fetch_page,
    data::Calendar,
    error::{FetchError, Result},
    notify::{holiday_notice, quote_notice, Notice, Notifier},
    numerals::current_time,
    render::{self, calendar::render_holiday_banner, Theme},
    store::Cache,
};

/// Where the page body came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
}

/// Summary of what a run did.
#[derive(Debug)]
pub struct RunSummary {
    pub origin: Origin,
    pub calendar: Calendar,
    pub notices_sent: usize,
}

/// Top-level runner against the user cache and the live site.
pub fn run<W, N>(opts: &AppOptions, out: &mut W, notifier: &mut N) -> Result<RunSummary>
where
    W: Write + ?Sized,
    N: Notifier + ?Sized,
{
    let cache = Cache::open_default();
    run_with(opts, &cache, Local::now().date_naive(), fetch_page, out, notifier)
}

pub fn run_with<W, N, F>(
    opts: &AppOptions,
    cache: &Cache,
    today: NaiveDate,
    fetch: F,
    out: &mut W,
    notifier: &mut N,
) -> Result<RunSummary>
where
    W: Write + ?Sized,
    N: Notifier + ?Sized,
    F: FnOnce() -> std::result::Result<String, FetchError>,
{
    let (body, origin) = match cache.load_fresh(today) {
        Some(body) => (body, Origin::Cache),
        None => (fetch()?, Origin::Network),
    };

    let calendar = match Calendar::parse(&body) {
        Ok(c) => c,
        Err(e) => {
            error!("could not read page ({origin:?}): {e}");
            if origin == Origin::Cache {
                // A bad cached copy would fail the same way all day.
                if let Err(io) = cache.clear() {
                    warn!("could not clear cache at {}: {io}", cache.path().display());
                }
            }
            return Err(e.into());
        }
    };

    let theme = opts.display.color.then(Theme::default);
    let theme = theme.as_ref();

    render_sections(opts, &calendar, out, theme)?;
    let notices_sent = send_notices(opts, &calendar, out, notifier, theme)?;

    if opts.wants_footer() {
        render::render_footer(out, theme)?;
    }

    if origin == Origin::Network {
        match cache.save(today, &body) {
            Ok(()) => info!("page cached at {}", cache.path().display()),
            Err(e) => warn!("could not write cache at {}: {e}", cache.path().display()),
        }
    }

    Ok(RunSummary { origin, calendar, notices_sent })
}

fn render_sections<W: Write + ?Sized>(
    opts: &AppOptions,
    calendar: &Calendar,
    out: &mut W,
    theme: Option<&Theme>,
) -> Result<()> {
    let display = &opts.display;
    if display.solar {
        render::render_date(out, "Emruz: ", &calendar.dates.solar, theme)?;
    }
    if display.gregorian {
        render::render_date(out, "Today: ", &calendar.dates.gregorian, theme)?;
    }
    if display.time {
        render::render_time(out, &current_time()?, theme)?;
    }
    if display.calendar {
        render::render_calendar(out, &calendar.days, theme)?;
        if theme.is_none() {
            render_holiday_banner(out, &calendar.days)?;
        }
    }
    Ok(())
}

/// Failures are reported on `out` and in the log; they never end the run.
fn send_notices<W, N>(
    opts: &AppOptions,
    calendar: &Calendar,
    out: &mut W,
    notifier: &mut N,
    theme: Option<&Theme>,
) -> Result<usize>
where
    W: Write + ?Sized,
    N: Notifier + ?Sized,
{
    let mut notices: Vec<Notice> = Vec::new();
    if opts.notify.quote {
        notices.push(quote_notice(&calendar.quote));
    }
    if opts.notify.holidays {
        notices.extend(holiday_notice(&calendar.days));
    }

    let mut sent = 0;
    for notice in &notices {
        match notifier.notify(notice) {
            Ok(()) => sent += 1,
            Err(e) => {
                warn!("{e}");
                let line = join!("Notifier ERROR: ", &e.to_string());
                render::render_warning(out, &line, theme)?;
            }
        }
    }
    Ok(sent)
}
