// src/notify.rs
//! Desktop notifications: the daily quote, and a heads-up when tomorrow or the
//! day after is a holiday.
//!
//! What gets said is decided by plain functions (`quote_notice`,
//! `holiday_notice`); how it is delivered sits behind the [`Notifier`] trait.

use std::process::Command;

use thiserror::Error;

use crate::config::consts::{HOLIDAY_NOTICE_MS, NOTIFY_APP, NOTIFY_COMMAND};
use crate::data::{Day, Quote};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub summary: String,
    pub body: String,
    pub timeout_ms: u32,
}

#[derive(Debug, Error)]
#[error("could not work with command {command:?} on this system: {reason}")]
pub struct NotifyError {
    pub command: String,
    pub reason: String,
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice) -> Result<(), NotifyError>;
}

/// Hands each notice to an external command, `notify-send` style:
/// `<command> -t <ms> <summary> <body>`.
pub struct DesktopNotifier {
    pub command: String,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self { command: s!(NOTIFY_COMMAND) }
    }
}

impl DesktopNotifier {
    pub fn args(notice: &Notice) -> [String; 4] {
        [s!("-t"), notice.timeout_ms.to_string(), notice.summary.clone(), notice.body.clone()]
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, notice: &Notice) -> Result<(), NotifyError> {
        let fail = |reason: String| NotifyError { command: self.command.clone(), reason };
        let status = Command::new(&self.command)
            .args(Self::args(notice))
            .status()
            .map_err(|e| fail(e.to_string()))?;
        if !status.success() {
            return Err(fail(status.to_string()));
        }
        Ok(())
    }
}

/// How long a text should stay on screen, in milliseconds.
///
/// Per sentence ('.'-separated), every word costs 50 ms per character plus
/// 200 / 300 / 500 ms for short (≤3), medium (4–7) and long (≥8) words; each
/// sentence adds another 50 ms.
pub fn reading_time_ms(text: &str) -> u32 {
    let mut total = 0u32;
    for sentence in text.split('.') {
        for word in sentence.split(' ') {
            let len = word.chars().count() as u32;
            total += 50 * len;
            total += match len {
                4..=7 => 300,
                0..=3 => 200,
                _ => 500,
            };
        }
        total += 50;
    }
    total
}

pub fn quote_notice(quote: &Quote) -> Notice {
    Notice {
        summary: join!(NOTIFY_APP, " - ", &quote.author),
        body: quote.text.clone(),
        timeout_ms: reading_time_ms(&quote.text),
    }
}

/// The two cells after today, in grid order.
pub fn next_two_days(days: &[Day]) -> (Option<&Day>, Option<&Day>) {
    let mut after = days.iter().skip_while(|d| !d.is_today).skip(1);
    (after.next(), after.next())
}

/// `None` when neither tomorrow nor the day after is a holiday.
pub fn holiday_notice(days: &[Day]) -> Option<Notice> {
    let (d1, d2) = next_two_days(days);
    let h1 = d1.is_some_and(|d| d.is_holiday);
    let h2 = d2.is_some_and(|d| d.is_holiday);
    let body = match (h1, h2) {
        (true, true) => "فردا و پس فردا تعطیل هستند",
        (true, false) => "فردا تعطیل است",
        (false, true) => "پس فردا تعطیل است",
        (false, false) => return None,
    };
    Some(Notice {
        summary: s!(NOTIFY_APP),
        body: s!(body),
        timeout_ms: HOLIDAY_NOTICE_MS,
    })
}
