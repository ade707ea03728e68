// src/cli.rs
use clap::Parser;

use crate::config::options::{AppOptions, DisplayOptions, NotifyOptions};

pub const ABOUT: &str = "Terminal calendar for http://time.ir";

/// Every section is on by default; each flag turns one off.
#[derive(Parser, Debug, Default)]
#[command(name = "tir", version, about = ABOUT, long_about = None)]
pub struct Args {
    /// Do not show the solar-hijri date
    #[arg(short = 's', long)]
    pub no_solar: bool,

    /// Do not show the gregorian date
    #[arg(short = 'g', long)]
    pub no_gregorian: bool,

    /// Do not show the month calendar
    #[arg(short = 'c', long)]
    pub no_calendar: bool,

    /// Do not show the system time
    #[arg(short = 't', long)]
    pub no_time: bool,

    /// Plain text, no colors
    #[arg(short = 'C', long)]
    pub no_color: bool,

    /// Do not send the quote notification
    #[arg(short = 'q', long)]
    pub no_quote: bool,

    /// Do not send the holiday notification
    #[arg(short = 'H', long)]
    pub no_holidays: bool,

    /// Print the program description and exit
    #[arg(short = 'a', long)]
    pub about: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            display: DisplayOptions {
                solar: !self.no_solar,
                gregorian: !self.no_gregorian,
                time: !self.no_time,
                calendar: !self.no_calendar,
                color: !self.no_color,
            },
            notify: NotifyOptions {
                quote: !self.no_quote,
                holidays: !self.no_holidays,
            },
        }
    }
}
