// src/bin/cli.rs
use std::io::{self, Write};

use clap::Parser;
use color_eyre::{eyre::Report, Section};
use tracing::{error, info};

use tir::{
    cli::{Args, ABOUT},
    config::consts::ISSUES_URL,
    log,
    notify::DesktopNotifier,
    runner,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.about {
        println!("{ABOUT}");
        return Ok(());
    }

    // The log file is best-effort; a read-only cache dir must not stop the calendar.
    let log_file = log::init().ok();
    if let Some(path) = &log_file {
        info!("logging to {}", path.display());
    }

    let opts = args.options();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut notifier = DesktopNotifier::default();

    match runner::run(&opts, &mut out, &mut notifier) {
        Ok(summary) => {
            info!("done ({:?}, {} notices)", summary.origin, summary.notices_sent);
            out.flush()?;
            Ok(())
        }
        Err(e) if e.is_layout_change() => {
            error!("{e}");
            let _ = writeln!(out);
            let report = Report::new(e)
                .wrap_err("It seems that something was changed in time.ir or its theme")
                .suggestion(format!("Please open an issue at {ISSUES_URL} with the details below"));
            Err(match log_file {
                Some(path) => report.note(format!("debug log: {}", path.display())),
                None => report,
            })
        }
        Err(e) => {
            error!("{e}");
            Err(Report::new(e).wrap_err("could not show today's calendar"))
        }
    }
}
