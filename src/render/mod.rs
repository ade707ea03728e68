// src/render/mod.rs
//! Terminal output. Every function writes to an `io::Write` and takes an
//! optional theme; `None` means plain text with no escape codes.

pub mod calendar;
pub mod date;
pub mod theme;

use std::io::{self, Write};

pub use calendar::render_calendar;
pub use date::{render_date, render_time};
pub use theme::{Paint, Theme};

/// Write `text`, styled when a paint is given.
pub(crate) fn put<W: Write + ?Sized>(out: &mut W, text: &str, paint: Option<Paint>) -> io::Result<()> {
    match paint {
        Some(p) => write!(out, "{}", p.apply(text)),
        None => out.write_all(text.as_bytes()),
    }
}

pub fn render_footer<W: Write + ?Sized>(out: &mut W, theme: Option<&Theme>) -> io::Result<()> {
    writeln!(out)?;
    put(out, "Powered by ", theme.map(|t| t.muted))?;
    put(out, "http://time.ir", theme.map(|t| t.link))?;
    writeln!(out)
}

/// Gray one-line warning, used when a notification could not be sent.
pub fn render_warning<W: Write + ?Sized>(out: &mut W, text: &str, theme: Option<&Theme>) -> io::Result<()> {
    put(out, text, theme.map(|t| t.muted))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_footer() {
        let mut out = Vec::new();
        render_footer(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nPowered by http://time.ir\n");
    }
}
