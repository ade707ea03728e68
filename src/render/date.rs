// src/render/date.rs
use std::io::{self, Write};

use super::{put, Theme};
use crate::data::{Date, Time};

/// `Emruz: 4-Shanbeh  09    Aban     (08) 1397   Pa'eez  `
pub fn render_date<W: Write + ?Sized>(
    out: &mut W,
    label: &str,
    date: &Date,
    theme: Option<&Theme>,
) -> io::Result<()> {
    let t = theme.map(|t| &t.date);
    put(out, label, None)?;
    put(out, &format!("{:^10}", date.weekday), t.map(|t| t.weekday))?;
    put(out, " ", None)?;
    put(out, &date.day, t.map(|t| t.day))?;
    put(out, &format!("{:^13}", date.month_name), t.map(|t| t.month_name))?;
    put(out, "(", None)?;
    put(out, &date.month, t.map(|t| t.month))?;
    put(out, ") ", None)?;
    put(out, &date.year, t.map(|t| t.year))?;
    put(out, " ", None)?;
    let season = t.map(|t| t.seasons[(date.season_index().clamp(1, 4)) - 1]);
    put(out, &format!("{:^10}", date.season_name), season)?;
    writeln!(out)
}

pub fn render_time<W: Write + ?Sized>(out: &mut W, time: &Time, theme: Option<&Theme>) -> io::Result<()> {
    let t = theme.map(|t| &t.time);
    put(out, "System time: ", None)?;
    put(out, &time.hour, t.map(|t| t.hour))?;
    put(out, ":", None)?;
    put(out, &time.minute, t.map(|t| t.minute))?;
    if !time.second.is_empty() {
        put(out, ":", None)?;
        put(out, &time.second, t.map(|t| t.second))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aban() -> Date {
        Date {
            year: s!("1397"),
            season: s!("03"),
            season_name: s!("Pa'eez"),
            month: s!("08"),
            month_name: s!("Aban"),
            day: s!("09"),
            weekday: s!("4-Shanbeh"),
        }
    }

    #[test]
    fn plain_date_line() {
        let mut out = Vec::new();
        render_date(&mut out, "Emruz: ", &aban(), None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Emruz: 4-Shanbeh  09    Aban     (08) 1397   Pa'eez  \n"
        );
    }

    #[test]
    fn plain_time_line() {
        let mut out = Vec::new();
        let t = Time { hour: s!("07"), minute: s!("05"), second: s!("59") };
        render_time(&mut out, &t, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "System time: 07:05:59\n");
    }
}
