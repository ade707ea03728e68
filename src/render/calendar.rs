// src/render/calendar.rs
// Month grid as boxed cells, 7 per row, Saturday first:
//
//  ________
// |        |
// |   09   |      solar
// | 22  31 |      qamari, gregorian
// |________|

use std::io::{self, Write};

use super::theme::{CalendarTheme, Tone};
use super::{put, Theme};
use crate::data::Day;

const WEEK: usize = 7;
const MAX_WEEKS: usize = 6;

struct Pen<'t> {
    theme: Option<&'t CalendarTheme>,
}

impl Pen<'_> {
    fn put<W: Write + ?Sized>(&self, out: &mut W, text: &str, tone: Tone) -> io::Result<()> {
        put(out, text, self.theme.map(|t| t.paint(tone)))
    }
}

/// Frame tone: today > disabled > holiday > normal.
fn frame_tone(day: &Day) -> Tone {
    if day.is_today {
        Tone::Today
    } else if day.is_disabled {
        Tone::Disabled
    } else if day.is_holiday {
        Tone::Holiday
    } else {
        Tone::Normal
    }
}

/// (frame, number) tones for the solar-number line.
fn solar_line_tones(day: &Day) -> (Tone, Tone) {
    match (day.is_today, day.is_disabled, day.is_holiday) {
        (true, _, true) => (Tone::Today, Tone::Holiday),
        (true, _, false) => (Tone::Today, Tone::Solar),
        (false, true, true) => (Tone::Disabled, Tone::Holiday),
        (false, true, false) => (Tone::Disabled, Tone::Disabled),
        (false, false, true) => (Tone::Holiday, Tone::Holiday),
        (false, false, false) => (Tone::Normal, Tone::Normal),
    }
}

/// (numbers, frame) tones for the qamari/gregorian line.
/// A today cell keeps the today frame here even when it is also a holiday.
fn secondary_line_tones(day: &Day) -> (Tone, Tone) {
    if day.is_today {
        (Tone::OtherDays, Tone::Today)
    } else if day.is_disabled {
        (Tone::Disabled, Tone::Disabled)
    } else if day.is_holiday {
        (Tone::OtherDays, Tone::Holiday)
    } else {
        (Tone::OtherDays, Tone::Normal)
    }
}

pub fn render_calendar<W: Write + ?Sized>(out: &mut W, days: &[Day], theme: Option<&Theme>) -> io::Result<()> {
    let pen = Pen { theme: theme.map(|t| &t.calendar) };
    render_header(out, &pen)?;
    for week in days.chunks(WEEK).take(MAX_WEEKS) {
        render_week(out, &pen, week)?;
    }
    Ok(())
}

fn render_header<W: Write + ?Sized>(out: &mut W, pen: &Pen<'_>) -> io::Result<()> {
    pen.put(out, &" ________ ".repeat(WEEK - 1), Tone::Normal)?;
    pen.put(out, " ________ ", Tone::Holiday)?;
    writeln!(out)?;
    pen.put(out, "| Shanbe ||  Yek   ||   Do   ||   Se   || Chahar ||  Panj  |", Tone::Normal)?;
    pen.put(out, "| Jom'eh |", Tone::Holiday)?;
    writeln!(out)
}

fn render_week<W: Write + ?Sized>(out: &mut W, pen: &Pen<'_>, week: &[Day]) -> io::Result<()> {
    for day in week {
        pen.put(out, " ________ ", frame_tone(day))?;
    }
    writeln!(out)?;

    for day in week {
        pen.put(out, "|        |", frame_tone(day))?;
    }
    writeln!(out)?;

    for day in week {
        let (frame, number) = solar_line_tones(day);
        pen.put(out, "|   ", frame)?;
        pen.put(out, &day.solar, number)?;
        pen.put(out, "   |", frame)?;
    }
    writeln!(out)?;

    for day in week {
        let (numbers, frame) = secondary_line_tones(day);
        pen.put(out, "| ", frame)?;
        pen.put(out, &day.qamari, numbers)?;
        pen.put(out, "  ", Tone::Normal)?;
        pen.put(out, &day.gregorian, numbers)?;
        pen.put(out, " |", frame)?;
    }
    writeln!(out)?;

    for day in week {
        pen.put(out, "|________|", frame_tone(day))?;
    }
    writeln!(out)
}

/// Banner for plain output, where holiday coloring is not visible.
pub fn render_holiday_banner<W: Write + ?Sized>(out: &mut W, days: &[Day]) -> io::Result<()> {
    if days.iter().any(|d| d.is_today && d.is_holiday) {
        writeln!(out, "{} Today is Holiday {}", "*.".repeat(13), ".*".repeat(13))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(solar: &str, today: bool, holiday: bool, disabled: bool) -> Day {
        Day {
            is_disabled: disabled,
            is_today: today,
            is_holiday: holiday,
            solar: s!(solar),
            gregorian: s!("31"),
            qamari: s!("22"),
        }
    }

    fn plain(days: &[Day]) -> String {
        let mut out = Vec::new();
        render_calendar(&mut out, days, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn five_weeks_make_five_blocks() {
        let days: Vec<Day> = (1..=35).map(|n| day(&format!("{n:02}"), n == 9, false, false)).collect();
        let text = plain(&days);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 5 * 5);
        assert!(lines.iter().all(|l| l.chars().count() == 70));
        assert_eq!(lines[4], "|   01   ||   02   ||   03   ||   04   ||   05   ||   06   ||   07   |");
        assert_eq!(lines[5], "| 22  31 |".repeat(7));
    }

    #[test]
    fn six_week_grid_is_kept_and_extra_cells_dropped() {
        let days: Vec<Day> = (0..49).map(|_| day("01", false, false, false)).collect();
        assert_eq!(plain(&days).lines().count(), 2 + 6 * 5);
    }

    #[test]
    fn today_holiday_tones() {
        let d = day("09", true, true, false);
        assert_eq!(frame_tone(&d), Tone::Today);
        assert_eq!(solar_line_tones(&d), (Tone::Today, Tone::Holiday));
        assert_eq!(secondary_line_tones(&d), (Tone::OtherDays, Tone::Today));

        let d = day("09", false, true, true);
        assert_eq!(frame_tone(&d), Tone::Disabled);
        assert_eq!(solar_line_tones(&d), (Tone::Disabled, Tone::Holiday));
    }

    #[test]
    fn banner_only_when_today_is_holiday() {
        let mut out = Vec::new();
        render_holiday_banner(&mut out, &[day("01", true, false, false)]).unwrap();
        assert!(out.is_empty());

        render_holiday_banner(&mut out, &[day("01", false, true, false), day("02", true, true, false)]).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(" Today is Holiday "));
    }
}
