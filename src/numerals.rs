// src/numerals.rs
//! Numeral and name resolution for the text the site renders.
//!
//! The site writes digits in Persian (U+06F0..) or Arabic-Indic (U+0660..) form
//! and spells weekdays/months in Farsi. Weekday and month names are told apart by
//! their first (and for some months second) code point only; the tables below
//! encode exactly the spellings the site uses, nothing more.

use chrono::{Local, Timelike};

use crate::core::sanitize::is_latin_word;
use crate::data::{CalendarKind, Time};
use crate::error::ExtractError;

/// (solar name, gregorian name), indexed by season number - 1.
pub const SEASONS: [(&str, &str); 4] = [
    ("Bahar", "Spring"),
    ("Tabestan", "Summer"),
    ("Pa'eez", "Autumn"),
    ("Zemestan", "Winter"),
];

/// Saturday..Friday, keyed by first code point.
pub const WEEKDAYS: [(char, &str); 7] = [
    ('\u{0634}', "Shanbeh"),   // ش
    ('\u{06CC}', "1-Shanbeh"), // ی
    ('\u{062F}', "2-Shanbeh"), // د
    ('\u{0633}', "3-Shanbeh"), // س
    ('\u{0686}', "4-Shanbeh"), // چ
    ('\u{067E}', "5-Shanbeh"), // پ
    ('\u{062C}', "Jom'eh"),    // ج
];

/// Solar-Hijri months, keyed by first code point and, where the first is shared, the second.
pub const MONTHS: [(char, Option<char>, &str); 12] = [
    ('\u{0641}', None, "Farvardin"),             // ف
    ('\u{0627}', Some('\u{0631}'), "Ordibehesht"), // ار
    ('\u{062E}', None, "Khordad"),               // خ
    ('\u{062A}', None, "Tir"),                   // ت
    ('\u{0645}', Some('\u{0631}'), "Mordad"),    // مر
    ('\u{0634}', None, "Shahrivar"),             // ش
    ('\u{0645}', Some('\u{0647}'), "Mehr"),      // مه
    ('\u{0627}', Some('\u{0628}'), "Aban"),      // اب
    ('\u{0627}', Some('\u{0630}'), "Azar"),      // اذ
    ('\u{062F}', None, "Dey"),                   // د
    ('\u{0628}', None, "Bahman"),                // ب
    ('\u{0627}', Some('\u{0633}'), "Esfand"),    // اس
];

const ALEF_MADDA: char = '\u{0622}'; // آ
const ALEF: char = '\u{0627}'; // ا

fn digit_value(c: char) -> Option<char> {
    let zero = match c {
        '0'..='9' => return Some(c),
        '\u{06F0}'..='\u{06F9}' => 0x06F0,
        '\u{0660}'..='\u{0669}' => 0x0660,
        _ => return None,
    };
    char::from_digit(c as u32 - zero, 10)
}

/// Persian / Arabic-Indic / ASCII digits → ASCII, left-padded with '0' to width 2.
pub fn transform_number(s: &str) -> Result<String, ExtractError> {
    let unknown = |glyph| ExtractError::UnknownNumeral { glyph, input: s!(s) };
    if s.is_empty() {
        return Err(unknown(None));
    }
    let digits = s
        .chars()
        .map(|c| digit_value(c).ok_or_else(|| unknown(Some(c))))
        .collect::<Result<String, _>>()?;
    Ok(format!("{digits:0>2}"))
}

pub fn transform_weekday(token: &str) -> Result<String, ExtractError> {
    if is_latin_word(token) {
        return Ok(s!(token));
    }
    let unknown = || ExtractError::UnknownWeekday(s!(token));
    // The two shortest Farsi weekdays are still 4 letters long.
    if token.chars().count() < 4 {
        return Err(unknown());
    }
    let first = token.chars().next().ok_or_else(unknown)?;
    WEEKDAYS
        .iter()
        .find(|(c, _)| *c == first)
        .map(|(_, name)| s!(*name))
        .ok_or_else(unknown)
}

pub fn transform_month(token: &str) -> Result<String, ExtractError> {
    if is_latin_word(token) {
        return Ok(s!(token));
    }
    let mut chars = token.chars();
    let first = match chars.next() {
        Some(ALEF_MADDA) => ALEF,
        Some(c) => c,
        None => return Err(ExtractError::UnknownMonth(s!(token))),
    };
    let second = chars.next();
    MONTHS
        .iter()
        .find(|(c1, c2, _)| *c1 == first && (c2.is_none() || *c2 == second))
        .map(|(_, _, name)| s!(*name))
        .ok_or_else(|| ExtractError::UnknownMonth(s!(token)))
}

/// (season name, "01".."04") for a 1-based month number.
pub fn find_season(month: u32, kind: CalendarKind) -> (&'static str, &'static str) {
    let number = match kind {
        CalendarKind::Solar => match month {
            1..=3 => 1,
            4..=6 => 2,
            7..=9 => 3,
            _ => 4,
        },
        // Meteorological seasons: Dec-Feb is winter.
        CalendarKind::Gregorian => match month {
            3..=5 => 1,
            6..=8 => 2,
            9..=11 => 3,
            _ => 4,
        },
    };
    let (solar, gregorian) = SEASONS[number - 1];
    let name = match kind {
        CalendarKind::Solar => solar,
        CalendarKind::Gregorian => gregorian,
    };
    (name, ["01", "02", "03", "04"][number - 1])
}

/// `"چهارشنبه - ۹ آبان ۱۳۹۷"` → `(weekday, (year, month_name, day))`.
///
/// Latin rows come as `"Wednesday - 2018 31 October"` (year day month) and are kept verbatim.
pub fn transform_date(text: &str) -> Result<(String, (String, String, String)), ExtractError> {
    let malformed = || ExtractError::MalformedDate(s!(text));
    let (weekday, rest) = text.split_once('-').ok_or_else(malformed)?;
    let weekday = transform_weekday(weekday.trim())?;

    let parts: Vec<&str> = rest.split_whitespace().collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(malformed());
    };
    let date = if is_latin_word(c) {
        (s!(*a), s!(*c), s!(*b))
    } else {
        (transform_number(c)?, transform_month(b)?, transform_number(a)?)
    };
    Ok((weekday, date))
}

/// Calendar implied by the separator: `/` is solar, anything else gregorian.
/// Only used when the caller cannot say which row the text came from.
pub fn kind_from_separator(text: &str) -> CalendarKind {
    if text.contains('/') { CalendarKind::Solar } else { CalendarKind::Gregorian }
}

/// `"1397/8/9"` (solar) or `"2018-10-31"` (gregorian) → `(year, (season_name, season), month, day)`.
///
/// Either separator is accepted for either calendar. Month and day must come out as
/// two digits, month in 1..=12 and day in 1..=31.
pub fn transform_numerical_date(
    text: &str,
    kind: Option<CalendarKind>,
) -> Result<(String, (&'static str, &'static str), String, String), ExtractError> {
    let malformed = || ExtractError::MalformedDate(s!(text));
    let kind = kind.unwrap_or_else(|| kind_from_separator(text));
    let parts: Vec<&str> = text.trim().split(['/', '-']).map(str::trim).collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(malformed());
    };
    let (year, month, day) = (transform_number(y)?, transform_number(m)?, transform_number(d)?);
    if month.len() != 2 || day.len() != 2 {
        return Err(malformed());
    }
    let month_number = month.parse::<u32>().map_err(|_| malformed())?;
    let day_number = day.parse::<u32>().map_err(|_| malformed())?;
    if !(1..=12).contains(&month_number) || !(1..=31).contains(&day_number) {
        return Err(malformed());
    }
    Ok((year, find_season(month_number, kind), month, day))
}

/// Local wall-clock time with the same two-digit fields as the page data.
pub fn current_time() -> Result<Time, ExtractError> {
    let now = Local::now();
    Ok(Time {
        hour: transform_number(&now.hour().to_string())?,
        minute: transform_number(&now.minute().to_string())?,
        second: transform_number(&now.second().to_string())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PERSIAN: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

    #[test]
    fn persian_digits_one_and_two_wide() {
        for n in 0..100u32 {
            let glyphs: String = n.to_string().chars()
                .map(|c| PERSIAN[c.to_digit(10).unwrap() as usize])
                .collect();
            assert_eq!(transform_number(&glyphs).unwrap(), format!("{n:02}"));
        }
    }

    #[test]
    fn arabic_indic_and_ascii_digits() {
        assert_eq!(transform_number("١٢").unwrap(), "12");
        assert_eq!(transform_number("٠").unwrap(), "00");
        assert_eq!(transform_number("7").unwrap(), "07");
        assert_eq!(transform_number("۱۳۹۷").unwrap(), "1397");
    }

    #[test]
    fn unknown_numeral_is_rejected() {
        assert_eq!(
            transform_number("۱a"),
            Err(ExtractError::UnknownNumeral { glyph: Some('a'), input: s!("۱a") })
        );
        assert!(transform_number(".").is_err());
        assert_eq!(
            transform_number(""),
            Err(ExtractError::UnknownNumeral { glyph: None, input: s!() })
        );
    }

    #[test]
    fn weekdays_resolve_in_table_order() {
        let farsi = ["شنبه", "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنجشنبه", "جمعه"];
        let names: Vec<String> = farsi.iter().map(|w| transform_weekday(w).unwrap()).collect();
        let expected: Vec<&str> = WEEKDAYS.iter().map(|(_, n)| *n).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn weekday_latin_passes_short_unknown_fails() {
        assert_eq!(transform_weekday("Saturday").unwrap(), "Saturday");
        assert_eq!(transform_weekday("ابج"), Err(ExtractError::UnknownWeekday(s!("ابج"))));
        assert!(transform_weekday("ابجد").is_err());
    }

    #[test]
    fn months_resolve_including_alef_madda() {
        let farsi = [
            ("فروردین", "Farvardin"), ("اردیبهشت", "Ordibehesht"), ("خرداد", "Khordad"),
            ("تیر", "Tir"), ("مرداد", "Mordad"), ("شهریور", "Shahrivar"),
            ("مهر", "Mehr"), ("آبان", "Aban"), ("آذر", "Azar"),
            ("دی", "Dey"), ("بهمن", "Bahman"), ("اسفند", "Esfand"),
        ];
        for (token, name) in farsi {
            assert_eq!(transform_month(token).unwrap(), name, "{token}");
        }
        // plain alef spelling of Aban
        assert_eq!(transform_month("ابان").unwrap(), "Aban");
    }

    #[test]
    fn month_latin_passes_unknown_fails() {
        assert_eq!(transform_month("October").unwrap(), "October");
        assert_eq!(transform_month("ژانویه"), Err(ExtractError::UnknownMonth(s!("ژانویه"))));
        assert!(transform_month("ا").is_err());
    }

    #[test]
    fn season_boundaries() {
        use CalendarKind::*;
        assert_eq!(find_season(1, Solar), ("Bahar", "01"));
        assert_eq!(find_season(4, Solar), ("Tabestan", "02"));
        assert_eq!(find_season(8, Solar), ("Pa'eez", "03"));
        assert_eq!(find_season(12, Solar), ("Zemestan", "04"));

        assert_eq!(find_season(3, Gregorian), ("Spring", "01"));
        assert_eq!(find_season(8, Gregorian), ("Summer", "02"));
        assert_eq!(find_season(11, Gregorian), ("Autumn", "03"));
        assert_eq!(find_season(12, Gregorian), ("Winter", "04"));
        assert_eq!(find_season(2, Gregorian), ("Winter", "04"));
    }

    #[test]
    fn human_date_farsi_and_latin() {
        let (w, date) = transform_date("چهارشنبه - ۹ آبان ۱۳۹۷").unwrap();
        assert_eq!(w, "4-Shanbeh");
        assert_eq!(date, (s!("1397"), s!("Aban"), s!("09")));

        let (w, date) = transform_date("Wednesday - 2018 31 October").unwrap();
        assert_eq!(w, "Wednesday");
        assert_eq!(date, (s!("2018"), s!("October"), s!("31")));

        assert!(matches!(transform_date("چهارشنبه ۹ آبان"), Err(ExtractError::MalformedDate(_))));
        assert!(matches!(transform_date("Friday - 2018 October"), Err(ExtractError::MalformedDate(_))));
    }

    #[test]
    fn numerical_date_picks_calendar_by_separator() {
        assert_eq!(
            transform_numerical_date("1397/8/9", None).unwrap(),
            (s!("1397"), ("Pa'eez", "03"), s!("08"), s!("09"))
        );
        assert_eq!(
            transform_numerical_date("۱۳۹۷/۱۲/۶", None).unwrap(),
            (s!("1397"), ("Zemestan", "04"), s!("12"), s!("06"))
        );
        assert_eq!(
            transform_numerical_date("2018-2-25", None).unwrap(),
            (s!("2018"), ("Winter", "04"), s!("02"), s!("25"))
        );
        assert!(transform_numerical_date("2018-10", None).is_err());
    }

    #[test]
    fn numerical_date_follows_given_calendar() {
        assert_eq!(
            transform_numerical_date("۱۳۹۷-۰۸-۰۹", Some(CalendarKind::Solar)).unwrap(),
            (s!("1397"), ("Pa'eez", "03"), s!("08"), s!("09"))
        );
        assert_eq!(
            transform_numerical_date("2018/12/1", Some(CalendarKind::Gregorian)).unwrap(),
            (s!("2018"), ("Winter", "04"), s!("12"), s!("01"))
        );
    }

    #[test]
    fn numerical_date_rejects_out_of_range_fields() {
        for text in ["1397/013/9", "1397/8/123", "1397/13/9", "1397/0/9", "1397/8/00", "1397/8/32"] {
            assert_eq!(
                transform_numerical_date(text, Some(CalendarKind::Solar)),
                Err(ExtractError::MalformedDate(s!(text))),
                "{text}"
            );
        }
    }

    #[test]
    fn current_time_is_two_digit_fields() {
        let t = current_time().unwrap();
        for f in [&t.hour, &t.minute, &t.second] {
            assert_eq!(f.len(), 2);
            assert!(f.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
