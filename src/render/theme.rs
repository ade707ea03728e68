// src/render/theme.rs
use colored::{Color, ColoredString, Colorize};

/// One foreground color, optionally bold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub bold: bool,
}

impl Paint {
    pub const fn new(color: Color, bold: bool) -> Self {
        Self { color, bold }
    }

    pub fn apply(&self, text: &str) -> ColoredString {
        let s = text.color(self.color);
        if self.bold { s.bold() } else { s }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Disabled,
    Holiday,
    Today,
    /// Solar number of the today cell.
    Solar,
    /// Secondary (qamari / gregorian) numbers.
    OtherDays,
}

#[derive(Clone, Debug)]
pub struct CalendarTheme {
    pub disabled: Paint,
    pub holiday: Paint,
    pub today: Paint,
    pub normal: Paint,
    pub solar: Paint,
    pub other_days: Paint,
}

impl CalendarTheme {
    pub fn paint(&self, tone: Tone) -> Paint {
        match tone {
            Tone::Normal => self.normal,
            Tone::Disabled => self.disabled,
            Tone::Holiday => self.holiday,
            Tone::Today => self.today,
            Tone::Solar => self.solar,
            Tone::OtherDays => self.other_days,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DateTheme {
    pub year: Paint,
    /// Spring, Summer, Autumn, Winter
    pub seasons: [Paint; 4],
    pub month: Paint,
    pub month_name: Paint,
    pub weekday: Paint,
    pub day: Paint,
}

#[derive(Clone, Debug)]
pub struct TimeTheme {
    pub hour: Paint,
    pub minute: Paint,
    pub second: Paint,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub calendar: CalendarTheme,
    pub date: DateTheme,
    pub time: TimeTheme,
    pub muted: Paint,
    pub link: Paint,
}

impl Default for Theme {
    fn default() -> Self {
        let red = Paint::new(Color::Red, true);
        Self {
            calendar: CalendarTheme {
                disabled: Paint::new(Color::BrightBlack, true),
                holiday: red,
                today: Paint::new(Color::Green, true),
                normal: Paint::new(Color::White, true),
                solar: Paint::new(Color::Green, true),
                other_days: Paint::new(Color::White, false),
            },
            date: DateTheme {
                year: Paint::new(Color::Cyan, false),
                seasons: [
                    Paint::new(Color::Green, true),
                    red,
                    Paint::new(Color::Yellow, true),
                    Paint::new(Color::Cyan, true),
                ],
                month: Paint::new(Color::Yellow, true),
                month_name: Paint::new(Color::Magenta, true),
                weekday: Paint::new(Color::Blue, true),
                day: Paint::new(Color::Cyan, true),
            },
            time: TimeTheme { hour: red, minute: red, second: red },
            muted: Paint::new(Color::BrightBlack, true),
            link: Paint::new(Color::Cyan, false),
        }
    }
}
