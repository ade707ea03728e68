// src/data.rs
//
// Typed records produced by one extraction pass over one page.
// All numeric fields are ASCII digit strings, zero-padded to at least two places.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarKind {
    Solar,
    Gregorian,
}

/// "Today" in one calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Date {
    pub year: String,
    /// "01".."04"
    pub season: String,
    pub season_name: String,
    pub month: String,
    pub month_name: String,
    pub day: String,
    pub weekday: String,
}

impl Date {
    /// 1-based season index, for picking a season color.
    pub fn season_index(&self) -> usize {
        self.season.parse().unwrap_or(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodayDates {
    pub solar: Date,
    pub gregorian: Date,
}

/// One cell of the month grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Day {
    pub is_disabled: bool,
    pub is_today: bool,
    pub is_holiday: bool,
    pub solar: String,
    pub gregorian: String,
    pub qamari: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub author: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Time {
    pub hour: String,
    pub minute: String,
    pub second: String,
}

/// Everything read from one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calendar {
    pub dates: TodayDates,
    pub days: Vec<Day>,
    pub quote: Quote,
}

impl Calendar {
    pub fn today(&self) -> Option<&Day> {
        self.days.iter().find(|d| d.is_today)
    }
}
