// src/config/options.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub display: DisplayOptions,
    pub notify: NotifyOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            display: DisplayOptions::default(),
            notify: NotifyOptions::default(),
        }
    }
}

/// Which sections are written to the terminal, and whether in color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub solar: bool,
    pub gregorian: bool,
    pub time: bool,
    pub calendar: bool,
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            solar: true,
            gregorian: true,
            time: true,
            calendar: true,
            color: true,
        }
    }
}

impl DisplayOptions {
    pub fn any(&self) -> bool {
        self.solar || self.gregorian || self.time || self.calendar
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyOptions {
    pub quote: bool,
    pub holidays: bool,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self { quote: true, holidays: true }
    }
}

impl AppOptions {
    /// Footer is printed when anything at all was shown or sent.
    pub fn wants_footer(&self) -> bool {
        self.display.any() || self.notify.quote
    }
}
