// src/config/consts.rs

// Net config
pub const HOST: &str = "time.ir";
pub const MAIN_PATH: &str = "/";
pub const FALLBACK_PATH: &str = "/fa/main";
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:50.0) Gecko/20100101 Firefox/50.0";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
// A full page is ~80K; anything under this is an error page or a truncated body.
pub const MIN_BODY_LEN: usize = 10 * 1024;

// Local cache (under the user cache dir)
pub const CACHE_SUBDIR: &str = "tir";
pub const CACHE_FILE: &str = "page.cache";
pub const LOG_FILE: &str = "debug.log";

// Page anchors
pub const TOP_WRAPPER: &str = "topWrapper";
pub const TODAY_DATE: &str = "todayDate";
pub const TODAY_ROWS: &str = "row";
pub const TODAY_SOLAR_ROW: &str = "today-shamsi";
pub const TODAY_GREGORIAN_ROW: &str = "today-gregorian";
pub const DATE_TEXT: &str = "show date";
pub const DATE_NUMERAL: &str = "show numeral";
pub const CALENDAR_WRAPPER: &str = "calendarWrapper";
pub const CALENDAR_CONTAINER: &str = "CalendarContainer";
pub const EVENT_CALENDAR: &str = "eventCalendar";
pub const MAIN_CALENDAR: &str = "mainCalendar";
pub const DAY_LIST: &str = "dayList";
pub const RANDOM_QUOTE: &str = "randomQuote";
pub const QUOTE_AUTHOR: &str = "quoteAuthor";
pub const QUOTE_TEXT: &str = "quoteText";

// Notifications
pub const NOTIFY_APP: &str = "time.ir";
pub const NOTIFY_COMMAND: &str = "notify-send";
pub const HOLIDAY_NOTICE_MS: u32 = 5_000;

pub const ISSUES_URL: &str = "https://github.com/Pouriya-Jahanbakhsh/tir/issues/new";
