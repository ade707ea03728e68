// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod log;
pub mod notify;
pub mod numerals;
pub mod render;
pub mod runner;
pub mod specs;
pub mod store;

pub use data::{Calendar, Date, Day, Quote, TodayDates};
pub use error::{Error, ExtractError, FetchError};
