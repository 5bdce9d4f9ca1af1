#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod calendar;
pub mod calendar_days;
pub mod error;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::{UnmatchedDay, WorkingCalendar};
pub use crate::calendar_days::{CalendarDay, CalendarDays};
pub use crate::error::Error;
pub use working_calendar_syntax::{DateMatcher, DayRule, Time, TimePeriod};
