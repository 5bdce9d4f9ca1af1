#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod matcher;
pub mod rule;
pub mod time;

mod display;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use matcher::{
    DateMatcher, DayOfMonthMatcher, DayOfWeekMatcher, MatcherSyntax, MonthMatcher, YearMatcher,
};
pub use parser::{to_day_pattern_string, DayRuleParser};
pub use rule::DayRule;
pub use time::{Time, TimePeriod};
