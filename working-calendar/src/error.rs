use std::fmt::Display;

use chrono::NaiveDate;

pub use working_calendar_syntax::Error as ParserError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A line of a rule file could not be parsed, lines are numbered from 1.
    Rule { line: usize, source: ParserError },
    /// No rule applies to this date while the calendar rejects unmatched
    /// days.
    UnmatchedDay(NaiveDate),
    /// The start of a range of dates is after its end.
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rule { line, source } => write!(f, "invalid rule at line {line}: {source}"),
            Self::UnmatchedDay(date) => write!(f, "no rule matches {date}"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range of dates: {start} is after {end}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule { source, .. } => Some(source),
            Self::UnmatchedDay(_) | Self::InvalidRange { .. } => None,
        }
    }
}
