use std::fmt::Display;
use std::str::FromStr;

use chrono::Datelike;

use crate::error::{Error, Result};
use crate::matcher::number::{Domain, PeriodicMatcher, RangeMatcher};
use crate::matcher::{DateMatcher, MatcherSyntax};

/// Years are not bounded.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Years;

impl Domain for Years {
    const NAME: &'static str = "year";
    const MIN: Option<i32> = None;
    const MAX: Option<i32> = None;
}

/// Check if a year of the proleptic Gregorian calendar has a 29th of
/// February.
///
/// ```
/// use working_calendar_syntax::matcher::year::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const LEAP_SUFFIX: &str = "/Leap";
const NOT_LEAP_SUFFIX: &str = "/NotLeap";

/// Select years, optionally restricted to leap or non-leap years.
///
/// ```
/// use chrono::NaiveDate;
/// use working_calendar_syntax::{DateMatcher, MatcherSyntax, YearMatcher};
///
/// let leap = YearMatcher::parse("2000..2100/Leap").unwrap();
/// assert!(leap.matches(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// assert!(!leap.matches(&NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
///
/// // A single year is either a leap year or not
/// assert!(YearMatcher::parse("2024/Leap").is_err());
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum YearMatcher {
    Range(RangeMatcher<Years>),
    Periodic(PeriodicMatcher<Years>),
    Leap(RangeMatcher<Years>),
    NotLeap(RangeMatcher<Years>),
}

impl YearMatcher {
    #[inline]
    pub fn range(left: Option<i32>, right: Option<i32>) -> Result<Self> {
        RangeMatcher::new(left, right).map(Self::Range)
    }

    #[inline]
    pub fn periodic(left: i32, right: Option<i32>, period: u32) -> Result<Self> {
        PeriodicMatcher::new(left, right, period).map(Self::Periodic)
    }

    #[inline]
    pub fn wildcard() -> Self {
        Self::Range(RangeMatcher::wildcard())
    }

    /// Match leap years within a range of multiple years.
    #[inline]
    pub fn leap(left: Option<i32>, right: Option<i32>) -> Result<Self> {
        multi_year_range(left, right).map(Self::Leap)
    }

    /// Match non-leap years within a range of multiple years.
    #[inline]
    pub fn not_leap(left: Option<i32>, right: Option<i32>) -> Result<Self> {
        multi_year_range(left, right).map(Self::NotLeap)
    }

    pub fn matches_year(&self, year: i32) -> bool {
        match self {
            Self::Range(range) => range.matches(year),
            Self::Periodic(periodic) => periodic.matches(year),
            Self::Leap(range) => range.matches(year) && is_leap_year(year),
            Self::NotLeap(range) => range.matches(year) && !is_leap_year(year),
        }
    }

    pub fn is_one_value(&self) -> bool {
        match self {
            Self::Range(range) => range.is_one_value(),
            Self::Periodic(periodic) => periodic.is_one_value(),
            Self::Leap(_) | Self::NotLeap(_) => false,
        }
    }

    #[inline]
    pub fn is_one_year(&self) -> bool {
        self.is_one_value()
    }

    fn try_parse_leap(value: &str) -> Option<Self> {
        try_parse_multi_year_range(value.strip_suffix(LEAP_SUFFIX)?).map(Self::Leap)
    }

    fn try_parse_not_leap(value: &str) -> Option<Self> {
        try_parse_multi_year_range(value.strip_suffix(NOT_LEAP_SUFFIX)?).map(Self::NotLeap)
    }

    fn try_parse_periodic(value: &str) -> Option<Self> {
        PeriodicMatcher::try_parse(value).map(Self::Periodic)
    }

    fn try_parse_range(value: &str) -> Option<Self> {
        RangeMatcher::try_parse(value).map(Self::Range)
    }
}

fn multi_year_range(left: Option<i32>, right: Option<i32>) -> Result<RangeMatcher<Years>> {
    let range = RangeMatcher::new(left, right)?;

    if range.is_one_value() {
        return Err(Error::invalid_argument(
            "leap qualification requires a range of multiple years",
        ));
    }

    Ok(range)
}

fn try_parse_multi_year_range(value: &str) -> Option<RangeMatcher<Years>> {
    RangeMatcher::try_parse(value).filter(|range| !range.is_one_value())
}

impl DateMatcher for YearMatcher {
    #[inline]
    fn matches<D: Datelike>(&self, date: &D) -> bool {
        self.matches_year(date.year())
    }
}

impl MatcherSyntax for YearMatcher {
    const KIND: &'static str = "year matcher";

    /// Try the leap qualifiers first, as their suffix could be mistaken for a
    /// period, then fallback to periodic and range syntaxes.
    fn try_parse(value: &str) -> Option<Self> {
        const PARSERS: [fn(&str) -> Option<YearMatcher>; 4] = [
            YearMatcher::try_parse_leap,
            YearMatcher::try_parse_not_leap,
            YearMatcher::try_parse_periodic,
            YearMatcher::try_parse_range,
        ];

        PARSERS.iter().find_map(|parse| parse(value))
    }
}

impl FromStr for YearMatcher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as MatcherSyntax>::parse(s)
    }
}

impl Display for YearMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range(range) => write!(f, "{range}"),
            Self::Periodic(periodic) => write!(f, "{periodic}"),
            Self::Leap(range) => write!(f, "{range}{LEAP_SUFFIX}"),
            Self::NotLeap(range) => write!(f, "{range}{NOT_LEAP_SUFFIX}"),
        }
    }
}
