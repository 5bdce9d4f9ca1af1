use std::convert::TryFrom;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::{ensure_not_blank, Error, Result};

/// Parse exactly two ASCII digits.
fn parse_two_digits(raw: &str) -> Option<u8> {
    match raw.as_bytes() {
        [tens, units] if tens.is_ascii_digit() && units.is_ascii_digit() => {
            Some((tens - b'0') * 10 + (units - b'0'))
        }
        _ => None,
    }
}

// Time

/// An hour+minute struct that goes from *00:00* up to *24:00*, which can only
/// be used as the exclusive end of a day.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// First minute of a day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Exclusive upper bound of a day.
    pub const END_OF_DAY: Self = Self { hour: 24, minute: 0 };

    #[inline]
    const fn new_opt(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Create a new time, this fails if input values are out of range.
    ///
    /// ```
    /// use working_calendar_syntax::Time;
    ///
    /// assert!(Time::new(8, 30).is_ok());
    /// assert!(Time::new(24, 0).is_ok());
    /// assert!(Time::new(24, 1).is_err()); // only 24:00 is allowed after 23:59
    /// assert!(Time::new(12, 60).is_err());
    /// ```
    #[inline]
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        Self::new_opt(hour, minute).ok_or_else(|| {
            Error::invalid_argument(format!("{hour:02}:{minute:02} is not a time of the day"))
        })
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use working_calendar_syntax::Time;
    ///
    /// assert_eq!(Time::new(13, 15).unwrap().total_minutes(), 13 * 60 + 15);
    /// assert_eq!(Time::END_OF_DAY.total_minutes(), 1440);
    /// ```
    #[inline]
    pub fn total_minutes(self) -> u16 {
        u16::from(self.minute) + 60 * u16::from(self.hour)
    }

    /// Build a time from the total number of minutes from midnight and return
    /// `None` if the result is out of bounds.
    #[inline]
    pub fn from_total_minutes(minutes: u16) -> Option<Self> {
        let hour = u8::try_from(minutes / 60).ok()?;
        let minute = u8::try_from(minutes % 60).ok()?;
        Self::new_opt(hour, minute)
    }

    /// Parse a `HH:MM` string, returning `None` if it is malformed.
    pub fn try_parse(value: &str) -> Option<Self> {
        let (hour, minute) = value.split_once(':')?;
        Self::new_opt(parse_two_digits(hour)?, parse_two_digits(minute)?)
    }

    /// Parse a `HH:MM` string.
    ///
    /// ```
    /// use working_calendar_syntax::{Error, Time};
    ///
    /// assert_eq!(Time::parse("08:05").unwrap(), Time::new(8, 5).unwrap());
    /// assert!(matches!(Time::parse(""), Err(Error::NullOrEmptyArgument(_))));
    /// assert!(matches!(Time::parse("8:05"), Err(Error::InvalidFormat { .. })));
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        ensure_not_blank(value, "value")?;
        Self::try_parse(value).ok_or_else(|| Error::invalid_format("time", value))
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for Time {
    #[inline]
    fn from(time: NaiveTime) -> Self {
        // Chrono guarantees hour < 24 and minute < 60
        Self { hour: time.hour() as u8, minute: time.minute() as u8 }
    }
}

impl TryFrom<Time> for NaiveTime {
    type Error = Error;

    #[inline]
    fn try_from(time: Time) -> Result<Self> {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0)
            .ok_or_else(|| Error::invalid_argument(format!("{time} has no wall-clock equivalent")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// TimePeriod

/// A working period in a day, `begin` is inclusive and `end` is exclusive.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimePeriod {
    begin: Time,
    end: Time,
}

impl TimePeriod {
    /// The whole day, from *00:00* to *24:00*.
    pub const ALL_DAY: Self = Self { begin: Time::MIDNIGHT, end: Time::END_OF_DAY };

    /// Create a new period, which can't end before it begins.
    ///
    /// ```
    /// use working_calendar_syntax::{Time, TimePeriod};
    ///
    /// let begin = Time::new(10, 0).unwrap();
    /// let end = Time::new(12, 0).unwrap();
    /// assert!(TimePeriod::new(begin, end).is_ok());
    /// assert!(TimePeriod::new(end, begin).is_err());
    /// assert!(TimePeriod::new(Time::END_OF_DAY, Time::END_OF_DAY).is_err());
    /// ```
    pub fn new(begin: Time, end: Time) -> Result<Self> {
        if begin == Time::END_OF_DAY {
            return Err(Error::invalid_argument(
                "a period can't begin at 24:00, which is only the end of a day",
            ));
        }

        if begin > end {
            return Err(Error::invalid_argument(format!(
                "period begins at {begin} which is after its end at {end}"
            )));
        }

        Ok(Self { begin, end })
    }

    /// Create a new period from hours and minutes of its bounds.
    pub fn from_hm(begin_hour: u8, begin_minute: u8, end_hour: u8, end_minute: u8) -> Result<Self> {
        Self::new(
            Time::new(begin_hour, begin_minute)?,
            Time::new(end_hour, end_minute)?,
        )
    }

    #[inline]
    pub fn begin(self) -> Time {
        self.begin
    }

    #[inline]
    pub fn end(self) -> Time {
        self.end
    }

    #[inline]
    pub fn total_minutes(self) -> u16 {
        self.end.total_minutes() - self.begin.total_minutes()
    }

    /// A period is empty if it begins when it ends.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.begin == self.end
    }

    #[inline]
    pub fn duration(self) -> Duration {
        Duration::minutes(self.total_minutes().into())
    }

    /// Check if two periods share more than a bound. This relation is
    /// symmetric and empty periods never overlap anything.
    ///
    /// ```
    /// use working_calendar_syntax::TimePeriod;
    ///
    /// let morning = TimePeriod::parse("10:00-12:00").unwrap();
    /// let noon = TimePeriod::parse("11:00-13:00").unwrap();
    /// let lunch = TimePeriod::parse("12:00-12:30").unwrap();
    /// assert!(morning.overlaps(&noon));
    /// assert!(!morning.overlaps(&lunch));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.begin < other.end
            && other.begin < self.end
    }

    /// Parse a `HH:MM-HH:MM` string, returning `None` if it is malformed.
    pub fn try_parse(value: &str) -> Option<Self> {
        let (begin, end) = value.split_once('-')?;
        let begin = Time::try_parse(begin)?;
        let end = Time::try_parse(end)?;
        (begin != Time::END_OF_DAY && begin <= end).then_some(Self { begin, end })
    }

    /// Parse a `HH:MM-HH:MM` string.
    pub fn parse(value: &str) -> Result<Self> {
        ensure_not_blank(value, "value")?;
        Self::try_parse(value).ok_or_else(|| Error::invalid_format("time period", value))
    }

    /// Parse a list of periods joined by `separator`, each segment must be a
    /// valid period.
    pub fn try_parse_multi(values: &str, separator: &str) -> Option<Vec<Self>> {
        if separator.is_empty() {
            return None;
        }

        values.split(separator).map(Self::try_parse).collect()
    }

    /// Parse a list of periods joined by `separator`, failing on the first
    /// invalid segment.
    ///
    /// ```
    /// use working_calendar_syntax::TimePeriod;
    ///
    /// let periods = TimePeriod::parse_multi("08:30-13:30,14:30-17:30", ",").unwrap();
    /// assert_eq!(periods.len(), 2);
    /// assert!(TimePeriod::parse_multi("08:30-13:30,,14:30-17:30", ",").is_err());
    /// ```
    pub fn parse_multi(values: &str, separator: &str) -> Result<Vec<Self>> {
        ensure_not_blank(values, "values")?;

        if separator.is_empty() {
            return Err(Error::NullOrEmptyArgument("separator"));
        }

        values
            .split(separator)
            .map(|value| {
                Self::try_parse(value).ok_or_else(|| Error::invalid_format("time period", value))
            })
            .collect()
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

impl Debug for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for TimePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
