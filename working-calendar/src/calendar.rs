use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;

use working_calendar_syntax::{DateMatcher, DayRule};

use crate::calendar_days::{CalendarDay, CalendarDays};
use crate::error::{Error, Result};

/// What to do with a date that no rule applies to.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum UnmatchedDay {
    /// The date is a non-working day without description.
    #[default]
    NonWorking,
    /// Evaluating the date fails with [`Error::UnmatchedDay`].
    Reject,
}

// WorkingCalendar

/// An ordered list of day rules, the last rule matching a date decides of
/// its working status.
///
/// Note that rules are wrapped by an `Arc` so this is cheap to clone.
///
/// ```
/// use chrono::NaiveDate;
/// use working_calendar::WorkingCalendar;
///
/// let calendar = WorkingCalendar::parse(
///     "* * * 1..5 [[Weekday]] 08:30-13:30,14:30-17:30
///      * 12 25 * [[Christmas]]",
/// )
/// .unwrap();
///
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// let day = calendar.day_at(christmas).unwrap();
/// assert!(!day.is_working_day());
/// assert_eq!(day.description(), Some("Christmas"));
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct WorkingCalendar {
    rules: Arc<[DayRule]>,
    unmatched_day: UnmatchedDay,
}

impl WorkingCalendar {
    /// Build a calendar from rules sorted by increasing priority.
    pub fn new(rules: impl IntoIterator<Item = DayRule>) -> Self {
        Self { rules: rules.into_iter().collect(), unmatched_day: UnmatchedDay::default() }
    }

    /// Parse a calendar with one rule per line, blank lines and lines
    /// starting with `#` are ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let rules: Vec<_> = raw
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim_start();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(index, line)| {
                DayRule::parse(line).map_err(|source| Error::Rule { line: index + 1, source })
            })
            .collect::<Result<_>>()?;

        #[cfg(feature = "log")]
        log::debug!("Loaded a calendar of {} rules", rules.len());

        Ok(Self::new(rules))
    }

    // --
    // -- Builder Methods
    // --

    /// Set the behavior for dates that no rule applies to.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use working_calendar::{Error, UnmatchedDay, WorkingCalendar};
    ///
    /// let calendar = WorkingCalendar::parse("* * * 1..5 [[]] 08:00-18:00")
    ///     .unwrap()
    ///     .with_unmatched_day(UnmatchedDay::Reject);
    ///
    /// let sunday = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
    /// assert_eq!(calendar.day_at(sunday), Err(Error::UnmatchedDay(sunday)));
    /// ```
    pub fn with_unmatched_day(self, unmatched_day: UnmatchedDay) -> Self {
        Self { unmatched_day, ..self }
    }

    // --
    // -- Getters
    // --

    #[inline]
    pub fn rules(&self) -> &[DayRule] {
        &self.rules
    }

    #[inline]
    pub fn unmatched_day(&self) -> UnmatchedDay {
        self.unmatched_day
    }

    // --
    // -- Evaluation
    // --

    /// Get the rule deciding of the status of a date, which is the last one
    /// matching it.
    pub fn matching_rule(&self, date: NaiveDate) -> Option<&DayRule> {
        self.rules.iter().rev().find(|rule| rule.matches(&date))
    }

    /// Get the working status of a date.
    pub fn day_at(&self, date: NaiveDate) -> Result<CalendarDay> {
        if let Some(rule) = self.matching_rule(date) {
            return Ok(CalendarDay::from_rule(date, rule));
        }

        match self.unmatched_day {
            UnmatchedDay::NonWorking => {
                #[cfg(feature = "log")]
                log::trace!("No rule matches {date}, considered as a non-working day");

                Ok(CalendarDay::non_working(date))
            }
            UnmatchedDay::Reject => Err(Error::UnmatchedDay(date)),
        }
    }

    /// Iterate over the days of the inclusive range `start..=end`.
    ///
    /// Days are evaluated lazily, and nothing is yielded if `start` is after
    /// `end`.
    pub fn iter_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = Result<CalendarDay>> + Send + Sync {
        let calendar = self.clone();

        start
            .iter_days()
            .take_while(move |date| *date <= end)
            .map(move |date| calendar.day_at(date))
    }

    /// Get the working status of all days of the inclusive range
    /// `start..=end`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use working_calendar::WorkingCalendar;
    ///
    /// let calendar = WorkingCalendar::parse("* * * 1..5 [[]] 08:00-18:00").unwrap();
    /// let start = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 5, 19).unwrap();
    ///
    /// let days = calendar.days(start, end).unwrap();
    /// assert_eq!(days.len(), 7);
    /// assert_eq!(days.working_days().count(), 5);
    /// assert!(calendar.days(end, start).is_err());
    /// ```
    pub fn days(&self, start: NaiveDate, end: NaiveDate) -> Result<CalendarDays> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }

        self.iter_range(start, end).collect()
    }
}

impl FromStr for WorkingCalendar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for WorkingCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rule in self.rules.iter() {
            writeln!(f, "{rule}")?;
        }

        Ok(())
    }
}
