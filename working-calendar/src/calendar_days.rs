//! Days generated from a [`WorkingCalendar`](crate::WorkingCalendar).

use std::fmt::Display;

use chrono::{Duration, NaiveDate};

use working_calendar_syntax::{DayRule, TimePeriod};

// CalendarDay

/// Working status of a single date.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalendarDay {
    date: NaiveDate,
    is_working_day: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    description: Option<String>,
    working_periods: Vec<TimePeriod>,
}

impl CalendarDay {
    /// Status of a date as decided by the rule that matched it.
    pub(crate) fn from_rule(date: NaiveDate, rule: &DayRule) -> Self {
        Self {
            date,
            is_working_day: rule.is_working_day(),
            description: rule.description().map(ToString::to_string),
            working_periods: rule.time_periods().to_vec(),
        }
    }

    /// Status of a date that no rule applies to.
    pub(crate) fn non_working(date: NaiveDate) -> Self {
        Self {
            date,
            is_working_day: false,
            description: None,
            working_periods: Vec::new(),
        }
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn is_working_day(&self) -> bool {
        self.is_working_day
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Working periods of the day, in the order they were written in.
    #[inline]
    pub fn working_periods(&self) -> &[TimePeriod] {
        &self.working_periods
    }

    /// Total duration of the working periods of the day.
    pub fn working_duration(&self) -> Duration {
        self.working_periods
            .iter()
            .map(|period| period.duration())
            .fold(Duration::zero(), |acc, duration| acc + duration)
    }
}

impl Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_working_day { "working" } else { "non-working" };
        write!(f, "{} {status}", self.date)?;

        if let Some(description) = &self.description {
            write!(f, " [[{description}]]")?;
        }

        if let Some((first, tail)) = self.working_periods.split_first() {
            write!(f, " {first}")?;

            for period in tail {
                write!(f, ",{period}")?;
            }
        }

        Ok(())
    }
}

// CalendarDays

/// Consecutive days of a calendar, sorted by date.
///
/// With the `serde` feature, days can be exported as JSON:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use chrono::NaiveDate;
/// use working_calendar::WorkingCalendar;
///
/// let calendar = WorkingCalendar::parse("* * * 1..5 [[Weekday]] 08:30-12:30").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// let days = calendar.days(date, date).unwrap();
///
/// assert_eq!(
///     days.to_json(false).unwrap(),
///     r#"[{"date":"2024-05-15","isWorkingDay":true,"description":"Weekday","workingPeriods":[{"begin":"08:30","end":"12:30"}]}]"#,
/// );
/// # }
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CalendarDays(Vec<CalendarDay>);

impl CalendarDays {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[CalendarDay] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.0.iter()
    }

    /// Get the day for a given date, if it is part of this list.
    pub fn get(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.0
            .binary_search_by_key(&date, CalendarDay::date)
            .ok()
            .map(|index| &self.0[index])
    }

    pub fn working_days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.0.iter().filter(|day| day.is_working_day)
    }

    /// Total working duration over all days.
    pub fn working_duration(&self) -> Duration {
        self.0
            .iter()
            .map(CalendarDay::working_duration)
            .fold(Duration::zero(), |acc, duration| acc + duration)
    }

    /// Export days as a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<Vec<CalendarDay>> for CalendarDays {
    fn from(days: Vec<CalendarDay>) -> Self {
        Self(days)
    }
}

impl From<CalendarDays> for Vec<CalendarDay> {
    fn from(days: CalendarDays) -> Self {
        days.0
    }
}

impl FromIterator<CalendarDay> for CalendarDays {
    fn from_iter<I: IntoIterator<Item = CalendarDay>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CalendarDays {
    type Item = CalendarDay;
    type IntoIter = std::vec::IntoIter<CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CalendarDays {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for CalendarDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in &self.0 {
            writeln!(f, "{day}")?;
        }

        Ok(())
    }
}
