use std::fmt::Display;
use std::str::FromStr;

use chrono::Datelike;

use crate::display::write_selector;
use crate::error::{Error, Result};
use crate::matcher::{
    DateMatcher, DayOfMonthMatcher, DayOfWeekMatcher, MonthMatcher, YearMatcher,
};
use crate::parser::DayRuleParser;
use crate::time::TimePeriod;

// DayRule

/// A rule selecting days through their date fields, together with the
/// working periods of selected days.
///
/// Matchers of a same field are combined with a logical OR, while each field
/// must be matched for the rule to apply to a date. A field with no matcher
/// puts no constraint on dates.
///
/// ```
/// use chrono::NaiveDate;
/// use working_calendar_syntax::{DateMatcher, DayRule};
///
/// let rule: DayRule = "* * * 1..5 [[Weekday]] 08:30-13:30,14:30-17:30".parse().unwrap();
/// let wednesday = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2024, 5, 18).unwrap();
/// assert!(rule.matches(&wednesday));
/// assert!(!rule.matches(&saturday));
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DayRule {
    description: Option<String>,
    years: Vec<YearMatcher>,
    months: Vec<MonthMatcher>,
    days_of_month: Vec<DayOfMonthMatcher>,
    days_of_week: Vec<DayOfWeekMatcher>,
    time_periods: Vec<TimePeriod>,
}

impl DayRule {
    /// Create a new rule, a blank description is discarded.
    ///
    /// The description must be written back between `[[` and `]]` on a
    /// single line, so it can't hold a line break or a `]]` followed by
    /// something that reads as working periods or a comment.
    ///
    /// ```
    /// use working_calendar_syntax::DayRule;
    ///
    /// let make = |desc: &str| DayRule::new(Some(desc.to_string()), vec![], vec![], vec![], vec![], vec![]);
    /// assert!(make("See note [1]").is_ok());
    /// assert!(make("Closed]] # or not").is_err());
    /// assert!(make("Two\nlines").is_err());
    /// ```
    pub fn new(
        description: Option<String>,
        years: Vec<YearMatcher>,
        months: Vec<MonthMatcher>,
        days_of_month: Vec<DayOfMonthMatcher>,
        days_of_week: Vec<DayOfWeekMatcher>,
        time_periods: Vec<TimePeriod>,
    ) -> Result<Self> {
        let description = description.filter(|desc| !desc.trim().is_empty());

        if let Some(description) = &description {
            check_description(description)?;
        }

        Ok(Self {
            description,
            years,
            months,
            days_of_month,
            days_of_week,
            time_periods,
        })
    }

    /// Parse a day rule expression, see [`DayRuleParser`] for the syntax.
    #[inline]
    pub fn parse(line: &str) -> Result<Self> {
        DayRuleParser::parse(line)
    }

    #[inline]
    pub fn try_parse(line: &str) -> Option<Self> {
        DayRuleParser::try_parse(line)
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn years(&self) -> &[YearMatcher] {
        &self.years
    }

    #[inline]
    pub fn months(&self) -> &[MonthMatcher] {
        &self.months
    }

    #[inline]
    pub fn days_of_month(&self) -> &[DayOfMonthMatcher] {
        &self.days_of_month
    }

    #[inline]
    pub fn days_of_week(&self) -> &[DayOfWeekMatcher] {
        &self.days_of_week
    }

    #[inline]
    pub fn time_periods(&self) -> &[TimePeriod] {
        &self.time_periods
    }

    /// A day selected by this rule is a working day if it has at least one
    /// working period.
    #[inline]
    pub fn is_working_day(&self) -> bool {
        !self.time_periods.is_empty()
    }

    /// Get the date fields of this rule, which display in canonical form.
    #[inline]
    pub fn pattern(&self) -> DayPattern<'_> {
        DayPattern {
            years: &self.years,
            months: &self.months,
            days_of_month: &self.days_of_month,
            days_of_week: &self.days_of_week,
        }
    }
}

fn check_description(description: &str) -> Result<()> {
    if description.contains(['\n', '\r']) {
        return Err(Error::invalid_argument(
            "a description can't span over multiple lines",
        ));
    }

    let ends_early = description
        .char_indices()
        .filter(|(index, _)| description[*index..].starts_with("]]"))
        .any(|(index, _)| {
            let rest = description[index + 2..].trim_start();
            rest.starts_with('#') || starts_with_period(rest)
        });

    if ends_early {
        return Err(Error::invalid_argument(format!(
            "description `{description}` would be cut at its `]]`"
        )));
    }

    Ok(())
}

/// Check if a text starts like a `HH:MM-` working period.
fn starts_with_period(text: &str) -> bool {
    matches!(
        text.as_bytes(),
        [h1, h2, b':', m1, m2, b'-', ..]
            if [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
    )
}

impl DateMatcher for DayRule {
    fn matches<D: Datelike>(&self, date: &D) -> bool {
        self.years.as_slice().matches(date)
            && self.months.as_slice().matches(date)
            && self.days_of_month.as_slice().matches(date)
            && self.days_of_week.as_slice().matches(date)
    }
}

impl FromStr for DayRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for DayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())?;

        if let Some(description) = &self.description {
            write!(f, " [[{description}]]")?;
        }

        if let Some((first, tail)) = self.time_periods.split_first() {
            write!(f, " {first}")?;

            for period in tail {
                write!(f, ",{period}")?;
            }
        }

        Ok(())
    }
}

// DayPattern

/// Date fields of a [`DayRule`].
#[derive(Clone, Copy, Debug)]
pub struct DayPattern<'r> {
    pub years: &'r [YearMatcher],
    pub months: &'r [MonthMatcher],
    pub days_of_month: &'r [DayOfMonthMatcher],
    pub days_of_week: &'r [DayOfWeekMatcher],
}

impl Display for DayPattern<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_selector(f, self.years)?;
        write!(f, " ")?;
        write_selector(f, self.months)?;
        write!(f, " ")?;
        write_selector(f, self.days_of_month)?;
        write!(f, " ")?;
        write_selector(f, self.days_of_week)
    }
}
