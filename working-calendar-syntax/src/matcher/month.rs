use crate::matcher::number::{Domain, NumberMatcher};

/// Months of the year, from January (1) to December (12).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Months;

impl Domain for Months {
    const NAME: &'static str = "month";
    const MIN: Option<i32> = Some(1);
    const MAX: Option<i32> = Some(12);
}

/// Select months of the year.
///
/// ```
/// use chrono::NaiveDate;
/// use working_calendar_syntax::{DateMatcher, MatcherSyntax, MonthMatcher};
///
/// let summer = MonthMatcher::parse("6..8").unwrap();
/// assert!(summer.matches(&NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()));
/// assert!(!summer.matches(&NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MonthMatcher(NumberMatcher<Months>);

impl_number_field_matcher!(
    MonthMatcher,
    Months,
    "month matcher",
    is_one_month,
    |date| date.month() as i32
);
