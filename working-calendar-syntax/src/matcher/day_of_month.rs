use crate::matcher::number::{Domain, NumberMatcher};

/// Days of a month, from 1 to 31.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DaysOfMonth;

impl Domain for DaysOfMonth {
    const NAME: &'static str = "day of month";
    const MIN: Option<i32> = Some(1);
    const MAX: Option<i32> = Some(31);
}

/// Select days of the month.
///
/// Days that don't exist in a month are allowed, they will just never match
/// for this month: `31` only matches seven months of the year.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DayOfMonthMatcher(NumberMatcher<DaysOfMonth>);

impl_number_field_matcher!(
    DayOfMonthMatcher,
    DaysOfMonth,
    "day of month matcher",
    is_one_day,
    |date| date.day() as i32
);
