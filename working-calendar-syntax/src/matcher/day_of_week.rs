use chrono::Weekday;

use crate::error::Result;
use crate::matcher::number::{Domain, NumberMatcher};

/// Days of the week, numbered from Sunday (0) to Saturday (6).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DaysOfWeek;

impl Domain for DaysOfWeek {
    const NAME: &'static str = "day of week";
    const MIN: Option<i32> = Some(0);
    const MAX: Option<i32> = Some(6);
}

/// Select days of the week, weeks start on Sunday so that `1..5` stands for
/// Monday to Friday.
///
/// ```
/// use chrono::Weekday;
/// use working_calendar_syntax::{DayOfWeekMatcher, MatcherSyntax};
///
/// let workweek = DayOfWeekMatcher::weekdays(Weekday::Mon, Weekday::Fri).unwrap();
/// assert_eq!(workweek, DayOfWeekMatcher::parse("1..5").unwrap());
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DayOfWeekMatcher(NumberMatcher<DaysOfWeek>);

impl DayOfWeekMatcher {
    /// Match all days from `first` to `last` in a week starting on Sunday.
    pub fn weekdays(first: Weekday, last: Weekday) -> Result<Self> {
        Self::range(Some(weekday_index(first)), Some(weekday_index(last)))
    }
}

#[inline]
fn weekday_index(wday: Weekday) -> i32 {
    wday.num_days_from_sunday() as i32
}

impl_number_field_matcher!(
    DayOfWeekMatcher,
    DaysOfWeek,
    "day of week matcher",
    is_one_weekday,
    |date| weekday_index(date.weekday())
);
