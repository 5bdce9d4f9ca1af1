use crate::error::Error;
use crate::{date, UnmatchedDay, WorkingCalendar};

const WEEKDAYS: &str = "* * * 1..5 [[Weekday]] 08:30-17:30";

#[test]
fn non_working_by_default() {
    let calendar = WorkingCalendar::parse(WEEKDAYS).unwrap();
    assert_eq!(calendar.unmatched_day(), UnmatchedDay::NonWorking);

    let day = calendar.day_at(date!("2024-05-18")).unwrap();
    assert_eq!(day.date(), date!("2024-05-18"));
    assert!(!day.is_working_day());
    assert_eq!(day.description(), None);
    assert!(day.working_periods().is_empty());
}

#[test]
fn empty_calendar() {
    let calendar = WorkingCalendar::new([]);
    let days = calendar.days(date!("2024-01-01"), date!("2024-12-31")).unwrap();
    assert_eq!(days.len(), 366);
    assert_eq!(days.working_days().count(), 0);

    let calendar = calendar.with_unmatched_day(UnmatchedDay::Reject);

    assert_eq!(
        calendar.day_at(date!("2024-01-01")),
        Err(Error::UnmatchedDay(date!("2024-01-01"))),
    );
}

#[test]
fn reject() {
    let calendar = WorkingCalendar::parse(WEEKDAYS)
        .unwrap()
        .with_unmatched_day(UnmatchedDay::Reject);

    assert!(calendar.day_at(date!("2024-05-17")).unwrap().is_working_day());

    assert_eq!(
        calendar.day_at(date!("2024-05-18")),
        Err(Error::UnmatchedDay(date!("2024-05-18"))),
    );

    // Generation stops on the first unmatched day
    assert_eq!(
        calendar.days(date!("2024-05-13"), date!("2024-05-26")),
        Err(Error::UnmatchedDay(date!("2024-05-18"))),
    );

    let results: Vec<_> = calendar
        .iter_range(date!("2024-05-17"), date!("2024-05-20"))
        .map(|res| res.is_ok())
        .collect();

    assert_eq!(results, [true, false, false, true]);
}

#[test]
fn reject_with_fallback_rule() {
    let calendar = WorkingCalendar::parse(&format!("* * * * [[Closed]]\n{WEEKDAYS}"))
        .unwrap()
        .with_unmatched_day(UnmatchedDay::Reject);

    let day = calendar.day_at(date!("2024-05-18")).unwrap();
    assert!(!day.is_working_day());
    assert_eq!(day.description(), Some("Closed"));
}
