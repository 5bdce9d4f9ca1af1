mod unmatched_day;

fn sample() -> &'static str {
    include_str!("data/sample.txt")
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Get the status of a day for a calendar given as raw text.
#[macro_export]
macro_rules! day_at {
    ( $calendar: expr, $date: expr ) => {{
        use $crate::WorkingCalendar;

        $calendar
            .parse::<WorkingCalendar>()
            .expect("invalid calendar")
            .day_at($crate::date!($date))
            .expect("could not evaluate day")
    }};
}
