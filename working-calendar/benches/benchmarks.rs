use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use working_calendar::{DayRule, WorkingCalendar};

const RULE_WEEKDAY: &str = "* * * 1..5 [[Weekday]] 08:30-13:30,14:30-17:30";
const RULE_LEAP: &str = "2000..2100/NotLeap,2104/4 2 28..29 * [[End of february]]";

const CALENDAR: &str = "
    * * * * [[]]
    * * * 1..5 [[Weekday]] 08:30-13:30,14:30-17:30
    * * * 5 [[Friday]] 08:30-13:30
    * 1 1 * [[New year]]
    * 5 1 * [[Labour day]]
    * 12 25 * [[Christmas]]
    */Leap 2 29 * [[Vacancy on the extra day]]
";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("weekday", |b| {
        b.iter(|| DayRule::parse(black_box(RULE_WEEKDAY)).unwrap())
    });

    group.bench_function("leap", |b| {
        b.iter(|| DayRule::parse(black_box(RULE_LEAP)).unwrap())
    });

    group.bench_function("calendar", |b| {
        b.iter(|| WorkingCalendar::parse(black_box(CALENDAR)).unwrap())
    });
}

fn bench_eval(c: &mut Criterion) {
    let calendar = WorkingCalendar::parse(CALENDAR).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    let mut group = c.benchmark_group("eval");

    group.bench_function("day_at", |b| {
        b.iter(|| calendar.day_at(black_box(date)).unwrap())
    });

    group.bench_function("days_one_year", |b| {
        b.iter(|| calendar.days(black_box(start), black_box(end)).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_eval);
criterion_main!(benches);
