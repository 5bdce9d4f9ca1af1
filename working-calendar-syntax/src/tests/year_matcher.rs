use crate::date;
use crate::error::{Error, Result};
use crate::matcher::year::is_leap_year;
use crate::matcher::{DateMatcher, MatcherSyntax, YearMatcher};

fn year(raw: &str) -> YearMatcher {
    YearMatcher::parse(raw).expect("invalid year matcher literal")
}

#[test]
fn leap_years() {
    for y in 1582..=2500 {
        let expected = y % 4 == 0 && (y % 100 != 0 || y % 400 == 0);
        assert_eq!(is_leap_year(y), expected, "{y}");
        assert_eq!(year("*/Leap").matches_year(y), expected, "{y}");
        assert_eq!(year("*/NotLeap").matches_year(y), !expected, "{y}");
    }

    assert!(year("*/Leap").matches_year(2000));
    assert!(!year("*/Leap").matches_year(1900));
    assert!(year("*/Leap").matches_year(2024));
    assert!(!year("*/Leap").matches_year(2023));
}

#[test]
fn leap_years_within_range() {
    let leap = year("2001..2100/Leap");
    assert!(!leap.matches_year(2000));
    assert!(leap.matches_year(2004));
    assert!(leap.matches_year(2096));
    assert!(!leap.matches_year(2100));
    assert!(!leap.matches_year(2104));

    let not_leap = year("2000../NotLeap");
    assert!(!not_leap.matches_year(1999));
    assert!(!not_leap.matches_year(2000));
    assert!(not_leap.matches_year(2001));
    assert!(not_leap.matches_year(2100));
}

#[test]
fn leap_single_year_is_invalid() {
    assert!(matches!(YearMatcher::leap(Some(2024), Some(2024)), Err(Error::InvalidArgument(_))));
    assert!(matches!(YearMatcher::not_leap(Some(2023), Some(2023)), Err(Error::InvalidArgument(_))));
    assert!(YearMatcher::leap(Some(2020), Some(2030)).is_ok());
    assert!(YearMatcher::leap(None, None).is_ok());

    assert!(YearMatcher::try_parse("2024/Leap").is_none());
    assert!(YearMatcher::try_parse("2024..2024/NotLeap").is_none());
}

#[test]
fn periodic() -> Result<()> {
    let periodic = YearMatcher::periodic(2020, None, 4)?;
    assert_eq!(periodic, year("2020/4"));

    for y in [2020, 2024, 2028, 2400, 10_000] {
        assert!(periodic.matches_year(y), "{y}");
    }

    for y in [2016, 2021, 2022, 2023, 2025] {
        assert!(!periodic.matches_year(y), "{y}");
    }

    let bounded = year("2020..2030/5");
    assert!(bounded.matches_year(2025));
    assert!(bounded.matches_year(2030));
    assert!(!bounded.matches_year(2035));
    Ok(())
}

#[test]
fn range() {
    assert!(year("*").matches_year(-42));
    assert!(year("*").matches_year(9999));
    assert!(year("2020").is_one_year());
    assert!(!year("2020..2021").is_one_year());
    assert!(!year("*/Leap").is_one_year());
    assert!(year("..2020").matches_year(1));
    assert!(!year("..2020").matches_year(2021));
    assert!(matches!(YearMatcher::range(Some(2030), Some(2020)), Err(Error::InvalidArgument(_))));
}

#[test]
fn parse_precedence() {
    assert!(matches!(year("*/Leap"), YearMatcher::Leap(_)));
    assert!(matches!(year("*/NotLeap"), YearMatcher::NotLeap(_)));
    assert!(matches!(year("2000..2100/4"), YearMatcher::Periodic(_)));
    assert!(matches!(year("2000..2100"), YearMatcher::Range(_)));

    for invalid in ["", "Leap", "*/leap", "*/", "/4", "2020/", "2020/Leap/4", "twenty", "2020..x"] {
        assert!(YearMatcher::try_parse(invalid).is_none(), "`{invalid}` should be rejected");
    }
}

#[test]
fn display() {
    for raw in ["*", "2020", "2020..2030", "2020..", "..2020", "2020/4", "2020..2040/4", "*/Leap", "1900..2100/NotLeap"] {
        assert_eq!(year(raw).to_string(), raw);
    }
}

#[test]
fn match_date() {
    assert!(year("*/Leap").matches(&date!("2024-02-29")));
    assert!(!year("*/Leap").matches(&date!("2023-02-28")));
    assert!(year("2023").matches(&date!("2023-12-31")));
}
