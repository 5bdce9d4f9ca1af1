use crate::error::{Error, Result};
use crate::matcher::{DayOfMonthMatcher, DayOfWeekMatcher, MatcherSyntax, MonthMatcher, YearMatcher};
use crate::parser::{to_day_pattern_string, DayRuleParser};
use crate::time::TimePeriod;

const SAMPLE: &[&str] = &[
    "* * * * [[]]",
    "* * * * [[]] 08:30-17:30",
    "* 2 29 * [[Vacancy on the extra day]]",
    "*/Leap 3 1 * [[Vacancy on the extra day]]",
    "* * * 1..5 [[]] 08:30-13:30,14:30-17:30",
    "* * * 1..5 [[Weekday]] 08:30-13:30,14:30-17:30",
    "2020/4 1..6,9..12 1..15 0,6 [[Odd rule]] 00:00-24:00 # with a comment",
    "* * * *",
    "* * * * 08:00-12:00",
    "* * * *#comment",
    "  * 12 25 *   [[Christmas]]   ",
    "\t2024..2030/NotLeap\t* 1 *\t[[tabs]]\t10:00-11:00",
];

#[test]
fn parse_sample() {
    for line in SAMPLE {
        assert!(DayRuleParser::try_parse(line).is_some(), "`{line}` should parse");
    }
}

#[test]
fn parse_fields() -> Result<()> {
    let rule = DayRuleParser::parse(
        "2020/4 1..6,9..12 1..15 0,6 [[Odd rule]] 00:00-12:00,13:00-24:00 # with a comment",
    )?;

    assert_eq!(rule.years(), [YearMatcher::periodic(2020, None, 4)?]);
    assert_eq!(rule.months(), MonthMatcher::parse_multi("1..6,9..12")?);
    assert_eq!(rule.days_of_month(), [DayOfMonthMatcher::range(Some(1), Some(15))?]);
    assert_eq!(rule.days_of_week(), DayOfWeekMatcher::parse_multi("0,6")?);
    assert_eq!(rule.description(), Some("Odd rule"));

    assert_eq!(
        rule.time_periods(),
        [TimePeriod::from_hm(0, 0, 12, 0)?, TimePeriod::from_hm(13, 0, 24, 0)?],
    );

    Ok(())
}

#[test]
fn parse_description() -> Result<()> {
    assert_eq!(DayRuleParser::parse("* * * * [[]]")?.description(), None);
    assert_eq!(DayRuleParser::parse("* * * * [[   ]]")?.description(), None);
    assert_eq!(DayRuleParser::parse("* * * *")?.description(), None);

    assert_eq!(
        DayRuleParser::parse("* * * * [[Has # and ] inside]] 08:00-09:00")?.description(),
        Some("Has # and ] inside"),
    );

    assert_eq!(
        DayRuleParser::parse("* * * * [[no space]]08:00-09:00")?.time_periods().len(),
        1,
    );

    // Descriptions run up to the `]]` followed by periods, a comment or the end
    let examples = [
        ("* * * * [[[x]]] 08:00-09:00", "[x]", 1),
        ("* * * * [[See note [1]]]", "See note [1]", 0),
        ("* * * * [[a]] b]] 08:00-09:00", "a]] b", 1),
        ("* * * * [[a]] b]]", "a]] b", 0),
        ("* * * * [[x]] # note ]]", "x", 0),
        ("* * * * [[x]]]] 08:00-09:00", "x]]", 1),
        ("* * * * [[a]] 1]] 08:00-09:00", "a]] 1", 1),
    ];

    for (line, description, periods) in examples {
        let rule = DayRuleParser::parse(line)?;
        assert_eq!(rule.description(), Some(description), "{line}");
        assert_eq!(rule.time_periods().len(), periods, "{line}");
    }

    Ok(())
}

#[test]
fn parse_no_periods() -> Result<()> {
    let rule = DayRuleParser::parse("* * * 0,6 [[Weekend]]")?;
    assert!(rule.time_periods().is_empty());
    assert!(!rule.is_working_day());

    // Trailing blanks after the description don't introduce an empty period
    let rule = DayRuleParser::parse("* * * 0,6 [[Weekend]]   ")?;
    assert!(rule.time_periods().is_empty());

    let rule = DayRuleParser::parse("* * * 0,6 [[Weekend]] # closed")?;
    assert!(rule.time_periods().is_empty());
    Ok(())
}

#[test]
fn parse_invalid() {
    let invalid = [
        "xxx",
        "* * *",
        "* * * * * [[extra field]]",
        "* 13 * * [[]]",
        "* * 32 * [[]]",
        "* * * 7 [[]]",
        "2024/Leap * * * [[]]",
        "* 1,,2 * * [[]]",
        "* 1,2, * * [[x]]",
        "* * * * [[]] 08:00",
        "* * * * [[]] 08:00-07:00",
        "* * * * [[]] 08:00-09:00,",
        "* * * * [[]] 08:00-09:00, 10:00-11:00",
        "* * * * [[]] 08:00-09:00 10:00-11:00",
        "* * * * [[unclosed 08:00-09:00",
        "* * * * 08:00-09:00 [[late description]]",
        "* * * * [[]] 24:00-24:00",
        "* * * * [[two\nlines]]",
    ];

    for line in invalid {
        assert!(DayRuleParser::try_parse(line).is_none(), "`{line}` should be rejected");

        assert!(
            matches!(DayRuleParser::parse(line), Err(Error::InvalidFormat { value, .. }) if value == line),
            "`{line}` should be rejected",
        );
    }
}

#[test]
fn parse_blank() {
    for line in ["", " ", "\t\n"] {
        assert!(DayRuleParser::try_parse(line).is_none());
        assert!(matches!(DayRuleParser::parse(line), Err(Error::NullOrEmptyArgument(_))));
    }
}

#[test]
fn day_pattern_string() -> Result<()> {
    let rule = DayRuleParser::parse("  1999..2001,2003   1..12  1,15/7   1..5  [[x]] 08:00-09:00")?;

    assert_eq!(
        to_day_pattern_string(rule.years(), rule.months(), rule.days_of_month(), rule.days_of_week()),
        "1999..2001,2003 * 1,15/7 1..5",
    );

    assert_eq!(rule.pattern().to_string(), "1999..2001,2003 * 1,15/7 1..5");
    Ok(())
}
