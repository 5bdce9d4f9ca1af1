use pest::iterators::Pair;
use pest::Parser;

use crate::error::{ensure_not_blank, Error, Result};
use crate::matcher::{
    DayOfMonthMatcher, DayOfWeekMatcher, MatcherSyntax, MonthMatcher, YearMatcher,
};
use crate::rule::{DayPattern, DayRule};
use crate::time::TimePeriod;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct DayRuleGrammar;

/// Parser for day rule expressions.
///
/// A day rule expression is written as follows:
///
/// ```plain
/// * * * * [[{description}]] {working periods}  #{comments}
/// ^ ^ ^ ^ ^                 ^                  ^
/// | | | | |                 |                  +- (optional) end of line comment
/// | | | | |                 +-------------------- (optional) comma separated working periods
/// | | | | +-------------------------------------- (optional) description of the day
/// | | | +---------------------------------------- day of week
/// | | +------------------------------------------ day of month
/// | +-------------------------------------------- month
/// +---------------------------------------------- year
/// ```
///
/// Some examples:
///
///  - every day is a non-working day: `* * * * [[]]`
///  - every day is a working day: `* * * * [[]] 08:30-17:30`
///  - vacancy on 29th of february: `* 2 29 * [[Vacancy on the extra day]]`
///  - vacancy on 1st of march of leap years: `*/Leap 3 1 * [[Vacancy on the extra day]]`
///  - ordinary working days: `* * * 1..5 [[]] 08:30-13:30,14:30-17:30`
///
/// ```
/// use working_calendar_syntax::DayRuleParser;
///
/// let rule = DayRuleParser::parse("* * * 1..5 [[Weekday]] 08:30-13:30,14:30-17:30").unwrap();
/// assert_eq!(rule.description(), Some("Weekday"));
/// assert_eq!(rule.time_periods().len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DayRuleParser;

impl DayRuleParser {
    /// Parse a day rule, returning `None` if the expression is invalid.
    pub fn try_parse(line: &str) -> Option<DayRule> {
        if line.trim().is_empty() {
            return None;
        }

        let pair = DayRuleGrammar::parse(Rule::input_day_rule, line)
            .map_err(|_err| {
                #[cfg(feature = "log")]
                log::debug!("Invalid structure for day rule `{line}`: {_err}");
            })
            .ok()?
            .next()?;

        build_day_rule(pair)
    }

    /// Parse a day rule.
    pub fn parse(line: &str) -> Result<DayRule> {
        ensure_not_blank(line, "line")?;
        Self::try_parse(line).ok_or_else(|| Error::invalid_format("day rule", line))
    }
}

/// Write the canonical form of the date fields of a day rule.
///
/// ```
/// use working_calendar_syntax::{to_day_pattern_string, MatcherSyntax, YearMatcher};
///
/// let years = YearMatcher::parse_multi("2020..2030/Leap,2042").unwrap();
/// assert_eq!(to_day_pattern_string(&years, &[], &[], &[]), "2020..2030/Leap,2042 * * *");
/// ```
pub fn to_day_pattern_string(
    years: &[YearMatcher],
    months: &[MonthMatcher],
    days_of_month: &[DayOfMonthMatcher],
    days_of_week: &[DayOfWeekMatcher],
) -> String {
    DayPattern { years, months, days_of_month, days_of_week }.to_string()
}

// ---
// --- Rule
// ---

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_day_rule(pair: Pair<Rule>) -> Option<DayRule> {
    assert_eq!(pair.as_rule(), Rule::day_rule);

    let mut years = None;
    let mut months = None;
    let mut days_of_month = None;
    let mut days_of_week = None;
    let mut description = None;
    let mut time_periods = Vec::new();

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::year => years = Some(build_field::<YearMatcher>(pair)?),
            Rule::month => months = Some(build_field::<MonthMatcher>(pair)?),
            Rule::day_of_month => days_of_month = Some(build_field::<DayOfMonthMatcher>(pair)?),
            Rule::day_of_week => days_of_week = Some(build_field::<DayOfWeekMatcher>(pair)?),
            Rule::description => description = Some(build_description(pair)),
            Rule::time_periods => time_periods = build_time_periods(pair)?,
            Rule::comment => {}
            other => unexpected_token(other, Rule::day_rule),
        }
    }

    DayRule::new(
        description,
        years?,
        months?,
        days_of_month?,
        days_of_week?,
        time_periods,
    )
    .map_err(|_err| {
        #[cfg(feature = "log")]
        log::debug!("Invalid day rule: {_err}");
    })
    .ok()
}

// ---
// --- Fields
// ---

fn build_field<T: MatcherSyntax>(pair: Pair<Rule>) -> Option<Vec<T>> {
    let matchers = T::try_parse_multi(pair.as_str());

    #[cfg(feature = "log")]
    if matchers.is_none() {
        log::debug!("Invalid {} in day rule: `{}`", T::KIND, pair.as_str());
    }

    matchers
}

fn build_description(pair: Pair<Rule>) -> String {
    assert_eq!(pair.as_rule(), Rule::description);

    pair.into_inner()
        .next()
        .map(|inner| inner.as_str().to_string())
        .unwrap_or_default()
}

fn build_time_periods(pair: Pair<Rule>) -> Option<Vec<TimePeriod>> {
    assert_eq!(pair.as_rule(), Rule::time_periods);
    let periods = TimePeriod::try_parse_multi(pair.as_str(), ",");

    #[cfg(feature = "log")]
    if periods.is_none() {
        log::debug!("Invalid working periods in day rule: `{}`", pair.as_str());
    }

    periods
}
