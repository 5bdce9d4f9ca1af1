//! Integer matchers shared by all date fields.
//!
//! A matcher is always bound to a [`Domain`] which defines the range of values
//! it may be applied to, so that `*` can be expanded to the whole domain and
//! invalid bounds are rejected on construction.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{Error, Result};

// Domain

/// Bounds of the values a matcher applies to, a missing bound means that the
/// domain is not limited on this side.
pub trait Domain: Copy + Debug + Eq + Hash + Send + Sync + 'static {
    /// Human readable name of the values of this domain.
    const NAME: &'static str;
    const MIN: Option<i32>;
    const MAX: Option<i32>;

    #[inline]
    fn contains(value: i32) -> bool {
        Self::MIN.map_or(true, |min| min <= value) && Self::MAX.map_or(true, |max| value <= max)
    }
}

// Parsing helpers

/// Parse a non-negative number made of ASCII digits only.
pub(crate) fn parse_number(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    raw.parse().ok()
}

/// Parse a number that may be omitted.
fn parse_optional_number(raw: &str) -> Option<Option<i32>> {
    if raw.is_empty() {
        Some(None)
    } else {
        parse_number(raw).map(Some)
    }
}

/// Parse the bounds of a range: `*`, `N`, `A..B`, `A..` or `..B`.
pub(crate) fn parse_bounds(value: &str) -> Option<(Option<i32>, Option<i32>)> {
    if value == "*" {
        return Some((None, None));
    }

    let Some((left, right)) = value.split_once("..") else {
        let single = parse_number(value)?;
        return Some((Some(single), Some(single)));
    };

    match (parse_optional_number(left)?, parse_optional_number(right)?) {
        (None, None) => None,
        bounds => Some(bounds),
    }
}

fn check_in_domain<D: Domain>(value: i32) -> Result<()> {
    if D::contains(value) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "{value} is not a valid {}",
            D::NAME
        )))
    }
}

fn check_ordered(left: Option<i32>, right: Option<i32>) -> Result<()> {
    match (left, right) {
        (Some(left), Some(right)) if left > right => Err(Error::invalid_argument(format!(
            "range {left}..{right} has its left bound after its right bound"
        ))),
        _ => Ok(()),
    }
}

// RangeMatcher

/// Match all values between two inclusive bounds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct RangeMatcher<D: Domain> {
    left: Option<i32>,
    right: Option<i32>,
    _domain: PhantomData<D>,
}

impl<D: Domain> RangeMatcher<D> {
    /// Create a new range, missing bounds are replaced with the bounds of the
    /// domain.
    pub fn new(left: Option<i32>, right: Option<i32>) -> Result<Self> {
        let left = left.or(D::MIN);
        let right = right.or(D::MAX);

        for value in [left, right].into_iter().flatten() {
            check_in_domain::<D>(value)?;
        }

        check_ordered(left, right)?;
        Ok(Self { left, right, _domain: PhantomData })
    }

    /// A range matching the whole domain.
    #[inline]
    pub fn wildcard() -> Self {
        Self { left: D::MIN, right: D::MAX, _domain: PhantomData }
    }

    #[inline]
    pub fn single(value: i32) -> Result<Self> {
        Self::new(Some(value), Some(value))
    }

    #[inline]
    pub fn left(&self) -> Option<i32> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<i32> {
        self.right
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.left == D::MIN && self.right == D::MAX
    }

    #[inline]
    pub fn is_one_value(&self) -> bool {
        self.left.is_some() && self.left == self.right
    }

    #[inline]
    pub fn matches(&self, value: i32) -> bool {
        self.left.map_or(true, |left| left <= value)
            && self.right.map_or(true, |right| value <= right)
    }

    pub fn try_parse(value: &str) -> Option<Self> {
        let (left, right) = parse_bounds(value)?;
        Self::new(left, right).ok()
    }
}

impl<D: Domain> Display for RangeMatcher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_wildcard() {
            return write!(f, "*");
        }

        match (self.left, self.right) {
            (Some(left), Some(right)) if left == right => write!(f, "{left}"),
            (Some(left), Some(right)) => write!(f, "{left}..{right}"),
            (Some(left), None) => write!(f, "{left}.."),
            (None, Some(right)) => write!(f, "..{right}"),
            (None, None) => write!(f, "*"),
        }
    }
}

// PeriodicMatcher

/// Match one value every `period` values, starting from `left`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct PeriodicMatcher<D: Domain> {
    left: i32,
    right: Option<i32>,
    period: u32,
    _domain: PhantomData<D>,
}

impl<D: Domain> PeriodicMatcher<D> {
    /// Create a new periodic matcher, which has no upper bound if `right` is
    /// not specified.
    pub fn new(left: i32, right: Option<i32>, period: u32) -> Result<Self> {
        if period == 0 {
            return Err(Error::invalid_argument("the period must be strictly positive"));
        }

        check_in_domain::<D>(left)?;

        if let Some(right) = right {
            check_in_domain::<D>(right)?;
        }

        check_ordered(Some(left), right)?;
        Ok(Self { left, right, period, _domain: PhantomData })
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<i32> {
        self.right
    }

    #[inline]
    pub fn period(&self) -> u32 {
        self.period
    }

    #[inline]
    pub fn is_one_value(&self) -> bool {
        self.right == Some(self.left)
    }

    #[inline]
    pub fn matches(&self, value: i32) -> bool {
        value >= self.left
            && self.right.map_or(true, |right| value <= right)
            && (i64::from(value) - i64::from(self.left)) % i64::from(self.period) == 0
    }

    /// Parse `A/P` or `A..B/P`.
    pub fn try_parse(value: &str) -> Option<Self> {
        let (base, period) = value.rsplit_once('/')?;
        let period = u32::try_from(parse_number(period)?).ok()?;

        let (left, right) = match base.split_once("..") {
            Some((left, right)) => (parse_number(left)?, parse_optional_number(right)?),
            None => (parse_number(base)?, None),
        };

        Self::new(left, right, period).ok()
    }
}

impl<D: Domain> Display for PeriodicMatcher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.left)?;

        if let Some(right) = self.right {
            write!(f, "..{right}")?;
        }

        write!(f, "/{}", self.period)
    }
}

// NumberMatcher

/// Any of the generic integer matchers.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum NumberMatcher<D: Domain> {
    Range(RangeMatcher<D>),
    Periodic(PeriodicMatcher<D>),
}

impl<D: Domain> NumberMatcher<D> {
    #[inline]
    pub fn matches(&self, value: i32) -> bool {
        match self {
            Self::Range(range) => range.matches(value),
            Self::Periodic(periodic) => periodic.matches(value),
        }
    }

    #[inline]
    pub fn is_one_value(&self) -> bool {
        match self {
            Self::Range(range) => range.is_one_value(),
            Self::Periodic(periodic) => periodic.is_one_value(),
        }
    }

    /// Parse any kind of number matcher, the periodic syntax is tried first
    /// as it is the only one holding a `/`.
    pub fn try_parse(value: &str) -> Option<Self> {
        let parsers: [fn(&str) -> Option<Self>; 2] = [
            |value| PeriodicMatcher::try_parse(value).map(Self::Periodic),
            |value| RangeMatcher::try_parse(value).map(Self::Range),
        ];

        parsers.iter().find_map(|parse| parse(value))
    }
}

impl<D: Domain> From<RangeMatcher<D>> for NumberMatcher<D> {
    #[inline]
    fn from(range: RangeMatcher<D>) -> Self {
        Self::Range(range)
    }
}

impl<D: Domain> From<PeriodicMatcher<D>> for NumberMatcher<D> {
    #[inline]
    fn from(periodic: PeriodicMatcher<D>) -> Self {
        Self::Periodic(periodic)
    }
}

impl<D: Domain> Display for NumberMatcher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range(range) => write!(f, "{range}"),
            Self::Periodic(periodic) => write!(f, "{periodic}"),
        }
    }
}
