//! Matchers over the fields of a date.

use chrono::Datelike;

use crate::error::{ensure_not_blank, Error, Result};

/// Implement the common interface of a field matcher which is a thin wrapper
/// over a [`number::NumberMatcher`].
macro_rules! impl_number_field_matcher {
    (
        $matcher: ident,
        $domain: ty,
        $kind: literal,
        $is_one: ident,
        | $date: ident | $project: expr
    ) => {
        impl $matcher {
            /// Match values within inclusive bounds, missing bounds default
            /// to the bounds of the domain.
            #[inline]
            pub fn range(left: Option<i32>, right: Option<i32>) -> $crate::error::Result<Self> {
                $crate::matcher::number::RangeMatcher::<$domain>::new(left, right)
                    .map(|x| Self(x.into()))
            }

            /// Match one value every `period`, starting from `left`.
            #[inline]
            pub fn periodic(
                left: i32,
                right: Option<i32>,
                period: u32,
            ) -> $crate::error::Result<Self> {
                $crate::matcher::number::PeriodicMatcher::<$domain>::new(left, right, period)
                    .map(|x| Self(x.into()))
            }

            #[inline]
            pub fn wildcard() -> Self {
                Self($crate::matcher::number::RangeMatcher::<$domain>::wildcard().into())
            }

            #[inline]
            pub fn number_matcher(&self) -> &$crate::matcher::number::NumberMatcher<$domain> {
                &self.0
            }

            #[inline]
            pub fn matches_value(&self, value: i32) -> bool {
                self.0.matches(value)
            }

            #[inline]
            pub fn is_one_value(&self) -> bool {
                self.0.is_one_value()
            }

            #[inline]
            pub fn $is_one(&self) -> bool {
                self.is_one_value()
            }
        }

        impl $crate::matcher::DateMatcher for $matcher {
            #[inline]
            fn matches<D: chrono::Datelike>(&self, $date: &D) -> bool {
                self.0.matches($project)
            }
        }

        impl $crate::matcher::MatcherSyntax for $matcher {
            const KIND: &'static str = $kind;

            #[inline]
            fn try_parse(value: &str) -> Option<Self> {
                $crate::matcher::number::NumberMatcher::try_parse(value).map(Self)
            }
        }

        impl std::str::FromStr for $matcher {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::matcher::MatcherSyntax>::parse(s)
            }
        }

        impl std::fmt::Display for $matcher {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod day_of_month;
pub mod day_of_week;
pub mod month;
pub mod number;
pub mod year;

pub use day_of_month::DayOfMonthMatcher;
pub use day_of_week::DayOfWeekMatcher;
pub use month::MonthMatcher;
pub use year::YearMatcher;

/// Generic trait to specify the behavior of a selector over dates.
pub trait DateMatcher {
    fn matches<D: Datelike>(&self, date: &D) -> bool;
}

/// A list of matchers accepts a date if any of its members does, an empty
/// list puts no constraint on dates.
impl<T: DateMatcher> DateMatcher for [T] {
    #[inline]
    fn matches<D: Datelike>(&self, date: &D) -> bool {
        self.is_empty() || self.iter().any(|x| x.matches(date))
    }
}

/// Text representation of a matcher.
///
/// Lists of matchers are written as comma-separated values, and a list is
/// rejected as a whole as soon as one of its values is invalid.
pub trait MatcherSyntax: Sized {
    /// Name of the kind of matcher, used in error messages.
    const KIND: &'static str;

    /// Parse a single value, returning `None` if it is malformed.
    fn try_parse(value: &str) -> Option<Self>;

    fn parse(value: &str) -> Result<Self> {
        ensure_not_blank(value, "value")?;
        Self::try_parse(value).ok_or_else(|| Error::invalid_format(Self::KIND, value))
    }

    fn try_parse_multi(values: &str) -> Option<Vec<Self>> {
        values.split(',').map(Self::try_parse).collect()
    }

    fn parse_multi(values: &str) -> Result<Vec<Self>> {
        ensure_not_blank(values, "values")?;

        values
            .split(',')
            .map(|value| {
                Self::try_parse(value).ok_or_else(|| Error::invalid_format(Self::KIND, value))
            })
            .collect()
    }
}
