use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::wrapping::{WrapRef, Wrappable};

// -----------------------------------------------------------------------------
// DateFormat

/// The strftime pattern applied to date-like values.
///
/// A [`Wrapper`](crate::wrapper::Wrapper) that is not given a format creates
/// one with [`DateFormat::DEFAULT_PATTERN`] on first encountering a
/// date-like value and reuses it for the remainder of that conversion tree.
///
/// The pattern must be a valid [`chrono::format::strftime`] string;
/// formatting with an invalid pattern panics inside chrono's `Display`
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: Cow<'static, str>,
}

impl DateFormat {
    /// The pattern used when the caller supplies no format:
    /// `2024-01-30 13:05:59`.
    pub const DEFAULT_PATTERN: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Creates a format from a strftime pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wrapmap::DateFormat;
    ///
    /// let format = DateFormat::new("%Y/%m/%d");
    /// assert_eq!(format.pattern(), "%Y/%m/%d");
    /// ```
    #[inline]
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Self {
        DateFormat {
            pattern: pattern.into(),
        }
    }

    /// Returns the strftime pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for DateFormat {
    #[inline]
    fn default() -> Self {
        DateFormat::new(Self::DEFAULT_PATTERN)
    }
}

// -----------------------------------------------------------------------------
// WrappableDate

/// A capability for values that represent themselves as a formatted date
/// string.
///
/// Date-like values classify as [`WrapRef::Date`] and convert to the string
/// this method produces, using the conversion tree's shared [`DateFormat`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wrapmap::{DateFormat, WrappableDate};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 30)
///     .unwrap()
///     .and_hms_opt(13, 5, 59)
///     .unwrap();
///
/// assert_eq!(date.wrap_date(&DateFormat::default()), "2024-01-30 13:05:59");
/// ```
pub trait WrappableDate {
    /// Formats this value with the given format.
    fn wrap_date(&self, format: &DateFormat) -> String;
}

impl WrappableDate for NaiveDateTime {
    #[inline]
    fn wrap_date(&self, format: &DateFormat) -> String {
        self.format(format.pattern()).to_string()
    }
}

impl<Tz: TimeZone> WrappableDate for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    #[inline]
    fn wrap_date(&self, format: &DateFormat) -> String {
        self.format(format.pattern()).to_string()
    }
}

impl Wrappable for NaiveDateTime {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Date(self)
    }
}

impl<Tz: TimeZone> Wrappable for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Date(self)
    }
}
