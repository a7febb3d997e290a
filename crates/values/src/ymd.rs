use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::DateError;

/// Smallest year accepted when the year is written out.
const MIN_WRITTEN_YEAR: u32 = 1000;

/// A calendar date parsed from `YYYY-MM-DD` or a shorthand.
///
/// Shorthands are resolved against the local date:
/// - `MM-DD`: a day in the current year
/// - `DD`: a day in the current month
/// - `today`, `yesterday`, `tomorrow` (any case)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ymd(NaiveDate);

impl Ymd {
    /// The local date.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parses `input`, resolving shorthands against `today` instead of the
    /// local date.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `input` is empty
    /// - `input` is not a keyword or one to three `-`-separated numbers
    /// - A written-out year has fewer than four digits' worth of value
    /// - The numbers do not form a real calendar date
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_values::Ymd;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2022, 12, 1).unwrap();
    /// let date = Ymd::from_str_relative_to("11-14", today)?;
    /// assert_eq!(date.to_string(), "2022-11-14");
    /// # Ok::<(), argot_values::DateError>(())
    /// ```
    pub fn from_str_relative_to(input: &str, today: NaiveDate) -> Result<Self, DateError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DateError::Empty);
        }

        let relative = match input.to_ascii_lowercase().as_str() {
            "today" => Some(today),
            "yesterday" => today.pred_opt(),
            "tomorrow" => today.succ_opt(),
            _ => None,
        };
        if let Some(date) = relative {
            return Ok(Self(date));
        }

        let numbers = input
            .split('-')
            .map(|part| part.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DateError::Malformed(input.to_string()))?;

        let (year, month, day) = match numbers.as_slice() {
            [year, month, day] => (written_year(*year, input)?, *month, *day),
            [month, day] => (today.year(), *month, *day),
            [day] => (today.year(), today.month(), *day),
            _ => return Err(DateError::Malformed(input.to_string())),
        };

        Self::from_ymd(year, month, day).ok_or(DateError::InvalidDate { year, month, day })
    }
}

fn written_year(year: u32, input: &str) -> Result<i32, DateError> {
    if year < MIN_WRITTEN_YEAR {
        return Err(DateError::ShortYear(year));
    }
    i32::try_from(year).map_err(|_| DateError::Malformed(input.to_string()))
}

impl Default for Ymd {
    fn default() -> Self {
        Self::today()
    }
}

impl From<NaiveDate> for Ymd {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Ymd {
    type Err = DateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_str_relative_to(input, Local::now().date_naive())
    }
}

impl Display for Ymd {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}
