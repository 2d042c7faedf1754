mod aggregate;
mod completion;
mod consts;
mod format;
mod prelude;
mod season;
#[cfg(test)]
mod test_utils;
mod types;

pub use aggregate::{
    AscentLog, GoalComparison, GoalMap, ListProgress, MountainGoal, ParentList, PeakList,
    compare_goals, compute_goals, compute_goals_with, list_progress,
};
pub use completion::{
    ListVariant, MonthCompletion, SeasonCompletion, SingleCompletion, VariantCompletion,
    VariantError, extract_completion,
};
pub use consts::*;
pub use format::{GoalText, format_goal, join_words};
pub use season::{CalendarError, Season, SeasonCalendar};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;
use tracing::debug;

/// The date of a logged ascent, known to a varying level of precision.
///
/// Finer components only exist when every coarser one is known, so a day
/// without a month (or a month without a year) cannot be represented.
/// `Unknown` records that an ascent happened without saying when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AscentDate {
    /// Full date with day, month, and year
    #[display(fmt = "{} {}, {}", "month.name()", "day.get()", "year.get()")]
    Day {
        year: types::Year,
        month: types::Month,
        day: types::Day,
    },
    /// Month and year only
    #[display(fmt = "{} {}", "month.name()", "year.get()")]
    Month {
        year: types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{}", "year.get()")]
    Year { year: types::Year },
    /// Ascent happened, date not recorded
    #[display(fmt = "{}", UNKNOWN_DATE_TEXT)]
    Unknown,
}

/// How much of an [`AscentDate`] is known. Orders from least to most precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    #[serde(rename = "none")]
    Unknown,
    YearOnly,
    MonthYear,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
}

impl std::error::Error for ParseError {}

impl AscentDate {
    /// Parses a logged ascent key of the form `YYYY-MM-DD-hh-mm`.
    ///
    /// Never fails. Any field that is the `XX`/`XXXX` sentinel, missing,
    /// not exactly four (year) or two (month, day) ASCII digits, or out of
    /// range is unknown, and an unknown field also drops every finer one.
    /// The hour and minute fields are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut fields = raw.trim().split(DATE_SEPARATOR).take(DATE_FIELD_COUNT).map(str::trim);

        let Some(year) =
            Self::parse_field(raw, "year", fields.next(), YEAR_WIDTH, types::Year::new)
        else {
            return Self::Unknown;
        };
        let Some(month) =
            Self::parse_field(raw, "month", fields.next(), FIELD_WIDTH, types::Month::new)
        else {
            return Self::Year { year };
        };
        let Some(day) = Self::parse_field(raw, "day", fields.next(), FIELD_WIDTH, |value: u8| {
            types::Day::new(value, year, month)
        }) else {
            return Self::Month { year, month };
        };

        Self::Day { year, month, day }
    }

    /// Parses one positional field of exactly `width` digits, treating
    /// sentinels and garbage as unknown.
    fn parse_field<T, N>(
        raw: &str,
        name: &'static str,
        field: Option<&str>,
        width: usize,
        build: impl FnOnce(N) -> Result<T, ParseError>,
    ) -> Option<T>
    where
        N: FromStr,
    {
        let field = field?;
        if field.is_empty() || field == UNKNOWN_YEAR || field == UNKNOWN_FIELD {
            return None;
        }

        let digits = field.len() == width && field.bytes().all(|b| b.is_ascii_digit());
        let parsed = if digits {
            field.parse::<N>().map_err(|_| ParseError::InvalidFormat(field.to_owned()))
        } else {
            Err(ParseError::InvalidFormat(field.to_owned()))
        };

        match parsed.and_then(build) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(raw, field = name, %err, "treating malformed ascent date field as unknown");
                None
            }
        }
    }

    /// Returns the year component if known
    pub const fn year(&self) -> Option<types::Year> {
        match *self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => Some(year),
            Self::Unknown => None,
        }
    }

    /// Returns the month component if known
    pub const fn month(&self) -> Option<types::Month> {
        match *self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month),
            Self::Year { .. } | Self::Unknown => None,
        }
    }

    /// Returns the day component if known
    pub const fn day(&self) -> Option<types::Day> {
        match *self {
            Self::Day { day, .. } => Some(day),
            Self::Month { .. } | Self::Year { .. } | Self::Unknown => None,
        }
    }

    pub const fn precision(&self) -> Precision {
        match self {
            Self::Day { .. } => Precision::Full,
            Self::Month { .. } => Precision::MonthYear,
            Self::Year { .. } => Precision::YearOnly,
            Self::Unknown => Precision::Unknown,
        }
    }

    /// Season of the ascent under the default calendar, if the month is known
    pub fn season(&self) -> Option<Season> {
        self.season_in(&SeasonCalendar::default())
    }

    /// Season of the ascent under `calendar`, if the month is known
    pub fn season_in(&self, calendar: &SeasonCalendar) -> Option<Season> {
        self.month().map(|month| calendar.season_of(month))
    }

    /// Canonical wire key, `YYYY-MM-DD-XX-XX` with sentinels for unknown parts.
    pub fn to_key(&self) -> String {
        let (year, month, day) = self.to_columns();
        let year = year.map_or_else(|| UNKNOWN_YEAR.to_owned(), |y| format!("{y:04}"));
        let field = |value: Option<u8>| {
            value.map_or_else(|| UNKNOWN_FIELD.to_owned(), |v| format!("{v:02}"))
        };

        format!(
            "{year}{sep}{}{sep}{}{sep}{UNKNOWN_FIELD}{sep}{UNKNOWN_FIELD}",
            field(month),
            field(day),
            sep = DATE_SEPARATOR
        )
    }

    /// Converts to database columns: (year, month, day)
    pub fn to_columns(&self) -> (Option<u16>, Option<u8>, Option<u8>) {
        (
            self.year().map(types::Year::get),
            self.month().map(types::Month::get),
            self.day().map(types::Day::get),
        )
    }

    /// Creates from database columns: (year, month, day)
    ///
    /// # Errors
    /// Returns `ParseError` if a component is out of range, or a finer
    /// component is present without the coarser one it depends on.
    pub fn from_columns(
        year: Option<u16>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, ParseError> {
        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => {
                let year = types::Year::new(y)?;
                let month = types::Month::new(m)?;
                let day = types::Day::new(d, year, month)?;
                Ok(Self::Day { year, month, day })
            },
            (Some(y), Some(m), None) => Ok(Self::Month {
                year: types::Year::new(y)?,
                month: types::Month::new(m)?,
            }),
            (Some(y), None, None) => Ok(Self::Year {
                year: types::Year::new(y)?,
            }),
            (None, None, None) => Ok(Self::Unknown),
            (_, None, Some(d)) => Err(ParseError::InvalidFormat(format!(
                "Cannot have day {d} without month"
            ))),
            (None, Some(m), _) => Err(ParseError::InvalidFormat(format!(
                "Cannot have month {m} without year"
            ))),
        }
    }

    /// Earliest concrete (year, month, day) represented by this value.
    /// `None` when the date is unknown.
    pub const fn lower_bound(&self) -> Option<(u16, u8, u8)> {
        match *self {
            Self::Day { year, month, day } => Some((year.get(), month.get(), day.get())),
            Self::Month { year, month } => Some((year.get(), month.get(), MIN_DAY)),
            Self::Year { year } => Some((year.get(), JANUARY, MIN_DAY)),
            Self::Unknown => None,
        }
    }
}

impl PartialOrd for AscentDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AscentDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earliest possible concrete date first, less precise first on ties.
        // An unknown date can never be shown to be earlier, so it sorts last.
        match (self.lower_bound(), other.lower_bound()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.precision().cmp(&other.precision())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl FromStr for AscentDate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl TryFrom<(Option<u16>, Option<u8>, Option<u8>)> for AscentDate {
    type Error = ParseError;

    fn try_from(value: (Option<u16>, Option<u8>, Option<u8>)) -> Result<Self, Self::Error> {
        Self::from_columns(value.0, value.1, value.2)
    }
}

impl serde::Serialize for AscentDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_key())
    }
}

impl<'de> serde::Deserialize<'de> for AscentDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
