use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the twelve calendar months.
///
/// Serializes as its lowercase English name (`"march"`), which is also the
/// bucket label used in goal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a Month from its 1-based number
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value == 0 || value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self::ALL[usize::from(value) - 1])
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Zero-based position in `Month::ALL`
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Lowercase identifier, e.g. `"march"`
    pub const fn key(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// Capitalized display name, e.g. `"March"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// Only [`Day::new`] builds one, so a day never exists apart from the month
/// it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            month: month.get(),
            day: value,
            year: year.get(),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;

        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_covers_calendar() {
        for (i, month) in Month::ALL.iter().enumerate() {
            let number = u8::try_from(i + 1).unwrap();
            assert_eq!(Month::new(number).unwrap(), *month);
            assert_eq!(month.get(), number);
            assert_eq!(month.index(), i);
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::March.key(), "march");
        assert_eq!(Month::March.name(), "March");
        assert_eq!(Month::September.to_string(), "september");
    }

    #[test]
    fn test_month_ordering_follows_calendar() {
        assert!(Month::January < Month::February);
        assert!(Month::November < Month::December);
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&Month::August).unwrap();
        assert_eq!(json, r#""august""#);

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Month::August);

        let result: Result<Month, _> = serde_json::from_str(r#""smarch""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        let y2023 = Year::new(2023).unwrap();
        let y2024 = Year::new(2024).unwrap();

        // January - 31 days
        assert!(Day::new(1, y2024, Month::January).is_ok());
        assert!(Day::new(31, y2024, Month::January).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, y2023, Month::February).is_ok());
        assert!(Day::new(29, y2023, Month::February).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, y2024, Month::February).is_ok());
        assert!(Day::new(30, y2024, Month::February).is_err());

        // April - 30 days
        assert!(Day::new(30, y2024, Month::April).is_ok());
        assert!(Day::new(31, y2024, Month::April).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        let year = Year::new(2024).unwrap();
        assert!(matches!(
            Day::new(0, year, Month::January),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            Day::new(32, year, Month::January),
            Err(ParseError::InvalidDay {
                month: 1,
                day:   32,
                year:  2024,
            })
        ));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2021,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
