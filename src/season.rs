//! Seasons and the month-to-season calendar used to classify ascents.
//!
//! Classification is by calendar month only. The default calendar is the
//! meteorological one (Dec–Feb winter, Mar–May spring, Jun–Aug summer,
//! Sep–Nov fall); callers that track seasons differently can supply their own
//! [`SeasonCalendar`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Month;

/// One of the four seasons, in the order goal text lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in display order
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Fall];

    /// Lowercase identifier, e.g. `"winter"`
    pub const fn key(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error type for season calendar construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A month has no season assigned.
    #[error("Season calendar is missing a season for {0}")]
    MissingMonth(Month),

    /// A season has no month, so four-season goals could never complete.
    #[error("Season calendar assigns no month to {0}")]
    EmptySeason(Season),
}

/// Maps every calendar month to exactly one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Month, Season>", into = "BTreeMap<Month, Season>")]
pub struct SeasonCalendar {
    seasons: [Season; 12],
}

impl SeasonCalendar {
    /// Dec–Feb winter, Mar–May spring, Jun–Aug summer, Sep–Nov fall.
    pub const METEOROLOGICAL: Self = Self {
        seasons: [
            Season::Winter, // January
            Season::Winter, // February
            Season::Spring, // March
            Season::Spring, // April
            Season::Spring, // May
            Season::Summer, // June
            Season::Summer, // July
            Season::Summer, // August
            Season::Fall,   // September
            Season::Fall,   // October
            Season::Fall,   // November
            Season::Winter, // December
        ],
    };

    /// Creates a calendar from a season per month, January first.
    ///
    /// # Errors
    /// Returns `CalendarError::EmptySeason` if any season is assigned no month.
    pub fn new(seasons: [Season; 12]) -> Result<Self, CalendarError> {
        if let Some(empty) = Season::ALL.into_iter().find(|s| !seasons.contains(s)) {
            return Err(CalendarError::EmptySeason(empty));
        }
        Ok(Self { seasons })
    }

    /// The reference calendar
    pub const fn meteorological() -> Self {
        Self::METEOROLOGICAL
    }

    /// Season a month belongs to
    #[inline]
    pub const fn season_of(&self, month: Month) -> Season {
        self.seasons[month.index()]
    }

    /// Months assigned to a season, in calendar order
    pub fn months_of(&self, season: Season) -> Vec<Month> {
        Month::ALL
            .into_iter()
            .filter(|m| self.season_of(*m) == season)
            .collect()
    }
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self::METEOROLOGICAL
    }
}

impl TryFrom<BTreeMap<Month, Season>> for SeasonCalendar {
    type Error = CalendarError;

    fn try_from(map: BTreeMap<Month, Season>) -> Result<Self, Self::Error> {
        let mut seasons = [Season::Winter; 12];
        for month in Month::ALL {
            seasons[month.index()] = *map.get(&month).ok_or(CalendarError::MissingMonth(month))?;
        }
        Self::new(seasons)
    }
}

impl From<SeasonCalendar> for BTreeMap<Month, Season> {
    fn from(calendar: SeasonCalendar) -> Self {
        Month::ALL
            .into_iter()
            .map(|m| (m, calendar.season_of(m)))
            .collect()
    }
}
