//! Per-mountain completion state for each list variant.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AscentDate, Month, Season, SeasonCalendar};

/// The completion mode a peak list requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListVariant {
    /// One ascent at any time
    Standard,
    /// One ascent in winter
    Winter,
    /// One ascent in each season
    FourSeason,
    /// One ascent in each calendar month
    Grid,
}

/// Error type for list variant identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    #[error("Unknown list variant: {0:?} (expected standard, winter, fourSeason or grid)")]
    Unknown(String),
}

impl ListVariant {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Winter, Self::FourSeason, Self::Grid];

    /// Most demanding first. The first pursued variant drives goal text.
    pub const BY_PRECEDENCE: [Self; 4] = [Self::Grid, Self::FourSeason, Self::Winter, Self::Standard];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Winter => "winter",
            Self::FourSeason => "fourSeason",
            Self::Grid => "grid",
        }
    }

    /// Number of buckets a mountain must fill to complete this variant
    pub const fn bucket_count(self) -> usize {
        match self {
            Self::Standard | Self::Winter => 1,
            Self::FourSeason => Season::ALL.len(),
            Self::Grid => Month::ALL.len(),
        }
    }

    /// Completion state for one mountain's logged ascents under this variant
    pub fn extract<'a, I>(self, dates: I, calendar: &SeasonCalendar) -> VariantCompletion
    where
        I: IntoIterator<Item = &'a AscentDate>,
    {
        extract_completion(dates, self, calendar)
    }
}

impl fmt::Display for ListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ListVariant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| VariantError::Unknown(s.to_owned()))
    }
}

/// Completion of a single-ascent goal (standard or winter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleCompletion {
    pub pursued:      bool,
    pub completed_on: Option<AscentDate>,
}

impl SingleCompletion {
    pub const fn pursued(completed_on: Option<AscentDate>) -> Self {
        Self {
            pursued: true,
            completed_on,
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.completed_on.is_some()
    }
}

/// Completion of a four-season goal, one slot per season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonCompletion {
    pub pursued:   bool,
    pub by_season: BTreeMap<Season, Option<AscentDate>>,
}

impl Default for SeasonCompletion {
    fn default() -> Self {
        Self {
            pursued:   false,
            by_season: empty_buckets(&Season::ALL),
        }
    }
}

impl SeasonCompletion {
    /// Seasons with a qualifying ascent, in display order
    pub fn completed(&self) -> Vec<Season> {
        filled(&self.by_season, true)
    }

    /// Seasons still lacking an ascent, in display order
    pub fn missing(&self) -> Vec<Season> {
        filled(&self.by_season, false)
    }

    pub fn is_complete(&self) -> bool {
        Season::ALL
            .iter()
            .all(|s| self.by_season.get(s).is_some_and(Option::is_some))
    }
}

/// Completion of a grid goal, one slot per calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCompletion {
    pub pursued:  bool,
    pub by_month: BTreeMap<Month, Option<AscentDate>>,
}

impl Default for MonthCompletion {
    fn default() -> Self {
        Self {
            pursued:  false,
            by_month: empty_buckets(&Month::ALL),
        }
    }
}

impl MonthCompletion {
    /// Months with a qualifying ascent, in calendar order
    pub fn completed(&self) -> Vec<Month> {
        filled(&self.by_month, true)
    }

    /// Months still lacking an ascent, in calendar order
    pub fn missing(&self) -> Vec<Month> {
        filled(&self.by_month, false)
    }

    pub fn is_complete(&self) -> bool {
        Month::ALL
            .iter()
            .all(|m| self.by_month.get(m).is_some_and(Option::is_some))
    }
}

/// A variant-shaped completion for one mountain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantCompletion {
    Standard(SingleCompletion),
    Winter(SingleCompletion),
    FourSeason(SeasonCompletion),
    Grid(MonthCompletion),
}

impl VariantCompletion {
    pub const fn variant(&self) -> ListVariant {
        match self {
            Self::Standard(_) => ListVariant::Standard,
            Self::Winter(_) => ListVariant::Winter,
            Self::FourSeason(_) => ListVariant::FourSeason,
            Self::Grid(_) => ListVariant::Grid,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Self::Standard(c) | Self::Winter(c) => c.is_complete(),
            Self::FourSeason(c) => c.is_complete(),
            Self::Grid(c) => c.is_complete(),
        }
    }
}

/// Extracts the completion state of one mountain under `variant`.
///
/// Every bucket keeps the earliest qualifying date. Dates with an unknown
/// month never qualify for winter, four-season or grid buckets. An empty
/// set of dates yields a pursued goal with nothing completed.
pub fn extract_completion<'a, I>(dates: I, variant: ListVariant, calendar: &SeasonCalendar) -> VariantCompletion
where
    I: IntoIterator<Item = &'a AscentDate>,
{
    let dates = dates.into_iter().copied();

    match variant {
        ListVariant::Standard => VariantCompletion::Standard(SingleCompletion::pursued(dates.min())),
        ListVariant::Winter => VariantCompletion::Winter(SingleCompletion::pursued(
            dates
                .filter(|d| d.season_in(calendar) == Some(Season::Winter))
                .min(),
        )),
        ListVariant::FourSeason => VariantCompletion::FourSeason(SeasonCompletion {
            pursued:   true,
            by_season: earliest_per_bucket(dates, &Season::ALL, |d| d.season_in(calendar)),
        }),
        ListVariant::Grid => VariantCompletion::Grid(MonthCompletion {
            pursued:  true,
            by_month: earliest_per_bucket(dates, &Month::ALL, |d| d.month()),
        }),
    }
}

fn empty_buckets<B: Ord + Copy>(buckets: &[B]) -> BTreeMap<B, Option<AscentDate>> {
    buckets.iter().map(|b| (*b, None)).collect()
}

fn earliest_per_bucket<B, I, F>(dates: I, buckets: &[B], classify: F) -> BTreeMap<B, Option<AscentDate>>
where
    B: Ord + Copy,
    I: Iterator<Item = AscentDate>,
    F: Fn(&AscentDate) -> Option<B>,
{
    let mut slots = empty_buckets(buckets);
    for date in dates {
        let Some(slot) = classify(&date).and_then(|bucket| slots.get_mut(&bucket)) else {
            continue;
        };
        if slot.is_none_or(|current| date < current) {
            *slot = Some(date);
        }
    }
    slots
}

fn filled<B: Copy>(slots: &BTreeMap<B, Option<AscentDate>>, want_filled: bool) -> Vec<B> {
    slots
        .iter()
        .filter(|(_, date)| date.is_some() == want_filled)
        .map(|(bucket, _)| *bucket)
        .collect()
}
