//! Builds per-mountain goals from a user's peak lists and ascent log.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};

use crate::completion::{MonthCompletion, SeasonCompletion, SingleCompletion, VariantCompletion};
use crate::{AscentDate, ListVariant, SeasonCalendar};

/// Goals keyed by mountain id
pub type GoalMap = BTreeMap<String, MountainGoal>;

/// The parent of a derived peak list. Its mountains are authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentList {
    pub id:           String,
    #[serde(default)]
    pub mountain_ids: Vec<String>,
}

/// A peak list a user pursues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakList {
    pub id:           String,
    pub variant:      ListVariant,
    #[serde(default)]
    pub mountain_ids: Vec<String>,
    #[serde(default)]
    pub parent:       Option<ParentList>,
}

impl PeakList {
    pub fn new(id: impl Into<String>, variant: ListVariant, mountain_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            variant,
            mountain_ids,
            parent: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: ParentList) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Mountains this list tracks: the parent's when there is one, else its own
    pub fn effective_mountain_ids(&self) -> &[String] {
        self.parent
            .as_ref()
            .map_or(&self.mountain_ids, |parent| &parent.mountain_ids)
    }
}

/// A user's logged ascents, as a set of dates per mountain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AscentLog {
    ascents: BTreeMap<String, BTreeSet<AscentDate>>,
}

impl AscentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from raw `(mountain id, date keys)` pairs
    pub fn from_raw<I, M, D, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (M, D)>,
        M: Into<String>,
        D: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut log = Self::new();
        for (mountain_id, raw_dates) in entries {
            let mountain_id = mountain_id.into();
            for raw in raw_dates {
                log.log(mountain_id.clone(), raw.as_ref());
            }
        }
        log
    }

    /// Logs an ascent from its raw key. Returns `false` if that date was
    /// already logged for the mountain.
    pub fn log(&mut self, mountain_id: impl Into<String>, raw: &str) -> bool {
        self.log_date(mountain_id, AscentDate::parse(raw))
    }

    /// Logs a parsed ascent. Returns `false` if it was already logged.
    pub fn log_date(&mut self, mountain_id: impl Into<String>, date: AscentDate) -> bool {
        self.ascents.entry(mountain_id.into()).or_default().insert(date)
    }

    /// Logged dates for a mountain, earliest first
    pub fn dates_for(&self, mountain_id: &str) -> impl Iterator<Item = &AscentDate> {
        self.ascents.get(mountain_id).into_iter().flatten()
    }

    /// Number of mountains with at least one logged ascent
    pub fn mountain_count(&self) -> usize {
        self.ascents.values().filter(|dates| !dates.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.mountain_count() == 0
    }
}

/// Everything a user pursues on one mountain, across all variants.
///
/// Variants not in play keep `pursued == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountainGoal {
    pub mountain_id: String,
    pub standard:    SingleCompletion,
    pub winter:      SingleCompletion,
    pub four_season: SeasonCompletion,
    pub grid:        MonthCompletion,
}

impl MountainGoal {
    pub fn new(mountain_id: impl Into<String>) -> Self {
        Self {
            mountain_id: mountain_id.into(),
            standard:    SingleCompletion::default(),
            winter:      SingleCompletion::default(),
            four_season: SeasonCompletion::default(),
            grid:        MonthCompletion::default(),
        }
    }

    /// Replaces the sub-state for the completion's variant
    pub fn merge(&mut self, completion: VariantCompletion) {
        match completion {
            VariantCompletion::Standard(c) => self.standard = c,
            VariantCompletion::Winter(c) => self.winter = c,
            VariantCompletion::FourSeason(c) => self.four_season = c,
            VariantCompletion::Grid(c) => self.grid = c,
        }
    }

    pub const fn is_pursued(&self, variant: ListVariant) -> bool {
        match variant {
            ListVariant::Standard => self.standard.pursued,
            ListVariant::Winter => self.winter.pursued,
            ListVariant::FourSeason => self.four_season.pursued,
            ListVariant::Grid => self.grid.pursued,
        }
    }

    /// Buckets filled for a variant, whether or not it is pursued
    pub fn completed_buckets(&self, variant: ListVariant) -> usize {
        match variant {
            ListVariant::Standard => usize::from(self.standard.is_complete()),
            ListVariant::Winter => usize::from(self.winter.is_complete()),
            ListVariant::FourSeason => self.four_season.completed().len(),
            ListVariant::Grid => self.grid.completed().len(),
        }
    }

    /// True if the variant is pursued and every bucket is filled
    pub fn is_complete(&self, variant: ListVariant) -> bool {
        self.is_pursued(variant) && self.completed_buckets(variant) == variant.bucket_count()
    }

    pub fn pursued_variants(&self) -> Vec<ListVariant> {
        ListVariant::ALL
            .into_iter()
            .filter(|v| self.is_pursued(*v))
            .collect()
    }

    /// The most demanding pursued variant: grid, four-season, winter, standard
    pub fn highest_priority_variant(&self) -> Option<ListVariant> {
        ListVariant::BY_PRECEDENCE
            .into_iter()
            .find(|v| self.is_pursued(*v))
    }

    /// True while any pursued variant still needs ascents
    pub fn is_open(&self) -> bool {
        ListVariant::ALL
            .into_iter()
            .any(|v| self.is_pursued(v) && !self.is_complete(v))
    }
}

/// Computes a user's goals using the default season calendar.
pub fn compute_goals(lists: &[PeakList], log: &AscentLog) -> GoalMap {
    compute_goals_with(lists, log, &SeasonCalendar::default())
}

/// Computes a user's goals for every mountain on their lists.
///
/// Each variant's sub-state is rebuilt from the full set of logged dates, so
/// the result does not depend on list order or on duplicate lists.
pub fn compute_goals_with(lists: &[PeakList], log: &AscentLog, calendar: &SeasonCalendar) -> GoalMap {
    let _span = debug_span!("compute_goals", lists = lists.len()).entered();

    let mut goals = GoalMap::new();
    for list in lists {
        let mountain_ids = list.effective_mountain_ids();
        if mountain_ids.is_empty() {
            debug!(list = %list.id, variant = %list.variant, "peak list has no mountains");
            continue;
        }

        for mountain_id in mountain_ids {
            let completion = list.variant.extract(log.dates_for(mountain_id), calendar);
            trace!(
                list = %list.id,
                mountain = %mountain_id,
                variant = %list.variant,
                complete = completion.is_complete(),
                "merging completion"
            );
            goals
                .entry(mountain_id.clone())
                .or_insert_with(|| MountainGoal::new(mountain_id.as_str()))
                .merge(completion);
        }
    }

    debug!(mountains = goals.len(), "computed mountain goals");
    goals
}

/// Two users' goals on the same mountain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalComparison<'a> {
    pub mine:   Option<&'a MountainGoal>,
    pub theirs: Option<&'a MountainGoal>,
}

/// Pairs two independently computed goal maps by mountain.
pub fn compare_goals<'a>(mine: &'a GoalMap, theirs: &'a GoalMap) -> BTreeMap<&'a str, GoalComparison<'a>> {
    let mountain_ids: BTreeSet<&str> = mine.keys().chain(theirs.keys()).map(String::as_str).collect();

    mountain_ids
        .into_iter()
        .map(|id| {
            (id, GoalComparison {
                mine:   mine.get(id),
                theirs: theirs.get(id),
            })
        })
        .collect()
}

/// How far a user is through one peak list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProgress {
    pub list_id:             String,
    pub variant:             ListVariant,
    pub mountains_total:     usize,
    pub mountains_completed: usize,
    pub buckets_total:       usize,
    pub buckets_completed:   usize,
}

impl ListProgress {
    pub const fn is_complete(&self) -> bool {
        self.mountains_completed == self.mountains_total
    }
}

/// Progress through `list` under its own variant, read from computed goals.
pub fn list_progress(list: &PeakList, goals: &GoalMap) -> ListProgress {
    let mountain_ids: BTreeSet<&str> = list.effective_mountain_ids().iter().map(String::as_str).collect();
    let variant = list.variant;

    let mut mountains_completed = 0;
    let mut buckets_completed = 0;
    for goal in mountain_ids.iter().filter_map(|id| goals.get(*id)) {
        buckets_completed += goal.completed_buckets(variant);
        if goal.is_complete(variant) {
            mountains_completed += 1;
        }
    }

    ListProgress {
        list_id: list.id.clone(),
        variant,
        mountains_total: mountain_ids.len(),
        mountains_completed,
        buckets_total: mountain_ids.len() * variant.bucket_count(),
        buckets_completed,
    }
}
