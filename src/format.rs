//! Human-readable goal status for a single mountain.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::completion::{MonthCompletion, SeasonCompletion};
use crate::{AscentDate, ListVariant, MountainGoal};

const OPEN: &str = "Open";
const NOT_PURSUED: &str = "This mountain is not being pursued";

/// Status line for a mountain goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalText {
    pub text: String,
    /// More ascents are needed to finish at least one pursued variant
    pub open: bool,
}

/// Describes a mountain goal. The most demanding pursued variant
/// (grid, four-season, winter, standard) decides the text.
pub fn format_goal(goal: &MountainGoal) -> GoalText {
    let text = match goal.highest_priority_variant() {
        Some(ListVariant::Grid) => grid_text(&goal.grid),
        Some(ListVariant::FourSeason) => four_season_text(&goal.four_season),
        Some(ListVariant::Winter) => winter_text(goal),
        Some(ListVariant::Standard) => completed_on_text(goal.standard.completed_on, OPEN),
        None => NOT_PURSUED.to_owned(),
    };

    GoalText {
        text,
        open: goal.is_open(),
    }
}

fn grid_text(grid: &MonthCompletion) -> String {
    let completed = grid.completed();
    let missing = grid.missing();

    match (completed.len(), missing.len()) {
        (0, _) => OPEN.to_owned(),
        (_, 0) => "Completed in every month".to_owned(),
        (done, needed) if done < needed => {
            format!("Open for every month except {}", join_words(&completed))
        },
        _ => format!("Open for {}", join_words(&missing)),
    }
}

fn four_season_text(four_season: &SeasonCompletion) -> String {
    let completed = four_season.completed();
    let missing = four_season.missing();

    match (completed.len(), missing.len()) {
        (0, _) => OPEN.to_owned(),
        (_, 0) => "Completed in every season".to_owned(),
        _ => format!("Open for {}", join_words(&missing)),
    }
}

fn winter_text(goal: &MountainGoal) -> String {
    // No ascent at all on a standard goal reads as plainly open.
    let open_text = if goal.standard.pursued && !goal.standard.is_complete() {
        OPEN
    } else {
        "Open for winter"
    };
    completed_on_text(goal.winter.completed_on, open_text)
}

fn completed_on_text(completed_on: Option<AscentDate>, open_text: &str) -> String {
    completed_on.map_or_else(|| open_text.to_owned(), |date| format!("Completed on {date}"))
}

/// Joins items as `"A"`, `"A and B"`, or `"A, B and C"`.
pub fn join_words<T: Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} and {last}", init.join(", "))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dates, peak_list};
    use crate::{AscentLog, Month, SeasonCalendar, compute_goals};

    fn goal_for(variants: &[ListVariant], raw: &[&str]) -> MountainGoal {
        let mut goal = MountainGoal::new("m");
        let dates = dates(raw);
        for variant in variants {
            goal.merge(variant.extract(&dates, &SeasonCalendar::default()));
        }
        goal
    }

    fn grid_raw(months: &[u8]) -> Vec<String> {
        months.iter().map(|m| format!("2020-{m:02}-01-XX-XX")).collect()
    }

    fn grid_goal(months: &[u8]) -> MountainGoal {
        let raw = grid_raw(months);
        let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
        goal_for(&[ListVariant::Grid], &raw)
    }

    #[test]
    fn test_join_words() {
        struct TestCase {
            items:    &'static [&'static str],
            expected: &'static str,
        }

        let cases = [
            TestCase {
                items:    &[],
                expected: "",
            },
            TestCase {
                items:    &["winter"],
                expected: "winter",
            },
            TestCase {
                items:    &["winter", "spring"],
                expected: "winter and spring",
            },
            TestCase {
                items:    &["march", "april", "may"],
                expected: "march, april and may",
            },
        ];

        for case in &cases {
            assert_eq!(join_words(case.items), case.expected);
        }
    }

    #[test]
    fn test_winter_completed() {
        let goal = goal_for(&[ListVariant::Winter], &["2020-01-15-00-00"]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Completed on January 15, 2020".to_owned(),
            open: false,
        });
    }

    #[test]
    fn test_winter_completed_with_partial_date() {
        let goal = goal_for(&[ListVariant::Winter], &["2018-02-XX-XX-XX"]);
        assert_eq!(format_goal(&goal).text, "Completed on February 2018");
    }

    #[test]
    fn test_four_season_open_for_missing() {
        let goal = goal_for(&[ListVariant::FourSeason], &["2020-06-01-00-00", "2020-09-10-00-00"]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Open for winter and spring".to_owned(),
            open: true,
        });
    }

    #[test]
    fn test_four_season_edges() {
        assert_eq!(format_goal(&goal_for(&[ListVariant::FourSeason], &[])).text, "Open");

        let goal = goal_for(&[ListVariant::FourSeason], &["2020-03-01-XX-XX"]);
        assert_eq!(format_goal(&goal).text, "Open for winter, summer and fall");

        let goal = goal_for(&[ListVariant::FourSeason], &[
            "2020-01-XX-XX-XX",
            "2020-04-XX-XX-XX",
            "2020-07-XX-XX-XX",
            "2020-10-XX-XX-XX",
        ]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Completed in every season".to_owned(),
            open: false,
        });
    }

    #[test]
    fn test_grid_eleven_months() {
        let goal = grid_goal(&[1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Open for march".to_owned(),
            open: true,
        });
    }

    #[test]
    fn test_grid_every_month() {
        let goal = grid_goal(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Completed in every month".to_owned(),
            open: false,
        });
    }

    #[test]
    fn test_grid_text_cases() {
        struct TestCase {
            months:   &'static [u8],
            expected: &'static str,
        }

        let cases = [
            TestCase {
                months:   &[],
                expected: "Open",
            },
            TestCase {
                months:   &[3, 4],
                expected: "Open for every month except march and april",
            },
            TestCase {
                months:   &[1, 2, 3, 4, 5],
                expected: "Open for every month except january, february, march, april and may",
            },
            TestCase {
                months:   &[1, 2, 3, 4, 5, 6],
                expected: "Open for july, august, september, october, november and december",
            },
            TestCase {
                months:   &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
                expected: "Open for november and december",
            },
        ];

        for case in &cases {
            assert_eq!(
                format_goal(&grid_goal(case.months)).text,
                case.expected,
                "months {:?}",
                case.months
            );
        }
    }

    #[test]
    fn test_standard_and_winter_both_empty() {
        let goal = goal_for(&[ListVariant::Standard, ListVariant::Winter], &[]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Open".to_owned(),
            open: true,
        });
    }

    #[test]
    fn test_winter_open_when_standard_done() {
        let goal = goal_for(&[ListVariant::Standard, ListVariant::Winter], &["2020-07-04-XX-XX"]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Open for winter".to_owned(),
            open: true,
        });
    }

    #[test]
    fn test_winter_only_is_open_for_winter() {
        let goal = goal_for(&[ListVariant::Winter], &["2020-07-04-XX-XX"]);
        assert_eq!(format_goal(&goal).text, "Open for winter");
    }

    #[test]
    fn test_standard_text() {
        let goal = goal_for(&[ListVariant::Standard], &[]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Open".to_owned(),
            open: true,
        });

        let goal = goal_for(&[ListVariant::Standard], &["2015-XX-XX-XX-XX"]);
        assert_eq!(format_goal(&goal), GoalText {
            text: "Completed on 2015".to_owned(),
            open: false,
        });

        let goal = goal_for(&[ListVariant::Standard], &["XXXX-XX-XX-XX-XX"]);
        assert_eq!(format_goal(&goal).text, "Completed on an unknown date");
    }

    #[test]
    fn test_not_pursued() {
        assert_eq!(format_goal(&MountainGoal::new("m")), GoalText {
            text: "This mountain is not being pursued".to_owned(),
            open: false,
        });
    }

    #[test]
    fn test_grid_outranks_and_open_covers_every_variant() {
        let goal = goal_for(&[ListVariant::Standard, ListVariant::Grid], &["2020-05-05-XX-XX"]);
        let text = format_goal(&goal);
        assert_eq!(text.text, "Open for every month except may");
        assert!(text.open);
        assert!(goal.standard.is_complete());
        assert_eq!(goal.grid.completed(), vec![Month::May]);
    }

    #[test]
    fn test_format_from_computed_goals() {
        let lists = [
            peak_list("nh48", ListVariant::Standard, &["washington"]),
            peak_list("nh48-4s", ListVariant::FourSeason, &["washington"]),
        ];
        let log = AscentLog::from_raw([("washington", ["2020-12-25-XX-XX", "2021-04-XX-XX-XX"])]);

        let goals = compute_goals(&lists, &log);
        assert_eq!(format_goal(&goals["washington"]).text, "Open for summer and fall");
    }
}
