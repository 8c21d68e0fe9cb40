//! Percentage scoring and per-window breakdowns.
//!
//! A score is the share of completed checkmarks among all checkmarks in a
//! set, as a whole percentage rounded half-up. Empty and failed days both
//! count toward the total. An empty set scores 0.

use serde::{Deserialize, Serialize};

use super::context::ScoreContext;
use super::report::Goal;
use super::score_type::ScoreType;
use crate::checkmark::{Checkmark, CheckmarkValue};

/// `completed / total` as a percentage, rounded half-up.
///
/// Returns 0 when `total` is 0. `completed` is capped at `total`.
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    ((200 * completed + total) / (2 * total)) as u8
}

/// Score of a sequence of checkmark values. Order is irrelevant.
pub fn calculate_score<I>(values: I) -> u8
where
    I: IntoIterator<Item = CheckmarkValue>,
{
    let mut tally = ScoreTally::default();
    for value in values {
        tally.record(value);
    }
    tally.score()
}

/// Running completed/total counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub completed: usize,
    pub total: usize,
}

impl ScoreTally {
    pub fn record(&mut self, value: CheckmarkValue) {
        self.total += 1;
        if value.is_completed() {
            self.completed += 1;
        }
    }

    pub fn not_completed(&self) -> usize {
        self.total - self.completed
    }

    pub fn score(&self) -> u8 {
        percentage(self.completed, self.total)
    }
}

/// Which part of the two-slice chart a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceId {
    Completed,
    Remainder,
}

/// One slice of a proportional chart, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub id: SliceId,
    pub value: u8,
}

/// Result for one window.
///
/// `data[0]` is the completed slice and `data[1]` the remainder; the two
/// always sum to 100, including for a window with no checkmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTypeData {
    pub label: String,
    /// Completed checkmarks inside the window
    pub completed: usize,
    /// All checkmarks inside the window
    pub total: usize,
    pub data: [Slice; 2],
}

impl ScoreTypeData {
    fn from_tally(label: String, tally: ScoreTally) -> Self {
        let score = tally.score();
        Self {
            label,
            completed: tally.completed,
            total: tally.total,
            data: [
                Slice {
                    id: SliceId::Completed,
                    value: score,
                },
                Slice {
                    id: SliceId::Remainder,
                    value: 100 - score,
                },
            ],
        }
    }

    /// Completed percentage.
    pub fn score(&self) -> u8 {
        self.data[0].value
    }

    pub fn remainder(&self) -> u8 {
        self.data[1].value
    }

    pub fn not_completed(&self) -> usize {
        self.total - self.completed
    }

    /// Strictly above the goal; meeting it exactly is not enough.
    pub fn has_reached_goal(&self, goal: Goal) -> bool {
        self.score() > goal.value()
    }
}

/// Bucket `checkmarks` into each window and score them.
///
/// Output order follows `score_types`. A checkmark may land in several
/// windows; windows are independent.
pub fn get_score_type_data_list(
    checkmarks: &[Checkmark],
    score_types: &[ScoreType],
    ctx: &ScoreContext,
) -> Vec<ScoreTypeData> {
    score_types
        .iter()
        .map(|score_type| {
            let tally = checkmarks
                .iter()
                .filter(|checkmark| score_type.matches(checkmark.date, ctx))
                .fold(ScoreTally::default(), |mut tally, checkmark| {
                    tally.record(checkmark.value);
                    tally
                });

            tracing::debug!(
                window = %score_type.label,
                completed = tally.completed,
                total = tally.total,
                score = tally.score(),
                "scored window"
            );

            ScoreTypeData::from_tally(score_type.label.clone(), tally)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkmark::CheckmarkValue::{Completed, Empty, Failed};
    use crate::scores::context::{is_checkmark_this_week, is_checkmark_today};
    use crate::scores::score_type::create_score_type;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calculate_score_empty_is_zero() {
        assert_eq!(calculate_score(Vec::<CheckmarkValue>::new()), 0);
    }

    #[test]
    fn test_calculate_score_basic_cases() {
        assert_eq!(calculate_score([Completed, Completed, Failed, Failed]), 50);
        assert_eq!(calculate_score([Completed]), 100);
        assert_eq!(calculate_score([Failed]), 0);
        assert_eq!(calculate_score([Empty]), 0);
    }

    #[test]
    fn test_calculate_score_rounds_half_up() {
        assert_eq!(calculate_score([Completed, Failed, Failed]), 33);
        assert_eq!(calculate_score([Completed, Completed, Failed]), 67);
        // 12.5% -> 13, 87.5% -> 88
        let mut values = vec![Completed];
        values.extend([Failed; 7]);
        assert_eq!(calculate_score(values), 13);
        let mut values = vec![Failed];
        values.extend([Completed; 7]);
        assert_eq!(calculate_score(values), 88);
    }

    #[test]
    fn test_empty_counts_toward_total() {
        assert_eq!(calculate_score([Completed, Empty]), 50);
        assert_eq!(calculate_score([Completed, Empty, Empty, Empty]), 25);
    }

    #[test]
    fn test_percentage_guards() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(9, 3), 100);
        assert_eq!(percentage(1, 200), 1); // 0.5% -> 1
        assert_eq!(percentage(1, 201), 0);
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = ScoreTally::default();
        for value in [Completed, Failed, Empty, Completed] {
            tally.record(value);
        }
        assert_eq!(tally.completed, 2);
        assert_eq!(tally.not_completed(), 2);
        assert_eq!(tally.total, 4);
        assert_eq!(tally.score(), 50);
    }

    #[test]
    fn test_score_type_data_list_preserves_order_and_counts() {
        let ctx = ScoreContext::new(date(2024, 5, 15));
        let checkmarks = vec![
            Checkmark::completed(date(2024, 5, 15)),
            Checkmark::failed(date(2024, 5, 14)),
            Checkmark::completed(date(2024, 5, 13)),
            Checkmark::completed(date(2024, 5, 1)),
        ];
        let types = vec![
            create_score_type("Today", is_checkmark_today),
            create_score_type("This week", is_checkmark_this_week),
        ];

        let list = get_score_type_data_list(&checkmarks, &types, &ctx);
        assert_eq!(list.len(), 2);

        assert_eq!(list[0].label, "Today");
        assert_eq!((list[0].completed, list[0].total), (1, 1));
        assert_eq!(list[0].score(), 100);

        assert_eq!(list[1].label, "This week");
        assert_eq!((list[1].completed, list[1].total), (2, 3));
        assert_eq!(list[1].score(), 67);
        assert_eq!(list[1].remainder(), 33);
        assert_eq!(list[1].not_completed(), 1);
    }

    #[test]
    fn test_empty_window_is_zero_with_full_remainder() {
        let ctx = ScoreContext::new(date(2024, 5, 15));
        let types = vec![create_score_type("Today", is_checkmark_today)];

        let list = get_score_type_data_list(&[], &types, &ctx);
        assert_eq!(list[0].total, 0);
        assert_eq!(
            list[0].data,
            [
                Slice {
                    id: SliceId::Completed,
                    value: 0,
                },
                Slice {
                    id: SliceId::Remainder,
                    value: 100,
                },
            ]
        );
    }

    #[test]
    fn test_no_score_types_yields_empty_list() {
        let ctx = ScoreContext::new(date(2024, 5, 15));
        let checkmarks = vec![Checkmark::completed(date(2024, 5, 15))];
        assert!(get_score_type_data_list(&checkmarks, &[], &ctx).is_empty());
    }

    #[test]
    fn test_has_reached_goal_is_strict() {
        let ctx = ScoreContext::new(date(2024, 5, 15));
        let types = vec![create_score_type("Today", is_checkmark_today)];
        let checkmarks = vec![Checkmark::completed(date(2024, 5, 15))];
        let data = &get_score_type_data_list(&checkmarks, &types, &ctx)[0];

        assert!(data.has_reached_goal(Goal::new(99).unwrap()));
        assert!(!data.has_reached_goal(Goal::new(100).unwrap()));
    }

    #[test]
    fn test_slice_serialization_shape() {
        let ctx = ScoreContext::new(date(2024, 5, 15));
        let types = vec![create_score_type("Today", is_checkmark_today)];
        let checkmarks = vec![
            Checkmark::completed(date(2024, 5, 15)),
            Checkmark::failed(date(2024, 5, 15)),
        ];
        let data = &get_score_type_data_list(&checkmarks, &types, &ctx)[0];
        let json = serde_json::to_value(data).unwrap();

        assert_eq!(json["data"][0]["id"], "completed");
        assert_eq!(json["data"][0]["value"], 50);
        assert_eq!(json["data"][1]["id"], "remainder");
        assert_eq!(json["data"][1]["value"], 50);
    }
}
