//! Performance panel data.
//!
//! Bundles what the panel shows: one breakdown per default window, the
//! all-time score across the whole history, and the goal those scores are
//! compared against.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::context::ScoreContext;
use super::engine::{calculate_score, get_score_type_data_list, ScoreTypeData};
use super::score_type::default_score_types;
use crate::checkmark::Checkmark;
use crate::error::ValidationError;
use crate::labels::Labels;

/// Target percentage, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Goal(u8);

impl Goal {
    pub const DEFAULT: Goal = Goal(80);

    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidGoal`] outside 0..=100.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Goal(v)),
            _ => Err(ValidationError::InvalidGoal(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Goal {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Goal::new(value)
    }
}

impl From<Goal> for u8 {
    fn from(goal: Goal) -> Self {
        goal.0
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Last week, this week, today
    pub windows: Vec<ScoreTypeData>,
    pub all_time_score: u8,
    pub goal: Goal,
    /// Number of checkmarks in the history
    pub total_checkmarks: usize,
}

impl PerformanceReport {
    pub fn build<L: Labels + ?Sized>(
        checkmarks: &[Checkmark],
        ctx: &ScoreContext,
        goal: Goal,
        labels: &L,
    ) -> Self {
        let score_types = default_score_types(labels);
        let windows = get_score_type_data_list(checkmarks, &score_types, ctx);
        let all_time_score = calculate_score(checkmarks.iter().map(|c| c.value));

        tracing::debug!(
            today = %ctx.today,
            week_start = %ctx.week_start,
            checkmarks = checkmarks.len(),
            all_time_score,
            "built performance report"
        );

        Self {
            windows,
            all_time_score,
            goal,
            total_checkmarks: checkmarks.len(),
        }
    }

    /// No history at all.
    pub fn is_empty(&self) -> bool {
        self.total_checkmarks == 0
    }

    /// Windows whose score is above the goal.
    pub fn windows_above_goal(&self) -> impl Iterator<Item = &ScoreTypeData> {
        self.windows
            .iter()
            .filter(move |window| window.has_reached_goal(self.goal))
    }
}
