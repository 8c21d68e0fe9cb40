//! Named time windows.

use std::fmt;

use chrono::NaiveDate;

use super::context::{
    is_checkmark_last_week, is_checkmark_this_week, is_checkmark_today, ScoreContext,
};
use crate::labels::Labels;

/// Decides whether a checkmark date belongs to a window.
pub type DatePredicate = fn(NaiveDate, &ScoreContext) -> bool;

/// A display label paired with the window it classifies.
///
/// The label is opaque here; it is only carried through to the output.
#[derive(Clone)]
pub struct ScoreType {
    pub label: String,
    pub predicate: DatePredicate,
}

impl fmt::Debug for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreType")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl ScoreType {
    pub fn matches(&self, date: NaiveDate, ctx: &ScoreContext) -> bool {
        (self.predicate)(date, ctx)
    }
}

pub fn create_score_type(label: impl Into<String>, predicate: DatePredicate) -> ScoreType {
    ScoreType {
        label: label.into(),
        predicate,
    }
}

/// Windows shown on the performance panel, left to right.
pub fn default_score_types<L: Labels + ?Sized>(labels: &L) -> Vec<ScoreType> {
    vec![
        create_score_type(labels.label("lastWeek"), is_checkmark_last_week),
        create_score_type(labels.label("thisWeek"), is_checkmark_this_week),
        create_score_type(labels.label("today"), is_checkmark_today),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::DefaultLabels;

    #[test]
    fn test_create_score_type_keeps_label_and_predicate() {
        fn always(_: NaiveDate, _: &ScoreContext) -> bool {
            true
        }
        let score_type = create_score_type("Everything", always);
        let ctx = ScoreContext::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(score_type.label, "Everything");
        assert!(score_type.matches(NaiveDate::MIN, &ctx));
    }

    #[test]
    fn test_default_score_types_order() {
        let types = default_score_types(&DefaultLabels);
        let labels: Vec<_> = types.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Last week", "This week", "Today"]);
    }

    #[test]
    fn test_default_score_types_use_label_lookup() {
        let upper = |key: &str| key.to_uppercase();
        let types = default_score_types(&upper);
        assert_eq!(types[0].label, "LASTWEEK");
        assert_eq!(types[2].label, "TODAY");
    }
}
