//! Display label lookup.
//!
//! The score engine never reads labels; they are produced here from
//! translation keys and carried through verbatim.

use std::collections::HashMap;

/// Translation keys with a built-in English label.
pub const KNOWN_KEYS: &[&str] = &[
    "lastWeek",
    "thisWeek",
    "today",
    "goal",
    "yourPerformance",
    "overallPerformance",
    "noHabits",
];

/// `(key) -> label` lookup.
pub trait Labels {
    fn label(&self, key: &str) -> String;
}

impl<F> Labels for F
where
    F: Fn(&str) -> String,
{
    fn label(&self, key: &str) -> String {
        self(key)
    }
}

/// Built-in English catalog. Unknown keys are returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl Labels for DefaultLabels {
    fn label(&self, key: &str) -> String {
        let text = match key {
            "lastWeek" => "Last week",
            "thisWeek" => "This week",
            "today" => "Today",
            "goal" => "Goal",
            "yourPerformance" => "Your performance",
            "overallPerformance" => "Overall performance",
            "noHabits" => "There are no habits",
            other => other,
        };
        text.to_string()
    }
}

/// User-supplied labels falling back to [`DefaultLabels`].
#[derive(Debug, Clone, Default)]
pub struct LabelOverrides {
    overrides: HashMap<String, String>,
}

impl LabelOverrides {
    pub fn new<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overrides: HashMap<String, String> = overrides.into_iter().collect();
        for key in overrides.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                tracing::warn!(key = %key, "label override for unknown key");
            }
        }
        Self { overrides }
    }
}

impl Labels for LabelOverrides {
    fn label(&self, key: &str) -> String {
        match self.overrides.get(key) {
            Some(text) => text.clone(),
            None => DefaultLabels.label(key),
        }
    }
}
