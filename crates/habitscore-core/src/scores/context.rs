//! Reference date and the date-window predicates.
//!
//! Every window is anchored to an explicit [`ScoreContext`] instead of the
//! wall clock, so the same history always produces the same scores for the
//! same reference day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO-8601 weeks
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Number of days between the start of the week and `day` (0..=6).
    pub fn days_into_week(self, day: Weekday) -> u32 {
        match self {
            WeekStart::Monday => day.num_days_from_monday(),
            WeekStart::Sunday => day.num_days_from_sunday(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStart {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            _ => Err(ValidationError::InvalidWeekStart(s.to_string())),
        }
    }
}

/// The "now" that date windows are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreContext {
    pub today: NaiveDate,
    pub week_start: WeekStart,
}

impl ScoreContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            week_start: WeekStart::default(),
        }
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// First day of the week containing `date`.
    ///
    /// `None` only for dates within a week of `NaiveDate::MIN`.
    pub fn week_start_of(&self, date: NaiveDate) -> Option<NaiveDate> {
        let offset = self.week_start.days_into_week(date.weekday());
        date.checked_sub_days(Days::new(u64::from(offset)))
    }

    /// How many whole weeks `date`'s week lies before the current week.
    /// Zero for the current week, negative for future weeks.
    pub fn weeks_ago(&self, date: NaiveDate) -> Option<i64> {
        let current = self.week_start_of(self.today)?;
        let other = self.week_start_of(date)?;
        Some(current.signed_duration_since(other).num_days() / 7)
    }
}

/// Checkmark falls on the reference day.
pub fn is_checkmark_today(date: NaiveDate, ctx: &ScoreContext) -> bool {
    date == ctx.today
}

/// Checkmark falls anywhere in the week containing the reference day,
/// including days after it.
pub fn is_checkmark_this_week(date: NaiveDate, ctx: &ScoreContext) -> bool {
    ctx.weeks_ago(date) == Some(0)
}

/// Checkmark falls in the week immediately before the current one.
pub fn is_checkmark_last_week(date: NaiveDate, ctx: &ScoreContext) -> bool {
    ctx.weeks_ago(date) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-05-15 is a Wednesday.
    fn wednesday() -> ScoreContext {
        ScoreContext::new(date(2024, 5, 15))
    }

    #[test]
    fn test_today_matches_only_reference_day() {
        let ctx = wednesday();
        assert!(is_checkmark_today(date(2024, 5, 15), &ctx));
        assert!(!is_checkmark_today(date(2024, 5, 14), &ctx));
        assert!(!is_checkmark_today(date(2024, 5, 16), &ctx));
    }

    #[test]
    fn test_monday_week_bounds() {
        let ctx = wednesday();
        assert_eq!(ctx.week_start_of(ctx.today), Some(date(2024, 5, 13)));

        assert!(is_checkmark_this_week(date(2024, 5, 13), &ctx));
        assert!(is_checkmark_this_week(date(2024, 5, 19), &ctx));
        assert!(!is_checkmark_this_week(date(2024, 5, 12), &ctx));
        assert!(!is_checkmark_this_week(date(2024, 5, 20), &ctx));

        assert!(is_checkmark_last_week(date(2024, 5, 6), &ctx));
        assert!(is_checkmark_last_week(date(2024, 5, 12), &ctx));
        assert!(!is_checkmark_last_week(date(2024, 5, 5), &ctx));
        assert!(!is_checkmark_last_week(date(2024, 5, 13), &ctx));
    }

    #[test]
    fn test_sunday_week_bounds() {
        let ctx = wednesday().with_week_start(WeekStart::Sunday);
        assert_eq!(ctx.week_start_of(ctx.today), Some(date(2024, 5, 12)));

        assert!(is_checkmark_this_week(date(2024, 5, 12), &ctx));
        assert!(is_checkmark_this_week(date(2024, 5, 18), &ctx));
        assert!(!is_checkmark_this_week(date(2024, 5, 19), &ctx));

        assert!(is_checkmark_last_week(date(2024, 5, 5), &ctx));
        assert!(is_checkmark_last_week(date(2024, 5, 11), &ctx));
        assert!(!is_checkmark_last_week(date(2024, 5, 4), &ctx));
    }

    #[test]
    fn test_this_week_and_last_week_are_disjoint() {
        let ctx = wednesday();
        let mut day = date(2024, 4, 20);
        while day <= date(2024, 6, 1) {
            assert!(
                !(is_checkmark_this_week(day, &ctx) && is_checkmark_last_week(day, &ctx)),
                "{day} matched both windows"
            );
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_boundary_on_week_start_day() {
        // Reference day is itself the first day of the week.
        let ctx = ScoreContext::new(date(2024, 5, 13));
        assert!(is_checkmark_this_week(date(2024, 5, 13), &ctx));
        assert!(is_checkmark_last_week(date(2024, 5, 12), &ctx));
    }

    #[test]
    fn test_year_boundary() {
        // 2025-01-01 is a Wednesday; its ISO week starts 2024-12-30.
        let ctx = ScoreContext::new(date(2025, 1, 1));
        assert!(is_checkmark_this_week(date(2024, 12, 30), &ctx));
        assert!(is_checkmark_last_week(date(2024, 12, 29), &ctx));
        assert!(is_checkmark_last_week(date(2024, 12, 23), &ctx));
    }

    #[test]
    fn test_min_date_never_matches() {
        let ctx = wednesday();
        assert!(!is_checkmark_this_week(NaiveDate::MIN, &ctx));
        assert!(!is_checkmark_last_week(NaiveDate::MIN, &ctx));
    }

    #[test]
    fn test_week_start_parsing() {
        assert_eq!("Monday".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert_eq!("sun".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert!("friday".parse::<WeekStart>().is_err());
        assert_eq!(WeekStart::Sunday.weekday(), Weekday::Sun);
    }
}
