//! Score engine for habit checkmarks
//!
//! This module buckets a habit's checkmarks into named time windows and
//! scores each window, including:
//! - **Context**: the injected reference day and week convention
//! - **Score types**: label + date predicate pairs
//! - **Engine**: percentage scoring and two-slice chart data
//! - **Report**: everything the performance panel displays

mod context;
mod engine;
mod report;
mod score_type;

pub use context::{
    is_checkmark_last_week, is_checkmark_this_week, is_checkmark_today, ScoreContext, WeekStart,
};

pub use engine::{
    calculate_score, get_score_type_data_list, percentage, ScoreTally, ScoreTypeData, Slice,
    SliceId,
};

pub use report::{Goal, PerformanceReport};

pub use score_type::{create_score_type, default_score_types, DatePredicate, ScoreType};
