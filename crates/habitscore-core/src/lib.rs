//! # habitscore Core Library
//!
//! This library provides the logic behind a habit tracker's performance
//! panel. It implements a CLI-first philosophy where every computation is
//! available through a standalone CLI binary, with any GUI being a thin
//! view layer over the same core library.
//!
//! ## Architecture
//!
//! - **Checkmarks**: dated records with a closed three-state value
//! - **Score Engine**: pure functions that bucket checkmarks into time
//!   windows and score them. The reference day is always passed in through
//!   [`ScoreContext`]; nothing here reads the clock
//! - **Labels**: pluggable `(key) -> text` lookup for window names
//! - **Storage**: TOML-based configuration (goal, week start, labels)
//!
//! ## Key Components
//!
//! - [`get_score_type_data_list`]: per-window scores and chart slices
//! - [`calculate_score`]: the all-time score
//! - [`PerformanceReport`]: everything the panel renders
//! - [`Config`]: application configuration management

pub mod checkmark;
pub mod error;
pub mod labels;
pub mod scores;
pub mod storage;

pub use checkmark::{parse_checkmarks, read_checkmarks, Checkmark, CheckmarkValue};
pub use error::{ConfigError, CoreError, ValidationError};
pub use labels::{DefaultLabels, LabelOverrides, Labels};
pub use scores::{
    calculate_score, create_score_type, default_score_types, get_score_type_data_list,
    is_checkmark_last_week, is_checkmark_this_week, is_checkmark_today, Goal, PerformanceReport,
    ScoreContext, ScoreType, ScoreTypeData, Slice, SliceId, WeekStart,
};
pub use storage::Config;
