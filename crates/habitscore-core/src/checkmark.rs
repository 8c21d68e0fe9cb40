//! Checkmark records.
//!
//! A checkmark is one day of a habit's history. Its value is one of three
//! states; anything else is rejected when the record is built, so the
//! scoring code never has to decide what an unknown state means.
//!
//! The numeric wire encoding is `1` for completed, `-1` for failed and `0`
//! for empty. JSON input may also use the lowercase state names.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Completion state of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCheckmarkValue", into = "i8")]
pub enum CheckmarkValue {
    /// Nothing recorded for the day
    #[default]
    Empty,
    /// Habit done
    Completed,
    /// Habit explicitly missed
    Failed,
}

impl CheckmarkValue {
    pub const ALL: [CheckmarkValue; 3] = [
        CheckmarkValue::Empty,
        CheckmarkValue::Completed,
        CheckmarkValue::Failed,
    ];

    /// Numeric code used on the wire.
    pub fn code(self) -> i8 {
        match self {
            CheckmarkValue::Empty => 0,
            CheckmarkValue::Completed => 1,
            CheckmarkValue::Failed => -1,
        }
    }

    pub fn is_completed(self) -> bool {
        self == CheckmarkValue::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckmarkValue::Empty => "empty",
            CheckmarkValue::Completed => "completed",
            CheckmarkValue::Failed => "failed",
        }
    }
}

impl fmt::Display for CheckmarkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for CheckmarkValue {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CheckmarkValue::Empty),
            1 => Ok(CheckmarkValue::Completed),
            -1 => Ok(CheckmarkValue::Failed),
            other => Err(ValidationError::InvalidCheckmarkValue(other)),
        }
    }
}

impl FromStr for CheckmarkValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return CheckmarkValue::try_from(code);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "empty" => Ok(CheckmarkValue::Empty),
            "completed" => Ok(CheckmarkValue::Completed),
            "failed" => Ok(CheckmarkValue::Failed),
            _ => Err(ValidationError::InvalidCheckmarkName(s.to_string())),
        }
    }
}

impl From<CheckmarkValue> for i8 {
    fn from(value: CheckmarkValue) -> Self {
        value.code()
    }
}

/// Accepted JSON shapes for a checkmark value.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCheckmarkValue {
    Code(i64),
    Name(String),
}

impl TryFrom<RawCheckmarkValue> for CheckmarkValue {
    type Error = ValidationError;

    fn try_from(raw: RawCheckmarkValue) -> Result<Self, Self::Error> {
        match raw {
            RawCheckmarkValue::Code(code) => CheckmarkValue::try_from(code),
            RawCheckmarkValue::Name(name) => name.parse(),
        }
    }
}

/// One dated entry of a habit's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkmark {
    /// Calendar date, no time zone
    pub date: NaiveDate,
    pub value: CheckmarkValue,
}

impl Checkmark {
    pub fn new(date: NaiveDate, value: CheckmarkValue) -> Self {
        Self { date, value }
    }

    pub fn completed(date: NaiveDate) -> Self {
        Self::new(date, CheckmarkValue::Completed)
    }

    pub fn failed(date: NaiveDate) -> Self {
        Self::new(date, CheckmarkValue::Failed)
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, CheckmarkValue::Empty)
    }

    /// Build from a raw numeric code, rejecting unknown states.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCheckmarkValue`] when `code` is not
    /// one of `-1`, `0` or `1`.
    pub fn from_code(date: NaiveDate, code: i64) -> Result<Self, ValidationError> {
        Ok(Self::new(date, CheckmarkValue::try_from(code)?))
    }
}

/// Parse a JSON array of checkmarks.
///
/// # Errors
///
/// Returns [`CoreError::Json`](crate::error::CoreError::Json) for malformed
/// JSON, bad dates, or values outside the three states.
pub fn parse_checkmarks(json: &str) -> Result<Vec<Checkmark>> {
    let checkmarks: Vec<Checkmark> = serde_json::from_str(json)?;
    tracing::debug!(count = checkmarks.len(), "parsed checkmarks");
    Ok(checkmarks)
}

/// Read a JSON array of checkmarks from `reader`.
///
/// # Errors
///
/// Returns an IO error if reading fails, otherwise as [`parse_checkmarks`].
pub fn read_checkmarks<R: Read>(mut reader: R) -> Result<Vec<Checkmark>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_checkmarks(&content)
}
