use super::error::ThresholdError;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Get the current wall-clock instant in the local timezone
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Urgency bucket of a task's due date
///
/// Buckets are ordered from most to least urgent, with `NotSet` for items
/// that carry no due date at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DueStatus {
    /// No due date
    NotSet,
    /// The due day has already ended
    Overdue,
    /// Due within the next day threshold
    DueToday,
    /// Due within two day thresholds
    DueInADay,
    /// Due within the week threshold
    DueInAWeek,
    /// Due within the month threshold
    DueInAMonth,
    /// Due further out than the month threshold
    NotDueYet,
}

impl DueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::NotSet => "not set",
            DueStatus::Overdue => "overdue",
            DueStatus::DueToday => "due today",
            DueStatus::DueInADay => "due in a day",
            DueStatus::DueInAWeek => "due in a week",
            DueStatus::DueInAMonth => "due in a month",
            DueStatus::NotDueYet => "not due yet",
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket boundaries in seconds
///
/// Loaded from configuration; the defaults are one day, one week and
/// thirty days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DueThresholds {
    pub day: i64,
    pub week: i64,
    pub month: i64,
}

impl Default for DueThresholds {
    fn default() -> Self {
        Self {
            day: 86_400,
            week: 604_800,
            month: 2_592_000,
        }
    }
}

impl DueThresholds {
    /// Check that every threshold is positive and that they are ordered
    ///
    /// # Returns
    /// `Ok(())` when the thresholds can be used for classification
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for (name, value) in [("day", self.day), ("week", self.week), ("month", self.month)] {
            if value <= 0 {
                return Err(ThresholdError::Zero(name));
            }
        }
        if self.day > self.week || self.week > self.month {
            return Err(ThresholdError::Unordered {
                day: self.day,
                week: self.week,
                month: self.month,
            });
        }
        Ok(())
    }
}

/// Classified due date of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    pub date: NaiveDate,
    pub status: DueStatus,
    /// Signed seconds from the reference instant to the end of the due day,
    /// rounded half up
    pub seconds_to_due: i64,
}

/// Classify a due date against a reference instant
///
/// # Arguments
/// * `date` - Due date; the task is due at 23:59:59 on that day
/// * `reference` - Local "now" sampled once by the caller
/// * `thresholds` - Bucket boundaries in seconds
///
/// # Returns
/// The due date together with its bucket and remaining seconds
pub fn classify(date: NaiveDate, reference: NaiveDateTime, thresholds: &DueThresholds) -> Due {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default();
    // round half up to whole seconds; the reference may carry sub-seconds
    let millis = (date.and_time(end_of_day) - reference).num_milliseconds();
    let seconds_to_due = (millis + 500).div_euclid(1000);

    let status = if seconds_to_due < 0 {
        DueStatus::Overdue
    } else if seconds_to_due <= thresholds.day {
        DueStatus::DueToday
    } else if seconds_to_due <= thresholds.day * 2 {
        DueStatus::DueInADay
    } else if seconds_to_due <= thresholds.week {
        DueStatus::DueInAWeek
    } else if seconds_to_due <= thresholds.month {
        DueStatus::DueInAMonth
    } else {
        DueStatus::NotDueYet
    };

    Due {
        date,
        status,
        seconds_to_due,
    }
}

/// Reference instant and thresholds shared by every line of one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    pub now: NaiveDateTime,
    pub thresholds: DueThresholds,
}

impl ParseContext {
    pub fn new(now: NaiveDateTime, thresholds: DueThresholds) -> Self {
        Self { now, thresholds }
    }

    /// Sample the local clock once for a new batch
    pub fn sample(thresholds: DueThresholds) -> Self {
        Self::new(local_now(), thresholds)
    }

    pub fn classify(&self, date: NaiveDate) -> Due {
        classify(date, self.now, &self.thresholds)
    }
}
