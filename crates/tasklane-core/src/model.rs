//! Task and business-hours types shared by every engine module.
//!
//! Field names serialize in camelCase so task lists exchanged with the
//! timeline front end round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ValidationError;
use crate::time::{parse_time, time_to_minutes, SLOT_MINUTES};

/// Longest task accepted by validation: one full day.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// A unit of work to place on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Total span in minutes, a positive multiple of 15
    pub duration_minutes: u32,
    /// Active portion; defaults to the duration minus wait time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_time_minutes: Option<u32>,
    /// Idle portion; defaults to 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_minutes: Option<u32>,
    /// `HH:MM`, only meaningful while placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default)]
    pub is_placed: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_types: Vec<String>,
}

impl Task {
    /// Create an unplaced, all-work task
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_minutes,
            work_time_minutes: None,
            wait_time_minutes: None,
            start_time: None,
            is_placed: false,
            is_locked: false,
            resource_types: Vec::new(),
        }
    }

    /// Split the duration into work and wait time
    pub fn with_split(mut self, work_minutes: u32, wait_minutes: u32) -> Self {
        self.work_time_minutes = Some(work_minutes);
        self.wait_time_minutes = Some(wait_minutes);
        self
    }

    /// Place the task at `start`, keeping its lock flag
    pub fn with_placement(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.is_placed = true;
        self
    }

    /// Mark the task locked
    pub fn with_lock(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Attach resource tags
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resource_types = resources.into_iter().map(Into::into).collect();
        self
    }

    /// Return the task to the unplaced pool. Clears the lock as well.
    pub fn into_unplaced(mut self) -> Self {
        self.start_time = None;
        self.is_placed = false;
        self.is_locked = false;
        self
    }

    /// Work time used for collision checks, never more than the duration.
    pub fn effective_work_time(&self) -> u32 {
        effective_work_time(
            self.duration_minutes,
            self.work_time_minutes,
            self.wait_time_minutes,
        )
    }

    /// Whatever follows the work portion within the duration.
    pub fn effective_wait_time(&self) -> u32 {
        self.duration_minutes - self.effective_work_time()
    }

    /// Start time if the task is placed
    pub fn placement(&self) -> Option<&str> {
        if self.is_placed {
            self.start_time.as_deref()
        } else {
            None
        }
    }

    /// Start in minutes since midnight, if placed
    pub fn start_minutes(&self) -> Option<u32> {
        self.placement().map(time_to_minutes)
    }

    /// End of the whole duration in minutes since midnight, if placed
    pub fn end_minutes(&self) -> Option<u32> {
        self.start_minutes()
            .map(|s| s.saturating_add(self.duration_minutes))
    }

    /// Placed and locked: the optimizer must leave it where it is.
    pub fn is_locked_in_place(&self) -> bool {
        self.is_locked && self.placement().is_some()
    }

    /// Tasks without tags compete for the single shared lane; tagged tasks
    /// only conflict with tasks that share a tag.
    pub fn shares_resource_with(&self, other: &Task) -> bool {
        if self.resource_types.is_empty() || other.resource_types.is_empty() {
            return true;
        }
        self.resource_types
            .iter()
            .any(|r| other.resource_types.contains(r))
    }

    /// Check the task against the alignment and split rules.
    ///
    /// # Errors
    /// Returns the first rule the task violates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration_minutes == 0 || self.duration_minutes % SLOT_MINUTES != 0 {
            return Err(ValidationError::UnalignedDuration {
                task_id: self.id.clone(),
                minutes: self.duration_minutes,
            });
        }
        if self.duration_minutes > MAX_DURATION_MINUTES {
            return Err(ValidationError::DurationTooLong {
                task_id: self.id.clone(),
                minutes: self.duration_minutes,
            });
        }

        let split_mismatch = match (self.work_time_minutes, self.wait_time_minutes) {
            (Some(work), Some(wait)) => work.checked_add(wait) != Some(self.duration_minutes),
            (Some(work), None) => work > self.duration_minutes,
            (None, Some(wait)) => wait > self.duration_minutes,
            (None, None) => false,
        };
        if split_mismatch {
            return Err(ValidationError::InconsistentWorkWaitSplit {
                task_id: self.id.clone(),
                work: self.work_time_minutes.unwrap_or(0),
                wait: self.wait_time_minutes.unwrap_or(0),
                duration: self.duration_minutes,
            });
        }

        if let Some(start) = &self.start_time {
            parse_time(start)?;
        } else if self.is_placed {
            return Err(ValidationError::MissingStartTime(self.id.clone()));
        }

        Ok(())
    }
}

/// Work time the engine assumes for a duration and optional split.
///
/// `work ?? (duration - (wait ?? 0))`, clamped to `[0, duration]`.
pub fn effective_work_time(duration: u32, work: Option<u32>, wait: Option<u32>) -> u32 {
    work.unwrap_or_else(|| duration.saturating_sub(wait.unwrap_or(0)))
        .min(duration)
}

/// Validate every task and reject duplicate ids.
///
/// # Errors
/// Returns the first validation failure in input order.
pub fn validate_tasks(tasks: &[Task]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id.as_str()) {
            return Err(ValidationError::DuplicateTaskId(task.id.clone()));
        }
    }
    Ok(())
}

/// A half-open `[start, end)` window of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String, // HH:MM
    pub end: String,   // HH:MM
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether a minute offset falls inside this range
    pub fn contains(&self, minutes: u32) -> bool {
        time_to_minutes(&self.start) <= minutes && minutes < time_to_minutes(&self.end)
    }
}

/// The working window slots are generated in, with optional breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub start: String, // HH:MM
    pub end: String,   // HH:MM
    /// Windows (e.g. lunch) that produce no slots
    #[serde(default)]
    pub breaks: Vec<TimeRange>,
}

impl BusinessHours {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            breaks: Vec::new(),
        }
    }

    /// Add a break window
    pub fn with_break(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.breaks.push(TimeRange::new(start, end));
        self
    }

    /// Whether a slot starting at `minutes` falls in a break
    pub fn is_break(&self, minutes: u32) -> bool {
        self.breaks.iter().any(|b| b.contains(minutes))
    }

    /// # Errors
    /// Returns an error if any time is malformed or a window is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range(&self.start, &self.end)?;
        for b in &self.breaks {
            check_range(&b.start, &b.end)?;
        }
        Ok(())
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::new("09:00", "18:00")
    }
}

fn check_range(start: &str, end: &str) -> Result<(), ValidationError> {
    if parse_time(start)? >= parse_time(end)? {
        return Err(ValidationError::InvalidBusinessHours {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}
