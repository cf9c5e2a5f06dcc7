//! Task model for the planner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schedulable task with difficulty, time estimate, and optional deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Deadline, if any. Tasks without one sort after everything else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    /// Difficulty rating in 1-5.
    pub difficulty: u8,
    pub estimate_mins: u32,
    pub done: bool,
}

impl Task {
    /// Create a new pending task with medium difficulty and no deadline.
    pub fn new(id: impl Into<String>, title: impl Into<String>, estimate_mins: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due: None,
            difficulty: 3,
            estimate_mins,
            done: false,
        }
    }

    /// Set the deadline.
    pub fn with_due(mut self, due: DateTime<Utc>) -> Self {
        self.due = Some(due);
        self
    }

    /// Set the difficulty, clamped to 1-5.
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty.clamp(1, 5);
        self
    }

    /// Whether this task is still waiting to be scheduled.
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}
