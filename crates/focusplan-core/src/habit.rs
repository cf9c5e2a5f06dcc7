//! Daily habit tracking with streak calculation.
//!
//! A habit records the calendar days it was completed. The streak is the
//! number of consecutive days ending today; any gap resets it.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Count consecutive completed days ending at `today`, walking backwards.
///
/// Duplicate dates are ignored. A day missing from the chain breaks the
/// streak, so a habit last completed yesterday but not today has streak 0.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    let mut streak = 0;
    for (i, date) in sorted.iter().enumerate() {
        let Some(expected) = today.checked_sub_days(Days::new(i as u64)) else {
            break;
        };
        if *date == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// A tracked daily habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Consecutive completed days ending today.
    pub streak: u32,
    /// Total days ever completed.
    pub total_days: u32,
    pub completed_dates: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with a generated id and no history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            category: None,
            streak: 0,
            total_days: 0,
            completed_dates: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether the habit was completed on the given day.
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Toggle completion for `today`.
    ///
    /// Marking recomputes the streak from the full history; unmarking
    /// decrements streak and total, floored at zero.
    pub fn toggle(&mut self, today: NaiveDate) {
        if let Some(pos) = self.completed_dates.iter().position(|d| *d == today) {
            self.completed_dates.remove(pos);
            self.streak = self.streak.saturating_sub(1);
            self.total_days = self.total_days.saturating_sub(1);
        } else {
            self.completed_dates.push(today);
            self.streak = current_streak(&self.completed_dates, today);
            self.total_days += 1;
        }
    }
}
