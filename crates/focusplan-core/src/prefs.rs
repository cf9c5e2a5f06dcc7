//! Scheduling preferences.
//!
//! Controls how the planner slices the day:
//! - Focus and break block lengths in minutes
//! - Difficulty bias (schedule easier or harder tasks first)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User preference controlling whether easier or harder tasks come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyBias {
    /// Easiest tasks first (difficulty ascending)
    EasyFirst,
    /// Hardest tasks first (difficulty descending)
    HardFirst,
    /// Keep the due-date order untouched
    Balanced,
}

impl fmt::Display for DifficultyBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EasyFirst => "easy-first",
            Self::HardFirst => "hard-first",
            Self::Balanced => "balanced",
        };
        f.write_str(s)
    }
}

impl FromStr for DifficultyBias {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy-first" => Ok(Self::EasyFirst),
            "hard-first" => Ok(Self::HardFirst),
            "balanced" => Ok(Self::Balanced),
            other => Err(format!(
                "unknown difficulty bias: {other} (expected easy-first, hard-first, or balanced)"
            )),
        }
    }
}

/// Scheduling preferences for the day planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_focus_block_mins")]
    pub focus_block_mins: i64,
    #[serde(default = "default_break_mins")]
    pub break_mins: i64,
    #[serde(default = "default_difficulty_bias")]
    pub difficulty_bias: DifficultyBias,
}

fn default_focus_block_mins() -> i64 {
    25
}
fn default_break_mins() -> i64 {
    5
}
fn default_difficulty_bias() -> DifficultyBias {
    DifficultyBias::Balanced
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            focus_block_mins: default_focus_block_mins(),
            break_mins: default_break_mins(),
            difficulty_bias: default_difficulty_bias(),
        }
    }
}

impl Preferences {
    /// Both minute fields must be strictly positive for a plan to be built.
    pub fn is_valid(&self) -> bool {
        self.focus_block_mins > 0 && self.break_mins > 0
    }
}
