//! # Focusplan Core Library
//!
//! This library provides the core logic for Focusplan, a day planner for
//! students. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary over the same core library.
//!
//! ## Key Components
//!
//! - [`build_plan`]: Turn a task backlog into alternating focus/break blocks
//! - [`Habit`]: Daily habit tracking with streak calculation
//! - [`Preferences`]: Scheduling preferences (block lengths, difficulty bias)
//! - [`Config`]: TOML-based application configuration

pub mod config;
pub mod error;
pub mod habit;
pub mod planner;
pub mod prefs;
pub mod task;

pub use config::Config;
pub use error::{ConfigError, CoreError};
pub use habit::{current_streak, Habit};
pub use planner::{build_plan, build_plan_at, BlockKind, Plan, PlanBlock, MAX_PLAN_BLOCKS};
pub use prefs::{DifficultyBias, Preferences};
pub use task::Task;
