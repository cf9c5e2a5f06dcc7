//! Habit tracking commands.
//!
//! Habits live in a JSON file owned by the user and passed via --file.

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Subcommand;
use focusplan_core::error::Result;
use focusplan_core::{CoreError, Habit};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Optional category
        #[arg(long)]
        category: Option<String>,
        /// Habit file to update
        #[arg(long)]
        file: PathBuf,
    },
    /// Toggle today's completion for a habit
    Toggle {
        /// Habit ID
        id: String,
        /// Habit file to update
        #[arg(long)]
        file: PathBuf,
    },
    /// List habits with current streaks
    List {
        /// Habit file to read
        #[arg(long)]
        file: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Read a habit file; a missing file is an empty list.
fn load_habits(path: &Path) -> Result<Vec<Habit>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn save_habits(path: &Path, habits: &[Habit]) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(habits)?)?;
    Ok(())
}

pub fn run(action: HabitAction) -> Result<()> {
    match action {
        HabitAction::Add {
            name,
            category,
            file,
        } => {
            let mut habits = load_habits(&file)?;
            let mut habit = Habit::new(name);
            if let Some(category) = category {
                habit = habit.with_category(category);
            }
            println!("habit created: {}", habit.id);
            habits.push(habit);
            save_habits(&file, &habits)?;
        }
        HabitAction::Toggle { id, file } => {
            let mut habits = load_habits(&file)?;
            let today = Local::now().date_naive();
            let habit = habits
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or_else(|| CoreError::Custom(format!("no habit with id: {id}")))?;
            habit.toggle(today);
            let state = if habit.is_completed_on(today) {
                "completed"
            } else {
                "not completed"
            };
            println!("{}: {state}, streak {}", habit.name, habit.streak);
            save_habits(&file, &habits)?;
        }
        HabitAction::List { file, json } => {
            let habits = load_habits(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&habits)?);
            } else {
                for habit in &habits {
                    println!(
                        "{}  {}  streak {} ({} days total)",
                        habit.id, habit.name, habit.streak, habit.total_days
                    );
                }
            }
        }
    }
    Ok(())
}
