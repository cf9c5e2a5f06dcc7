//! Plan command: build today's focus/break schedule.

use std::io::Read;

use clap::Args;
use focusplan_core::error::Result;
use focusplan_core::{build_plan, BlockKind, Config, DifficultyBias, Task};

#[derive(Args)]
pub struct PlanArgs {
    /// Path to a JSON task list ("-" for stdin)
    #[arg(long, default_value = "-")]
    tasks: String,
    /// Focus block length in minutes (overrides config)
    #[arg(long, value_name = "MINS")]
    focus: Option<i64>,
    /// Break length in minutes (overrides config)
    #[arg(long = "break", value_name = "MINS")]
    break_mins: Option<i64>,
    /// Difficulty bias: easy-first, hard-first, or balanced (overrides config)
    #[arg(long)]
    bias: Option<DifficultyBias>,
    /// Emit the plan as JSON
    #[arg(long)]
    json: bool,
}

/// Read a JSON task list from a file, or stdin when `source` is "-".
fn read_tasks(source: &str) -> Result<Vec<Task>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(serde_json::from_str(&raw)?)
}

pub fn run(args: PlanArgs) -> Result<()> {
    let tasks = read_tasks(&args.tasks)?;

    let mut prefs = Config::load_or_default().planner;
    if let Some(focus) = args.focus {
        prefs.focus_block_mins = focus;
    }
    if let Some(brk) = args.break_mins {
        prefs.break_mins = brk;
    }
    if let Some(bias) = args.bias {
        prefs.difficulty_bias = bias;
    }

    let plan = build_plan(&tasks, Some(&prefs));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("nothing scheduled");
        return Ok(());
    }

    for block in &plan.blocks {
        match block.kind {
            BlockKind::Focus => println!(
                "{} - {}  focus  {}",
                block.start_time,
                block.end_time,
                block.task_title.as_deref().unwrap_or("")
            ),
            BlockKind::Break => {
                println!("{} - {}  break", block.start_time, block.end_time)
            }
        }
    }
    Ok(())
}
