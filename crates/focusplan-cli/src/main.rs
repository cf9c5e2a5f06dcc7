use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focusplan-cli", version, about = "Focusplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build today's focus/break plan from a task list
    Plan(commands::plan::PlanArgs),
    /// Habit tracking and streaks
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
