mod config_cmd;
mod export_cmd;
mod routine;
mod session;
mod timer;
mod week;

pub use config_cmd::ConfigCommand;
pub use export_cmd::ExportCommand;
pub use routine::RoutineCommand;
pub use session::LogCommand;
pub use timer::TimerCommand;
pub use week::WeekCommand;

use clap::ValueEnum;

use crate::models::day;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Day names are validated at the input boundary; the reconciler itself
/// tolerates unknown days.
fn validate_day(day: &str) -> Result<(), String> {
    if day::is_valid_day(day) {
        Ok(())
    } else {
        Err(format!(
            "Invalid day '{}'. Valid options: {}",
            day,
            day::DAYS_OF_WEEK.join(", ")
        ))
    }
}

/// Week numbers start at 1. Checked wherever a week crosses the CLI
/// boundary so a zero week never reaches the reconciler or the store.
fn validate_week(week: u32) -> Result<(), String> {
    if week >= 1 {
        Ok(())
    } else {
        Err("Week number must be at least 1".to_string())
    }
}
