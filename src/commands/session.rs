use clap::{Args, Subcommand};
use std::str::FromStr;

use super::{validate_day, validate_week, OutputFormat};
use crate::config::Config;
use crate::models::Feeling;
use crate::reconcile::{reconcile_with_policy, SetCountPolicy};
use crate::store::{log_write_error, JsonStore};

#[derive(Args)]
pub struct LogCommand {
    #[command(subcommand)]
    pub command: LogSubcommand,
}

#[derive(Subcommand)]
pub enum LogSubcommand {
    /// Show the session log for a day, merged with the current routine
    Show {
        /// Week number (defaults to the current week)
        #[arg(long, short)]
        week: Option<u32>,

        /// Day of the week (Lunes..Domingo)
        #[arg(long, short)]
        day: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Record reps and/or feeling for one set
    Record {
        /// Week number (defaults to the current week)
        #[arg(long, short)]
        week: Option<u32>,

        /// Day of the week (Lunes..Domingo)
        #[arg(long, short)]
        day: String,

        /// Exercise id or name
        #[arg(long, short)]
        exercise: String,

        /// Set position, 1-based
        #[arg(long, short)]
        set: usize,

        /// Repetitions performed
        #[arg(long, short)]
        reps: Option<u32>,

        /// Feeling (awful, bad, okay, good, great)
        #[arg(long)]
        feeling: Option<String>,
    },
}

impl LogCommand {
    pub fn run(&self, store: &JsonStore, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let policy = if config.resize_sets_to_target {
            SetCountPolicy::ResizeToTarget
        } else {
            SetCountPolicy::PreserveRecorded
        };

        match &self.command {
            LogSubcommand::Show { week, day, format } => {
                validate_day(day)?;
                if let Some(week) = week {
                    validate_week(*week)?;
                }
                let week = week.unwrap_or_else(|| store.load_current_week());
                let routine = store.load_routine();
                let logs = store.load_logs();

                // Display only; the merged view is not persisted.
                let log = reconcile_with_policy(&routine, &logs, week, day, policy);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&log)?);
                    }
                    OutputFormat::Text => {
                        if log.exercises.is_empty() {
                            println!("No routine defined for {} (Semana {})", day, week);
                        } else {
                            print!("{}", log);
                        }
                    }
                }
                Ok(())
            }

            LogSubcommand::Record {
                week,
                day,
                exercise,
                set,
                reps,
                feeling,
            } => {
                validate_day(day)?;
                if let Some(week) = week {
                    validate_week(*week)?;
                }
                if reps.is_none() && feeling.is_none() {
                    return Err("Nothing to record: pass --reps and/or --feeling".into());
                }
                let feeling = feeling
                    .as_deref()
                    .map(Feeling::from_str)
                    .transpose()
                    .map_err(|e: String| e)?;

                let week = week.unwrap_or_else(|| store.load_current_week());
                let routine = store.load_routine();
                let mut logs = store.load_logs();

                let mut log = reconcile_with_policy(&routine, &logs, week, day, policy);

                let entry = log
                    .exercises
                    .iter_mut()
                    .find(|ex| ex.id == *exercise || ex.name == *exercise)
                    .ok_or_else(|| format!("Exercise not found in {}: {}", day, exercise))?;

                if *set == 0 || *set > entry.sets.len() {
                    return Err(format!(
                        "Set {} out of range for '{}' (1..{})",
                        set,
                        entry.name,
                        entry.sets.len()
                    )
                    .into());
                }
                let name = entry.name.clone();
                let set_log = &mut entry.sets[set - 1];
                if let Some(reps) = reps {
                    set_log.record_reps(*reps);
                }
                if let Some(feeling) = feeling {
                    set_log.record_feeling(feeling);
                }

                logs.insert(log);
                log_write_error(store.save_logs(&logs));

                let reps_str = reps
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let feeling_str = feeling
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "Recorded {} S{}: {} reps, {} (Semana {}, {})",
                    name, set, reps_str, feeling_str, week, day
                );
                Ok(())
            }
        }
    }
}

