use clap::{Args, Subcommand};

use super::{validate_day, OutputFormat};
use crate::models::{day, RoutineExercise, WeeklyRoutine};
use crate::store::{log_write_error, JsonStore};

#[derive(Args)]
pub struct RoutineCommand {
    #[command(subcommand)]
    pub command: RoutineSubcommand,
}

#[derive(Subcommand)]
pub enum RoutineSubcommand {
    /// Add an exercise to a day's routine
    Add {
        /// Day of the week (Lunes..Domingo)
        #[arg(long, short)]
        day: String,

        /// Exercise name
        #[arg(long, short)]
        name: String,

        /// Target number of sets
        #[arg(long, short)]
        sets: u32,
    },

    /// Remove an exercise from a day's routine
    Remove {
        /// Day of the week (Lunes..Domingo)
        #[arg(long, short)]
        day: String,

        /// Exercise id or name
        exercise: String,
    },

    /// Show the routine
    Show {
        /// Limit to a single day
        #[arg(long, short)]
        day: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl RoutineCommand {
    pub fn run(&self, store: &JsonStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RoutineSubcommand::Add { day, name, sets } => {
                validate_day(day)?;
                let name = name.trim();
                if name.is_empty() {
                    return Err("Exercise name cannot be empty".into());
                }
                if *sets == 0 {
                    return Err("Target set count must be greater than zero".into());
                }

                let mut routine = store.load_routine();
                let exercise = RoutineExercise::new(name, *sets);
                let id = exercise.id.clone();
                routine.add_exercise(day, exercise);
                log_write_error(store.save_routine(&routine));

                println!("Added '{}' ({} series) to {} [{}]", name, sets, day, id);
                Ok(())
            }

            RoutineSubcommand::Remove { day, exercise } => {
                validate_day(day)?;
                let mut routine = store.load_routine();

                let id = find_exercise_id(&routine, day, exercise)
                    .ok_or_else(|| format!("Exercise not found in {}: {}", day, exercise))?;
                let removed = routine
                    .remove_exercise(day, &id)
                    .ok_or_else(|| format!("Exercise not found in {}: {}", day, exercise))?;
                log_write_error(store.save_routine(&routine));

                println!("Removed '{}' from {}", removed.name, day);
                Ok(())
            }

            RoutineSubcommand::Show { day, format } => {
                if let Some(day) = day {
                    validate_day(day)?;
                }
                let routine = store.load_routine();

                match format {
                    OutputFormat::Json => match day {
                        Some(d) => {
                            println!(
                                "{}",
                                serde_json::to_string_pretty(routine.day_exercises(d))?
                            );
                        }
                        None => {
                            println!("{}", serde_json::to_string_pretty(&routine)?);
                        }
                    },
                    OutputFormat::Text => {
                        let days: Vec<&str> = match day {
                            Some(d) => vec![d.as_str()],
                            None => day::DAYS_OF_WEEK.to_vec(),
                        };
                        let mut empty = true;
                        for d in days {
                            let exercises = routine.day_exercises(d);
                            if exercises.is_empty() {
                                continue;
                            }
                            empty = false;
                            println!("{}", d);
                            println!("{}", "-".repeat(10));
                            for ex in exercises {
                                println!("  {} ({} series) [{}]", ex.name, ex.target_sets, ex.id);
                            }
                            println!();
                        }
                        if empty {
                            println!("No exercises defined");
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Resolves an exercise reference (id or name) within a day's list.
fn find_exercise_id(routine: &WeeklyRoutine, day: &str, reference: &str) -> Option<String> {
    routine
        .day_exercises(day)
        .iter()
        .find(|ex| ex.id == reference || ex.name == reference)
        .map(|ex| ex.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_exercise_by_id_or_name() {
        let mut routine = WeeklyRoutine::new();
        let ex = RoutineExercise::new("Press de Banca", 4);
        let id = ex.id.clone();
        routine.add_exercise("Lunes", ex);

        assert_eq!(find_exercise_id(&routine, "Lunes", &id), Some(id.clone()));
        assert_eq!(
            find_exercise_id(&routine, "Lunes", "Press de Banca"),
            Some(id)
        );
        assert_eq!(find_exercise_id(&routine, "Lunes", "Sentadilla"), None);
        assert_eq!(find_exercise_id(&routine, "Martes", "Press de Banca"), None);
    }
}
