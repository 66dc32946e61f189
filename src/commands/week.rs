use clap::{Args, Subcommand};

use super::validate_week;
use crate::store::{log_write_error, JsonStore};

#[derive(Args)]
pub struct WeekCommand {
    #[command(subcommand)]
    pub command: WeekSubcommand,
}

#[derive(Subcommand)]
pub enum WeekSubcommand {
    /// Show the current training week
    Show,

    /// Set the current training week
    Set {
        /// Week number (>= 1)
        week: u32,
    },
}

impl WeekCommand {
    pub fn run(&self, store: &JsonStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WeekSubcommand::Show => {
                println!("Semana {}", store.load_current_week());
                Ok(())
            }
            WeekSubcommand::Set { week } => {
                validate_week(*week)?;
                log_write_error(store.save_current_week(*week));
                println!("Current week set to {}", week);
                Ok(())
            }
        }
    }
}
