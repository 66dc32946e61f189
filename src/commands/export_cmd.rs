use clap::Args;
use std::path::PathBuf;

use super::validate_week;
use crate::export::{export_week, ExportError};
use crate::store::JsonStore;

#[derive(Args)]
pub struct ExportCommand {
    /// Week number (defaults to the current week)
    #[arg(long, short)]
    pub week: Option<u32>,

    /// Output directory (defaults to the current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(&self, store: &JsonStore) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(week) = self.week {
            validate_week(week)?;
        }
        let week = self.week.unwrap_or_else(|| store.load_current_week());
        let out_dir = self.output.clone().unwrap_or_else(|| PathBuf::from("."));

        let logs = store.load_logs();
        let week_logs = match logs.week_logs(week) {
            Some(week_logs) if !week_logs.is_empty() => week_logs,
            _ => {
                println!(
                    "No hay datos registrados para la Semana {} para exportar.",
                    week
                );
                return Ok(());
            }
        };

        match export_week(week, week_logs, &out_dir) {
            Ok(path) => {
                println!("Exported Semana {} to {}", week, path.display());
                Ok(())
            }
            // Guarded outcome: notify, do not fail the process.
            Err(ExportError::NoCompletedSets) => {
                println!("No hay series completadas en la semana para exportar.");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
