mod xlsx;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{day, DailyLog, Feeling};
use xlsx::Cell;

pub use xlsx::XlsxError;

/// Sentinel written for sets recorded without reps or feeling.
const NOT_AVAILABLE: &str = "N/A";

const HEADERS: [&str; 7] = [
    "Semana",
    "Día",
    "Fecha",
    "Ejercicio",
    "Set #",
    "Reps",
    "Sensación",
];

const COLUMN_WIDTHS: [f64; 7] = [10.0, 15.0, 15.0, 30.0, 10.0, 10.0, 15.0];

#[derive(Debug, Error)]
pub enum ExportError {
    /// Guarded outcome, not a data-integrity problem: the week simply has
    /// nothing completed to export.
    #[error("no completed sets in the week to export")]
    NoCompletedSets,

    #[error("failed to write workbook: {0}")]
    Workbook(#[from] XlsxError),
}

/// One spreadsheet row: a single completed set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub week: u32,
    pub day: String,
    pub date: String,
    pub exercise: String,
    pub set_number: u32,
    pub reps: Option<u32>,
    pub feeling: Option<Feeling>,
}

impl ExportRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::number(self.week),
            Cell::text(self.day.clone()),
            Cell::text(self.date.clone()),
            Cell::text(self.exercise.clone()),
            Cell::number(self.set_number),
            match self.reps {
                Some(reps) => Cell::number(reps),
                None => Cell::text(NOT_AVAILABLE),
            },
            match self.feeling {
                Some(feeling) => Cell::text(feeling.glyph()),
                None => Cell::text(NOT_AVAILABLE),
            },
        ]
    }
}

/// Derives the export rows for one week: one row per completed set, ordered
/// by canonical day (Lunes..Domingo, unknown days last), then exercise order
/// within the day, then set index.
pub fn week_rows(week_logs: &BTreeMap<String, DailyLog>) -> Vec<ExportRow> {
    let mut days: Vec<&DailyLog> = week_logs.values().collect();
    days.sort_by_key(|log| day::day_sort_key(&log.day));

    let mut rows = Vec::new();
    for log in days {
        let date = log.date.format("%d/%m/%Y").to_string();
        for exercise in &log.exercises {
            for (index, set) in exercise.sets.iter().enumerate() {
                if !set.completed {
                    continue;
                }
                rows.push(ExportRow {
                    week: log.week,
                    day: log.day.clone(),
                    date: date.clone(),
                    exercise: exercise.name.clone(),
                    set_number: (index + 1) as u32,
                    reps: set.reps,
                    feeling: set.feeling,
                });
            }
        }
    }
    rows
}

/// Writes `Entrenamiento_Semana_<week>.xlsx` under `out_dir` with one sheet
/// `Semana <week>`. Refuses the export when the week has no completed sets.
pub fn export_week(
    week: u32,
    week_logs: &BTreeMap<String, DailyLog>,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let rows = week_rows(week_logs);
    if rows.is_empty() {
        return Err(ExportError::NoCompletedSets);
    }

    let path = out_dir.join(format!("Entrenamiento_Semana_{}.xlsx", week));
    let cells: Vec<Vec<Cell>> = rows.iter().map(ExportRow::cells).collect();
    xlsx::write_workbook(
        &path,
        &format!("Semana {}", week),
        &HEADERS,
        &cells,
        &COLUMN_WIDTHS,
    )?;
    Ok(path)
}
