use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::feeling::Feeling;
use super::routine::RoutineExercise;

/// One recorded set. `completed` flips to true the first time any field is
/// edited and is never reset afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLog {
    pub id: String,
    pub reps: Option<u32>,
    pub feeling: Option<Feeling>,
    pub completed: bool,
}

impl SetLog {
    /// Deterministic set id: stable across repeated materializations of the
    /// same exercise.
    pub fn make_id(exercise_id: &str, index: usize) -> String {
        format!("set-{}-{}", exercise_id, index)
    }

    /// A fresh, untouched set at `index` of the owning exercise.
    pub fn empty(exercise_id: &str, index: usize) -> Self {
        Self {
            id: Self::make_id(exercise_id, index),
            reps: None,
            feeling: None,
            completed: false,
        }
    }

    pub fn record_reps(&mut self, reps: u32) {
        self.reps = Some(reps);
        self.completed = true;
    }

    pub fn record_feeling(&mut self, feeling: Feeling) {
        self.feeling = Some(feeling);
        self.completed = true;
    }
}

/// The recorded sets for one exercise in a session. `id`, `name` and
/// `target_sets` are copied from the routine entry when the log is
/// materialized; `sets.len() == target_sets` holds at creation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: String,
    pub name: String,
    pub target_sets: u32,
    pub sets: Vec<SetLog>,
}

impl ExerciseLog {
    /// Materializes an all-empty log entry for a routine exercise.
    pub fn from_routine(exercise: &RoutineExercise) -> Self {
        let sets = (0..exercise.target_sets as usize)
            .map(|i| SetLog::empty(&exercise.id, i))
            .collect();
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            target_sets: exercise.target_sets,
            sets,
        }
    }
}

/// One workout session: everything recorded for a (week, day) pair. `date`
/// is stamped when the log is first created and not touched by later edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub week: u32,
    pub day: String,
    pub date: DateTime<Utc>,
    pub exercises: Vec<ExerciseLog>,
}

impl fmt::Display for DailyLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Semana {} - {}", self.week, self.day)?;
        writeln!(f, "{}", "=".repeat(30))?;
        for exercise in &self.exercises {
            writeln!(f, "{} ({} series)", exercise.name, exercise.target_sets)?;
            for (i, set) in exercise.sets.iter().enumerate() {
                let reps = set
                    .reps
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let feeling = set
                    .feeling
                    .map(|fl| fl.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let mark = if set.completed { "x" } else { " " };
                writeln!(f, "  [{}] S{}: {} reps, {}", mark, i + 1, reps, feeling)?;
            }
        }
        Ok(())
    }
}

/// The durable workout history: week number -> day name -> session log.
/// Additive; entries are never purged automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppLogs(BTreeMap<u32, BTreeMap<String, DailyLog>>);

impl AppLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, week: u32, day: &str) -> Option<&DailyLog> {
        self.0.get(&week).and_then(|days| days.get(day))
    }

    /// All session logs recorded for `week`, keyed by day name.
    pub fn week_logs(&self, week: u32) -> Option<&BTreeMap<String, DailyLog>> {
        self.0.get(&week)
    }

    /// Stores a session log under its own (week, day) coordinates,
    /// overwriting any previous entry.
    pub fn insert(&mut self, log: DailyLog) {
        self.0
            .entry(log.week)
            .or_default()
            .insert(log.day.clone(), log);
    }
}
