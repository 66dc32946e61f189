use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{AppLogs, WeeklyRoutine};

const ROUTINE_KEY: &str = "routine.json";
const LOGS_KEY: &str = "logs.json";
const WEEK_KEY: &str = "week.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write '{0}': {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize '{0}': {1}")]
    Serialize(PathBuf, #[source] serde_json::Error),
}

/// JSON key-value store for the two durable structures plus the current week
/// number. One file per logical key under a data directory; every write is a
/// full-state overwrite.
///
/// Reads mask missing or malformed content by falling back to the injected
/// default, so a corrupt file never interrupts the user. Writes report their
/// error to the caller, which logs it and carries on with the in-memory
/// state as the session's source of truth.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_routine(&self) -> WeeklyRoutine {
        self.load(ROUTINE_KEY, WeeklyRoutine::new)
    }

    pub fn save_routine(&self, routine: &WeeklyRoutine) -> Result<(), StoreError> {
        self.save(ROUTINE_KEY, routine)
    }

    pub fn load_logs(&self) -> AppLogs {
        self.load(LOGS_KEY, AppLogs::new)
    }

    pub fn save_logs(&self, logs: &AppLogs) -> Result<(), StoreError> {
        self.save(LOGS_KEY, logs)
    }

    pub fn load_current_week(&self) -> u32 {
        self.load(WEEK_KEY, || 1)
    }

    pub fn save_current_week(&self, week: u32) -> Result<(), StoreError> {
        self.save(WEEK_KEY, &week)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn load<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        let path = self.key_path(key);
        if !path.exists() {
            return default();
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "malformed store file, falling back to default"
                    );
                    default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable store file, falling back to default"
                );
                default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write(path.clone(), e))?;
        }
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Serialize(path.clone(), e))?;
        std::fs::write(&path, json).map_err(|e| StoreError::Write(path, e))
    }
}

/// Logs a failed store write and moves on. Persistence failures never abort
/// the session; every command funnels its saves through here.
pub fn log_write_error(result: Result<(), StoreError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "store write failed; in-memory state was not persisted");
        eprintln!("Warning: could not save changes: {}", e);
    }
}
