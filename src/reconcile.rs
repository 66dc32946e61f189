use chrono::Utc;
use std::collections::HashMap;

use crate::models::{AppLogs, DailyLog, ExerciseLog, WeeklyRoutine};

/// What reconciliation does when an exercise already has a log and the
/// routine's target set count has since changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetCountPolicy {
    /// Leave the recorded set list exactly as it was logged, even if its
    /// length no longer matches the routine's target.
    #[default]
    PreserveRecorded,
    /// Resize the set list to the current target: surplus sets are dropped
    /// from the end, missing sets are appended empty with continuing
    /// deterministic ids. Recorded sets below the target are never altered.
    ResizeToTarget,
}

/// Merges the routine template for (week, day) with any previously persisted
/// session log, using the default `PreserveRecorded` policy.
///
/// Pure: neither input is mutated, nothing is persisted. The caller decides
/// whether the returned log is written back.
pub fn reconcile(routine: &WeeklyRoutine, logs: &AppLogs, week: u32, day: &str) -> DailyLog {
    reconcile_with_policy(routine, logs, week, day, SetCountPolicy::default())
}

/// Merge rule:
/// - exercises present in both template and log keep their logged entry
///   verbatim (reps, feelings, completion flags untouched);
/// - exercises new to the template are materialized all-empty;
/// - logged exercises no longer in the template are dropped;
/// - `week`, `day` and `date` are carried over from the existing log.
///
/// Without an existing log, a fresh DailyLog is stamped with the current
/// time. Unrecognized `day` values degrade to an empty template.
pub fn reconcile_with_policy(
    routine: &WeeklyRoutine,
    logs: &AppLogs,
    week: u32,
    day: &str,
    policy: SetCountPolicy,
) -> DailyLog {
    let template = routine.day_exercises(day);

    if let Some(existing) = logs.get(week, day) {
        let by_id: HashMap<&str, &ExerciseLog> = existing
            .exercises
            .iter()
            .map(|ex| (ex.id.as_str(), ex))
            .collect();

        let exercises = template
            .iter()
            .map(|routine_ex| match by_id.get(routine_ex.id.as_str()) {
                Some(logged) => apply_policy((*logged).clone(), routine_ex.target_sets, policy),
                None => ExerciseLog::from_routine(routine_ex),
            })
            .collect();

        return DailyLog {
            week: existing.week,
            day: existing.day.clone(),
            date: existing.date,
            exercises,
        };
    }

    DailyLog {
        week,
        day: day.to_string(),
        date: Utc::now(),
        exercises: template.iter().map(ExerciseLog::from_routine).collect(),
    }
}

fn apply_policy(mut logged: ExerciseLog, target_sets: u32, policy: SetCountPolicy) -> ExerciseLog {
    match policy {
        SetCountPolicy::PreserveRecorded => logged,
        SetCountPolicy::ResizeToTarget => {
            let target = target_sets as usize;
            if logged.sets.len() > target {
                logged.sets.truncate(target);
            } else {
                for i in logged.sets.len()..target {
                    logged
                        .sets
                        .push(crate::models::SetLog::empty(&logged.id, i));
                }
            }
            logged.target_sets = target_sets;
            logged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Feeling, RoutineExercise, SetLog};

    fn routine_with(day: &str, exercises: Vec<RoutineExercise>) -> WeeklyRoutine {
        let mut routine = WeeklyRoutine::new();
        for ex in exercises {
            routine.add_exercise(day, ex);
        }
        routine
    }

    #[test]
    fn test_fresh_log_mirrors_template() {
        let bench = RoutineExercise::new("Press de Banca", 4);
        let squat = RoutineExercise::new("Sentadilla", 3);
        let routine = routine_with("Lunes", vec![bench.clone(), squat.clone()]);
        let logs = AppLogs::new();

        let log = reconcile(&routine, &logs, 1, "Lunes");

        assert_eq!(log.week, 1);
        assert_eq!(log.day, "Lunes");
        assert_eq!(log.exercises.len(), 2);
        assert_eq!(log.exercises[0].id, bench.id);
        assert_eq!(log.exercises[1].id, squat.id);
        assert_eq!(log.exercises[0].sets.len(), 4);
        assert_eq!(log.exercises[1].sets.len(), 3);
        for exercise in &log.exercises {
            for set in &exercise.sets {
                assert!(set.reps.is_none());
                assert!(set.feeling.is_none());
                assert!(!set.completed);
            }
        }
    }

    #[test]
    fn test_unrecognized_day_degrades_to_empty() {
        let routine = routine_with("Lunes", vec![RoutineExercise::new("Remo", 3)]);
        let logs = AppLogs::new();

        let log = reconcile(&routine, &logs, 1, "Funday");
        assert_eq!(log.day, "Funday");
        assert!(log.exercises.is_empty());
    }

    #[test]
    fn test_idempotent_through_persist_cycle() {
        let routine = routine_with("Martes", vec![RoutineExercise::new("Curl", 3)]);
        let mut logs = AppLogs::new();

        let first = reconcile(&routine, &logs, 2, "Martes");
        logs.insert(first.clone());
        let second = reconcile(&routine, &logs, 2, "Martes");

        assert_eq!(first, second);
    }

    #[test]
    fn test_set_ids_stable_across_fresh_reconciles() {
        let routine = routine_with("Lunes", vec![RoutineExercise::new("Remo", 3)]);
        let logs = AppLogs::new();

        let a = reconcile(&routine, &logs, 1, "Lunes");
        let b = reconcile(&routine, &logs, 1, "Lunes");

        let ids_a: Vec<&str> = a.exercises[0].sets.iter().map(|s| s.id.as_str()).collect();
        let ids_b: Vec<&str> = b.exercises[0].sets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_existing_entries_kept_verbatim() {
        let bench = RoutineExercise::new("Press de Banca", 3);
        let routine = routine_with("Lunes", vec![bench.clone()]);
        let mut logs = AppLogs::new();

        let mut log = reconcile(&routine, &logs, 1, "Lunes");
        log.exercises[0].sets[0].record_reps(10);
        log.exercises[0].sets[0].record_feeling(Feeling::Good);
        logs.insert(log.clone());

        let merged = reconcile(&routine, &logs, 1, "Lunes");
        assert_eq!(merged.exercises[0].sets[0].reps, Some(10));
        assert_eq!(merged.exercises[0].sets[0].feeling, Some(Feeling::Good));
        assert!(merged.exercises[0].sets[0].completed);
        assert_eq!(merged.date, log.date);
    }

    #[test]
    fn test_edit_does_not_disturb_sibling_sets() {
        let bench = RoutineExercise::new("Press de Banca", 4);
        let routine = routine_with("Lunes", vec![bench.clone()]);
        let mut logs = AppLogs::new();

        let mut log = reconcile(&routine, &logs, 1, "Lunes");
        log.exercises[0].sets[2].record_reps(8);
        logs.insert(log);

        let mut merged = reconcile(&routine, &logs, 1, "Lunes");
        let untouched: Vec<SetLog> = merged.exercises[0]
            .sets
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, s)| s.clone())
            .collect();

        merged.exercises[0].sets[1].record_feeling(Feeling::Great);
        logs.insert(merged);

        let after = reconcile(&routine, &logs, 1, "Lunes");
        assert_eq!(after.exercises[0].sets[1].feeling, Some(Feeling::Great));
        assert_eq!(after.exercises[0].sets[0], untouched[0]);
        assert_eq!(after.exercises[0].sets[2], untouched[1]);
        assert_eq!(after.exercises[0].sets[3], untouched[2]);
        assert_eq!(after.exercises[0].sets[2].reps, Some(8));
    }

    #[test]
    fn test_added_exercise_appends_empty_entry() {
        let bench = RoutineExercise::new("Press de Banca", 3);
        let mut routine = routine_with("Lunes", vec![bench.clone()]);
        let mut logs = AppLogs::new();

        let mut log = reconcile(&routine, &logs, 1, "Lunes");
        log.exercises[0].sets[1].record_reps(8);
        logs.insert(log);

        let squat = RoutineExercise::new("Sentadilla", 5);
        routine.add_exercise("Lunes", squat.clone());

        let merged = reconcile(&routine, &logs, 1, "Lunes");
        assert_eq!(merged.exercises.len(), 2);
        assert_eq!(merged.exercises[0].sets[1].reps, Some(8));
        assert_eq!(merged.exercises[1].id, squat.id);
        assert_eq!(merged.exercises[1].sets.len(), 5);
        assert!(merged.exercises[1].sets.iter().all(|s| !s.completed));
    }

    #[test]
    fn test_deleted_exercise_dropped_from_merge() {
        let bench = RoutineExercise::new("Press de Banca", 3);
        let squat = RoutineExercise::new("Sentadilla", 3);
        let mut routine = routine_with("Lunes", vec![bench.clone(), squat.clone()]);
        let mut logs = AppLogs::new();

        let mut log = reconcile(&routine, &logs, 1, "Lunes");
        log.exercises[1].sets[0].record_reps(12);
        logs.insert(log);

        routine.remove_exercise("Lunes", &squat.id);

        let merged = reconcile(&routine, &logs, 1, "Lunes");
        assert_eq!(merged.exercises.len(), 1);
        assert_eq!(merged.exercises[0].id, bench.id);
        // The stored log still holds the dropped exercise's data.
        assert_eq!(logs.get(1, "Lunes").unwrap().exercises.len(), 2);
    }

    #[test]
    fn test_target_change_preserved_by_default() {
        let mut bench = RoutineExercise::new("Press de Banca", 3);
        let routine = routine_with("Lunes", vec![bench.clone()]);
        let mut logs = AppLogs::new();

        let log = reconcile(&routine, &logs, 1, "Lunes");
        logs.insert(log);

        bench.target_sets = 5;
        let routine = routine_with("Lunes", vec![bench]);

        let merged = reconcile(&routine, &logs, 1, "Lunes");
        assert_eq!(merged.exercises[0].sets.len(), 3);
        assert_eq!(merged.exercises[0].target_sets, 3);
    }

    #[test]
    fn test_resize_policy_grows_with_fresh_sets() {
        let mut bench = RoutineExercise::new("Press de Banca", 2);
        let routine = routine_with("Lunes", vec![bench.clone()]);
        let mut logs = AppLogs::new();

        let mut log = reconcile(&routine, &logs, 1, "Lunes");
        log.exercises[0].sets[0].record_reps(10);
        logs.insert(log);

        bench.target_sets = 4;
        let routine = routine_with("Lunes", vec![bench.clone()]);

        let merged =
            reconcile_with_policy(&routine, &logs, 1, "Lunes", SetCountPolicy::ResizeToTarget);
        let sets = &merged.exercises[0].sets;
        assert_eq!(sets.len(), 4);
        assert_eq!(sets[0].reps, Some(10));
        assert_eq!(sets[2].id, SetLog::make_id(&bench.id, 2));
        assert_eq!(sets[3].id, SetLog::make_id(&bench.id, 3));
        assert!(!sets[3].completed);
        assert_eq!(merged.exercises[0].target_sets, 4);
    }

    #[test]
    fn test_resize_policy_truncates_surplus() {
        let mut bench = RoutineExercise::new("Press de Banca", 4);
        let routine = routine_with("Lunes", vec![bench.clone()]);
        let mut logs = AppLogs::new();

        let mut log = reconcile(&routine, &logs, 1, "Lunes");
        log.exercises[0].sets[0].record_reps(10);
        logs.insert(log);

        bench.target_sets = 2;
        let routine = routine_with("Lunes", vec![bench]);

        let merged =
            reconcile_with_policy(&routine, &logs, 1, "Lunes", SetCountPolicy::ResizeToTarget);
        let sets = &merged.exercises[0].sets;
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].reps, Some(10));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let routine = routine_with("Lunes", vec![RoutineExercise::new("Remo", 3)]);
        let logs = AppLogs::new();
        let routine_before = routine.clone();
        let logs_before = logs.clone();

        let _ = reconcile(&routine, &logs, 1, "Lunes");

        assert_eq!(routine, routine_before);
        assert_eq!(logs, logs_before);
    }
}
