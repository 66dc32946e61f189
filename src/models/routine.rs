use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// An exercise planned in the weekly routine: a name and a target number of
/// sets. Identity is `id`, unique within a day's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineExercise {
    pub id: String,
    pub name: String,
    pub target_sets: u32,
}

impl RoutineExercise {
    pub fn new(name: impl Into<String>, target_sets: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            target_sets,
        }
    }
}

/// The routine template: per day-of-week, the ordered list of planned
/// exercises. Insertion order within a day is preserved and drives both
/// display and log exercise order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyRoutine(BTreeMap<String, Vec<RoutineExercise>>);

impl WeeklyRoutine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exercises planned for `day`, empty if none are defined.
    pub fn day_exercises(&self, day: &str) -> &[RoutineExercise] {
        self.0.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends an exercise to a day's list.
    pub fn add_exercise(&mut self, day: &str, exercise: RoutineExercise) {
        self.0.entry(day.to_string()).or_default().push(exercise);
    }

    /// Removes the exercise with `id` from a day's list. Returns the removed
    /// entry, or None if the day has no such exercise.
    pub fn remove_exercise(&mut self, day: &str, id: &str) -> Option<RoutineExercise> {
        let exercises = self.0.get_mut(day)?;
        let pos = exercises.iter().position(|ex| ex.id == id)?;
        Some(exercises.remove(pos))
    }

    /// Days that have at least one exercise defined.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, exercises)| !exercises.is_empty())
            .map(|(day, _)| day.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut routine = WeeklyRoutine::new();
        routine.add_exercise("Lunes", RoutineExercise::new("Press de Banca", 4));
        routine.add_exercise("Lunes", RoutineExercise::new("Sentadilla", 3));
        routine.add_exercise("Lunes", RoutineExercise::new("Remo", 4));

        let names: Vec<&str> = routine
            .day_exercises("Lunes")
            .iter()
            .map(|ex| ex.name.as_str())
            .collect();
        assert_eq!(names, vec!["Press de Banca", "Sentadilla", "Remo"]);
    }

    #[test]
    fn test_unique_ids_within_day() {
        let mut routine = WeeklyRoutine::new();
        routine.add_exercise("Martes", RoutineExercise::new("Curl", 3));
        routine.add_exercise("Martes", RoutineExercise::new("Curl", 3));

        let exercises = routine.day_exercises("Martes");
        assert_ne!(exercises[0].id, exercises[1].id);
    }

    #[test]
    fn test_remove_exercise() {
        let mut routine = WeeklyRoutine::new();
        let exercise = RoutineExercise::new("Dominadas", 4);
        let id = exercise.id.clone();
        routine.add_exercise("Viernes", exercise);

        let removed = routine.remove_exercise("Viernes", &id).unwrap();
        assert_eq!(removed.name, "Dominadas");
        assert!(routine.day_exercises("Viernes").is_empty());

        assert!(routine.remove_exercise("Viernes", &id).is_none());
        assert!(routine.remove_exercise("Lunes", "nope").is_none());
    }

    #[test]
    fn test_missing_day_is_empty() {
        let routine = WeeklyRoutine::new();
        assert!(routine.day_exercises("Domingo").is_empty());
        assert!(routine.is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut routine = WeeklyRoutine::new();
        routine.add_exercise("Lunes", RoutineExercise::new("Press de Banca", 4));

        let json = serde_json::to_string(&routine).unwrap();
        assert!(json.starts_with("{\"Lunes\":["));

        let parsed: WeeklyRoutine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, routine);
    }
}
