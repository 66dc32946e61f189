pub mod day;
mod feeling;
mod log;
mod routine;

pub use feeling::Feeling;
pub use log::{AppLogs, DailyLog, ExerciseLog, SetLog};
pub use routine::{RoutineExercise, WeeklyRoutine};
