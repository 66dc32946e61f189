/// Canonical days of the week, in display and export order.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Position of a day in the canonical week, if recognized.
pub fn day_position(day: &str) -> Option<usize> {
    DAYS_OF_WEEK.iter().position(|d| *d == day)
}

/// Returns true if `day` is one of the seven canonical day names.
pub fn is_valid_day(day: &str) -> bool {
    day_position(day).is_some()
}

/// Sort key for export ordering. Unrecognized day names sort after all
/// canonical ones.
pub fn day_sort_key(day: &str) -> usize {
    day_position(day).unwrap_or(DAYS_OF_WEEK.len())
}
