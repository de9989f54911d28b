//! Exercise energy model
//!
//! Pure calorie estimation from an exercise name, duration, and body
//! weight. Two formulas live here:
//!
//! - the MET path: a fixed keyword table mapping activity names to MET
//!   (Metabolic Equivalent of Task) values, applied as
//!   `calories = MET * weight_kg * hours`;
//! - the intensity path: a coarser per-minute estimate used when the
//!   external lookup could not confirm the exercise name.
//!
//! Both tables are ordered slices, not maps: several keywords can
//! substring-match the same name ("running" matches both "run" and
//! "running"), so the first match in insertion order must win
//! deterministically.

/// MET applied when no keyword matches the exercise name
pub const DEFAULT_MET: f64 = 5.0;

/// Base calories burned per minute per kg on the intensity path
const BASE_CALORIES_PER_MINUTE_PER_KG: f64 = 0.1;

/// MET values for common exercises, first substring match wins
const MET_TABLE: &[(&str, f64)] = &[
    // Cardio
    ("running", 8.0),
    ("jogging", 7.0),
    ("sprinting", 12.0),
    ("walking", 3.5),
    ("cycling", 8.0),
    ("swimming", 8.0),
    ("jump rope", 10.0),
    ("elliptical", 5.0),
    // Strength training
    ("weight lifting", 6.0),
    ("strength training", 6.0),
    ("bodybuilding", 6.0),
    ("push ups", 8.0),
    ("pull ups", 8.0),
    ("squats", 5.0),
    ("deadlifts", 6.0),
    ("bench press", 5.0),
    ("shoulder press", 5.0),
    ("bicep curls", 3.0),
    // HIIT and sports
    ("hiit", 10.0),
    ("circuit training", 8.0),
    ("crossfit", 8.0),
    ("basketball", 8.0),
    ("soccer", 7.0),
    ("tennis", 7.0),
    ("yoga", 3.0),
];

/// Intensity multipliers for the fallback estimate, first match wins
const INTENSITY_TABLE: &[(&str, f64)] = &[
    ("sprint", 1.5),
    ("hiit", 1.5),
    ("jump", 1.5),
    ("run", 1.2),
    ("cycle", 1.2),
    ("swim", 1.2),
    ("walk", 0.7),
    ("yoga", 0.7),
];

/// Look up the MET value for an exercise name.
///
/// Case-insensitive substring match against the keyword table; unknown
/// names get [`DEFAULT_MET`].
pub fn met_for(exercise_name: &str) -> f64 {
    let lower = exercise_name.to_lowercase();
    MET_TABLE
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, met)| met)
        .unwrap_or(DEFAULT_MET)
}

/// Intensity multiplier for the fallback estimate, defaulting to 1.0
pub fn intensity_multiplier(exercise_name: &str) -> f64 {
    let lower = exercise_name.to_lowercase();
    INTENSITY_TABLE
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, mult)| mult)
        .unwrap_or(1.0)
}

/// Estimate calories burned via the MET formula, rounded to the nearest
/// integer.
///
/// An empty name contributes nothing (the caller skips unnamed
/// exercises), and a zero or negative duration yields 0.
pub fn estimate_calories(exercise_name: &str, duration_minutes: f64, body_weight_kg: f64) -> i64 {
    if exercise_name.is_empty() || duration_minutes <= 0.0 || body_weight_kg <= 0.0 {
        return 0;
    }

    let met = met_for(exercise_name);
    let calories = met * body_weight_kg * (duration_minutes / 60.0);
    calories.round().max(0.0) as i64
}

/// Estimate calories via the intensity-multiplier formula, rounded.
///
/// Used when the external lookup failed or returned no match.
pub fn intensity_estimate(exercise_name: &str, duration_minutes: f64, body_weight_kg: f64) -> i64 {
    if exercise_name.is_empty() || duration_minutes <= 0.0 || body_weight_kg <= 0.0 {
        return 0;
    }

    let multiplier = intensity_multiplier(exercise_name);
    let calories = BASE_CALORIES_PER_MINUTE_PER_KG * body_weight_kg * duration_minutes * multiplier;
    calories.round().max(0.0) as i64
}
