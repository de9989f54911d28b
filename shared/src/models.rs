//! Data models for the FitTrack application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum label from the database fails
#[derive(Debug, Error)]
#[error("unknown {kind} label: {value}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Workout category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Hiit,
    Sports,
}

impl WorkoutType {
    /// All workout types in canonical order.
    ///
    /// The dashboard type distribution iterates this list so the output
    /// order is stable regardless of insertion order.
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Flexibility,
        WorkoutType::Hiit,
        WorkoutType::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "cardio",
            WorkoutType::Strength => "strength",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Sports => "sports",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardio" => Ok(WorkoutType::Cardio),
            "strength" => Ok(WorkoutType::Strength),
            "flexibility" => Ok(WorkoutType::Flexibility),
            "hiit" => Ok(WorkoutType::Hiit),
            "sports" => Ok(WorkoutType::Sports),
            other => Err(ParseLabelError {
                kind: "workout type",
                value: other.to_string(),
            }),
        }
    }
}

/// Meal category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(ParseLabelError {
                kind: "meal type",
                value: other.to_string(),
            }),
        }
    }
}

/// Goal category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Workout,
    Weight,
    Nutrition,
    Other,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Workout => "workout",
            GoalType::Weight => "weight",
            GoalType::Nutrition => "nutrition",
            GoalType::Other => "other",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workout" => Ok(GoalType::Workout),
            "weight" => Ok(GoalType::Weight),
            "nutrition" => Ok(GoalType::Nutrition),
            "other" => Ok(GoalType::Other),
            other => Err(ParseLabelError {
                kind: "goal type",
                value: other.to_string(),
            }),
        }
    }
}

/// A single exercise inside a workout session.
///
/// Not persisted on its own: the workout row stores the ordered list as a
/// JSONB column, which preserves exercise order and numeric fields exactly
/// across a write/read round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    /// Minutes spent on this exercise. When absent, the calorie aggregator
    /// allots an equal share of the session duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_type_round_trips_through_labels() {
        for t in WorkoutType::ALL {
            assert_eq!(t.as_str().parse::<WorkoutType>().unwrap(), t);
        }
    }

    #[test]
    fn workout_type_serializes_lowercase() {
        let json = serde_json::to_string(&WorkoutType::Hiit).unwrap();
        assert_eq!(json, "\"hiit\"");
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("pilates".parse::<WorkoutType>().is_err());
        assert!("brunch".parse::<MealType>().is_err());
        assert!("steps".parse::<GoalType>().is_err());
    }

    #[test]
    fn exercise_entry_optional_fields_default_to_none() {
        let entry: ExerciseEntry = serde_json::from_str(r#"{"name": "running"}"#).unwrap();
        assert_eq!(entry.name, "running");
        assert!(entry.duration_minutes.is_none());
        assert!(entry.sets.is_none());
    }

    #[test]
    fn exercise_entry_preserves_numeric_fields() {
        let entry = ExerciseEntry {
            name: "bench press".to_string(),
            duration_minutes: Some(12.5),
            sets: Some(3),
            reps: Some(8),
            weight_kg: Some(62.5),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ExerciseEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
