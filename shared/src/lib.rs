//! FitTrack Shared Library
//!
//! This crate contains the domain types and API wire types shared between
//! the backend layers (routes, services, repositories).

pub mod models;
pub mod types;

// Re-export commonly used items
pub use models::{ExerciseEntry, GoalType, MealType, WorkoutType};
pub use types::*;
