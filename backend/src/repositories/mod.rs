//! Database repositories
//!
//! Data access layer. Every owner-scoped query filters on `user_id`, so a
//! row belonging to another user behaves exactly like a missing row.

pub mod goals;
pub mod nutrition;
pub mod user;
pub mod workouts;

pub use goals::{CreateGoal, GoalRecord, GoalRepository, UpdateGoal};
pub use nutrition::{CreateMealEntry, MealEntryRecord, MealRepository, UpdateMealEntry};
pub use user::{UserRecord, UserRepository};
pub use workouts::{CreateWorkout, UpdateWorkout, WorkoutRecord, WorkoutRepository};
