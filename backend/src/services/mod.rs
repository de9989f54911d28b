//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod calories;
pub mod energy;
pub mod goals;
pub mod nutrition;
pub mod stats;
pub mod user;
pub mod workouts;

pub use calories::CalorieService;
pub use goals::GoalsService;
pub use nutrition::NutritionService;
pub use stats::StatsService;
pub use user::UserService;
pub use workouts::WorkoutsService;
