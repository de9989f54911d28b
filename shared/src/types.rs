//! API request and response types

use crate::models::{ExerciseEntry, GoalType, MealType, WorkoutType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Simple acknowledgement body for deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Authentication
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Goals
// ============================================================================

/// Goal payload for create and full-document update.
///
/// `completed` is intentionally absent: the server derives it from
/// `current >= target` on every write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPayload {
    pub title: String,
    pub goal_type: GoalType,
    pub target: f64,
    #[serde(default)]
    pub current: f64,
    pub unit: String,
    pub deadline: NaiveDate,
}

/// Goal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub id: String,
    pub title: String,
    pub goal_type: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workouts
// ============================================================================

/// Workout payload for create and full-document update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPayload {
    pub name: String,
    pub workout_type: WorkoutType,
    /// Ordered, non-empty list of exercises in the session
    pub exercises: Vec<ExerciseEntry>,
    pub duration_minutes: i32,
    /// Explicit user override; when absent or zero the server estimates
    /// from the exercise list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Workout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub name: String,
    pub workout_type: String,
    pub exercises: Vec<ExerciseEntry>,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub performed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Nutrition
// ============================================================================

/// Meal entry payload for create and full-document update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPayload {
    pub name: String,
    pub meal_type: MealType,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_at: Option<DateTime<Utc>>,
}

/// Meal entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResponse {
    pub id: String,
    pub name: String,
    pub meal_type: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub consumed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Query for the monthly aggregation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyNutritionQuery {
    /// Requested month in `YYYY-MM` format
    pub month: String,
}

/// Daily macro totals for one calendar day (UTC), derived per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutritionResponse {
    pub date: NaiveDate,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meal_count: u32,
}

// ============================================================================
// Calorie estimation (AI endpoints)
// ============================================================================

/// Request for nutrition prediction from a free-text meal name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictNutritionRequest {
    pub meal_name: String,
}

/// Normalized nutrition prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictNutritionResponse {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub serving_size: String,
    pub meal_name: String,
}

/// Request for workout calorie calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateCaloriesRequest {
    pub exercises: Vec<ExerciseEntry>,
    /// Total session duration in minutes
    pub duration: f64,
    /// Body weight in kg; server default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_weight: Option<f64>,
}

/// Per-exercise calorie breakdown entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCaloriesResponse {
    pub name: String,
    pub calories: i64,
    pub duration_minutes: f64,
}

/// Workout calorie calculation result.
///
/// `method` is `"precise"` when per-exercise estimation ran, `"fallback"`
/// when the coarse flat-rate path was used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateCaloriesResponse {
    pub total_calories: i64,
    pub per_exercise: Vec<ExerciseCaloriesResponse>,
    pub user_weight: f64,
    pub method: String,
}

// ============================================================================
// Dashboard
// ============================================================================

/// One day of the dense weekly progress series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyProgressPoint {
    /// Short weekday label, e.g. "Mon"
    pub label: String,
    pub calories: i64,
}

/// Count of workouts per type over the dashboard window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTypeCount {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub count: u32,
}

/// Dashboard summary over the trailing 7-day window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_workouts: u32,
    pub total_calories: i64,
    /// Exactly 7 entries, oldest day first, zero-filled
    pub weekly_progress: Vec<WeeklyProgressPoint>,
    /// Types with zero occurrences are omitted
    pub workout_distribution: Vec<WorkoutTypeCount>,
}
