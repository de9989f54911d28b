//! Workout calorie calculation route
//!
//! Explicit estimation endpoint: the client sends an exercise list and a
//! session duration, the server answers with a per-exercise breakdown.
//! The aggregation itself never fails; provider trouble shows up as the
//! `"fallback"` method, not as an error status.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::CalorieService;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use fittrack_shared::types::{
    CalculateCaloriesRequest, CalculateCaloriesResponse, ExerciseCaloriesResponse,
};

/// Create workout calorie calculation routes
pub fn workout_ai_routes() -> Router<AppState> {
    Router::new().route("/calculate-calories", post(calculate_calories))
}

/// Calculate calories burned for a workout session
///
/// POST /api/v1/workout-ai/calculate-calories
async fn calculate_calories(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(req): Json<CalculateCaloriesRequest>,
) -> ApiResult<Json<CalculateCaloriesResponse>> {
    let user_weight = req
        .user_weight
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(state.config().estimation.default_body_weight_kg);

    let breakdown =
        CalorieService::aggregate(state.nutritionix(), &req.exercises, req.duration, user_weight)
            .await;

    Ok(Json(CalculateCaloriesResponse {
        total_calories: breakdown.total_calories,
        per_exercise: breakdown
            .per_exercise
            .into_iter()
            .map(|e| ExerciseCaloriesResponse {
                name: e.name,
                calories: e.calories,
                duration_minutes: e.duration_minutes,
            })
            .collect(),
        user_weight,
        method: breakdown.method.as_str().to_string(),
    }))
}
