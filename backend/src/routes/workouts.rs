//! Workouts routes
//!
//! Owner-scoped CRUD over workout sessions. The exercise list round-trips
//! exactly as submitted; stored calories follow the override-or-estimate
//! policy in the workouts service.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::WorkoutRecord;
use crate::services::WorkoutsService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use fittrack_shared::types::{MessageResponse, WorkoutPayload, WorkoutResponse};
use uuid::Uuid;

/// Create workouts routes
pub fn workouts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", put(update_workout).delete(delete_workout))
}

/// List the user's workouts
///
/// GET /api/v1/workouts
async fn list_workouts(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let workouts = WorkoutsService::list_workouts(&state.db, auth_user.user_id).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// Record a workout
///
/// POST /api/v1/workouts
async fn create_workout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<WorkoutPayload>,
) -> ApiResult<Json<WorkoutResponse>> {
    let weight = state.config().estimation.default_body_weight_kg;
    let workout =
        WorkoutsService::create_workout(&state.db, auth_user.user_id, payload, weight).await?;
    Ok(Json(to_response(workout)))
}

/// Replace a workout
///
/// PUT /api/v1/workouts/:id
async fn update_workout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(workout_id): Path<Uuid>,
    Json(payload): Json<WorkoutPayload>,
) -> ApiResult<Json<WorkoutResponse>> {
    let weight = state.config().estimation.default_body_weight_kg;
    let workout =
        WorkoutsService::update_workout(&state.db, auth_user.user_id, workout_id, payload, weight)
            .await?;
    Ok(Json(to_response(workout)))
}

/// Delete a workout
///
/// DELETE /api/v1/workouts/:id
async fn delete_workout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(workout_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    WorkoutsService::delete_workout(&state.db, auth_user.user_id, workout_id).await?;
    Ok(Json(MessageResponse {
        message: "Workout deleted".to_string(),
    }))
}

fn to_response(workout: WorkoutRecord) -> WorkoutResponse {
    WorkoutResponse {
        id: workout.id.to_string(),
        name: workout.name,
        workout_type: workout.workout_type,
        exercises: workout.exercises.0,
        duration_minutes: workout.duration_minutes,
        calories_burned: workout.calories_burned,
        performed_at: workout.performed_at,
        notes: workout.notes,
        created_at: workout.created_at,
    }
}
