//! Goals routes
//!
//! Owner-scoped CRUD over goals. Every handler requires a Bearer token;
//! a goal belonging to another user is indistinguishable from a missing
//! one.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::GoalRecord;
use crate::services::GoalsService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use fittrack_shared::types::{GoalPayload, GoalResponse, MessageResponse};
use uuid::Uuid;

/// Create goals routes
pub fn goals_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id", put(update_goal).delete(delete_goal))
}

/// List the user's goals
///
/// GET /api/v1/goals
async fn list_goals(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let goals = GoalsService::list_goals(&state.db, auth_user.user_id).await?;
    Ok(Json(goals.into_iter().map(to_response).collect()))
}

/// Create a goal
///
/// POST /api/v1/goals
async fn create_goal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<GoalPayload>,
) -> ApiResult<Json<GoalResponse>> {
    let goal = GoalsService::create_goal(&state.db, auth_user.user_id, payload).await?;
    Ok(Json(to_response(goal)))
}

/// Replace a goal
///
/// PUT /api/v1/goals/:id
async fn update_goal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<GoalPayload>,
) -> ApiResult<Json<GoalResponse>> {
    let goal = GoalsService::update_goal(&state.db, auth_user.user_id, goal_id, payload).await?;
    Ok(Json(to_response(goal)))
}

/// Delete a goal
///
/// DELETE /api/v1/goals/:id
async fn delete_goal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(goal_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    GoalsService::delete_goal(&state.db, auth_user.user_id, goal_id).await?;
    Ok(Json(MessageResponse {
        message: "Goal deleted".to_string(),
    }))
}

fn to_response(goal: GoalRecord) -> GoalResponse {
    GoalResponse {
        id: goal.id.to_string(),
        title: goal.title,
        goal_type: goal.goal_type,
        target: goal.target,
        current: goal.current,
        unit: goal.unit,
        deadline: goal.deadline,
        completed: goal.completed,
        created_at: goal.created_at,
    }
}
