//! Dashboard statistics route

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::StatsService;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use fittrack_shared::types::{DashboardResponse, WeeklyProgressPoint, WorkoutTypeCount};

/// Create stats routes
pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Dashboard summary for the trailing 7-day window
///
/// GET /api/v1/stats/dashboard
async fn dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let summary = StatsService::dashboard(&state.db, auth_user.user_id).await?;

    Ok(Json(DashboardResponse {
        total_workouts: summary.total_workouts,
        total_calories: summary.total_calories,
        weekly_progress: summary
            .weekly_progress
            .into_iter()
            .map(|day| WeeklyProgressPoint {
                label: day.label,
                calories: day.calories,
            })
            .collect(),
        workout_distribution: summary
            .workout_distribution
            .into_iter()
            .map(|t| WorkoutTypeCount {
                workout_type: t.workout_type.to_string(),
                count: t.count,
            })
            .collect(),
    }))
}
