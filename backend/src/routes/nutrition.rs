//! Nutrition routes
//!
//! Meal log CRUD plus the monthly aggregation endpoint. The monthly view
//! is derived per request from the raw entries; nothing aggregated is
//! ever persisted.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::MealEntryRecord;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use fittrack_shared::types::{
    DailyNutritionResponse, MealPayload, MealResponse, MessageResponse, MonthlyNutritionQuery,
};
use uuid::Uuid;

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(log_meal))
        .route("/monthly", get(monthly_totals))
        .route("/:id", put(update_meal).delete(delete_meal))
}

/// List the user's meal entries
///
/// GET /api/v1/nutrition
async fn list_meals(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<MealResponse>>> {
    let meals = NutritionService::list_meals(&state.db, auth_user.user_id).await?;
    Ok(Json(meals.into_iter().map(to_response).collect()))
}

/// Log a meal
///
/// POST /api/v1/nutrition
async fn log_meal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<MealPayload>,
) -> ApiResult<Json<MealResponse>> {
    let meal = NutritionService::log_meal(&state.db, auth_user.user_id, payload).await?;
    Ok(Json(to_response(meal)))
}

/// Replace a meal entry
///
/// PUT /api/v1/nutrition/:id
async fn update_meal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(meal_id): Path<Uuid>,
    Json(payload): Json<MealPayload>,
) -> ApiResult<Json<MealResponse>> {
    let meal = NutritionService::update_meal(&state.db, auth_user.user_id, meal_id, payload).await?;
    Ok(Json(to_response(meal)))
}

/// Delete a meal entry
///
/// DELETE /api/v1/nutrition/:id
async fn delete_meal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(meal_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    NutritionService::delete_meal(&state.db, auth_user.user_id, meal_id).await?;
    Ok(Json(MessageResponse {
        message: "Meal entry deleted".to_string(),
    }))
}

/// Daily macro totals for one month, most recent day first
///
/// GET /api/v1/nutrition/monthly?month=YYYY-MM
async fn monthly_totals(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<MonthlyNutritionQuery>,
) -> ApiResult<Json<Vec<DailyNutritionResponse>>> {
    let totals =
        NutritionService::monthly_totals(&state.db, auth_user.user_id, &query.month).await?;

    Ok(Json(
        totals
            .into_iter()
            .map(|day| DailyNutritionResponse {
                date: day.date,
                total_calories: day.total_calories,
                total_protein: day.total_protein,
                total_carbs: day.total_carbs,
                total_fat: day.total_fat,
                meal_count: day.meal_count,
            })
            .collect(),
    ))
}

fn to_response(meal: MealEntryRecord) -> MealResponse {
    MealResponse {
        id: meal.id.to_string(),
        name: meal.name,
        meal_type: meal.meal_type,
        calories: meal.calories,
        protein: meal.protein,
        carbs: meal.carbs,
        fat: meal.fat,
        consumed_at: meal.consumed_at,
        created_at: meal.created_at,
    }
}
