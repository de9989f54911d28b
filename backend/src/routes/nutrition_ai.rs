//! Nutrition prediction route
//!
//! Free-text meal name in, normalized macro estimate out. This endpoint
//! surfaces provider failures to the caller; only the workout calorie
//! path degrades silently.

use crate::auth::AuthUser;
use crate::clients::FoodNutrients;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use fittrack_shared::types::{PredictNutritionRequest, PredictNutritionResponse};

/// Create nutrition prediction routes
pub fn nutrition_ai_routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict_nutrition))
}

/// Predict nutrition facts for a meal name
///
/// POST /api/v1/nutrition-ai/predict
async fn predict_nutrition(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(req): Json<PredictNutritionRequest>,
) -> ApiResult<Json<PredictNutritionResponse>> {
    let meal_name = req.meal_name.trim();
    if meal_name.is_empty() {
        return Err(ApiError::Validation("Meal name is required".to_string()));
    }

    let food = state
        .nutritionix()
        .predict_nutrition(meal_name)
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
        .ok_or_else(|| {
            ApiError::NotFound(format!("No nutrition data found for '{}'", meal_name))
        })?;

    Ok(Json(to_response(food, meal_name)))
}

fn to_response(food: FoodNutrients, requested_name: &str) -> PredictNutritionResponse {
    let meal_name = if food.food_name.is_empty() {
        requested_name.to_string()
    } else {
        food.food_name
    };

    PredictNutritionResponse {
        calories: food.nf_calories.round() as i64,
        protein: food.nf_protein.round() as i64,
        carbs: food.nf_total_carbohydrate.round() as i64,
        fat: food.nf_total_fat.round() as i64,
        serving_size: format!("{} {}", food.serving_qty, food.serving_unit),
        meal_name,
    }
}
