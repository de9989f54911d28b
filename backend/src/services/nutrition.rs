//! Nutrition service - meal logging and monthly aggregation
//!
//! The monthly pipeline groups a pre-filtered month of meal entries by
//! calendar day and reduces each group to macro totals. Day keys truncate
//! in UTC (`DateTime<Utc>::date_naive()`): the grouping rule must be a
//! single fixed timezone or identical entry sets could land in different
//! buckets depending on the server environment.

use crate::error::ApiError;
use crate::repositories::{CreateMealEntry, MealEntryRecord, MealRepository, UpdateMealEntry};
use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};
use fittrack_shared::types::MealPayload;
use sqlx::PgPool;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Macro totals for one calendar day (UTC). Derived per request, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyNutritionTotal {
    pub date: NaiveDate,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meal_count: u32,
}

/// Nutrition service for business logic
pub struct NutritionService;

impl NutritionService {
    /// List all meal entries for a user, most recent first
    pub async fn list_meals(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealEntryRecord>, ApiError> {
        MealRepository::list_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Log a new meal entry
    pub async fn log_meal(
        pool: &PgPool,
        user_id: Uuid,
        payload: MealPayload,
    ) -> Result<MealEntryRecord, ApiError> {
        Self::validate_payload(&payload)?;

        let input = CreateMealEntry {
            user_id,
            name: payload.name,
            meal_type: payload.meal_type.as_str().to_string(),
            calories: payload.calories,
            protein: payload.protein,
            carbs: payload.carbs,
            fat: payload.fat,
            consumed_at: payload.consumed_at.unwrap_or_else(Utc::now),
        };

        MealRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// Replace a meal entry
    pub async fn update_meal(
        pool: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
        payload: MealPayload,
    ) -> Result<MealEntryRecord, ApiError> {
        Self::validate_payload(&payload)?;

        let input = UpdateMealEntry {
            name: payload.name,
            meal_type: payload.meal_type.as_str().to_string(),
            calories: payload.calories,
            protein: payload.protein,
            carbs: payload.carbs,
            fat: payload.fat,
            consumed_at: payload.consumed_at.unwrap_or_else(Utc::now),
        };

        MealRepository::update(pool, meal_id, user_id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal entry not found".to_string()))
    }

    /// Delete a meal entry
    pub async fn delete_meal(pool: &PgPool, user_id: Uuid, meal_id: Uuid) -> Result<(), ApiError> {
        let deleted = MealRepository::delete(pool, meal_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Meal entry not found".to_string()));
        }
        Ok(())
    }

    /// Daily macro totals for one month, most recent day first
    pub async fn monthly_totals(
        pool: &PgPool,
        user_id: Uuid,
        month: &str,
    ) -> Result<Vec<DailyNutritionTotal>, ApiError> {
        let (start, end) = Self::month_bounds(month)?;

        let entries = MealRepository::list_between(pool, user_id, start, end)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::aggregate_month(&entries))
    }

    /// Parse a `YYYY-MM` month into UTC instants `[start, end)`.
    ///
    /// The exclusive end is the first instant of the following month, so
    /// the last moment of the requested month is always included.
    pub fn month_bounds(month: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), ApiError> {
        let first_day = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
            .map_err(|_| ApiError::Validation("Month must be in YYYY-MM format".to_string()))?;

        let next_month = first_day
            .checked_add_months(Months::new(1))
            .ok_or_else(|| ApiError::Validation("Month out of range".to_string()))?;

        let midnight = NaiveTime::MIN;
        Ok((
            first_day.and_time(midnight).and_utc(),
            next_month.and_time(midnight).and_utc(),
        ))
    }

    /// Group entries by UTC calendar day and reduce each group to totals.
    ///
    /// The output is sparse: days without entries do not appear. Ordering
    /// is descending by date. The result depends only on the entry set,
    /// not on input order.
    pub fn aggregate_month(entries: &[MealEntryRecord]) -> Vec<DailyNutritionTotal> {
        let mut days: BTreeMap<NaiveDate, DailyNutritionTotal> = BTreeMap::new();

        for entry in entries {
            let date = entry.consumed_at.date_naive();
            let day = days.entry(date).or_insert_with(|| DailyNutritionTotal {
                date,
                total_calories: 0.0,
                total_protein: 0.0,
                total_carbs: 0.0,
                total_fat: 0.0,
                meal_count: 0,
            });

            day.total_calories += entry.calories;
            day.total_protein += entry.protein;
            day.total_carbs += entry.carbs;
            day.total_fat += entry.fat;
            day.meal_count += 1;
        }

        days.into_values().rev().collect()
    }

    fn validate_payload(payload: &MealPayload) -> Result<(), ApiError> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::Validation("Meal name is required".to_string()));
        }

        for (label, value) in [
            ("calories", payload.calories),
            ("protein", payload.protein),
            ("carbs", payload.carbs),
            ("fat", payload.fat),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ApiError::Validation(format!(
                    "{} must be a non-negative number",
                    label
                )));
            }
        }

        Ok(())
    }
}
