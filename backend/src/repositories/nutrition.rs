//! Nutrition repository - database operations for meal log entries

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Meal log entry from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub consumed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for logging a meal
#[derive(Debug, Clone)]
pub struct CreateMealEntry {
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub consumed_at: DateTime<Utc>,
}

/// Input for a full-document meal entry update
#[derive(Debug, Clone)]
pub struct UpdateMealEntry {
    pub name: String,
    pub meal_type: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub consumed_at: DateTime<Utc>,
}

/// Meal log repository
pub struct MealRepository;

impl MealRepository {
    /// List all meal entries for a user, most recent first
    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<MealEntryRecord>> {
        let meals = sqlx::query_as::<_, MealEntryRecord>(
            r#"
            SELECT id, user_id, name, meal_type, calories, protein, carbs, fat,
                   consumed_at, created_at
            FROM meal_entries
            WHERE user_id = $1
            ORDER BY consumed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(meals)
    }

    /// List meal entries consumed in `[start, end)`.
    ///
    /// The end bound is exclusive so that the last instant of a month is
    /// included and the first instant of the next month is not.
    pub async fn list_between(
        db: &PgPool,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MealEntryRecord>> {
        let meals = sqlx::query_as::<_, MealEntryRecord>(
            r#"
            SELECT id, user_id, name, meal_type, calories, protein, carbs, fat,
                   consumed_at, created_at
            FROM meal_entries
            WHERE user_id = $1 AND consumed_at >= $2 AND consumed_at < $3
            ORDER BY consumed_at DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await?;

        Ok(meals)
    }

    /// Create a new meal entry
    pub async fn create(db: &PgPool, input: CreateMealEntry) -> Result<MealEntryRecord> {
        let meal = sqlx::query_as::<_, MealEntryRecord>(
            r#"
            INSERT INTO meal_entries (user_id, name, meal_type, calories, protein,
                                      carbs, fat, consumed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, name, meal_type, calories, protein, carbs, fat,
                      consumed_at, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.meal_type)
        .bind(input.calories)
        .bind(input.protein)
        .bind(input.carbs)
        .bind(input.fat)
        .bind(input.consumed_at)
        .fetch_one(db)
        .await?;

        Ok(meal)
    }

    /// Replace a meal entry owned by the given user.
    ///
    /// Returns `None` when no row exists for that id and owner.
    pub async fn update(
        db: &PgPool,
        meal_id: Uuid,
        user_id: Uuid,
        input: UpdateMealEntry,
    ) -> Result<Option<MealEntryRecord>> {
        let meal = sqlx::query_as::<_, MealEntryRecord>(
            r#"
            UPDATE meal_entries
            SET name = $3, meal_type = $4, calories = $5, protein = $6,
                carbs = $7, fat = $8, consumed_at = $9
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, meal_type, calories, protein, carbs, fat,
                      consumed_at, created_at
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.meal_type)
        .bind(input.calories)
        .bind(input.protein)
        .bind(input.carbs)
        .bind(input.fat)
        .bind(input.consumed_at)
        .fetch_optional(db)
        .await?;

        Ok(meal)
    }

    /// Delete a meal entry owned by the given user; true when a row was removed
    pub async fn delete(db: &PgPool, meal_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meal_entries WHERE id = $1 AND user_id = $2")
            .bind(meal_id)
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
