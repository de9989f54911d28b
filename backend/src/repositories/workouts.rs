//! Workouts repository for database operations
//!
//! The exercise list is stored as a JSONB column. That keeps the workout
//! a single document the way the rest of the API treats it: one atomic
//! row per mutation, exercise order and numeric fields preserved exactly.

use anyhow::Result;
use chrono::{DateTime, Utc};
use fittrack_shared::models::ExerciseEntry;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub workout_type: String,
    pub exercises: Json<Vec<ExerciseEntry>>,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub name: String,
    pub workout_type: String,
    pub exercises: Vec<ExerciseEntry>,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Input for a full-document workout update
#[derive(Debug, Clone)]
pub struct UpdateWorkout {
    pub name: String,
    pub workout_type: String,
    pub exercises: Vec<ExerciseEntry>,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// List all workouts for a user, most recent first
    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, name, workout_type, exercises, duration_minutes,
                   calories_burned, performed_at, notes, created_at, updated_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY performed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(workouts)
    }

    /// List workouts performed at or after the given instant
    pub async fn list_since(
        db: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, name, workout_type, exercises, duration_minutes,
                   calories_burned, performed_at, notes, created_at, updated_at
            FROM workouts
            WHERE user_id = $1 AND performed_at >= $2
            ORDER BY performed_at DESC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(db)
        .await?;

        Ok(workouts)
    }

    /// Create a new workout
    pub async fn create(db: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, name, workout_type, exercises,
                                  duration_minutes, calories_burned, performed_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, name, workout_type, exercises, duration_minutes,
                      calories_burned, performed_at, notes, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.workout_type)
        .bind(Json(&input.exercises))
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
        .bind(input.performed_at)
        .bind(&input.notes)
        .fetch_one(db)
        .await?;

        Ok(workout)
    }

    /// Replace a workout owned by the given user.
    ///
    /// Returns `None` when no row exists for that id and owner.
    pub async fn update(
        db: &PgPool,
        workout_id: Uuid,
        user_id: Uuid,
        input: UpdateWorkout,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            UPDATE workouts
            SET name = $3, workout_type = $4, exercises = $5, duration_minutes = $6,
                calories_burned = $7, performed_at = $8, notes = $9, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, workout_type, exercises, duration_minutes,
                      calories_burned, performed_at, notes, created_at, updated_at
            "#,
        )
        .bind(workout_id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.workout_type)
        .bind(Json(&input.exercises))
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
        .bind(input.performed_at)
        .bind(&input.notes)
        .fetch_optional(db)
        .await?;

        Ok(workout)
    }

    /// Delete a workout owned by the given user; true when a row was removed
    pub async fn delete(db: &PgPool, workout_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(workout_id)
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
