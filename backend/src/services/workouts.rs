//! Workouts service
//!
//! CRUD over workout sessions plus the stored-calories policy: a
//! positive client-supplied `calories_burned` is kept verbatim,
//! anything else is replaced by a server-side estimate. The estimate at
//! write time uses only the local energy model; the external lookup is
//! reserved for the explicit calculation endpoint.

use crate::error::ApiError;
use crate::repositories::{CreateWorkout, UpdateWorkout, WorkoutRecord, WorkoutRepository};
use crate::services::energy;
use chrono::Utc;
use fittrack_shared::models::ExerciseEntry;
use fittrack_shared::types::WorkoutPayload;
use sqlx::PgPool;
use uuid::Uuid;

/// Workouts service for business logic
pub struct WorkoutsService;

impl WorkoutsService {
    /// List all workouts for a user, most recent first
    pub async fn list_workouts(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutRecord>, ApiError> {
        WorkoutRepository::list_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Record a new workout
    pub async fn create_workout(
        pool: &PgPool,
        user_id: Uuid,
        payload: WorkoutPayload,
        default_body_weight_kg: f64,
    ) -> Result<WorkoutRecord, ApiError> {
        Self::validate_payload(&payload)?;

        let calories_burned = Self::resolve_calories(&payload, default_body_weight_kg);
        let input = CreateWorkout {
            user_id,
            name: payload.name,
            workout_type: payload.workout_type.as_str().to_string(),
            exercises: payload.exercises,
            duration_minutes: payload.duration_minutes,
            calories_burned,
            performed_at: payload.performed_at.unwrap_or_else(Utc::now),
            notes: payload.notes,
        };

        WorkoutRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// Replace a workout
    pub async fn update_workout(
        pool: &PgPool,
        user_id: Uuid,
        workout_id: Uuid,
        payload: WorkoutPayload,
        default_body_weight_kg: f64,
    ) -> Result<WorkoutRecord, ApiError> {
        Self::validate_payload(&payload)?;

        let calories_burned = Self::resolve_calories(&payload, default_body_weight_kg);
        let input = UpdateWorkout {
            name: payload.name,
            workout_type: payload.workout_type.as_str().to_string(),
            exercises: payload.exercises,
            duration_minutes: payload.duration_minutes,
            calories_burned,
            performed_at: payload.performed_at.unwrap_or_else(Utc::now),
            notes: payload.notes,
        };

        WorkoutRepository::update(pool, workout_id, user_id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))
    }

    /// Delete a workout
    pub async fn delete_workout(
        pool: &PgPool,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, workout_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }
        Ok(())
    }

    /// Stored calories: keep a positive client value, otherwise estimate
    fn resolve_calories(payload: &WorkoutPayload, body_weight_kg: f64) -> i32 {
        match payload.calories_burned {
            Some(c) if c > 0 => c,
            _ => Self::estimate_session_calories(
                &payload.exercises,
                payload.duration_minutes as f64,
                body_weight_kg,
            ),
        }
    }

    /// Session estimate from the local energy model alone.
    ///
    /// Exercises without their own duration share the session equally;
    /// unnamed exercises contribute nothing but still take a share.
    fn estimate_session_calories(
        exercises: &[ExerciseEntry],
        total_duration_minutes: f64,
        body_weight_kg: f64,
    ) -> i32 {
        if exercises.is_empty() || total_duration_minutes <= 0.0 {
            return 0;
        }

        let equal_share = total_duration_minutes / exercises.len() as f64;
        let total: i64 = exercises
            .iter()
            .map(|e| {
                let duration = e
                    .duration_minutes
                    .filter(|d| d.is_finite() && *d > 0.0)
                    .unwrap_or(equal_share);
                energy::estimate_calories(&e.name, duration, body_weight_kg)
            })
            .sum();

        total.min(i32::MAX as i64) as i32
    }

    fn validate_payload(payload: &WorkoutPayload) -> Result<(), ApiError> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::Validation("Workout name is required".to_string()));
        }
        if payload.exercises.is_empty() {
            return Err(ApiError::Validation(
                "A workout needs at least one exercise".to_string(),
            ));
        }
        if payload.duration_minutes <= 0 {
            return Err(ApiError::Validation(
                "Workout duration must be a positive number of minutes".to_string(),
            ));
        }
        if let Some(calories) = payload.calories_burned {
            if calories < 0 {
                return Err(ApiError::Validation(
                    "Calories burned cannot be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}
