//! Goals service
//!
//! CRUD over goal records plus the completion policy: `completed` is a
//! denormalized flag, so the server recomputes it from
//! `current >= target` on every write instead of trusting the client.

use crate::error::ApiError;
use crate::repositories::{CreateGoal, GoalRecord, GoalRepository, UpdateGoal};
use fittrack_shared::types::GoalPayload;
use sqlx::PgPool;
use uuid::Uuid;

/// Goals service for business logic
pub struct GoalsService;

impl GoalsService {
    /// List all goals for a user, most recently created first
    pub async fn list_goals(pool: &PgPool, user_id: Uuid) -> Result<Vec<GoalRecord>, ApiError> {
        GoalRepository::list_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Create a new goal
    pub async fn create_goal(
        pool: &PgPool,
        user_id: Uuid,
        payload: GoalPayload,
    ) -> Result<GoalRecord, ApiError> {
        Self::validate_payload(&payload)?;

        let input = CreateGoal {
            user_id,
            title: payload.title,
            goal_type: payload.goal_type.as_str().to_string(),
            target: payload.target,
            current: payload.current,
            unit: payload.unit,
            deadline: payload.deadline,
            completed: Self::is_completed(payload.current, payload.target),
        };

        GoalRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// Replace a goal
    pub async fn update_goal(
        pool: &PgPool,
        user_id: Uuid,
        goal_id: Uuid,
        payload: GoalPayload,
    ) -> Result<GoalRecord, ApiError> {
        Self::validate_payload(&payload)?;

        let input = UpdateGoal {
            title: payload.title,
            goal_type: payload.goal_type.as_str().to_string(),
            target: payload.target,
            current: payload.current,
            unit: payload.unit,
            deadline: payload.deadline,
            completed: Self::is_completed(payload.current, payload.target),
        };

        GoalRepository::update(pool, goal_id, user_id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))
    }

    /// Delete a goal
    pub async fn delete_goal(pool: &PgPool, user_id: Uuid, goal_id: Uuid) -> Result<(), ApiError> {
        let deleted = GoalRepository::delete(pool, goal_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Goal not found".to_string()));
        }
        Ok(())
    }

    /// Completion is derived, never client-supplied
    pub fn is_completed(current: f64, target: f64) -> bool {
        current >= target
    }

    fn validate_payload(payload: &GoalPayload) -> Result<(), ApiError> {
        if payload.title.trim().is_empty() {
            return Err(ApiError::Validation("Goal title is required".to_string()));
        }
        if payload.unit.trim().is_empty() {
            return Err(ApiError::Validation("Goal unit is required".to_string()));
        }
        if !payload.target.is_finite() || payload.target <= 0.0 {
            return Err(ApiError::Validation(
                "Goal target must be a positive number".to_string(),
            ));
        }
        if !payload.current.is_finite() || payload.current < 0.0 {
            return Err(ApiError::Validation(
                "Goal progress must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}
