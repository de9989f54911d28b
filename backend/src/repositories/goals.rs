//! Goals repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Goal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub goal_type: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub user_id: Uuid,
    pub title: String,
    pub goal_type: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    pub completed: bool,
}

/// Input for a full-document goal update
#[derive(Debug, Clone)]
pub struct UpdateGoal {
    pub title: String,
    pub goal_type: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    pub completed: bool,
}

/// Goal repository
pub struct GoalRepository;

impl GoalRepository {
    /// List all goals for a user, most recently created first
    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<GoalRecord>> {
        let goals = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT id, user_id, title, goal_type, target, current, unit,
                   deadline, completed, created_at, updated_at
            FROM goals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(goals)
    }

    /// Create a new goal
    pub async fn create(db: &PgPool, input: CreateGoal) -> Result<GoalRecord> {
        let goal = sqlx::query_as::<_, GoalRecord>(
            r#"
            INSERT INTO goals (user_id, title, goal_type, target, current, unit, deadline, completed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, title, goal_type, target, current, unit,
                      deadline, completed, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.goal_type)
        .bind(input.target)
        .bind(input.current)
        .bind(&input.unit)
        .bind(input.deadline)
        .bind(input.completed)
        .fetch_one(db)
        .await?;

        Ok(goal)
    }

    /// Replace a goal owned by the given user.
    ///
    /// Returns `None` when no row exists for that id and owner.
    pub async fn update(
        db: &PgPool,
        goal_id: Uuid,
        user_id: Uuid,
        input: UpdateGoal,
    ) -> Result<Option<GoalRecord>> {
        let goal = sqlx::query_as::<_, GoalRecord>(
            r#"
            UPDATE goals
            SET title = $3, goal_type = $4, target = $5, current = $6,
                unit = $7, deadline = $8, completed = $9, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, goal_type, target, current, unit,
                      deadline, completed, created_at, updated_at
            "#,
        )
        .bind(goal_id)
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.goal_type)
        .bind(input.target)
        .bind(input.current)
        .bind(&input.unit)
        .bind(input.deadline)
        .bind(input.completed)
        .fetch_optional(db)
        .await?;

        Ok(goal)
    }

    /// Delete a goal owned by the given user; true when a row was removed
    pub async fn delete(db: &PgPool, goal_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(goal_id)
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
