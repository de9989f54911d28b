//! Dashboard statistics service
//!
//! Builds the trailing 7-day summary: a dense, zero-filled progress
//! series ordered oldest-first (the opposite convention from the sparse,
//! descending monthly nutrition series) plus a workout type histogram
//! that omits absent types.

use crate::error::ApiError;
use crate::repositories::{WorkoutRecord, WorkoutRepository};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use fittrack_shared::models::WorkoutType;
use sqlx::PgPool;
use uuid::Uuid;

/// Calories burned on one day of the dashboard window
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBurn {
    pub date: NaiveDate,
    /// Short weekday label, e.g. "Mon"
    pub label: String,
    pub calories: i64,
}

/// Workout count for one type over the window
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCount {
    pub workout_type: &'static str,
    pub count: u32,
}

/// Summary over the trailing 7-day window
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_workouts: u32,
    pub total_calories: i64,
    pub weekly_progress: Vec<DailyBurn>,
    pub workout_distribution: Vec<TypeCount>,
}

/// Dashboard statistics service
pub struct StatsService;

impl StatsService {
    /// Dashboard summary for the 7 calendar days ending today (UTC)
    pub async fn dashboard(pool: &PgPool, user_id: Uuid) -> Result<DashboardSummary, ApiError> {
        let today = Utc::now().date_naive();
        let window_start = (today - Duration::days(6))
            .and_time(NaiveTime::MIN)
            .and_utc();

        let workouts = WorkoutRepository::list_since(pool, user_id, window_start)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::build_weekly_summary(&workouts, today))
    }

    /// Build the summary for the 7 calendar days ending `today`, inclusive.
    ///
    /// `weekly_progress` always has exactly 7 entries, oldest day first;
    /// days without workouts carry an explicit 0. Workouts outside the
    /// window are ignored even if the caller over-fetched.
    pub fn build_weekly_summary(workouts: &[WorkoutRecord], today: NaiveDate) -> DashboardSummary {
        let window_start = today - Duration::days(6);

        let in_window: Vec<&WorkoutRecord> = workouts
            .iter()
            .filter(|w| {
                let day = w.performed_at.date_naive();
                day >= window_start && day <= today
            })
            .collect();

        let total_workouts = in_window.len() as u32;
        let total_calories: i64 = in_window.iter().map(|w| w.calories_burned as i64).sum();

        let weekly_progress = (0..7)
            .map(|offset| {
                let date = window_start + Duration::days(offset);
                let calories = in_window
                    .iter()
                    .filter(|w| w.performed_at.date_naive() == date)
                    .map(|w| w.calories_burned as i64)
                    .sum();
                DailyBurn {
                    date,
                    label: date.format("%a").to_string(),
                    calories,
                }
            })
            .collect();

        // Canonical type order keeps the histogram stable; types that
        // never occur in the window are omitted entirely.
        let workout_distribution = WorkoutType::ALL
            .iter()
            .filter_map(|t| {
                let count = in_window
                    .iter()
                    .filter(|w| w.workout_type == t.as_str())
                    .count() as u32;
                (count > 0).then(|| TypeCount {
                    workout_type: t.as_str(),
                    count,
                })
            })
            .collect();

        DashboardSummary {
            total_workouts,
            total_calories,
            weekly_progress,
            workout_distribution,
        }
    }
}
