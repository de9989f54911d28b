//! Workout calorie aggregation
//!
//! Orchestrates the energy model across the exercises of one session.
//! Estimation degrades in two tiers:
//!
//! 1. per exercise: the external lookup confirms the name, then the MET
//!    formula applies; a lookup miss or any lookup error drops that one
//!    exercise to the intensity formula;
//! 2. whole aggregation: inputs that defeat the per-exercise pass (for
//!    example a non-finite duration) produce a coarse flat-rate total.
//!
//! The caller never sees an error from this module: total failure of the
//! external provider costs precision, not availability.

use crate::clients::NutritionixClient;
use crate::services::energy;
use anyhow::{ensure, Result};
use fittrack_shared::models::ExerciseEntry;
use tracing::{debug, warn};

/// Flat rate used by the coarse whole-aggregation fallback
const FALLBACK_CALORIES_PER_MINUTE: f64 = 5.0;

/// How a [`CalorieBreakdown`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationMethod {
    /// Per-exercise estimation ran (possibly with intensity fallbacks)
    Precise,
    /// The coarse flat-rate fallback was used
    Fallback,
}

impl EstimationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimationMethod::Precise => "precise",
            EstimationMethod::Fallback => "fallback",
        }
    }
}

/// Calories attributed to a single exercise
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseCalories {
    pub name: String,
    pub calories: i64,
    pub duration_minutes: f64,
}

/// Result of aggregating a workout session
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieBreakdown {
    pub total_calories: i64,
    pub per_exercise: Vec<ExerciseCalories>,
    pub method: EstimationMethod,
}

impl CalorieBreakdown {
    fn empty() -> Self {
        Self {
            total_calories: 0,
            per_exercise: Vec::new(),
            method: EstimationMethod::Precise,
        }
    }
}

/// Calorie aggregation service
pub struct CalorieService;

impl CalorieService {
    /// Aggregate calories burned across a workout session.
    ///
    /// Never fails: any shape of input yields a best-effort breakdown,
    /// with the coarse fallback covering whatever the per-exercise pass
    /// cannot handle.
    pub async fn aggregate(
        lookup: &NutritionixClient,
        exercises: &[ExerciseEntry],
        total_duration_minutes: f64,
        body_weight_kg: f64,
    ) -> CalorieBreakdown {
        match Self::try_aggregate(lookup, exercises, total_duration_minutes, body_weight_kg).await {
            Ok(breakdown) => breakdown,
            Err(e) => {
                warn!("Calorie aggregation failed, using flat-rate fallback: {}", e);
                Self::flat_rate_fallback(exercises, total_duration_minutes)
            }
        }
    }

    async fn try_aggregate(
        lookup: &NutritionixClient,
        exercises: &[ExerciseEntry],
        total_duration_minutes: f64,
        body_weight_kg: f64,
    ) -> Result<CalorieBreakdown> {
        ensure!(
            total_duration_minutes.is_finite() && total_duration_minutes >= 0.0,
            "session duration must be a non-negative number"
        );
        ensure!(
            body_weight_kg.is_finite() && body_weight_kg > 0.0,
            "body weight must be a positive number"
        );

        if exercises.is_empty() {
            return Ok(CalorieBreakdown::empty());
        }

        // Exercises without their own duration share the session equally.
        // The share divides by the full list length, including entries
        // that end up skipped for having no name.
        let equal_share = total_duration_minutes / exercises.len() as f64;

        let mut per_exercise = Vec::with_capacity(exercises.len());
        let mut total_calories = 0i64;

        for exercise in exercises {
            if exercise.name.is_empty() {
                continue;
            }

            let duration = exercise
                .duration_minutes
                .filter(|d| d.is_finite() && *d > 0.0)
                .unwrap_or(equal_share);

            let calories = match lookup.search_exercise(&exercise.name).await {
                Ok(true) => energy::estimate_calories(&exercise.name, duration, body_weight_kg),
                Ok(false) => {
                    debug!(exercise = %exercise.name, "No lookup match, using intensity estimate");
                    energy::intensity_estimate(&exercise.name, duration, body_weight_kg)
                }
                Err(e) => {
                    debug!(exercise = %exercise.name, error = %e, "Lookup failed, using intensity estimate");
                    energy::intensity_estimate(&exercise.name, duration, body_weight_kg)
                }
            };

            total_calories += calories;
            per_exercise.push(ExerciseCalories {
                name: exercise.name.clone(),
                calories,
                duration_minutes: duration,
            });
        }

        Ok(CalorieBreakdown {
            total_calories,
            per_exercise,
            method: EstimationMethod::Precise,
        })
    }

    /// Coarse fallback: a flat rate spread over the session, with no
    /// per-exercise detail.
    fn flat_rate_fallback(exercises: &[ExerciseEntry], total_duration_minutes: f64) -> CalorieBreakdown {
        let total_calories = if exercises.is_empty()
            || !total_duration_minutes.is_finite()
            || total_duration_minutes <= 0.0
        {
            0
        } else {
            (total_duration_minutes * FALLBACK_CALORIES_PER_MINUTE).round() as i64
        };

        CalorieBreakdown {
            total_calories,
            per_exercise: Vec::new(),
            method: EstimationMethod::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NutritionixConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry(name: &str) -> ExerciseEntry {
        ExerciseEntry {
            name: name.to_string(),
            duration_minutes: None,
            sets: None,
            reps: None,
            weight_kg: None,
        }
    }

    fn client_for(base_url: &str) -> NutritionixClient {
        NutritionixClient::new(&NutritionixConfig {
            base_url: base_url.to_string(),
            app_id: "test".to_string(),
            app_key: "test".to_string(),
            timeout_secs: 2,
        })
    }

    async fn mock_lookup(status: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/search/instant"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn empty_exercise_list_yields_zero() {
        let client = client_for("http://127.0.0.1:9");

        let breakdown = CalorieService::aggregate(&client, &[], 30.0, 70.0).await;

        assert_eq!(breakdown.total_calories, 0);
        assert!(breakdown.per_exercise.is_empty());
    }

    #[tokio::test]
    async fn lookup_hit_uses_met_formula_with_equal_split() {
        let server = mock_lookup(200, json!({"common": [{"food_name": "x"}]})).await;
        let client = client_for(&server.uri());

        let exercises = [entry("running"), entry("yoga")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 60.0, 70.0).await;

        // 30 min each: running 8*70*0.5 = 280, yoga 3*70*0.5 = 105
        assert_eq!(breakdown.method, EstimationMethod::Precise);
        assert_eq!(breakdown.per_exercise.len(), 2);
        assert_eq!(breakdown.per_exercise[0].calories, 280);
        assert_eq!(breakdown.per_exercise[1].calories, 105);
        assert_eq!(breakdown.total_calories, 385);
    }

    #[tokio::test]
    async fn per_exercise_sum_equals_total() {
        let server = mock_lookup(200, json!({"common": [{"food_name": "x"}]})).await;
        let client = client_for(&server.uri());

        let exercises = [entry("running"), entry("yoga"), entry("juggling")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 45.0, 82.5).await;

        let sum: i64 = breakdown.per_exercise.iter().map(|e| e.calories).sum();
        assert_eq!(sum, breakdown.total_calories);
    }

    #[tokio::test]
    async fn lookup_miss_uses_intensity_estimate() {
        let server = mock_lookup(200, json!({"common": []})).await;
        let client = client_for(&server.uri());

        let exercises = [entry("running"), entry("yoga")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 60.0, 70.0).await;

        // 0.1*70*30*1.2 = 252, 0.1*70*30*0.7 = 147
        assert_eq!(breakdown.per_exercise[0].calories, 252);
        assert_eq!(breakdown.per_exercise[1].calories, 147);
        assert_eq!(breakdown.total_calories, 399);
        assert_eq!(breakdown.method, EstimationMethod::Precise);
    }

    #[tokio::test]
    async fn lookup_server_error_is_absorbed() {
        let server = mock_lookup(500, json!({})).await;
        let client = client_for(&server.uri());

        let exercises = [entry("running")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 30.0, 70.0).await;

        assert_eq!(breakdown.total_calories, 252);
        assert_eq!(breakdown.method, EstimationMethod::Precise);
    }

    #[tokio::test]
    async fn unreachable_provider_is_absorbed() {
        // Nothing listens here; every lookup errors at connect time
        let client = client_for("http://127.0.0.1:9");

        let exercises = [entry("running"), entry("bench press")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 60.0, 70.0).await;

        // 0.1*70*30*1.2 = 252, 0.1*70*30*1.0 = 210
        assert_eq!(breakdown.total_calories, 462);
        assert_eq!(breakdown.per_exercise.len(), 2);
    }

    #[tokio::test]
    async fn explicit_durations_override_equal_split() {
        let server = mock_lookup(200, json!({"common": [{"food_name": "x"}]})).await;
        let client = client_for(&server.uri());

        let mut running = entry("running");
        running.duration_minutes = Some(45.0);
        let exercises = [running, entry("yoga")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 60.0, 70.0).await;

        // running keeps its own 45 min, yoga gets the 30 min equal share
        assert_eq!(breakdown.per_exercise[0].duration_minutes, 45.0);
        assert_eq!(breakdown.per_exercise[1].duration_minutes, 30.0);
    }

    #[tokio::test]
    async fn unnamed_exercises_are_skipped_but_count_toward_split() {
        let server = mock_lookup(200, json!({"common": [{"food_name": "x"}]})).await;
        let client = client_for(&server.uri());

        let exercises = [entry("running"), entry("")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 60.0, 70.0).await;

        // The unnamed entry contributes 0 but still takes a 30 min share
        assert_eq!(breakdown.per_exercise.len(), 1);
        assert_eq!(breakdown.per_exercise[0].duration_minutes, 30.0);
        assert_eq!(breakdown.total_calories, 280);
    }

    #[tokio::test]
    async fn non_finite_duration_falls_back_to_flat_rate() {
        let client = client_for("http://127.0.0.1:9");

        let exercises = [entry("running")];
        let breakdown = CalorieService::aggregate(&client, &exercises, f64::NAN, 70.0).await;

        assert_eq!(breakdown.method, EstimationMethod::Fallback);
        assert_eq!(breakdown.total_calories, 0);
        assert!(breakdown.per_exercise.is_empty());
    }

    #[tokio::test]
    async fn non_positive_weight_falls_back_to_flat_rate() {
        let client = client_for("http://127.0.0.1:9");

        let exercises = [entry("running"), entry("yoga")];
        let breakdown = CalorieService::aggregate(&client, &exercises, 30.0, 0.0).await;

        // 30 min * 5 cal/min = 150
        assert_eq!(breakdown.method, EstimationMethod::Fallback);
        assert_eq!(breakdown.total_calories, 150);
        assert!(breakdown.per_exercise.is_empty());
    }
}
