//! Nutritionix API client
//!
//! Thin reqwest wrapper over the two Nutritionix endpoints this service
//! uses: instant search (exercise keyword validation) and natural-language
//! nutrient prediction. The provider is treated as unreliable: every error
//! surfaces as a typed [`LookupError`] and callers in the calorie path are
//! expected to fall back to a local formula rather than fail the request.
//!
//! The base URL comes from configuration so tests can point the client at
//! a wiremock server.

use crate::config::NutritionixConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Error from the external nutrition lookup
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("nutrition lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("nutrition lookup returned status {0}")]
    Status(StatusCode),
}

/// Nutrient facts for a single matched food
#[derive(Debug, Clone, Deserialize)]
pub struct FoodNutrients {
    pub food_name: String,
    #[serde(default)]
    pub serving_qty: f64,
    #[serde(default)]
    pub serving_unit: String,
    #[serde(default)]
    pub nf_calories: f64,
    #[serde(default)]
    pub nf_protein: f64,
    #[serde(default)]
    pub nf_total_carbohydrate: f64,
    #[serde(default)]
    pub nf_total_fat: f64,
}

#[derive(Debug, Deserialize)]
struct InstantSearchResponse {
    #[serde(default)]
    common: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct NaturalNutrientsResponse {
    #[serde(default)]
    foods: Vec<FoodNutrients>,
}

#[derive(Debug, serde::Serialize)]
struct NaturalNutrientsRequest<'a> {
    query: &'a str,
}

/// Client for the Nutritionix API
#[derive(Clone)]
pub struct NutritionixClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl NutritionixClient {
    /// Build a client from configuration.
    ///
    /// The per-call timeout lives on the reqwest client; a slow provider
    /// degrades into the fallback formula instead of stalling a request.
    pub fn new(config: &NutritionixConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
        }
    }

    /// Check whether the provider knows the given exercise name.
    ///
    /// Returns `Ok(true)` when the instant search has at least one common
    /// match, `Ok(false)` when it returns an empty result set.
    pub async fn search_exercise(&self, query: &str) -> Result<bool, LookupError> {
        let url = format!("{}/v2/search/instant", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("detailed", "true")])
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body: InstantSearchResponse = response.json().await?;
        Ok(!body.common.is_empty())
    }

    /// Predict nutrient facts from a free-text meal name.
    ///
    /// Returns `Ok(None)` when the provider has no match for the query.
    pub async fn predict_nutrition(&self, query: &str) -> Result<Option<FoodNutrients>, LookupError> {
        let url = format!("{}/v2/natural/nutrients", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&NaturalNutrientsRequest { query })
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body: NaturalNutrientsResponse = response.json().await?;
        Ok(body.foods.into_iter().next())
    }
}
