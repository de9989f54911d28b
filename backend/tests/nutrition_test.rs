//! Integration tests for nutrition endpoints, including the monthly view

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn meal_body(name: &str, calories: f64, consumed_at: &str) -> serde_json::Value {
    json!({
        "name": name,
        "meal_type": "lunch",
        "calories": calories,
        "protein": 30.0,
        "carbs": 40.0,
        "fat": 10.0,
        "consumed_at": consumed_at
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_nutrition_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/nutrition").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_and_list_meals() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = meal_body("Chicken salad", 450.0, "2026-03-05T12:00:00Z");
    let (status, response) = app
        .post_auth("/api/v1/nutrition", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let meal: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(meal["name"], "Chicken salad");
    assert_eq!(meal["calories"], 450.0);

    let (status, response) = app.get_auth("/api/v1/nutrition", &user.access_token).await;
    assert_eq!(status, StatusCode::OK);
    let list: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_monthly_totals_group_by_day() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for (name, calories, at) in [
        ("Breakfast", 300.0, "2026-03-05T08:00:00Z"),
        ("Dinner", 700.0, "2026-03-05T19:00:00Z"),
        ("Lunch", 500.0, "2026-03-07T12:00:00Z"),
    ] {
        let body = meal_body(name, calories, at);
        app.post_auth("/api/v1/nutrition", &body.to_string(), &user.access_token)
            .await;
    }

    let (status, response) = app
        .get_auth("/api/v1/nutrition/monthly?month=2026-03", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let days: serde_json::Value = serde_json::from_str(&response).unwrap();
    let days = days.as_array().unwrap();

    // Two days with entries, most recent first, no zero-filled gaps
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2026-03-07");
    assert_eq!(days[0]["total_calories"], 500.0);
    assert_eq!(days[0]["meal_count"], 1);
    assert_eq!(days[1]["date"], "2026-03-05");
    assert_eq!(days[1]["total_calories"], 1000.0);
    assert_eq!(days[1]["total_protein"], 60.0);
    assert_eq!(days[1]["meal_count"], 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_monthly_totals_exclude_neighboring_months() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for at in [
        "2026-02-28T23:00:00Z",
        "2026-03-01T00:00:00Z",
        "2026-03-31T23:59:00Z",
        "2026-04-01T00:00:00Z",
    ] {
        let body = meal_body("Meal", 400.0, at);
        app.post_auth("/api/v1/nutrition", &body.to_string(), &user.access_token)
            .await;
    }

    let (status, response) = app
        .get_auth("/api/v1/nutrition/monthly?month=2026-03", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let days: serde_json::Value = serde_json::from_str(&response).unwrap();
    let days = days.as_array().unwrap();

    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2026-03-31");
    assert_eq!(days[1]["date"], "2026-03-01");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_monthly_totals_reject_bad_month() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, _) = app
        .get_auth("/api/v1/nutrition/monthly?month=march", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_meal() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = meal_body("Oatmeal", 350.0, "2026-03-05T08:00:00Z");
    let (_, response) = app
        .post_auth("/api/v1/nutrition", &body.to_string(), &user.access_token)
        .await;
    let meal: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = meal["id"].as_str().unwrap();

    let body = meal_body("Oatmeal with berries", 410.0, "2026-03-05T08:00:00Z");
    let (status, response) = app
        .put_auth(
            &format!("/api/v1/nutrition/{}", id),
            &body.to_string(),
            &user.access_token,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["name"], "Oatmeal with berries");
    assert_eq!(updated["calories"], 410.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_meal() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = meal_body("Snack", 150.0, "2026-03-05T15:00:00Z");
    let (_, response) = app
        .post_auth("/api/v1/nutrition", &body.to_string(), &user.access_token)
        .await;
    let meal: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = meal["id"].as_str().unwrap();

    let (status, _) = app
        .delete_auth(&format!("/api/v1/nutrition/{}", id), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .delete_auth(&format!("/api/v1/nutrition/{}", id), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_meal_rejects_negative_macros() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let mut body = meal_body("Impossible meal", -100.0, "2026-03-05T12:00:00Z");
    body["calories"] = json!(-100.0);

    let (status, _) = app
        .post_auth("/api/v1/nutrition", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
