//! End-to-end tests for the `/api/workouts` resource.
//!
//! Drives the full router over HTTP: atomic tree creation, whole-tree
//! replacement, cascade deletion, the duplicate-date conflict, and the
//! days-since-last-workout lookup.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, delete, get, send_json};

fn bench_press_payload(date: &str) -> serde_json::Value {
    json!({
        "date": date,
        "muscle_groups": "chest",
        "duration": "01:00",
        "movements": [
            {
                "muscle_group": "chest",
                "movement_name": "Bench Press",
                "set_number": 2,
                "sets": [
                    { "weight": 60.0, "reps": 10 },
                    { "weight": 65.0, "reps": 8 }
                ]
            }
        ]
    })
}

// ---------------------------------------------------------------------------
// Create + fetch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_fetch_returns_full_tree(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/workouts",
        bench_press_payload("2024-03-01"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["date"], "2024-03-01");
    assert_eq!(created["muscle_groups"], "chest");
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let detail = body_json(response).await;
    assert_eq!(detail["id"].as_i64(), Some(id));
    assert_eq!(detail["duration"], "01:00");

    let movements = detail["movements"].as_array().unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0]["movement_name"], "Bench Press");
    assert_eq!(movements[0]["set_number"], 2);

    let sets = movements[0]["sets"].as_array().unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0]["weight"], 60.0);
    assert_eq!(sets[0]["reps"], 10);
    assert_eq!(sets[1]["weight"], 65.0);
    assert_eq!(sets[1]["reps"], 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_movements_is_allowed(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/workouts",
        json!({ "date": "2024-03-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let detail = body_json(get(app, &format!("/api/workouts/{id}")).await).await;
    assert!(detail["movements"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_date_is_a_conflict(pool: PgPool) {
    let app = build_test_app(pool);

    send_json(
        app.clone(),
        Method::POST,
        "/api/workouts",
        bench_press_payload("2024-03-01"),
    )
    .await;

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/workouts",
        bench_press_payload("2024-03-01"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");

    // The failed attempt must not have added a second workout.
    let workouts = body_json(get(app, "/api/workouts").await).await;
    assert_eq!(workouts.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_weight_is_rejected_before_the_store(pool: PgPool) {
    let app = build_test_app(pool);

    let mut payload = bench_press_payload("2024-03-01");
    payload["movements"][0]["sets"][0]["weight"] = json!(-5.0);

    let response = send_json(app.clone(), Method::POST, "/api/workouts", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Nothing was written.
    let workouts = body_json(get(app, "/api/workouts").await).await;
    assert!(workouts.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_duration_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send_json(
        app,
        Method::POST,
        "/api/workouts",
        json!({ "date": "2024-03-01", "duration": "90 minutes" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_with_empty_movements_clears_the_tree(pool: PgPool) {
    let app = build_test_app(pool);

    let created = body_json(
        send_json(
            app.clone(),
            Method::POST,
            "/api/workouts",
            bench_press_payload("2024-03-01"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/workouts/{id}"),
        json!({ "date": "2024-03-01", "movements": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let detail = body_json(get(app, &format!("/api/workouts/{id}")).await).await;
    assert!(detail["movements"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_missing_workout_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send_json(
        app,
        Method::PUT,
        "/api/workouts/9999",
        json!({ "date": "2024-03-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_confirms_then_reports_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let created = body_json(
        send_json(
            app.clone(),
            Method::POST,
            "/api/workouts",
            bench_press_payload("2024-03-01"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Workout deleted successfully"
    );

    let response = delete(app.clone(), &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Days-since-last-workout lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn last_workout_lookup_is_strictly_before(pool: PgPool) {
    let app = build_test_app(pool);

    for date in ["2024-01-01", "2024-01-10"] {
        send_json(
            app.clone(),
            Method::POST,
            "/api/workouts",
            json!({ "date": date }),
        )
        .await;
    }

    // A later reference sees the most recent workout and the day gap.
    let body = body_json(get(app.clone(), "/api/workouts/last?date=2024-01-15").await).await;
    assert_eq!(body["lastDate"], "2024-01-10");
    assert_eq!(body["daysSince"], 5);

    // A reference on a workout date sees the prior workout only.
    let body = body_json(get(app.clone(), "/api/workouts/last?date=2024-01-10").await).await;
    assert_eq!(body["lastDate"], "2024-01-01");
    assert_eq!(body["daysSince"], 9);

    // No preceding workout yields an explicit null/null payload.
    let body = body_json(get(app, "/api/workouts/last?date=2023-12-31").await).await;
    assert!(body["lastDate"].is_null());
    assert!(body["daysSince"].is_null());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let app = build_test_app(pool);

    for date in ["2024-01-05", "2024-01-10", "2024-01-01"] {
        send_json(
            app.clone(),
            Method::POST,
            "/api/workouts",
            json!({ "date": date }),
        )
        .await;
    }

    let body = body_json(get(app, "/api/workouts").await).await;
    let dates: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-10", "2024-01-05", "2024-01-01"]);
}
