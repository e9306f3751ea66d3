//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use benefits_registry::{
    api::create_router,
    clock::FixedClock,
    registry::{Benefit, BenefitId, CityId, CriterionId, InstitutionId},
    store::{InMemoryBenefitCatalog, InMemoryProfileStore},
    AppState,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn benefit(id: u64, required: &[u64], city: u64) -> Benefit {
    Benefit {
        id: BenefitId(id),
        required_criterion_ids: required.iter().copied().map(CriterionId).collect(),
        city_ids: [CityId(city)].into_iter().collect(),
        institution_ids: [InstitutionId(1)].into_iter().collect(),
    }
}

fn create_test_app() -> Router {
    let catalog = InMemoryBenefitCatalog::new([
        benefit(100, &[1, 2], 1),
        benefit(101, &[1, 4], 1),
        benefit(102, &[1, 2, 3], 1),
        benefit(103, &[1], 2),
    ]);
    let state = AppState::new(
        Arc::new(InMemoryProfileStore::new()),
        Arc::new(catalog),
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap())),
    );
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn ids(json: &Value) -> Vec<u64> {
    json["benefit_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect()
}

// == Register Endpoint Tests ==

#[tokio::test]
async fn test_register_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"id":7,"birth_date":"1985-03-03","criteria":[1,2],"city_id":1}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["user_id"].as_u64().unwrap(), 7);
    assert!(json["message"].as_str().unwrap().contains("registered"));
}

#[tokio::test]
async fn test_register_duplicate_is_bad_request() {
    let app = create_test_app();
    let body = r#"{"id":7,"birth_date":"1985-03-03"}"#;

    let (first, _) = send(&app, "POST", "/users", Some(body)).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, json) = send(&app, "POST", "/users", Some(body)).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let (status, _) = send(&app, "POST", "/users", Some("not json")).await;

    // Axum rejects unparsable JSON bodies before the handler runs
    assert!(status.is_client_error());
}

// == Benefits Endpoint Tests ==

#[tokio::test]
async fn test_benefits_miss_then_hit() {
    let app = create_test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":1,"birth_date":"1985-03-03","criteria":[1,2,3],"city_id":1}"#),
    )
    .await;

    let (status, first) = send(&app, "GET", "/users/1/benefits", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&first), vec![100, 102]);
    assert_eq!(first["cache_hit"], Value::Bool(false));

    let (_, second) = send(&app, "GET", "/users/1/benefits", None).await;
    assert_eq!(ids(&second), vec![100, 102]);
    assert_eq!(second["cache_hit"], Value::Bool(true));
}

#[tokio::test]
async fn test_benefits_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/users/404/benefits", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_benefits_stale_is_conflict() {
    let app = create_test_app();
    // Registration stamps the selection date with the clock, 2023-06-01.
    // A child's birthday earlier in the year is already behind it.
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":2,"birth_date":"1980-01-01","child_birth_dates":["2010-05-01"],"criteria":[1]}"#),
    )
    .await;

    let (status, _) = send(&app, "GET", "/users/2/benefits", None).await;
    assert_eq!(status, StatusCode::OK);

    // A child born later in the calendar year than the selection date.
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":3,"birth_date":"1980-01-01","child_birth_dates":["2012-09-15"],"criteria":[1]}"#),
    )
    .await;

    let (status, json) = send(&app, "GET", "/users/3/benefits", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("stale"));
}

#[tokio::test]
async fn test_benefits_bad_id() {
    let app = create_test_app();

    let (status, _) = send(&app, "GET", "/users/abc/benefits", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Criteria Endpoint Tests ==

#[tokio::test]
async fn test_update_criteria_invalidates_cache() {
    let app = create_test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":1,"birth_date":"1985-03-03","criteria":[1,2],"city_id":1}"#),
    )
    .await;

    let (_, before) = send(&app, "GET", "/users/1/benefits", None).await;
    assert_eq!(ids(&before), vec![100]);

    let (status, _) = send(
        &app,
        "PUT",
        "/users/1/criteria",
        Some(r#"{"criteria":[1,2,3],"city_id":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, "GET", "/users/1/benefits", None).await;
    assert_eq!(ids(&after), vec![100, 102]);
    assert_eq!(after["cache_hit"], Value::Bool(false));
}

#[tokio::test]
async fn test_update_criteria_changes_city_scope() {
    let app = create_test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":1,"birth_date":"1985-03-03","criteria":[1],"city_id":1}"#),
    )
    .await;

    let (_, before) = send(&app, "GET", "/users/1/benefits", None).await;
    assert!(ids(&before).is_empty());

    send(
        &app,
        "PUT",
        "/users/1/criteria",
        Some(r#"{"criteria":[1],"city_id":2}"#),
    )
    .await;

    let (_, after) = send(&app, "GET", "/users/1/benefits", None).await;
    assert_eq!(ids(&after), vec![103]);
}

#[tokio::test]
async fn test_update_criteria_unknown_user() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/users/9/criteria",
        Some(r#"{"criteria":[1],"city_id":null}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_criteria_requires_city_field() {
    let app = create_test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":1,"birth_date":"1985-03-03","criteria":[1,2],"city_id":1}"#),
    )
    .await;

    let (status, _) = send(&app, "PUT", "/users/1/criteria", Some(r#"{"criteria":[1,2]}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // The rejected edit left the city and cached scope in place.
    let (_, json) = send(&app, "GET", "/users/1/benefits", None).await;
    assert_eq!(ids(&json), vec![100]);
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"id":1,"birth_date":"1985-03-03","criteria":[1,2],"city_id":1}"#),
    )
    .await;

    send(&app, "GET", "/users/1/benefits", None).await; // miss
    send(&app, "GET", "/users/1/benefits", None).await; // hit
    send(&app, "GET", "/users/2/benefits", None).await; // not found

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["not_found"].as_u64().unwrap(), 1);
    assert!((json["hit_rate"].as_f64().unwrap() - 0.5).abs() < 0.001);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
