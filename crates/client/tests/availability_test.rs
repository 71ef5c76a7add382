use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use timetext_client::{AvailabilityClient, TextGenerator, config::ApiConfig};
use timetext_core::{
    errors::TextError,
    models::{availability::AvailabilityRequest, time_slot::TimeSlot},
};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Recorded {
    api_key: Arc<Mutex<Option<String>>>,
    content_type: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

async fn record_and_reply(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    *recorded.api_key.lock().unwrap() = header("x-api-key");
    *recorded.content_type.lock().unwrap() = header("content-type");
    *recorded.body.lock().unwrap() = Some(body);

    Json(json!({
        "text_output": "Here's my availability:\nMon, Jan 01 | 9:00 AM - 9:30 AM",
        "user_timezone": "America/New_York",
        "recipient_timezone": null
    }))
}

async fn spawn_endpoint(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

fn sample_request() -> AvailabilityRequest {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
    AvailabilityRequest {
        selected_slots: vec![TimeSlot::new(start, end).unwrap()],
        user_timezone: "America/New_York".to_string(),
        recipient_timezone: None,
        output_format: "continuous".to_string(),
        slot_granularity_minutes: 30,
    }
}

fn client_for(base_url: String) -> AvailabilityClient {
    AvailabilityClient::new(ApiConfig::new(base_url, "test-key")).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_generate_posts_payload_with_api_key() {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/v1/availability/", post(record_and_reply))
        .with_state(recorded.clone());
    let client = client_for(spawn_endpoint(app).await);

    let text = client.generate(&sample_request()).await.unwrap();

    assert_eq!(text, "Here's my availability:\nMon, Jan 01 | 9:00 AM - 9:30 AM");
    assert_eq!(recorded.api_key.lock().unwrap().as_deref(), Some("test-key"));
    assert_eq!(
        recorded.content_type.lock().unwrap().as_deref(),
        Some("application/json")
    );
    assert_eq!(
        recorded.body.lock().unwrap().clone().unwrap(),
        json!({
            "selected_slots": [{"start": "2024-01-01T14:00:00Z", "end": "2024-01-01T14:30:00Z"}],
            "user_timezone": "America/New_York",
            "recipient_timezone": null,
            "output_format": "continuous",
            "slot_granularity_minutes": 30
        })
    );
}

#[tokio::test]
async fn test_generate_reports_non_success_status() {
    let app = Router::new().route(
        "/api/v1/availability/",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Invalid timezone"})),
            )
                .into_response()
        }),
    );
    let client = client_for(spawn_endpoint(app).await);

    match client.generate(&sample_request()).await {
        Err(TextError::Remote { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("Invalid timezone"));
        }
        other => panic!("Expected Remote error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_rejects_undecodable_body() {
    let app = Router::new().route("/api/v1/availability/", post(|| async { "not json" }));
    let client = client_for(spawn_endpoint(app).await);

    match client.generate(&sample_request()).await {
        Err(TextError::Transport(_)) => {}
        other => panic!("Expected Transport error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_reports_unreachable_service() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(format!("http://{}/api/v1", addr));

    match client.generate(&sample_request()).await {
        Err(TextError::Transport(_)) => {}
        other => panic!("Expected Transport error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_honours_configured_timeout() {
    let app = Router::new().route(
        "/api/v1/availability/",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Json(json!({"text_output": "too late"}))
        }),
    );
    let mut config = ApiConfig::new(spawn_endpoint(app).await, "test-key");
    config.request_timeout = Some(1);
    let client = AvailabilityClient::new(config).unwrap();

    match client.generate(&sample_request()).await {
        Err(TextError::Transport(_)) => {}
        other => panic!("Expected Transport error, got: {:?}", other),
    }
}
