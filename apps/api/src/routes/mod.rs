pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        // Search API
        .route("/api/search-jobs", post(matching::handle_search_jobs))
        // Assistant API
        .route("/api/chat", post(assistant::handle_chat))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::search::ListingEngine;

    fn test_state() -> AppState {
        let config = Config {
            search_seed: Some(7),
            ..Config::default()
        };
        AppState {
            engine: Arc::new(ListingEngine::new(
                Default::default(),
                config.engine_settings(),
            )),
            config,
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_home_lists_career_fields() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert!(body["careerFields"]
            .as_array()
            .unwrap()
            .contains(&json!("Engineering")));
    }

    #[tokio::test]
    async fn test_search_jobs_returns_envelope() {
        let (status, body) = send(post_json(
            "/api/search-jobs",
            json!({
                "skills": ["python", "marketing"],
                "careerFields": ["Engineering", "Business"],
                "preferences": {"location": "Remote"}
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let internships = body["internships"].as_array().unwrap();
        assert!(!internships.is_empty());
        assert!(internships.len() <= 15);
        assert_eq!(
            body["message"],
            format!("Found {} internships matching your skills", internships.len())
        );
        assert_eq!(body["sources"], json!(["Viinterns AI Search"]));
        assert_eq!(internships[0]["experienceRequired"], "No experience required");
    }

    #[tokio::test]
    async fn test_search_jobs_seeded_is_repeatable() {
        let request = || {
            post_json(
                "/api/search-jobs",
                json!({"skills": ["design"], "careerFields": ["Art"]}),
            )
        };
        let (_, first) = send(request()).await;
        let (_, second) = send(request()).await;
        // postedDate is relative to today; the rest is fixed by the seed
        assert_eq!(first["internships"][0]["id"], second["internships"][0]["id"]);
        assert_eq!(
            first["internships"][0]["title"],
            second["internships"][0]["title"]
        );
    }

    #[tokio::test]
    async fn test_search_jobs_empty_body_fields_default() {
        let (status, body) = send(post_json("/api/search-jobs", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["internships"], json!([]));
    }

    #[tokio::test]
    async fn test_search_jobs_malformed_preferences_are_soft() {
        let (status, body) = send(post_json(
            "/api/search-jobs",
            json!({"skills": ["python"], "careerFields": ["Engineering"], "preferences": "Remote"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["internships"], json!([]));
        assert_eq!(body["diagnostics"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_jobs_invalid_json_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/search-jobs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chat_replies() {
        let (status, body) = send(post_json("/api/chat", json!({"message": "hi"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["response"].as_str().unwrap().starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
