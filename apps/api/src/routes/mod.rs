pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assertions::handlers as assertions;
use crate::diff::handlers as diff;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Diff API
        .route("/api/v1/diff", post(diff::handle_diff))
        .route("/api/v1/diff/best-match", post(diff::handle_best_match))
        .route("/api/v1/diff/bullets", post(diff::handle_diff_bullets))
        // Resume API
        .route("/api/v1/resumes/prompt", post(generation::handle_build_prompt))
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        // Assertions API
        .route(
            "/api/v1/assertions/evaluate",
            post(assertions::handle_evaluate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::MockProvider;
    use crate::models::resume::ResumeLibrary;

    fn test_state() -> AppState {
        let library: ResumeLibrary = serde_json::from_value(json!({
            "resume": {
                "contact": {
                    "name": "Test User",
                    "email": "test@example.com",
                    "linkedin": "linkedin.com/in/testuser"
                },
                "technical_skills": [
                    {"name": "React", "category": "framework"},
                    {"name": "Docker", "category": "tool"}
                ],
                "work_experience": [{
                    "id": "senior_engineer",
                    "company": "Kava Labs",
                    "title": "Senior Software Engineer",
                    "start_date": "April 2024",
                    "end_date": "Present",
                    "highlights": ["Built web applications"]
                }]
            },
            "experience": {
                "all_skills": [{"name": "React", "category": "framework"}],
                "all_bullet_points": {
                    "senior_engineer": [
                        "Built web applications",
                        "Led CI/CD improvements"
                    ]
                }
            }
        }))
        .unwrap();

        AppState {
            config: Config::from_lookup(|_| None).unwrap(),
            provider: Arc::new(MockProvider::default()),
            library: Arc::new(library),
            forbidden_terms: Arc::new(vec!["rockstar".to_string()]),
        }
    }

    async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send("POST", uri, Some(body)).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "tailor-api");
    }

    #[tokio::test]
    async fn test_diff_route_attributes_keywords() {
        let (status, body) = post_json(
            "/api/v1/diff",
            json!({
                "original": "Built web applications",
                "modified": "Built scalable web applications",
                "used_keywords": ["scalable"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["segments"],
            json!([
                {"text": "Built ", "type": "unchanged"},
                {"text": "scalable", "type": "added-from-job"},
                {"text": " web applications", "type": "unchanged"}
            ])
        );
    }

    #[tokio::test]
    async fn test_diff_route_rejects_oversized_bullet() {
        let (status, body) = post_json(
            "/api/v1/diff",
            json!({"original": "a", "modified": "x".repeat(2_001)}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_best_match_route() {
        let (status, body) = post_json(
            "/api/v1/diff/best-match",
            json!({
                "modified": "Led CI/CD improvements across teams",
                "originals": ["Built web applications", "Led CI/CD improvements"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["best_match"], "Led CI/CD improvements");
    }

    #[tokio::test]
    async fn test_best_match_route_empty_candidates() {
        let (status, body) = post_json(
            "/api/v1/diff/best-match",
            json!({"modified": "anything", "originals": []}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["best_match"], Value::Null);
    }

    #[tokio::test]
    async fn test_bullets_route_uses_stored_role() {
        let (status, body) = post_json(
            "/api/v1/diff/bullets",
            json!({
                "role_id": "senior_engineer",
                "rewritten": ["Built React web applications"],
                "used_keywords": ["React"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let bullet = &body["bullets"][0];
        assert_eq!(bullet["matched_original"], "Built web applications");
        assert_eq!(bullet["segments"][1]["type"], "added-from-job");
    }

    #[tokio::test]
    async fn test_bullets_route_unknown_role() {
        let (status, body) = post_json(
            "/api/v1/diff/bullets",
            json!({"role_id": "ghost", "rewritten": ["x"]}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_bullets_route_requires_candidates() {
        let (status, _) = post_json("/api/v1/diff/bullets", json!({"rewritten": ["x"]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prompt_route() {
        let (status, body) = post_json(
            "/api/v1/resumes/prompt",
            json!({"job_description": "Join Globex! We love React."}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company_name"], "Globex");
        assert!(body["prompt"]
            .as_str()
            .unwrap()
            .contains("We love React."));
    }

    #[tokio::test]
    async fn test_generate_route_rejects_blank_job_description() {
        let (status, body) = post_json(
            "/api/v1/resumes/generate",
            json!({"job_description": "   "}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_route_with_mock_provider() {
        let (status, body) = post_json(
            "/api/v1/resumes/generate",
            json!({"job_description": "Frontend role at Acme Corp."}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "mock");
        assert_eq!(body["company_name"], "Acme Corp");
        assert!(body["bullets"]["senior_engineer"].is_array());
    }

    #[tokio::test]
    async fn test_assertions_route_flags_forbidden_terms() {
        let output = json!({
            "companyName": "Globex",
            "bullets": {"senior_engineer": ["Rockstar React developer"]}
        })
        .to_string();
        let (status, body) = post_json(
            "/api/v1/assertions/evaluate",
            json!({"output": output, "job_description": "React and Docker"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passed"], false);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["assertion"], "no-forbidden-terms");
        assert_eq!(results[0]["reason"], "Found forbidden terms: rockstar");
        assert_eq!(results[1]["assertion"], "required-terms-present");
        assert_eq!(results[1]["pass"], false);
        assert_eq!(results[2]["pass"], true);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send("GET", "/api/v1/nothing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
