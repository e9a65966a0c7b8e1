pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template registry
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        // Render API
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/render/html", post(handlers::handle_render_html))
        .route("/api/v1/render/text", post(handlers::handle_render_text))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::layout::font_metrics::PaperSize;

    fn app() -> Router {
        build_router(AppState::new(&Config {
            port: 0,
            rust_log: "info".to_string(),
            page_size: PaperSize::Letter,
            page_margin_in: 0.75,
        }))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn sample_resume() -> Value {
        json!({
            "personalDetails": {
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "linkedin": "https://www.linkedin.com/in/janedoe"
            },
            "summary": "Backend engineer.",
            "experience": [{
                "jobTitle": "Engineer",
                "company": "Acme",
                "startDate": "2019-01",
                "endDate": "2021-01",
                "currentJob": true,
                "responsibilities": "Built APIs"
            }],
            "skills": ["Python", "React", "Docker", "Leadership"],
            "projects": null,
            "atsScore": 91
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-renderer");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = app()
            .oneshot(Request::get("/api/v1/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "modern-professional",
                "classic-executive",
                "tech-focused",
                "fresh-graduate",
                "minimal-elegant",
            ]
        );
        assert_eq!(body[0]["displayName"], "Modern Professional");
        assert_eq!(body[0]["categoryTag"], "professional");
    }

    #[tokio::test]
    async fn test_render_returns_document_and_page_fill() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render",
                json!({ "templateId": "tech-focused", "resume": sample_resume() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["templateId"], "tech-focused");
        assert_eq!(body["document"]["template"], "tech-focused");
        assert_eq!(body["document"]["root"]["kind"], "page");
        assert!(body["pageFill"]["fillRatio"].as_f64().unwrap() > 0.0);
        assert_eq!(body["pageFill"]["verdict"], "too_much_whitespace");

        let text = body["document"].to_string();
        assert!(text.contains("Present"));
        assert!(!text.contains("January 2021"));
        assert!(text.contains("linkedin.com/in/janedoe"));
        assert!(text.contains("Frameworks & Libraries"));
    }

    #[tokio::test]
    async fn test_render_modern_reports_scale() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render",
                json!({ "templateId": "modern-professional", "resume": sample_resume() }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["document"]["scale"]["density"], "spacious");
        assert_eq!(body["document"]["scale"]["sectionCount"], 3);
    }

    #[tokio::test]
    async fn test_unknown_template_is_404_without_fallback() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render",
                json!({ "templateId": "glossy-designer", "resume": sample_resume() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_TEMPLATE");
        assert!(body["error"]["message"].as_str().unwrap().contains("glossy-designer"));
    }

    #[tokio::test]
    async fn test_missing_resume_renders_empty_document() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render",
                json!({ "templateId": "minimal-elegant" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["document"]["root"]["children"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_resume_is_rejected() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render",
                json!({ "templateId": "classic-executive", "resume": { "skills": "Rust" } }),
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_render_html() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render/html",
                json!({ "templateId": "classic-executive", "resume": sample_resume() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Executive Profile"));
    }

    #[tokio::test]
    async fn test_render_text() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/render/text",
                json!({ "templateId": "fresh-graduate", "resume": sample_resume() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("About Me"));
    }
}
