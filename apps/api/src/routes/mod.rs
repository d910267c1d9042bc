pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::design::handlers as design;
use crate::editor::handlers as editor;
use crate::render::handlers as render;
use crate::state::AppState;

/// Room for multipart framing around the largest accepted photo.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_photo_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Content
        .route("/api/v1/cv", get(editor::handle_get_document))
        .route("/api/v1/cv/personal", patch(editor::handle_update_personal))
        .route(
            "/api/v1/cv/photo",
            post(editor::handle_upload_photo).delete(editor::handle_remove_photo),
        )
        .route("/api/v1/cv/experience", post(editor::handle_add_experience))
        .route(
            "/api/v1/cv/experience/:id",
            patch(editor::handle_update_experience).delete(editor::handle_remove_experience),
        )
        .route("/api/v1/cv/education", post(editor::handle_add_education))
        .route(
            "/api/v1/cv/education/:id",
            patch(editor::handle_update_education).delete(editor::handle_remove_education),
        )
        .route("/api/v1/cv/skills", put(editor::handle_set_skills))
        .route("/api/v1/cv/reset", post(editor::handle_reset))
        // Design
        .route("/api/v1/design/options", get(design::handle_design_options))
        .route("/api/v1/design/theme", patch(design::handle_update_theme))
        // Preview & print
        .route("/api/v1/preview/scale", get(render::handle_preview_scale))
        .route("/preview", get(render::handle_preview))
        .route("/print", get(render::handle_print))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::layout::a4;

    fn app() -> Router {
        build_router(AppState::new(Config::default(), a4()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let res = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_edit_field_updates_preview() {
        let app = app();
        let res = send(
            &app,
            Method::PATCH,
            "/api/v1/cv/personal",
            Some(json!({"field": "name", "value": "Giulia Bianchi"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["name"], "Giulia Bianchi");

        let html = body_text(send(&app, Method::GET, "/preview", None).await).await;
        assert!(html.contains("Giulia Bianchi"));
        assert!(!html.contains("Mario Rossi"));
    }

    #[tokio::test]
    async fn test_add_update_remove_experience() {
        let app = app();
        let res = send(&app, Method::POST, "/api/v1/cv/experience", None).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let id = body_json(res).await["id"].as_str().unwrap().to_string();

        let doc = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;
        assert_eq!(doc["data"]["experience"].as_array().unwrap().len(), 2);
        assert_eq!(doc["data"]["experience"][0]["id"], id.as_str());

        let res = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/cv/experience/{id}"),
            Some(json!({"field": "company", "value": "Acme"})),
        )
        .await;
        assert_eq!(body_json(res).await["company"], "Acme");

        let res = send(&app, Method::DELETE, &format!("/api/v1/cv/experience/{id}"), None).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let doc = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;
        let list = doc["data"]["experience"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["company"], "Tech Agency");
    }

    #[tokio::test]
    async fn test_unknown_education_is_404() {
        let res = send(
            &app(),
            Method::DELETE,
            "/api/v1/cv/education/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skills_are_split() {
        let res = send(
            &app(),
            Method::PUT,
            "/api/v1/cv/skills",
            Some(json!({"skills": "Rust, Tokio,, Axum "})),
        )
        .await;
        let body = body_json(res).await;
        assert_eq!(body["items"], json!(["Rust", "Tokio", "Axum"]));
        assert_eq!(body["skills"], "Rust, Tokio,, Axum ");
    }

    #[tokio::test]
    async fn test_theme_switch_changes_preview_not_data() {
        let app = app();
        let before = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;

        let res = send(
            &app,
            Method::PATCH,
            "/api/v1/design/theme",
            Some(json!({"template": "classic", "color": "#7c3aed", "font": "serif"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let html = body_text(send(&app, Method::GET, "/preview", None).await).await;
        assert!(html.contains("cv-classic"));
        assert!(html.contains("color:#7c3aed"));
        assert!(html.contains("'Merriweather', serif"));

        let after = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;
        assert_eq!(before["data"], after["data"]);
    }

    #[tokio::test]
    async fn test_invalid_theme_is_400() {
        let res = send(
            &app(),
            Method::PATCH,
            "/api/v1/design/theme",
            Some(json!({"scale": 2.0})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mistyped_body_uses_error_envelope() {
        let app = app();
        let res = send(
            &app,
            Method::PATCH,
            "/api/v1/design/theme",
            Some(json!({"scale": "1.1"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"]["code"], "VALIDATION_ERROR");

        let res = send(
            &app,
            Method::PATCH,
            "/api/v1/cv/personal",
            Some(json!({"field": "nickname", "value": "x"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_uses_error_envelope() {
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/api/v1/cv/skills")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app().oneshot(request).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bad_query_uses_error_envelope() {
        let res = send(
            &app(),
            Method::GET,
            "/api/v1/preview/scale?container_width=abc",
            None,
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_reset_needs_confirmation() {
        let app = app();
        send(
            &app,
            Method::PUT,
            "/api/v1/cv/skills",
            Some(json!({"skills": "Rust"})),
        )
        .await;

        let res = send(&app, Method::POST, "/api/v1/cv/reset", Some(json!({}))).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let doc = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;
        assert_eq!(doc["data"]["skills"], "Rust");

        let res = send(
            &app,
            Method::POST,
            "/api/v1/cv/reset",
            Some(json!({"confirm": true})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_json(res).await["data"]["skills"]
            .as_str()
            .unwrap()
            .starts_with("SEO"));
    }

    #[tokio::test]
    async fn test_scale_endpoint_clamps() {
        let app = app();
        let wide = body_json(
            send(&app, Method::GET, "/api/v1/preview/scale?container_width=1600", None).await,
        )
        .await;
        assert_eq!(wide["scale"], 1.0);
        assert_eq!(wide["zoom_percent"], 100);

        let narrow = body_json(
            send(&app, Method::GET, "/api/v1/preview/scale?container_width=437", None).await,
        )
        .await;
        assert_eq!(narrow["zoom_percent"], 50);
    }

    #[tokio::test]
    async fn test_scaled_preview_and_print() {
        let app = app();
        let html = body_text(
            send(&app, Method::GET, "/preview?container_width=437", None).await,
        )
        .await;
        assert!(html.contains("transform:scale(0.5000)"));

        let res = send(&app, Method::GET, "/print", None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_text(res).await.contains("window.print()"));
    }

    fn multipart_request(content_type: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "cvbuilder-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"me\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/cv/photo")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_photo_upload_and_removal() {
        let app = app();
        let res = app
            .clone()
            .oneshot(multipart_request("image/png", b"\x89PNG\r\n\x1a\nrest"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["content_type"], "image/png");

        let doc = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;
        assert!(doc["data"]["personal"]["photo"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));

        let res = send(&app, Method::DELETE, "/api/v1/cv/photo", None).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let doc = body_json(send(&app, Method::GET, "/api/v1/cv", None).await).await;
        assert!(doc["data"]["personal"]["photo"].is_null());
    }

    #[tokio::test]
    async fn test_non_image_upload_rejected() {
        let res = app()
            .oneshot(multipart_request("text/plain", b"hello"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
