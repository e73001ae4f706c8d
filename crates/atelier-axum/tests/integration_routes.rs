//! Integration tests for the relay routes.
//!
//! The router is driven directly through tower with a fake inference port
//! injected into the context, so no network or real Replicate account is
//! involved.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use atelier_axum::bootstrap::{AxumContext, CorsConfig};
use atelier_axum::routes::create_router;
use atelier_core::config::RelayConfig;
use atelier_core::ports::{InferenceError, InferencePort};

/// What the fake port should do with each generation request.
enum Behavior {
    Succeed,
    Fail,
    /// Fail any request whose prompt contains one of these substrings.
    FailWhenPromptContains(&'static [&'static str]),
}

struct FakePort {
    behavior: Behavior,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, serde_json::Value, bool)>>,
}

impl FakePort {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn recorded(&self) -> Vec<(String, serde_json::Value, bool)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferencePort for FakePort {
    async fn generate(
        &self,
        model: &str,
        input: serde_json::Value,
        long_running: bool,
    ) -> Result<String, InferenceError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), input.clone(), long_running));

        let fail = match &self.behavior {
            Behavior::Succeed => false,
            Behavior::Fail => true,
            Behavior::FailWhenPromptContains(words) => {
                let prompt = input["prompt"].as_str().unwrap_or("");
                words.iter().any(|w| prompt.contains(w))
            }
        };
        if fail {
            Err(InferenceError::JobFailed("scripted failure".to_string()))
        } else {
            Ok(format!("https://cdn.example/out-{n}.jpg"))
        }
    }
}

fn router_with(port: Arc<FakePort>, token: Option<&str>) -> Router {
    let ctx = AxumContext {
        config: RelayConfig {
            replicate_token: token.map(str::to_string),
            model_id: None,
            prompt_template: None,
        },
        inference: port,
    };
    create_router(ctx, &CorsConfig::AllowAll)
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_token_presence() {
    let app = router_with(FakePort::new(Behavior::Succeed), Some("r8_test"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["env_check"]["replicate_token"], true);
    assert_eq!(body["env_check"]["model_id"], "using default");
    assert_eq!(body["env_check"]["prompt_template"], false);
}

#[tokio::test]
async fn health_reports_missing_token() {
    let app = router_with(FakePort::new(Behavior::Succeed), None);
    let (status, body) = {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice::<serde_json::Value>(&bytes).unwrap())
    };
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["env_check"]["replicate_token"], false);
}

#[tokio::test]
async fn generate_sketch_requires_prompt() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(app, "/api/generate-sketch", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prompt is required");
    assert_eq!(body["success"], false);
    assert_eq!(port.calls(), 0);
}

#[tokio::test]
async fn add_colors_rejects_empty_sketch_url_without_calling_upstream() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(app, "/api/add-colors", r#"{"sketchUrl": ""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Sketch URL is required");
    assert_eq!(port.calls(), 0);
}

#[tokio::test]
async fn generate_sketch_without_token_is_a_server_error() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), None);

    let (status, body) =
        post_json(app, "/api/generate-sketch", r#"{"prompt": "red dress"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "REPLICATE_API_TOKEN not configured");
    assert_eq!(port.calls(), 0);
}

#[tokio::test]
async fn generate_sketch_returns_image_url() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(
        app,
        "/api/generate-sketch",
        r#"{"prompt": "red dress", "garmentType": "dress", "gender": "Women"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["step"], "sketch");
    assert_eq!(body["imageUrl"], "https://cdn.example/out-0.jpg");

    let recorded = port.recorded();
    assert_eq!(recorded.len(), 1);
    let (model, input, long_running) = &recorded[0];
    assert_eq!(model, "google/nano-banana");
    assert!(!long_running);
    assert_eq!(input["output_format"], "jpg");
    assert!(input["prompt"].as_str().unwrap().contains("red dress"));
}

#[tokio::test]
async fn generate_sketch_refine_sends_base_image_and_strength() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, _) = post_json(
        app,
        "/api/generate-sketch",
        r#"{
            "prompt": "red dress",
            "editInstruction": "make the logo smaller",
            "previousSketchUrl": "https://cdn.example/prev.jpg",
            "uploadedLogoUrl": "data:image/png;base64,AAAA"
        }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recorded = port.recorded();
    let input = &recorded[0].1;
    // refine mode: only the base image, never the logo again
    assert_eq!(input["image_input"], serde_json::json!(["https://cdn.example/prev.jpg"]));
    assert_eq!(input["image_strength"], 0.98);
    assert!(
        input["prompt"]
            .as_str()
            .unwrap()
            .contains("make the logo smaller")
    );
}

#[tokio::test]
async fn generate_sketch_prefers_the_uploaded_image_when_opted_in() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, _) = post_json(
        app,
        "/api/generate-sketch",
        r#"{
            "prompt": "red dress",
            "useUploadedImage": true,
            "uploadedImageUrl": "https://cdn.example/photo.jpg",
            "previousSketchUrl": "https://cdn.example/prev.jpg"
        }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let input = &port.recorded()[0].1;
    // the uploaded photo wins over the previous sketch and is the sole reference
    assert_eq!(
        input["image_input"],
        serde_json::json!(["https://cdn.example/photo.jpg"])
    );
    assert_eq!(input["image_strength"], 0.98);
}

#[tokio::test]
async fn add_colors_initial_uses_the_sketch_as_reference() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(
        app,
        "/api/add-colors",
        r#"{"sketchUrl": "https://cdn.example/sketch.jpg", "colors": ["crimson", "ivory"]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "colored");
    let input = &port.recorded()[0].1;
    assert_eq!(
        input["image_input"],
        serde_json::json!(["https://cdn.example/sketch.jpg"])
    );
    assert!(input.get("image_strength").is_none());
}

#[tokio::test]
async fn generate_model_requires_design_url() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(app, "/api/generate-model", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Design URL is required");
}

#[tokio::test]
async fn generate_angles_keeps_the_survivors() {
    // Side and three-quarter prompts fail: 4 of 6 branches down.
    let port = FakePort::new(Behavior::FailWhenPromptContains(&[
        "side profile",
        "Three-quarter",
    ]));
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(
        app,
        "/api/generate-angles",
        r#"{"modelPhotoUrl": "https://cdn.example/model.jpg"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["step"], "angles");
    assert_eq!(body["model"], "nano-banana");
    assert_eq!(body["viewCount"], 2);

    let views = body["allViews"].as_array().unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0]["angle"], "front");
    assert_eq!(views[1]["angle"], "back");
    assert_eq!(body["imageUrl"], views[0]["imageUrl"]);

    // all six branches ran to completion despite the failures
    assert_eq!(port.calls(), 6);
}

#[tokio::test]
async fn generate_angles_fails_only_when_all_six_fail() {
    let port = FakePort::new(Behavior::Fail);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(
        app,
        "/api/generate-angles",
        r#"{"modelPhotoUrl": "https://cdn.example/model.jpg"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Different angle view generation failed: Failed to generate any angle views"
    );
    assert_eq!(port.calls(), 6);
}

#[tokio::test]
async fn ramp_walk_uses_the_video_model_with_long_running_budget() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(
        app,
        "/api/generate-ramp-walk",
        r#"{"modelPhotoUrl": "https://cdn.example/model.jpg", "walkStyle": "slow strut"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "ramp-walk");
    assert_eq!(body["videoUrl"], "https://cdn.example/out-0.jpg");

    let recorded = port.recorded();
    let (model, input, long_running) = &recorded[0];
    assert_eq!(model, "kwaivgi/kling-v2.1");
    assert!(*long_running);
    assert_eq!(input["mode"], "pro");
    assert_eq!(input["duration"], 10);
    assert_eq!(input["start_image"], "https://cdn.example/model.jpg");
    assert!(input["prompt"].as_str().unwrap().contains("slow strut"));
}

#[tokio::test]
async fn upstream_failure_maps_to_stage_prefixed_server_error() {
    let port = FakePort::new(Behavior::Fail);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(
        app,
        "/api/generate-model",
        r#"{"designUrl": "https://cdn.example/design.jpg"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Model generation failed:"));
    assert!(message.contains("scripted failure"));
}

#[tokio::test]
async fn malformed_json_body_is_a_client_error() {
    let port = FakePort::new(Behavior::Succeed);
    let app = router_with(port.clone(), Some("r8_test"));

    let (status, body) = post_json(app, "/api/add-colors", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(port.calls(), 0);
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let app = router_with(FakePort::new(Behavior::Succeed), Some("r8_test"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Not found");
}
