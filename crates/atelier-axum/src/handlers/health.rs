//! Health handler: liveness plus configuration presence.

use axum::Json;
use axum::extract::State;

use crate::dto::{EnvCheck, HealthResponse};
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        env_check: EnvCheck {
            replicate_token: state.config.has_token(),
            model_id: state
                .config
                .model_id
                .clone()
                .unwrap_or_else(|| "using default".to_string()),
            prompt_template: state.config.prompt_template.is_some(),
        },
    })
}
