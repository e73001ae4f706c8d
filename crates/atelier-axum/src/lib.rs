//! Axum web adapter for the atelier relay server.
//!
//! Exposes the five generation endpoints plus health under `/api`, with
//! permissive CORS for the browser front end. Handlers validate exactly one
//! required field, build the stage prompt, and delegate to the inference
//! port; every failure is converted to a `{error, success: false}` JSON
//! body at this boundary.

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
