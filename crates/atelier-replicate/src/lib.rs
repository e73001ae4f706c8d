//! Replicate API client for the atelier relay.
//!
//! Submits jobs by model identifier, then polls the prediction resource on a
//! fixed interval until it reaches a terminal state or the attempt budget
//! runs out. External code consumes this crate through the
//! `atelier_core::ports::InferencePort` trait.

mod client;
mod error;
mod http;
mod models;
mod port;

pub use client::{DefaultReplicateClient, ReplicateClient};
pub use error::{ReplicateError, ReplicateResult};
pub use http::{ReplicateBackend, ReqwestBackend};
pub use models::{Prediction, PredictionStatus, ReplicateConfig};
