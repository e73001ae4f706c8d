//! Core domain types for the atelier relay server.
//!
//! This crate holds everything that is independent of a concrete transport:
//! the environment-file configuration loader, the garment-feature vocabulary,
//! the per-stage prompt builders, and the `InferencePort` trait through which
//! adapters reach the hosted image/video models.

pub mod config;
pub mod features;
pub mod ports;
pub mod prompts;

pub use config::{RelayConfig, load_env_file};
pub use features::GarmentFeatures;
pub use ports::{InferenceError, InferencePort};

/// Hosted model used for every image stage (sketch, colors, model, angles).
pub const IMAGE_MODEL: &str = "google/nano-banana";

/// Hosted model used for runway video generation.
pub const VIDEO_MODEL: &str = "kwaivgi/kling-v2.1";
