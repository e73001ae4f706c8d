//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers: the immutable relay
/// configuration plus the inference port.
pub type AppState = Arc<AxumContext>;
