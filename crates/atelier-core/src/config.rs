//! Environment-file configuration loading.
//!
//! The relay reads a local `.env`-style key=value file once at startup and
//! turns it into an immutable [`RelayConfig`] that is passed explicitly into
//! the components that need it. No key is validated here; a missing token is
//! detected lazily at the point of use so the server can still start and
//! report its status on `/api/health`.

use std::collections::HashMap;
use std::path::Path;

/// Key holding the Replicate API token.
pub const TOKEN_KEY: &str = "REPLICATE_API_TOKEN";

/// Optional override for the default image model.
pub const MODEL_ID_KEY: &str = "MODEL_ID";

/// Optional prompt template override.
pub const PROMPT_TEMPLATE_KEY: &str = "PROMPT_TEMPLATE";

/// Parse a key=value environment file into a map.
///
/// Blank lines and lines starting with `#` are skipped. Each remaining line
/// is split on the first `=`; double quotes and carriage returns are stripped
/// from the value and surrounding whitespace is trimmed. A missing file is
/// not an error and yields an empty map.
pub fn load_env_file(path: impl AsRef<Path>) -> HashMap<String, String> {
    let Ok(content) = std::fs::read_to_string(path.as_ref()) else {
        tracing::debug!(path = %path.as_ref().display(), "no env file found");
        return HashMap::new();
    };
    parse_env(&content)
}

/// Parse env-file content. Split out from [`load_env_file`] for testability.
pub fn parse_env(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let value = value.replace(['"', '\r'], "");
        vars.insert(key.to_string(), value.trim().to_string());
    }
    vars
}

/// Immutable relay configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Replicate API token. Required for every generation endpoint.
    pub replicate_token: Option<String>,
    /// Optional image-model override; `None` means the built-in default.
    pub model_id: Option<String>,
    /// Optional prompt template override; read but not enforced.
    pub prompt_template: Option<String>,
}

impl RelayConfig {
    /// Build the config from an env-file on disk.
    pub fn from_env_file(path: impl AsRef<Path>) -> Self {
        Self::from_map(&load_env_file(path))
    }

    /// Build the config from an already-parsed key=value map.
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();
        Self {
            replicate_token: get(TOKEN_KEY),
            model_id: get(MODEL_ID_KEY),
            prompt_template: get(PROMPT_TEMPLATE_KEY),
        }
    }

    /// Whether the API token is present.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.replicate_token.is_some()
    }
}
