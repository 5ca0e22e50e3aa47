use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "AI_GATEWAY_API_KEY";
/// Name the key was provisioned under on the hosted platform.
pub const LEGACY_API_KEY_ENV: &str = "LOVABLE_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_TITLE_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_THUMBNAIL_MODEL: &str = "google/gemini-2.5-flash-image-preview";

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub title_model: String,
    pub thumbnail_model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title_model: DEFAULT_TITLE_MODEL.to_string(),
            thumbnail_model: DEFAULT_THUMBNAIL_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Resolve configuration from `config.toml` (if present) and the process environment.
    pub fn new() -> Self {
        Self::load(Path::new(CONFIG_FILE_PATH), |key| std::env::var(key).ok())
    }

    /// Read `path` when it exists, then apply overrides from `lookup`.
    pub fn load(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<GatewayConfig>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(e) => log::warn!("Ignoring malformed {}: {}", path.display(), e),
                },
                Err(e) => log::warn!("Failed to read {}: {}", path.display(), e),
            }
        }

        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(LEGACY_API_KEY_ENV));
        if let Some(api_key) = api_key {
            config.api_key = Some(api_key);
        }
        if let Some(endpoint) = lookup("AI_GATEWAY_URL") {
            config.endpoint = endpoint;
        }
        if let Some(model) = lookup("TITLE_MODEL") {
            config.title_model = model;
        }
        if let Some(model) = lookup("THUMBNAIL_MODEL") {
            config.thumbnail_model = model;
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The API key, treating a blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
