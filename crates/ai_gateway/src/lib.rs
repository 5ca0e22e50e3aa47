pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod prompts;
pub mod thumbnail_extractor;
pub mod title_normalizer;

pub use api::client::GatewayClient;
pub use client_trait::AiGateway;
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use thumbnail_extractor::extract_image_url;
pub use title_normalizer::{normalize_titles, MAX_TITLES};
