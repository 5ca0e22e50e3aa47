use std::sync::Arc;

use ai_gateway::{
    extract_image_url, normalize_titles, prompts, AiGateway, GatewayConfig, GatewayError, Result,
};
use log::{error, info};

/// Runs the two generation functions against an [`AiGateway`].
#[derive(Clone)]
pub struct GenerationService {
    gateway: Arc<dyn AiGateway>,
    title_model: String,
    thumbnail_model: String,
}

impl GenerationService {
    pub fn new(
        gateway: Arc<dyn AiGateway>,
        title_model: impl Into<String>,
        thumbnail_model: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            title_model: title_model.into(),
            thumbnail_model: thumbnail_model.into(),
        }
    }

    /// Use the models named in `config`.
    pub fn from_config(gateway: Arc<dyn AiGateway>, config: &GatewayConfig) -> Self {
        Self::new(gateway, &config.title_model, &config.thumbnail_model)
    }

    pub async fn generate_titles(&self, topic: &str) -> Result<Vec<String>> {
        info!("Generating viral titles for topic: {}", topic);

        let request = prompts::title_request(&self.title_model, topic);
        let response = self.gateway.send_chat_completion_request(request).await?;

        let content = response
            .first_message()
            .and_then(|message| message.content_text())
            .ok_or(GatewayError::MissingContent)
            .inspect_err(|_| {
                error!(
                    "No content in title response: {}",
                    serde_json::to_string(&response).unwrap_or_default()
                );
            })?;
        info!("Raw AI response: {}", content);

        Ok(normalize_titles(&content))
    }

    pub async fn generate_thumbnail(&self, topic: &str, title: &str) -> Result<String> {
        info!("Generating thumbnail for topic: {}, title: {}", topic, title);

        let request = prompts::thumbnail_request(&self.thumbnail_model, topic, title);
        let response = self.gateway.send_chat_completion_request(request).await?;
        info!("AI response received");

        extract_image_url(&response).inspect_err(|_| {
            error!(
                "No image in response: {}",
                serde_json::to_string(&response).unwrap_or_default()
            );
        })
    }
}
