use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::client_trait::AiGateway;
use crate::config::{GatewayConfig, API_KEY_ENV};
use crate::error::{GatewayError, Result};

/// reqwest-backed client for the chat-completion gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl AiGateway for GatewayClient {
    async fn send_chat_completion_request(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let api_key = self
            .config
            .api_key()
            .ok_or(GatewayError::MissingApiKey(API_KEY_ENV))?;

        debug!(
            "Sending chat completion to {} with model {}",
            self.config.endpoint, request.model
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} {}", status, body);
            return Err(GatewayError::from_status(status));
        }

        let body = response.bytes().await?;
        let completion: ChatCompletionResponse = serde_json::from_slice(&body)?;
        Ok(completion)
    }
}
