use async_trait::async_trait;

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::error::Result;

#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Send one non-streaming chat completion and decode the response.
    async fn send_chat_completion_request(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}
