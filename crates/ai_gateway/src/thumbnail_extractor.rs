use crate::api::models::ChatCompletionResponse;
use crate::error::{GatewayError, Result};

/// Pull the first generated image URL out of a multimodal completion.
pub fn extract_image_url(response: &ChatCompletionResponse) -> Result<String> {
    response
        .first_message()
        .and_then(|message| message.images.as_ref())
        .and_then(|images| images.first())
        .and_then(|image| image.image_url.as_ref())
        .and_then(|image_url| image_url.url.as_deref())
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or(GatewayError::NoImage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_first_image_url() {
        let response = response(json!({
            "choices": [{"message": {
                "content": "Here is your thumbnail",
                "images": [
                    {"type": "image_url", "image_url": {"url": "data:image/png;base64,AAAA"}},
                    {"type": "image_url", "image_url": {"url": "https://cdn.example.com/second.png"}}
                ]
            }}]
        }));
        assert_eq!(
            extract_image_url(&response).unwrap(),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn missing_images_is_no_image() {
        let response = response(json!({
            "choices": [{"message": {"content": "I cannot draw that"}}]
        }));
        assert!(matches!(
            extract_image_url(&response),
            Err(GatewayError::NoImage)
        ));
    }

    #[test]
    fn empty_choices_or_blank_url_is_no_image() {
        assert!(matches!(
            extract_image_url(&response(json!({"choices": []}))),
            Err(GatewayError::NoImage)
        ));

        let blank = response(json!({
            "choices": [{"message": {"images": [{"image_url": {"url": "  "}}]}}]
        }));
        assert!(matches!(
            extract_image_url(&blank),
            Err(GatewayError::NoImage)
        ));
    }
}
