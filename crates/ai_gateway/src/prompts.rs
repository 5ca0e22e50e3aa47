//! Prompt builders for the two generation functions.

use crate::api::models::{ChatCompletionRequest, ChatMessage, Modality};

const TITLE_SYSTEM_PROMPT: &str = r#"You are a YouTube title expert. Generate 5 viral, clickable YouTube titles for the given topic.

Rules:
- Titles should be catchy and create curiosity
- Use power words like "SECRET", "AMAZING", "SHOCKING", "ULTIMATE", etc.
- Keep titles under 60 characters
- Use numbers when possible (e.g., "Top 5", "10 Secrets")
- Include emojis where appropriate
- Make titles that encourage clicks

Return ONLY a JSON array of 5 title strings, nothing else. Example:
["Title 1 🔥", "Title 2 😱", "Title 3 💯", "Title 4 🚀", "Title 5 ⚡"]"#;

pub fn title_request(model: &str, topic: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(TITLE_SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Generate 5 viral YouTube titles for this topic: {topic}"
            )),
        ],
        modalities: None,
    }
}

pub fn thumbnail_request(model: &str, topic: &str, title: &str) -> ChatCompletionRequest {
    let prompt = format!(
        "Create a vibrant, eye-catching YouTube thumbnail image for a video about: \"{topic}\".\n\
         The video title is: \"{title}\".\n\
         \n\
         Style requirements:\n\
         - Ultra high resolution, professional YouTube thumbnail\n\
         - Bold, vibrant colors that pop\n\
         - Clear focal point\n\
         - High contrast for visibility at small sizes\n\
         - Modern, trendy design\n\
         - 16:9 aspect ratio\n\
         - No text overlay (keep it clean)\n\
         - Professional, high-quality look that encourages clicks"
    );

    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::user(prompt)],
        modalities: Some(vec![Modality::Image, Modality::Text]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Role;

    #[test]
    fn title_request_has_system_and_user_messages() {
        let request = title_request("google/gemini-2.5-flash", "home espresso");

        assert_eq!(request.model, "google/gemini-2.5-flash");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains("JSON array of 5"));
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.ends_with("topic: home espresso"));
        assert!(request.modalities.is_none());
    }

    #[test]
    fn thumbnail_request_asks_for_images() {
        let request = thumbnail_request("img-model", "home espresso", "10 SECRET Tricks");

        assert_eq!(request.messages.len(), 1);
        let prompt = &request.messages[0].content;
        assert!(prompt.contains("about: \"home espresso\""));
        assert!(prompt.contains("The video title is: \"10 SECRET Tricks\""));
        assert!(prompt.contains("16:9 aspect ratio"));
        assert_eq!(
            request.modalities,
            Some(vec![Modality::Image, Modality::Text])
        );
    }
}
