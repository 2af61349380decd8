use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage, crate::Error> {
        match self.role.as_str() {
            "system" => {
                let msg = ChatCompletionRequestSystemMessageArgs::default()
                    .content(ChatCompletionRequestSystemMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build system message: {}", e))
                    })?;
                Ok(msg.into())
            }
            "user" => {
                let msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build user message: {}", e))
                    })?;
                Ok(msg.into())
            }
            "assistant" => {
                let msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .content(ChatCompletionRequestAssistantMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build assistant message: {}", e))
                    })?;
                Ok(msg.into())
            }
            _ => Err(crate::Error::llm(format!(
                "Unknown message role: {}",
                self.role
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u16>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chat_message_to_openai_system() {
        let msg = ChatMessage::system("You are a helpful assistant");
        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(
            openai_msg,
            ChatCompletionRequestMessage::System(_)
        ));
    }

    #[test]
    fn chat_message_to_openai_user() {
        let msg = ChatMessage::user("How do I charge the device?");
        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(openai_msg, ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn chat_message_to_openai_assistant() {
        let msg = ChatMessage::assistant("Charge it on the supplied dock.");
        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(
            openai_msg,
            ChatCompletionRequestMessage::Assistant(_)
        ));
    }

    #[test]
    fn chat_message_invalid_role() {
        let msg = ChatMessage {
            role: "tool".to_string(),
            content: "This should fail".to_string(),
        };

        let result = msg.to_openai_message();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown message role")
        );
    }

    #[test]
    fn helper_constructors_set_roles() {
        assert_eq!(ChatMessage::system("s").role, "system");
        assert_eq!(ChatMessage::user("u").role, "user");
        assert_eq!(ChatMessage::assistant("a").role, "assistant");
    }
}
