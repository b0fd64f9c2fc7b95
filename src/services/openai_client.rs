use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

use crate::errors::AppError;

use super::PromptGenerator;

const GENERATION_MODEL: &str = "gpt-4o";
const GENERATION_TEMPERATURE: f32 = 0.7;
const SYSTEM_ROLE_TEXT: &str = "You are a helpful assistant that creates prompts for chatbots.";

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
}

impl Default for OpenaiClient {
    fn default() -> Self {
        OpenaiClient {
            client: Client::new(),
        }
    }
}

impl OpenaiClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
        }
    }
}

#[async_trait]
impl PromptGenerator for OpenaiClient {
    /// Two-message exchange: fixed system role plus the compiled instruction
    /// document. Returns the first choice's content verbatim.
    async fn create_system_prompt(&self, compiled_prompt: &str) -> Result<String, AppError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(GENERATION_MODEL)
            .temperature(GENERATION_TEMPERATURE)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_ROLE_TEXT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(compiled_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let first_choice = response
            .choices
            .first()
            .ok_or_else(|| AppError::UpstreamError("No choices in Openai response".to_string()))?
            .message
            .content
            .clone()
            .ok_or_else(|| AppError::UpstreamError("No content".to_string()))?;

        Ok(first_choice)
    }
}
