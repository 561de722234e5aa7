/// Groq chat-completions channel
///
/// Speaks the OpenAI-compatible chat API exposed by Groq. Sampling
/// parameters are fixed: the prompts already pin the output format, and a
/// low temperature keeps the JSON replies parseable.
use crate::{
    error::{AppError, AppResult},
    services::providers::LlmChannel,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

const TEMPERATURE: f32 = 0.4;
const MAX_TOKENS: u32 = 800;
const TOP_P: f32 = 1.0;

#[derive(Clone)]
pub struct GroqChannel {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl GroqChannel {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait::async_trait]
impl LlmChannel for GroqChannel {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Groq API request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "Groq API returned status {}: {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalApi("Groq response contained no choices".to_string())
            })?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
