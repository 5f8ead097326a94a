use crate::config::GeminiConfig;
use crate::models::*;
use anyhow::{Context, Result};
use reqwest::Client;
use uuid::Uuid;

pub const SYSTEM_PROMPT: &str = "You are a personal finance assistant. \
Do not greet the user or introduce yourself; answer the question directly. \
Base your answer on the information supplied with the question. \
If that information is not enough, answer from general personal finance principles.";

pub const FALLBACK_PREFIX: &str = "I couldn't generate an answer, but here is what I found:\n";

pub const TEMPERATURE: f32 = 0.2;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

pub const SESSION_HEADER: &str = "X-Session-Id";

pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Asks the model about `message` with the search citations appended.
    /// An empty completion falls back to the citations themselves.
    pub async fn generate_response(
        &self,
        message: &str,
        citations: &str,
        session_id: Uuid,
    ) -> Result<String> {
        let prompt = build_prompt(message, citations);
        let answer = self.complete(&prompt, session_id).await?;

        if answer.trim().is_empty() {
            log::warn!("Gemini returned an empty answer for session {}", session_id);
            return Ok(format!("{}{}", FALLBACK_PREFIX, citations));
        }

        Ok(answer)
    }

    async fn complete(&self, prompt: &str, session_id: Uuid) -> Result<String> {
        let request = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header(SESSION_HEADER, session_id.to_string())
            .json(&request)
            .send()
            .await
            .context("Gemini request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Gemini API error ({}): {}", status, error_text));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .context("Gemini returned a malformed response")?;

        Ok(gemini_response.text())
    }
}

/// The message and the citation blob, separated by a single space.
pub fn build_prompt(message: &str, citations: &str) -> String {
    format!("{} {}", message, citations)
}
