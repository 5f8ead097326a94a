use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one sender's conversation to the generation service. The same
/// user name always maps to the same id; anonymous messages get a fresh one.
pub fn session_id_for(user_name: Option<&str>) -> Uuid {
    match user_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
        None => Uuid::new_v4(),
    }
}

/// One search hit, flattened into the text handed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub snippet: String,
    pub source_url: String,
}

impl Citation {
    pub fn render(&self) -> String {
        format!("{} (Source: {})", self.snippet, self.source_url)
    }
}

// Custom Search JSON API

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl From<SearchItem> for Citation {
    fn from(item: SearchItem) -> Self {
        Self {
            snippet: item.snippet.unwrap_or_default(),
            source_url: item.link.unwrap_or_default(),
        }
    }
}

// Gemini generateContent

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub system_instruction: GeminiContent,
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiContent,
}

impl GeminiResponse {
    /// Text of the first candidate, all parts joined. Empty when the model
    /// produced nothing.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
