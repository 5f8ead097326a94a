use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SEARCH_API_BASE: &str = "https://www.googleapis.com";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Credentials and endpoints for the bot, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub gemini: GeminiConfig,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub engine_id: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Set-but-empty counts as unset.
        let value = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let required = |key: &str| {
            value(key)
                .ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))
        };
        let optional = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

        let port = match value("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            search: SearchConfig {
                api_key: required("GOOGLE_API_KEY")?,
                engine_id: required("SEARCH_ENGINE_ID")?,
                api_base: optional("SEARCH_API_BASE", DEFAULT_SEARCH_API_BASE),
            },
            gemini: GeminiConfig {
                api_key: required("GEMINI_API_KEY")?,
                model: optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: optional("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            },
            host: optional("HOST", DEFAULT_HOST),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", self.host, self.port, e))
    }
}
