pub mod config;
pub mod models;
pub mod search_service;
pub mod gemini_service;
pub mod query_service;

pub use config::Config;
pub use models::*;
pub use search_service::SearchService;
pub use gemini_service::GeminiService;
pub use query_service::QueryService;
