use crate::config::Config;
use crate::gemini_service::GeminiService;
use crate::models::session_id_for;
use crate::search_service::SearchService;
use anyhow::Result;
use std::sync::Arc;

pub struct QueryService {
    search_service: Arc<SearchService>,
    gemini_service: Arc<GeminiService>,
}

impl QueryService {
    pub fn new(search_service: Arc<SearchService>, gemini_service: Arc<GeminiService>) -> Self {
        Self {
            search_service,
            gemini_service,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(SearchService::new(config.search.clone())),
            Arc::new(GeminiService::new(config.gemini.clone())),
        )
    }

    /// Search, then generate. Search problems are already folded into the
    /// citation text, so only generation failures surface as errors.
    pub async fn answer(&self, text: &str, user_name: Option<&str>) -> Result<String> {
        let start_time = std::time::Instant::now();
        let session_id = session_id_for(user_name);

        let citations = self.search_service.search(text).await;

        let response = self
            .gemini_service
            .generate_response(text, &citations, session_id)
            .await?;

        log::info!(
            "Answered message for session {} in {} ms",
            session_id,
            start_time.elapsed().as_millis()
        );
        Ok(response)
    }
}
