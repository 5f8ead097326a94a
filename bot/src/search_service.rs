use crate::config::SearchConfig;
use crate::models::*;
use anyhow::Result;
use reqwest::Client;

/// Sources the search is restricted to: a personal-finance PDF, a
/// financial-advice site and a community forum.
pub const SOURCE_SITES: [&str; 3] = [
    "files.consumerfinance.gov/f/documents/cfpb_your-money-your-goals_toolkit.pdf",
    "nerdwallet.com",
    "reddit.com/r/personalfinance",
];

pub const NO_RESULTS_MESSAGE: &str = "Sorry, I couldn't find relevant information.";
pub const SEARCH_ERROR_MESSAGE: &str =
    "Sorry, there was an error with the search. Please try again later.";

pub struct SearchService {
    client: Client,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Searches the fixed sources and returns the citation blob. Never
    /// fails: provider errors become `SEARCH_ERROR_MESSAGE`.
    pub async fn search(&self, query: &str) -> String {
        match self.fetch_citations(query).await {
            Ok(citations) if citations.is_empty() => {
                log::info!("Search returned no results");
                NO_RESULTS_MESSAGE.to_string()
            }
            Ok(citations) => {
                log::info!("Search returned {} results", citations.len());
                citations
                    .iter()
                    .map(Citation::render)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Err(e) => {
                log::error!("Search request failed: {:#}", e);
                SEARCH_ERROR_MESSAGE.to_string()
            }
        }
    }

    async fn fetch_citations(&self, query: &str) -> Result<Vec<Citation>> {
        let url = format!(
            "{}/customsearch/v1",
            self.config.api_base.trim_end_matches('/')
        );
        let restricted = build_query(query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", restricted.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Search API error ({}): {}", status, error_text));
        }

        let search_response: SearchResponse = response.json().await?;

        Ok(search_response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Citation::from)
            .collect())
    }
}

/// Appends the `site:` restrictions for every source, joined by `OR`.
pub fn build_query(query: &str) -> String {
    let sites = SOURCE_SITES
        .iter()
        .map(|site| format!("site:{}", site))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("{} {}", query, sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer) -> SearchService {
        SearchService::new(SearchConfig {
            api_key: "search-key".to_string(),
            engine_id: "engine-1".to_string(),
            api_base: server.uri(),
        })
    }

    #[test]
    fn query_restricts_all_sources() {
        let query = build_query("tell me about budgeting");
        assert_eq!(
            query,
            "tell me about budgeting \
             site:files.consumerfinance.gov/f/documents/cfpb_your-money-your-goals_toolkit.pdf \
             OR site:nerdwallet.com OR site:reddit.com/r/personalfinance"
        );
    }

    #[tokio::test]
    async fn flattens_items_into_citation_lines() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("key", "search-key"))
            .and(query_param("cx", "engine-1"))
            .and(query_param("q", build_query("emergency fund").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "snippet": "Keep three months of expenses.", "link": "https://www.nerdwallet.com/a" },
                    { "snippet": "Start with $500.", "link": "https://reddit.com/r/personalfinance/b" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let blob = service_for(&server).search("emergency fund").await;
        assert_eq!(
            blob,
            "Keep three months of expenses. (Source: https://www.nerdwallet.com/a)\n\
             Start with $500. (Source: https://reddit.com/r/personalfinance/b)"
        );
    }

    #[tokio::test]
    async fn missing_or_empty_items_mean_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "kind": "customsearch#search" })))
            .mount(&server)
            .await;
        assert_eq!(service_for(&server).search("anything").await, NO_RESULTS_MESSAGE);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;
        assert_eq!(service_for(&server).search("anything").await, NO_RESULTS_MESSAGE);
    }

    #[tokio::test]
    async fn error_status_becomes_search_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded"))
            .mount(&server)
            .await;
        assert_eq!(service_for(&server).search("taxes").await, SEARCH_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_body_becomes_search_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;
        assert_eq!(service_for(&server).search("taxes").await, SEARCH_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn unreachable_provider_becomes_search_error() {
        let service = SearchService::new(SearchConfig {
            api_key: "search-key".to_string(),
            engine_id: "engine-1".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
        });
        assert_eq!(service.search("taxes").await, SEARCH_ERROR_MESSAGE);
    }
}
