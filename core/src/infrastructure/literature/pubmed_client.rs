use std::{collections::HashMap, time::Duration};

use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{
    common::{LiteratureConfig, entities::app_errors::CoreError},
    ingredient::{entities::Article, ports::LiteratureSearch},
};

const ARTICLE_BASE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";

/// Literature search over NCBI E-utilities (PubMed).
#[derive(Debug, Clone)]
pub struct PubMedLiteratureClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    esearchresult: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    result: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DocumentSummary {
    title: Option<String>,
    fulljournalname: Option<String>,
    source: Option<String>,
    pubdate: Option<String>,
}

/// Maps an `esummary` payload onto articles, in the order of `ids`.
fn articles_from_summary(ids: &[String], summary: SummaryResponse) -> Vec<Article> {
    ids.iter()
        .filter_map(|id| {
            let document: DocumentSummary =
                serde_json::from_value(summary.result.get(id)?.clone()).ok()?;
            let title = document.title?.trim().trim_end_matches('.').to_string();
            if title.is_empty() {
                return None;
            }

            Some(Article {
                id: id.clone(),
                title,
                journal: document.fulljournalname.or(document.source),
                published: document.pubdate,
                url: format!("{ARTICLE_BASE_URL}/{id}/"),
            })
        })
        .collect()
}

impl PubMedLiteratureClient {
    pub fn new(config: &LiteratureConfig, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Literature request failed: {}", e);
                CoreError::ExternalServiceError(format!("Literature API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Literature API error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Literature API returned error: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse literature response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse literature response: {}", e))
        })
    }
}

impl LiteratureSearch for PubMedLiteratureClient {
    async fn search(&self, query: String, limit: usize) -> Result<Vec<Article>, CoreError> {
        if limit == 0 || query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let search: SearchResponse = self
            .get_json(
                "esearch.fcgi",
                &[
                    ("db", "pubmed".to_string()),
                    ("retmode", "json".to_string()),
                    ("retmax", limit.to_string()),
                    ("term", query),
                ],
            )
            .await?;

        let ids = search.esearchresult.idlist;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let summary: SummaryResponse = self
            .get_json(
                "esummary.fcgi",
                &[
                    ("db", "pubmed".to_string()),
                    ("retmode", "json".to_string()),
                    ("id", ids.join(",")),
                ],
            )
            .await?;

        Ok(articles_from_summary(&ids, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_articles_follow_search_order() {
        let summary: SummaryResponse = serde_json::from_str(
            r#"{
                "result": {
                    "uids": ["222", "111"],
                    "111": { "title": "Parabens in cosmetics.", "source": "Toxicol Rep", "pubdate": "2020 Jan" },
                    "222": { "title": "Endocrine activity of parabens", "fulljournalname": "Environmental Health", "pubdate": "2019" }
                }
            }"#,
        )
        .unwrap();

        let ids = vec!["222".to_string(), "111".to_string(), "333".to_string()];
        let articles = articles_from_summary(&ids, summary);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "222");
        assert_eq!(articles[0].journal.as_deref(), Some("Environmental Health"));
        assert_eq!(articles[1].title, "Parabens in cosmetics");
        assert_eq!(articles[1].url, "https://pubmed.ncbi.nlm.nih.gov/111/");
    }

    #[tokio::test]
    async fn test_zero_limit_skips_network() {
        let client = PubMedLiteratureClient::new(
            &LiteratureConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                limit: 0,
            },
            Duration::from_secs(1),
        )
        .unwrap();

        assert!(client.search("parabens".to_string(), 0).await.unwrap().is_empty());
    }
}
