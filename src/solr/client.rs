use super::types::{ErrorEnvelope, QueryResponse, SuggestResponse};
use crate::error::{Error, Result};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct SolrClient {
    http_client: reqwest::Client,
    base_url: String,
    collection: String,
    timeout: Duration,
}

impl SolrClient {
    pub fn new(base_url: &str, collection: &str, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            timeout,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn endpoint(&self, handler: &str) -> String {
        format!("{}/solr/{}/{}", self.base_url, self.collection, handler)
    }

    /// Posts a JSON Request API body to the collection's `/query` handler.
    pub async fn query<T: Serialize>(&self, payload: &T) -> Result<QueryResponse> {
        let url = self.endpoint("query");
        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await?;

        read_json(response).await
    }

    /// Looks up completions for `q` in the given suggester dictionary.
    pub async fn suggest(&self, q: &str, dictionary: &str) -> Result<SuggestResponse> {
        let url = self.endpoint("suggest");
        tracing::debug!("GET {} (q={}, dictionary={})", url, q, dictionary);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("suggest", "true"),
                ("suggest.build", "true"),
                ("suggest.dictionary", dictionary),
                ("suggest.q", q),
                ("wt", "json"),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        read_json(response).await
    }
}

/// Decodes a Solr response body, surfacing engine-reported errors first.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if let Ok(ErrorEnvelope { error: Some(error) }) = serde_json::from_str::<ErrorEnvelope>(&body) {
        let msg = error.msg.unwrap_or_else(|| {
            format!("code {}", error.code.unwrap_or(status.as_u16()))
        });
        return Err(Error::Engine(msg));
    }

    if !status.is_success() {
        return Err(Error::Engine(format!("unexpected status {}", status)));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("Failed to decode engine response: {}", e);
        Error::malformed("response body", "a Solr JSON response")
    })
}
