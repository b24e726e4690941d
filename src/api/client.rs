use std::time::Duration;

use reqwest::{Client, Method, Url};

use crate::api::error::NetworkError;
use crate::api::query::FetchQuery;
use crate::config::Config;
use crate::model::Record;

/// HTTP client for the records backend.
///
/// Built once from the resolved configuration; every call performs exactly
/// one request and hands the decoded records back to the caller.
#[derive(Clone)]
pub struct FinancialClient {
    client: Client,
    base_url: String,
    endpoint: String,
    request_timeout: Duration,
}

impl FinancialClient {
    pub fn new(config: &Config) -> Result<Self, NetworkError> {
        let request_timeout = Duration::from_secs(u64::from(config.defaults.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.defaults.connect_timeout_seconds,
            )))
            .timeout(request_timeout)
            .build()
            .map_err(NetworkError::Transport)?;

        Ok(Self {
            client,
            base_url: config.backend.base_url.clone(),
            endpoint: config.backend.endpoint.clone(),
            request_timeout,
        })
    }

    /// `{base_url}/{endpoint}` plus the query pairs.
    pub fn url_for(&self, query: &FetchQuery) -> Result<Url, NetworkError> {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = self.endpoint.trim_start_matches('/');
        let raw = if endpoint.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, endpoint)
        };

        let mut url = Url::parse(&raw).map_err(|e| NetworkError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let pairs = query.pairs();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in &pairs {
                serializer.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Perform one request and decode the body as a list of records.
    pub async fn fetch(
        &self,
        method: Method,
        query: &FetchQuery,
    ) -> Result<Vec<Record>, NetworkError> {
        let url = self.url_for(query)?;
        tracing::debug!(%method, %url, "fetching records");

        let response = self
            .client
            .request(method, url.clone())
            .send()
            .await
            .map_err(|e| self.classify(&url, e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.classify(&url, e))?;

        if !status.is_success() {
            return Err(NetworkError::status(status, &body));
        }

        let records: Vec<Record> = serde_json::from_slice(&body)?;
        tracing::debug!(count = records.len(), "records decoded");
        Ok(records)
    }

    fn classify(&self, url: &Url, err: reqwest::Error) -> NetworkError {
        if err.is_timeout() {
            NetworkError::Timeout {
                duration: self.request_timeout.as_secs(),
            }
        } else if err.is_connect() {
            NetworkError::Connect {
                url: url.to_string(),
                source: err,
            }
        } else {
            NetworkError::Transport(err)
        }
    }
}
