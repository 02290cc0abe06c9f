use crate::domain::model::ProbeResponse;
use crate::domain::ports::Probe;
use crate::utils::error::{Result, SmokeError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// 以 reqwest 實作的 Probe，整次執行共用同一個 Client
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: Client,
    base_url: String,
}

impl ProbeClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("yt-smoke/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: RequestBuilder, url: &str, timeout: Duration) -> Result<ProbeResponse> {
        let response = request
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, url, timeout))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(e, url, timeout))?;

        tracing::debug!("{} -> {} ({} bytes)", url, status, body.len());
        Ok(ProbeResponse { status, body })
    }
}

#[async_trait]
impl Probe for ProbeClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str, query: &[(&str, String)], timeout: Duration) -> Result<ProbeResponse> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?} (timeout {:?})", url, query, timeout);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request, &url, timeout).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value, timeout: Duration) -> Result<ProbeResponse> {
        let url = self.url(path);
        tracing::debug!("POST {} {} (timeout {:?})", url, body, timeout);

        let request = self.client.post(&url).json(body);
        self.send(request, &url, timeout).await
    }
}

fn classify(error: reqwest::Error, url: &str, timeout: Duration) -> SmokeError {
    if error.is_timeout() {
        SmokeError::TimeoutError {
            url: url.to_string(),
            timeout,
        }
    } else if error.is_connect() {
        SmokeError::ConnectError {
            url: url.to_string(),
            source: error,
        }
    } else {
        SmokeError::ApiError(error)
    }
}
