use super::{print_body, print_hints, print_status, render_videos, VideoStyle};
use crate::domain::model::{flag, StatusClass};
use crate::domain::ports::{Console, Probe, SmokeCase};
use crate::utils::error::SmokeError;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

pub const SEARCH_PATH: &str = "/youtube/search";
pub const SEARCH_CASE_NAME: &str = "YouTube Search";

const NOT_FOUND_HINTS: [&str; 3] = [
    "YouTube router not included in main.py",
    "Backend not redeployed after adding router",
    "Import error in youtube_router.py",
];

const SERVER_ERROR_HINTS: [&str; 3] = [
    "YOUTUBE_API_KEY not set in Render environment",
    "Missing dependencies (httpx, etc.)",
    "Code error in youtube_router.py",
];

/// `POST /youtube/search` 的請求內容
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub duration: String,
    pub order: String,
}

impl SearchRequest {
    pub fn to_body(&self) -> serde_json::Value {
        json!({
            "query": self.query,
            "max_results": self.max_results,
            "duration": self.duration,
            "order": self.order,
        })
    }
}

#[derive(Debug, Clone)]
pub struct YoutubeSearch {
    name: String,
    request: SearchRequest,
    timeout: Duration,
    style: VideoStyle,
    sample_limit: usize,
    echo_payload: bool,
    diagnose: bool,
    connect_hint: Option<String>,
    gate: bool,
}

impl YoutubeSearch {
    pub fn new(request: SearchRequest) -> Self {
        Self {
            name: SEARCH_CASE_NAME.to_string(),
            request,
            timeout: Duration::from_secs(30),
            style: VideoStyle::Listing,
            sample_limit: 3,
            echo_payload: false,
            diagnose: false,
            connect_hint: None,
            gate: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_style(mut self, style: VideoStyle, sample_limit: usize) -> Self {
        self.style = style;
        self.sample_limit = sample_limit;
        self
    }

    /// 送出前先印出請求內容
    pub fn echo_payload(mut self) -> Self {
        self.echo_payload = true;
        self
    }

    /// 404 / 500 時列出可能的原因
    pub fn with_diagnosis(mut self) -> Self {
        self.diagnose = true;
        self
    }

    pub fn as_gate(mut self) -> Self {
        self.gate = true;
        self
    }

    /// 無法連線時的提示，例如如何啟動本機後端
    pub fn with_connect_hint(mut self, hint: &str) -> Self {
        self.connect_hint = Some(hint.to_string());
        self
    }
}

#[async_trait]
impl SmokeCase for YoutubeSearch {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_gate(&self) -> bool {
        self.gate
    }

    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool {
        let body = self.request.to_body();

        console.line(&format!("📡 POST {}", probe.url(SEARCH_PATH)));
        if self.echo_payload {
            let pretty = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
            console.line(&format!("📦 Request data: {}", pretty));
        }

        let response = match probe.post_json(SEARCH_PATH, &body, self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                if matches!(e, SmokeError::ConnectError { .. }) {
                    if let Some(hint) = &self.connect_hint {
                        console.line("❌ Connection error: Backend may not be running");
                        console.line(&format!("💡 {}", hint));
                        return false;
                    }
                }
                console.line(&format!("❌ Error testing YouTube search: {}", e));
                return false;
            }
        };

        print_status(console, &response);

        match response.class() {
            StatusClass::Ok => match response.envelope() {
                Ok(envelope) => {
                    let videos = envelope.videos();
                    console.line(&format!("✅ Found {} videos", videos.len()));
                    console.line(&format!("📦 Cached: {}", flag(envelope.cached())));
                    render_videos(console, videos, self.style, self.sample_limit);
                    true
                }
                Err(e) => {
                    console.line(&format!("❌ Error: {}", e));
                    false
                }
            },
            StatusClass::NotFound => {
                console.line("❌ 404 Not Found - YouTube search endpoint not found");
                if self.diagnose {
                    print_hints(console, &NOT_FOUND_HINTS);
                }
                false
            }
            StatusClass::ServerError => {
                console.line("❌ 500 Internal Server Error");
                print_body(console, &response);
                if self.diagnose {
                    print_hints(console, &SERVER_ERROR_HINTS);
                }
                false
            }
            StatusClass::Unexpected(code) => {
                console.line(&format!("❌ Unexpected status: {}", code));
                print_body(console, &response);
                false
            }
        }
    }
}
