use super::{print_body, print_status, render_videos, VideoStyle};
use crate::domain::model::{flag, StatusClass};
use crate::domain::ports::{Console, Probe, SmokeCase};
use async_trait::async_trait;
use std::time::Duration;

pub const TRENDING_PATH: &str = "/youtube/trending";

#[derive(Debug, Clone)]
pub struct YoutubeTrending {
    name: String,
    max_results: u32,
    timeout: Duration,
    sample_limit: usize,
    show_cached: bool,
}

impl YoutubeTrending {
    pub fn new(max_results: u32) -> Self {
        Self {
            name: "YouTube Trending".to_string(),
            max_results,
            timeout: Duration::from_secs(30),
            sample_limit: 0,
            show_cached: false,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 印出快取旗標與前幾部影片
    pub fn with_samples(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self.show_cached = true;
        self
    }
}

#[async_trait]
impl SmokeCase for YoutubeTrending {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool {
        let query = [("max_results", self.max_results.to_string())];
        console.line(&format!(
            "📡 GET {}?max_results={}",
            probe.url(TRENDING_PATH),
            self.max_results
        ));

        let response = match probe.get(TRENDING_PATH, &query, self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                console.line(&format!("❌ Error getting trending: {}", e));
                return false;
            }
        };

        print_status(console, &response);

        if response.class() != StatusClass::Ok {
            console.line(&format!("❌ Trending failed: {}", response.status));
            print_body(console, &response);
            return false;
        }

        match response.envelope() {
            Ok(envelope) => {
                let videos = envelope.videos();
                console.line(&format!("✅ Found {} trending videos", videos.len()));
                if self.show_cached {
                    console.line(&format!("📦 Cached: {}", flag(envelope.cached())));
                    render_videos(console, videos, VideoStyle::Compact, self.sample_limit);
                }
                true
            }
            Err(e) => {
                console.line(&format!("❌ Error: {}", e));
                false
            }
        }
    }
}
