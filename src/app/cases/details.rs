use super::{print_body, print_status};
use crate::domain::model::{flag, StatusClass};
use crate::domain::ports::{CaseOutcome, Console, Probe, SmokeCase};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

pub const DETAILS_PATH: &str = "/youtube/details";

/// `POST /youtube/details`，依影片 ID 取得詳細資料
#[derive(Debug, Clone)]
pub struct YoutubeDetails {
    name: String,
    video_ids: Vec<String>,
    timeout: Duration,
    stop_on_missing: bool,
}

impl YoutubeDetails {
    pub fn new(video_ids: Vec<String>) -> Self {
        Self {
            name: "YouTube Details".to_string(),
            video_ids,
            timeout: Duration::from_secs(30),
            stop_on_missing: false,
        }
    }

    /// 端點不存在 (404) 時中止後續案例；其他失敗照常繼續
    pub fn stop_on_missing(mut self) -> Self {
        self.stop_on_missing = true;
        self
    }

    async fn evaluate(&self, probe: &dyn Probe, console: &dyn Console) -> CaseOutcome {
        console.line(&format!("📡 POST {}", probe.url(DETAILS_PATH)));

        let body = json!({ "video_ids": self.video_ids });
        let response = match probe.post_json(DETAILS_PATH, &body, self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                console.line(&format!("❌ Error testing details: {}", e));
                return CaseOutcome::new(false);
            }
        };

        print_status(console, &response);

        match response.class() {
            StatusClass::Ok => match response.envelope() {
                Ok(envelope) => {
                    console.line(&format!(
                        "✅ Got details for {} videos",
                        envelope.videos().len()
                    ));
                    console.line(&format!("📦 Cached: {}", flag(envelope.cached())));
                    CaseOutcome::new(true)
                }
                Err(e) => {
                    console.line(&format!("❌ Error: {}", e));
                    CaseOutcome::new(false)
                }
            },
            StatusClass::NotFound => {
                console.line("❌ 404 - YouTube details endpoint not found");
                console.line("💡 This was the missing endpoint causing Flutter 404!");
                CaseOutcome::new(false).halting(self.stop_on_missing)
            }
            _ => {
                console.line(&format!("❌ Status: {}", response.status));
                print_body(console, &response);
                CaseOutcome::new(false)
            }
        }
    }
}

#[async_trait]
impl SmokeCase for YoutubeDetails {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool {
        self.evaluate(probe, console).await.passed
    }

    async fn check(&self, probe: &dyn Probe, console: &dyn Console) -> CaseOutcome {
        self.evaluate(probe, console).await
    }
}
