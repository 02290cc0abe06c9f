use super::{print_body, print_status};
use crate::domain::model::StatusClass;
use crate::domain::ports::{Console, Probe, SmokeCase};
use async_trait::async_trait;
use std::time::Duration;

pub const YOUTUBE_PROXY_FEATURE: &str = "YouTube Proxy";

/// `GET /` 健康檢查
#[derive(Debug, Clone)]
pub struct HealthCheck {
    name: String,
    timeout: Duration,
    gate: bool,
    detailed: bool,
}

impl HealthCheck {
    pub fn new() -> Self {
        Self {
            name: "Backend Health".to_string(),
            timeout: Duration::from_secs(10),
            gate: false,
            detailed: false,
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

    /// 失敗時停止後續案例
    pub fn as_gate(mut self) -> Self {
        self.gate = true;
        self
    }

    /// 顯示版本與功能清單；非 JSON 的 200 回應也視為通過
    pub fn detailed(mut self) -> Self {
        self.detailed = true;
        self
    }
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmokeCase for HealthCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_gate(&self) -> bool {
        self.gate
    }

    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool {
        console.line(&format!("📡 GET {}", probe.url("/")));

        let response = match probe.get("/", &[], self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                console.line(&format!("❌ Backend not reachable: {}", e));
                return false;
            }
        };

        print_status(console, &response);

        if response.class() != StatusClass::Ok {
            console.line(&format!("❌ Backend health check failed: {}", response.status));
            print_body(console, &response);
            return false;
        }

        match response.envelope() {
            Ok(envelope) => {
                console.line(&format!(
                    "✅ Backend is healthy: {}",
                    envelope.text_or("message", "OK")
                ));

                if self.detailed {
                    console.line(&format!("Version: {}", envelope.text_or("version", "unknown")));
                    if envelope.features().iter().any(|f| f == YOUTUBE_PROXY_FEATURE) {
                        console.line("✅ YouTube Proxy feature available");
                    } else {
                        console.line("❌ YouTube Proxy feature not listed");
                    }
                }
                true
            }
            Err(_) if self.detailed => {
                console.line("✅ Backend online (non-JSON response)");
                true
            }
            Err(e) => {
                console.line(&format!("❌ Error: {}", e));
                false
            }
        }
    }
}
