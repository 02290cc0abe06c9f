use crate::domain::model::StatusClass;
use crate::domain::ports::{Console, Probe, SmokeCase};
use async_trait::async_trait;
use std::time::Duration;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

/// 從 `/docs` 與 `/openapi.json` 列出後端公開的端點。
///
/// 只提供資訊，不影響結果：即使兩個請求都失敗也視為通過。
#[derive(Debug, Clone)]
pub struct EndpointListing {
    name: String,
    timeout: Duration,
}

impl EndpointListing {
    pub fn new() -> Self {
        Self {
            name: "Available Endpoints".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    async fn check_docs(&self, probe: &dyn Probe, console: &dyn Console) {
        match probe.get(DOCS_PATH, &[], self.timeout).await {
            Ok(response) => {
                console.line(&format!("Docs status: {}", response.status));
                if response.class() == StatusClass::Ok {
                    console.line("✅ API docs available at /docs");
                }
            }
            Err(e) => console.line(&format!("❌ Error checking docs: {}", e)),
        }
    }

    async fn list_paths(&self, probe: &dyn Probe, console: &dyn Console) {
        let response = match probe.get(OPENAPI_PATH, &[], self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                console.line(&format!("❌ Error checking endpoints: {}", e));
                return;
            }
        };

        if response.class() != StatusClass::Ok {
            console.line(&format!("❌ OpenAPI schema unavailable: {}", response.status));
            return;
        }

        let envelope = match response.envelope() {
            Ok(envelope) => envelope,
            Err(e) => {
                console.line(&format!("❌ Error checking endpoints: {}", e));
                return;
            }
        };

        let paths = envelope.paths();
        console.line("📋 Available endpoints:");
        for (path, methods) in &paths {
            console.line(&format!("   {} [{}]", path, methods.join(", ").to_uppercase()));
        }

        let youtube: Vec<&str> = paths
            .iter()
            .map(|(path, _)| path.as_str())
            .filter(|path| path.contains("youtube"))
            .collect();
        if youtube.is_empty() {
            console.line("❌ No YouTube endpoints found");
        } else {
            console.line(&format!("✅ Found YouTube endpoints: {}", youtube.join(", ")));
        }
    }
}

impl Default for EndpointListing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmokeCase for EndpointListing {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool {
        self.check_docs(probe, console).await;
        self.list_paths(probe, console).await;
        true
    }
}
