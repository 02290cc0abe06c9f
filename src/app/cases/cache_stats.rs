use super::print_status;
use crate::domain::model::{CacheStats, StatusClass};
use crate::domain::ports::{Console, Probe, SmokeCase};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

pub const CACHE_STATS_PATH: &str = "/youtube/cache/stats";

/// 快取統計的輸出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatsLayout {
    Full,
    Compact,
    Dump,
}

#[derive(Debug, Clone)]
pub struct CacheStatsCase {
    name: String,
    timeout: Duration,
    layout: StatsLayout,
}

impl CacheStatsCase {
    pub fn new() -> Self {
        Self {
            name: "Cache Stats".to_string(),
            timeout: Duration::from_secs(10),
            layout: StatsLayout::Full,
        }
    }

    /// 列出回應中的所有欄位，而不只是已知的統計值
    pub fn dump_all(mut self) -> Self {
        self.layout = StatsLayout::Dump;
        self
    }

    /// 只列出總數、有效數與快取時數
    pub fn compact(mut self) -> Self {
        self.layout = StatsLayout::Compact;
        self
    }
}

impl Default for CacheStatsCase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmokeCase for CacheStatsCase {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool {
        console.line(&format!("📡 GET {}", probe.url(CACHE_STATS_PATH)));

        let response = match probe.get(CACHE_STATS_PATH, &[], self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                console.line(&format!("❌ Error getting cache stats: {}", e));
                return false;
            }
        };

        print_status(console, &response);

        match response.class() {
            StatusClass::Ok => {}
            StatusClass::NotFound => {
                console.line("❌ Cache stats endpoint not found");
                return false;
            }
            _ => {
                console.line(&format!("❌ Cache stats failed: {}", response.status));
                return false;
            }
        }

        let envelope = match response.envelope() {
            Ok(envelope) => envelope,
            Err(e) => {
                console.line(&format!("❌ Error: {}", e));
                return false;
            }
        };

        match self.layout {
            StatsLayout::Dump => {
                console.line("✅ Cache Statistics:");
                for (key, value) in envelope.entries() {
                    let text = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    console.line(&format!("   {}: {}", key, text));
                }
            }
            StatsLayout::Full => {
                let stats = CacheStats::from_envelope(&envelope);
                console.line("✅ Cache Statistics:");
                console.line(&format!("   Total entries: {}", stats.total_entries));
                console.line(&format!("   Valid entries: {}", stats.valid_entries));
                console.line(&format!("   Expired entries: {}", stats.expired_entries));
                console.line(&format!("   Cache duration: {} hours", stats.cache_duration_hours));
                console.line(&format!("   Max cache size: {}", stats.max_cache_size));
            }
            StatsLayout::Compact => {
                let stats = CacheStats::from_envelope(&envelope);
                console.line("✅ Cache stats:");
                console.line(&format!("   Total entries: {}", stats.total_entries));
                console.line(&format!("   Valid entries: {}", stats.valid_entries));
                console.line(&format!("   Cache duration: {}h", stats.cache_duration_hours));
            }
        }
        true
    }
}
