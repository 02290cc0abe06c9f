use crate::domain::model::ProbeResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 對後端發出 HTTP 請求
#[async_trait]
pub trait Probe: Send + Sync {
    /// 組出完整的請求 URL，用於顯示
    fn url(&self, path: &str) -> String;

    async fn get(&self, path: &str, query: &[(&str, String)], timeout: Duration) -> Result<ProbeResponse>;

    async fn post_json(&self, path: &str, body: &serde_json::Value, timeout: Duration) -> Result<ProbeResponse>;
}

/// 人類可讀的診斷輸出
pub trait Console: Send + Sync {
    fn line(&self, text: &str);

    fn blank(&self) {
        self.line("");
    }
}

/// 單一案例的結果，`halt` 為真時不再執行後續案例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseOutcome {
    pub passed: bool,
    pub halt: bool,
}

impl CaseOutcome {
    pub fn new(passed: bool) -> Self {
        Self {
            passed,
            halt: false,
        }
    }

    pub fn halting(mut self, halt: bool) -> Self {
        self.halt = halt;
        self
    }
}

/// 單一 smoke test 案例
#[async_trait]
pub trait SmokeCase: Send + Sync {
    fn name(&self) -> &str;

    /// 閘門案例失敗時，不再執行後續案例
    fn is_gate(&self) -> bool {
        false
    }

    /// 執行檢查並回傳是否通過。錯誤在案例內部處理並輸出，不會往外傳遞。
    async fn run(&self, probe: &dyn Probe, console: &dyn Console) -> bool;

    /// 執行並決定是否中止整次執行。預設只有閘門案例失敗時中止。
    async fn check(&self, probe: &dyn Probe, console: &dyn Console) -> CaseOutcome {
        let passed = self.run(probe, console).await;
        CaseOutcome::new(passed).halting(!passed && self.is_gate())
    }
}
