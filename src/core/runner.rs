use crate::domain::model::{CaseResult, RunReport};
use crate::domain::ports::{Console, Probe, SmokeCase};
use std::time::{Duration, Instant};

const CASE_RULE_WIDTH: usize = 30;

/// 依序執行 smoke test 案例，一次只有一個請求在進行
pub struct SmokeRunner {
    title: String,
    rule_width: usize,
    startup_delay: Duration,
    cases: Vec<Box<dyn SmokeCase>>,
}

impl SmokeRunner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            rule_width: 50,
            startup_delay: Duration::ZERO,
            cases: Vec::new(),
        }
    }

    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// 第一個請求前先等待，讓遠端部署完成
    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    pub fn add_case(&mut self, case: Box<dyn SmokeCase>) {
        self.cases.push(case);
    }

    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name()).collect()
    }

    pub fn rule_width(&self) -> usize {
        self.rule_width
    }

    pub fn startup_delay(&self) -> Duration {
        self.startup_delay
    }

    pub async fn run(&self, suite: &str, probe: &dyn Probe, console: &dyn Console) -> RunReport {
        let mut report = RunReport::new(suite, probe.url(""));

        console.line(&self.title);
        console.line(&"=".repeat(self.rule_width));

        if !self.startup_delay.is_zero() {
            console.blank();
            console.line(&format!(
                "⏳ Waiting for deployment ({} seconds)...",
                self.startup_delay.as_secs()
            ));
            tracing::info!("Sleeping {:?} before the first request", self.startup_delay);
            tokio::time::sleep(self.startup_delay).await;
        }

        tracing::info!(
            "Running {} cases against {}",
            self.cases.len(),
            report.base_url
        );

        for case in &self.cases {
            console.blank();
            console.line(&format!("🧪 Running: {}", case.name()));
            console.line(&"-".repeat(CASE_RULE_WIDTH));

            let start_time = Instant::now();
            let outcome = case.check(probe, console).await;
            let passed = outcome.passed;
            let duration = start_time.elapsed();

            if passed {
                console.line(&format!(
                    "✅ {} passed ({:.2}s)",
                    case.name(),
                    duration.as_secs_f64()
                ));
            } else {
                console.line(&format!(
                    "❌ {} failed ({:.2}s)",
                    case.name(),
                    duration.as_secs_f64()
                ));
            }
            tracing::debug!("Case {} finished: passed={}, {:?}", case.name(), passed, duration);

            report.results.push(CaseResult {
                name: case.name().to_string(),
                passed,
                duration,
            });

            if outcome.halt {
                tracing::warn!("Required case '{}' failed, stopping run", case.name());
                console.line(&format!(
                    "⛔ {} is required; skipping remaining tests",
                    case.name()
                ));
                report.aborted = true;
                break;
            }
        }

        self.print_summary(&report, console);
        report
    }

    fn print_summary(&self, report: &RunReport, console: &dyn Console) {
        console.blank();
        console.line(&"=".repeat(self.rule_width));
        console.line("📊 Test Summary:");

        for result in &report.results {
            let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
            console.line(&format!(
                "   {} {} ({:.2}s)",
                status,
                result.name,
                result.duration.as_secs_f64()
            ));
        }

        let skipped = self.cases.len() - report.results.len();
        if skipped > 0 {
            console.line(&format!("   ⏭️  {} tests skipped", skipped));
        }

        console.blank();
        console.line(&format!(
            "🎯 Results: {}/{} tests passed",
            report.passed(),
            report.total()
        ));
    }
}
