use crate::app::cases::{
    CacheStatsCase, EndpointListing, HealthCheck, VideoStyle, YoutubeDetails, YoutubeSearch,
    YoutubeTrending,
};
use crate::app::cases::search::SEARCH_CASE_NAME;
use crate::config::{Profile, SuiteSettings};
use crate::core::runner::SmokeRunner;
use crate::domain::model::RunReport;
use crate::domain::ports::{Console, Probe};
use std::time::Duration;

/// 決定結語要顯示成功或失敗
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuccessRule {
    /// 每個案例都通過
    #[default]
    AllPassed,
    /// 沒有案例中止執行；其餘失敗只會列在摘要中
    Completed,
    /// 指定的案例通過即可
    CasePassed(&'static str),
}

impl SuccessRule {
    pub fn accepts(&self, report: &RunReport) -> bool {
        match self {
            SuccessRule::AllPassed => report.succeeded(),
            SuccessRule::Completed => !report.aborted && !report.results.is_empty(),
            SuccessRule::CasePassed(name) => report.case_passed(name),
        }
    }
}

/// 執行結束後印出的結語
#[derive(Debug, Clone, Default)]
pub struct Outro {
    pub rule: SuccessRule,
    pub success: &'static [&'static str],
    pub failure: &'static [&'static str],
    pub hints_title: &'static str,
    pub hints: &'static [&'static str],
    /// 只有在全部失敗時才顯示提示
    pub hints_only_when_none_passed: bool,
    pub closing: &'static [&'static str],
}

impl Outro {
    pub fn print(&self, report: &RunReport, console: &dyn Console) {
        let succeeded = self.rule.accepts(report);
        let lines = if succeeded {
            self.success
        } else {
            self.failure
        };
        for line in lines {
            console.line(line);
        }

        let show_hints = !succeeded
            && !self.hints.is_empty()
            && (!self.hints_only_when_none_passed || report.passed() == 0);
        if show_hints {
            console.blank();
            console.line(self.hints_title);
            for (i, hint) in self.hints.iter().enumerate() {
                console.line(&format!("   {}. {}", i + 1, hint));
            }
        }

        if !self.closing.is_empty() {
            console.blank();
            for line in self.closing {
                console.line(line);
            }
        }
    }
}

/// 一個 profile 對應的完整測試組合
pub struct Suite {
    profile: Profile,
    runner: SmokeRunner,
    outro: Outro,
}

impl Suite {
    pub fn new(profile: Profile, runner: SmokeRunner, outro: Outro) -> Self {
        Self {
            profile,
            runner,
            outro,
        }
    }

    pub fn from_settings(settings: &SuiteSettings) -> Self {
        let (runner, outro) = match settings.profile {
            Profile::Local => local_suite(settings),
            Profile::Simple => simple_suite(settings),
            Profile::RenderDirect => render_direct_suite(settings),
            Profile::RenderDeploy => render_deploy_suite(settings),
        };
        Self::new(
            settings.profile,
            runner.with_startup_delay(settings.startup_delay),
            outro,
        )
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn runner(&self) -> &SmokeRunner {
        &self.runner
    }

    pub async fn execute(&self, probe: &dyn Probe, console: &dyn Console) -> RunReport {
        let report = self.runner.run(self.profile.as_str(), probe, console).await;
        self.outro.print(&report, console);
        report
    }
}

fn local_suite(settings: &SuiteSettings) -> (SmokeRunner, Outro) {
    let mut runner = SmokeRunner::new("🧪 YouTube Backend Service Tests");
    runner.add_case(Box::new(HealthCheck::new()));
    runner.add_case(Box::new(
        YoutubeSearch::new(settings.search.clone())
            .echo_payload()
            .with_style(VideoStyle::Listing, 3)
            .with_connect_hint("Start backend with: python main.py"),
    ));
    runner.add_case(Box::new(
        YoutubeTrending::new(settings.trending_max_results).with_samples(3),
    ));
    runner.add_case(Box::new(CacheStatsCase::new()));

    let outro = Outro {
        rule: SuccessRule::AllPassed,
        success: &["🎉 All tests passed! YouTube backend is working correctly."],
        failure: &["⚠️  Some tests failed. Check backend configuration."],
        hints_title: "💡 Troubleshooting:",
        hints: &[
            "Make sure backend is running: python main.py",
            "Check if port 8000 is available",
            "Verify YouTube API key is configured",
        ],
        hints_only_when_none_passed: true,
        closing: &[],
    };
    (runner, outro)
}

fn simple_suite(settings: &SuiteSettings) -> (SmokeRunner, Outro) {
    let mut runner = SmokeRunner::new("🔍 YouTube Search Check");
    runner.add_case(Box::new(
        YoutubeSearch::new(settings.search.clone()).with_style(VideoStyle::Compact, 2),
    ));

    let outro = Outro {
        success: &["🎉 YouTube search is working."],
        failure: &["❌ YouTube search failed."],
        ..Outro::default()
    };
    (runner, outro)
}

fn render_direct_suite(settings: &SuiteSettings) -> (SmokeRunner, Outro) {
    let mut runner = SmokeRunner::new("🧪 Testing Render Backend Endpoints");
    runner.add_case(Box::new(HealthCheck::new().named("Health Check").as_gate()));
    runner.add_case(Box::new(EndpointListing::new()));
    runner.add_case(Box::new(
        YoutubeSearch::new(settings.search.clone())
            .echo_payload()
            .with_style(VideoStyle::Sample, 1)
            .with_diagnosis(),
    ));
    runner.add_case(Box::new(CacheStatsCase::new().dump_all()));

    let outro = Outro {
        rule: SuccessRule::CasePassed(SEARCH_CASE_NAME),
        success: &["🎉 Render backend YouTube integration working!"],
        failure: &["❌ Render backend YouTube integration needs fixing"],
        hints_title: "💡 Next steps:",
        hints: &[
            "Check Render deployment logs",
            "Verify YOUTUBE_API_KEY environment variable",
            "Ensure all dependencies are installed",
            "Check for import errors in logs",
        ],
        hints_only_when_none_passed: false,
        closing: &[],
    };
    (runner, outro)
}

fn render_deploy_suite(settings: &SuiteSettings) -> (SmokeRunner, Outro) {
    let mut runner =
        SmokeRunner::new("🧪 Testing Render YouTube Endpoints After Deploy").with_rule_width(60);
    runner.add_case(Box::new(
        HealthCheck::new()
            .with_timeout(Duration::from_secs(15))
            .detailed()
            .as_gate(),
    ));
    runner.add_case(Box::new(
        YoutubeSearch::new(settings.search.clone())
            .with_style(VideoStyle::Headline, 1)
            .as_gate(),
    ));
    runner.add_case(Box::new(
        YoutubeDetails::new(settings.video_ids.clone()).stop_on_missing(),
    ));
    runner.add_case(Box::new(CacheStatsCase::new().compact()));
    runner.add_case(Box::new(
        YoutubeTrending::new(settings.trending_max_results)
            .named("Trending Videos")
            .with_timeout(Duration::from_secs(20)),
    ));

    let outro = Outro {
        rule: SuccessRule::Completed,
        success: &[
            "🎉 SUCCESS: All YouTube endpoints working!",
            "✅ Flutter app should now work with backend",
            "✅ No more 404 errors expected",
        ],
        failure: &[
            "❌ ISSUES: Some endpoints still not working",
            "💡 May need to wait longer for Render deployment",
        ],
        closing: &[
            "📱 Next: Test Flutter app with backend",
            "🔗 Render Dashboard: https://dashboard.render.com",
        ],
        ..Outro::default()
    };
    (runner, outro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;
    use crate::domain::model::CaseResult;

    fn report_with(passed: &[bool]) -> RunReport {
        let mut report = RunReport::new("local", "http://localhost:8000");
        for (i, p) in passed.iter().enumerate() {
            report.results.push(CaseResult {
                name: format!("case {}", i),
                passed: *p,
                duration: Duration::from_millis(10),
            });
        }
        report
    }

    #[test]
    fn test_profiles_build_expected_cases() {
        let names = |profile| {
            Suite::from_settings(&SuiteSettings::for_profile(profile))
                .runner()
                .case_names()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            names(Profile::Local),
            vec!["Backend Health", "YouTube Search", "YouTube Trending", "Cache Stats"]
        );
        assert_eq!(names(Profile::Simple), vec!["YouTube Search"]);
        assert_eq!(
            names(Profile::RenderDirect),
            vec!["Health Check", "Available Endpoints", "YouTube Search", "Cache Stats"]
        );
        assert_eq!(
            names(Profile::RenderDeploy),
            vec![
                "Backend Health",
                "YouTube Search",
                "YouTube Details",
                "Cache Stats",
                "Trending Videos"
            ]
        );
    }

    #[test]
    fn test_startup_delay_comes_from_settings() {
        let mut settings = SuiteSettings::for_profile(Profile::RenderDeploy);
        assert_eq!(
            Suite::from_settings(&settings).runner().startup_delay(),
            Duration::from_secs(30)
        );

        settings.startup_delay = Duration::ZERO;
        assert!(Suite::from_settings(&settings).runner().startup_delay().is_zero());
    }

    #[test]
    fn test_local_outro_hints_only_when_nothing_passed() {
        let (_, outro) = local_suite(&SuiteSettings::for_profile(Profile::Local));

        let console = BufferConsole::new();
        outro.print(&report_with(&[true, false]), &console);
        assert!(console.contains("Some tests failed"));
        assert!(!console.contains("Troubleshooting"));

        let console = BufferConsole::new();
        outro.print(&report_with(&[false, false]), &console);
        assert!(console.contains("💡 Troubleshooting:"));
        assert!(console.contains("   1. Make sure backend is running: python main.py"));

        let console = BufferConsole::new();
        outro.print(&report_with(&[true, true]), &console);
        assert!(console.contains("🎉 All tests passed!"));
    }

    #[test]
    fn test_render_deploy_outro_succeeds_unless_aborted() {
        let (_, outro) = render_deploy_suite(&SuiteSettings::for_profile(Profile::RenderDeploy));

        // 詳細資料、快取與熱門影片的一般失敗不影響結語
        let console = BufferConsole::new();
        outro.print(&report_with(&[true, true, true, false, false]), &console);
        assert!(console.contains("🎉 SUCCESS: All YouTube endpoints working!"));
        assert!(console.contains("📱 Next: Test Flutter app with backend"));

        let mut aborted = report_with(&[true, true, false]);
        aborted.aborted = true;
        let console = BufferConsole::new();
        outro.print(&aborted, &console);
        assert!(console.contains("❌ ISSUES"));
        assert!(!console.contains("🎉 SUCCESS"));
        assert!(console.contains("🔗 Render Dashboard"));
    }

    #[test]
    fn test_render_direct_outro_follows_search_result() {
        let (_, outro) = render_direct_suite(&SuiteSettings::for_profile(Profile::RenderDirect));

        let mut report = RunReport::new("render-direct", "http://backend.test");
        for (name, passed) in [
            ("Health Check", true),
            ("Available Endpoints", true),
            (SEARCH_CASE_NAME, true),
            ("Cache Stats", false),
        ] {
            report.results.push(CaseResult {
                name: name.to_string(),
                passed,
                duration: Duration::from_millis(10),
            });
        }

        let console = BufferConsole::new();
        outro.print(&report, &console);
        assert!(console.contains("🎉 Render backend YouTube integration working!"));
        assert!(!console.contains("💡 Next steps:"));

        report.results[2].passed = false;
        report.results[3].passed = true;
        let console = BufferConsole::new();
        outro.print(&report, &console);
        assert!(console.contains("❌ Render backend YouTube integration needs fixing"));
        assert!(console.contains("💡 Next steps:"));
    }

    #[test]
    fn test_success_rules() {
        assert!(SuccessRule::AllPassed.accepts(&report_with(&[true, true])));
        assert!(!SuccessRule::AllPassed.accepts(&report_with(&[true, false])));
        assert!(SuccessRule::Completed.accepts(&report_with(&[true, false])));
        assert!(!SuccessRule::Completed.accepts(&report_with(&[])));
        assert!(SuccessRule::CasePassed("case 1").accepts(&report_with(&[false, true])));
        assert!(!SuccessRule::CasePassed("case 0").accepts(&report_with(&[false, true])));
    }
}
