use crate::app::cases::SearchRequest;
use crate::config::profile::Profile;
use crate::config::toml_config::SuiteFile;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, validate_url, Validate,
};
use std::time::Duration;

pub const MAX_RESULTS_LIMIT: u32 = 50;

pub const DEFAULT_VIDEO_IDS: [&str; 2] = ["dQw4w9WgXcQ", "jNQXAC9IVRw"];

/// 命令列提供的覆蓋值，優先於設定檔
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub profile: Option<Profile>,
    pub base_url: Option<String>,
    pub query: Option<String>,
    pub wait_seconds: Option<u64>,
}

/// 解析完成的執行設定
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteSettings {
    pub profile: Profile,
    pub base_url: String,
    pub startup_delay: Duration,
    pub search: SearchRequest,
    pub video_ids: Vec<String>,
    pub trending_max_results: u32,
}

impl SuiteSettings {
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            base_url: profile.default_base_url().to_string(),
            startup_delay: profile.default_startup_delay(),
            search: SearchRequest {
                query: profile.default_query().to_string(),
                max_results: profile.default_max_results(),
                duration: "medium".to_string(),
                order: "relevance".to_string(),
            },
            video_ids: DEFAULT_VIDEO_IDS.iter().map(|id| id.to_string()).collect(),
            trending_max_results: profile.default_trending_max_results(),
        }
    }

    /// 命令列 > 設定檔 > profile 預設值
    pub fn resolve(file: Option<&SuiteFile>, overrides: &SettingsOverrides) -> Self {
        let profile = overrides
            .profile
            .or_else(|| file.and_then(SuiteFile::profile))
            .unwrap_or_default();

        let mut settings = Self::for_profile(profile);
        if let Some(file) = file {
            settings.apply_file(file);
        }
        settings.apply_overrides(overrides);

        tracing::debug!("Resolved settings: {:?}", settings);
        settings
    }

    fn apply_file(&mut self, file: &SuiteFile) {
        if let Some(target) = &file.target {
            if let Some(base_url) = &target.base_url {
                self.base_url = base_url.clone();
            }
            if let Some(seconds) = target.startup_delay_seconds {
                self.startup_delay = Duration::from_secs(seconds);
            }
        }

        if let Some(search) = &file.search {
            if let Some(query) = &search.query {
                self.search.query = query.clone();
            }
            if let Some(max_results) = search.max_results {
                self.search.max_results = max_results;
            }
            if let Some(duration) = &search.duration {
                self.search.duration = duration.clone();
            }
            if let Some(order) = &search.order {
                self.search.order = order.clone();
            }
        }

        if let Some(video_ids) = file.details.as_ref().and_then(|d| d.video_ids.as_ref()) {
            self.video_ids = video_ids.clone();
        }

        if let Some(max_results) = file.trending.as_ref().and_then(|t| t.max_results) {
            self.trending_max_results = max_results;
        }
    }

    fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(query) = &overrides.query {
            self.search.query = query.clone();
        }
        if let Some(seconds) = overrides.wait_seconds {
            self.startup_delay = Duration::from_secs(seconds);
        }
    }
}

impl Validate for SuiteSettings {
    fn validate(&self) -> Result<()> {
        validate_url("target.base_url", &self.base_url)?;
        validate_non_empty_string("search.query", &self.search.query)?;
        validate_range("search.max_results", self.search.max_results, 1, MAX_RESULTS_LIMIT)?;
        validate_non_empty_string("search.duration", &self.search.duration)?;
        validate_non_empty_string("search.order", &self.search.order)?;
        validate_non_empty_list("details.video_ids", &self.video_ids)?;
        validate_range(
            "trending.max_results",
            self.trending_max_results,
            1,
            MAX_RESULTS_LIMIT,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::profile::{LOCAL_BASE_URL, RENDER_BASE_URL};

    #[test]
    fn test_defaults_match_local_profile() {
        let settings = SuiteSettings::resolve(None, &SettingsOverrides::default());

        assert_eq!(settings.profile, Profile::Local);
        assert_eq!(settings.base_url, LOCAL_BASE_URL);
        assert!(settings.startup_delay.is_zero());
        assert_eq!(settings.search.max_results, 3);
        assert_eq!(settings.trending_max_results, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_profile_and_values_apply() {
        let file = SuiteFile::from_toml_str(
            r#"
[target]
profile = "render-deploy"
startup_delay_seconds = 5

[search]
max_results = 7
"#,
        )
        .unwrap();

        let settings = SuiteSettings::resolve(Some(&file), &SettingsOverrides::default());

        assert_eq!(settings.profile, Profile::RenderDeploy);
        assert_eq!(settings.base_url, RENDER_BASE_URL);
        assert_eq!(settings.startup_delay, Duration::from_secs(5));
        assert_eq!(settings.search.max_results, 7);
        assert_eq!(settings.search.query, "Phở Bò");
    }

    #[test]
    fn test_cli_overrides_win() {
        let file = SuiteFile::from_toml_str(
            r#"
[target]
profile = "render-direct"
base_url = "https://file.example.com"

[search]
query = "from file"
"#,
        )
        .unwrap();

        let overrides = SettingsOverrides {
            profile: Some(Profile::Simple),
            base_url: Some("http://127.0.0.1:9000".to_string()),
            query: Some("Bún chả".to_string()),
            wait_seconds: Some(1),
        };

        let settings = SuiteSettings::resolve(Some(&file), &overrides);

        assert_eq!(settings.profile, Profile::Simple);
        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.search.query, "Bún chả");
        assert_eq!(settings.startup_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = SuiteSettings::for_profile(Profile::Local);
        settings.base_url = "localhost:8000".to_string();
        assert!(settings.validate().is_err());

        let mut settings = SuiteSettings::for_profile(Profile::Local);
        settings.search.max_results = 0;
        assert!(settings.validate().is_err());

        let mut settings = SuiteSettings::for_profile(Profile::Local);
        settings.search.query = "   ".to_string();
        assert!(settings.validate().is_err());

        let mut settings = SuiteSettings::for_profile(Profile::RenderDeploy);
        settings.video_ids.clear();
        assert!(settings.validate().is_err());
    }
}
