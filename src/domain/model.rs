use crate::utils::error::{Result, SmokeError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::time::Duration;

/// HTTP 回應的分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Ok,
    NotFound,
    ServerError,
    Unexpected(u16),
}

impl From<u16> for StatusClass {
    fn from(code: u16) -> Self {
        match code {
            200 => StatusClass::Ok,
            404 => StatusClass::NotFound,
            500 => StatusClass::ServerError,
            other => StatusClass::Unexpected(other),
        }
    }
}

/// 一次請求的原始結果
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn class(&self) -> StatusClass {
        StatusClass::from(self.status)
    }

    pub fn envelope(&self) -> Result<Envelope> {
        Envelope::parse(&self.body)
    }

    /// 截斷回應內容，用於錯誤訊息
    pub fn snippet(&self, max_chars: usize) -> String {
        self.body.chars().take(max_chars).collect()
    }
}

/// 後端回傳的 JSON 物件。欄位缺漏或型別不符時一律回傳預設值。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(SmokeError::DecodeError)?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SmokeError::DecodeError(<serde_json::Error as serde::de::Error>::custom(
                format!("expected a JSON object, found {}", json_kind(&other)),
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn videos(&self) -> &[Value] {
        self.0
            .get("videos")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn cached(&self) -> bool {
        self.0.get("cached").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        value_text(self.0.get(key)).unwrap_or_else(|| default.to_string())
    }

    pub fn features(&self) -> Vec<String> {
        self.0
            .get("features")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// OpenAPI 文件中的路徑與其 HTTP 方法，依路徑排序
    pub fn paths(&self) -> Vec<(String, Vec<String>)> {
        let Some(paths) = self.0.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut listing: Vec<(String, Vec<String>)> = paths
            .iter()
            .map(|(path, item)| {
                let methods = item
                    .as_object()
                    .map(|ops| ops.keys().cloned().collect())
                    .unwrap_or_default();
                (path.clone(), methods)
            })
            .collect();
        listing.sort_by(|a, b| a.0.cmp(&b.0));
        listing
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Envelope {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// `videos` 陣列中的單一影片
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSummary {
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<String>,
    pub views: Option<String>,
}

impl VideoSummary {
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: value_text(value.get("title")),
            channel: value_text(value.get("channel")),
            duration: value_text(value.get("duration")),
            views: value_text(value.get("views")),
        }
    }

    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(default)
    }

    pub fn channel_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.channel.as_deref().unwrap_or(default)
    }

    pub fn duration_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.duration.as_deref().unwrap_or(default)
    }

    pub fn views_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.views.as_deref().unwrap_or(default)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub total_entries: u64,
    pub valid_entries: u64,
    pub expired_entries: u64,
    pub cache_duration_hours: f64,
    pub max_cache_size: u64,
}

impl CacheStats {
    pub fn from_envelope(envelope: &Envelope) -> Self {
        let count = |key: &str| envelope.get(key).and_then(Value::as_u64).unwrap_or(0);
        Self {
            total_entries: count("total_entries"),
            valid_entries: count("valid_entries"),
            expired_entries: count("expired_entries"),
            cache_duration_hours: envelope
                .get("cache_duration_hours")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            max_cache_size: count("max_cache_size"),
        }
    }
}

/// 單一測試案例的結果
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub duration: Duration,
}

/// 整次執行的結果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub suite: String,
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub results: Vec<CaseResult>,
    /// 閘門案例失敗後中止
    pub aborted: bool,
}

impl RunReport {
    pub fn new(suite: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            base_url: base_url.into(),
            started_at: Utc::now(),
            results: Vec::new(),
            aborted: false,
        }
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn succeeded(&self) -> bool {
        !self.aborted && !self.results.is_empty() && self.all_passed()
    }

    pub fn case_passed(&self, name: &str) -> bool {
        self.results.iter().any(|r| r.name == name && r.passed)
    }

    pub fn total_duration(&self) -> Duration {
        self.results.iter().map(|r| r.duration).sum()
    }
}

/// 以 True/False 顯示布林值，與後端文件的寫法一致
pub fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_class() {
        assert_eq!(StatusClass::from(200), StatusClass::Ok);
        assert_eq!(StatusClass::from(404), StatusClass::NotFound);
        assert_eq!(StatusClass::from(500), StatusClass::ServerError);
        assert_eq!(StatusClass::from(201), StatusClass::Unexpected(201));
        assert_eq!(StatusClass::from(503), StatusClass::Unexpected(503));
    }

    #[test]
    fn test_envelope_defaults_when_fields_missing() {
        let envelope = Envelope::parse(r#"{"message": "hi"}"#).unwrap();
        assert!(envelope.videos().is_empty());
        assert!(!envelope.cached());
        assert_eq!(envelope.text_or("version", "unknown"), "unknown");
        assert_eq!(envelope.text_or("message", "OK"), "hi");
    }

    #[test]
    fn test_envelope_defaults_when_fields_mistyped() {
        let envelope = Envelope::parse(r#"{"videos": "none", "cached": "yes"}"#).unwrap();
        assert!(envelope.videos().is_empty());
        assert!(!envelope.cached());
    }

    #[test]
    fn test_envelope_rejects_non_object() {
        let err = Envelope::parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SmokeError::DecodeError(_)));
        assert!(err.to_string().contains("an array"));

        assert!(Envelope::parse("<html>").is_err());
    }

    #[test]
    fn test_envelope_paths_sorted() {
        let envelope = Envelope::from(
            json!({
                "paths": {
                    "/youtube/search": {"post": {}},
                    "/": {"get": {}},
                    "/youtube/trending": {"get": {}}
                }
            })
            .as_object()
            .unwrap()
            .clone(),
        );

        let paths = envelope.paths();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].0, "/");
        assert_eq!(paths[1], ("/youtube/search".to_string(), vec!["post".to_string()]));
    }

    #[test]
    fn test_video_summary_reads_numbers_as_text() {
        let video = VideoSummary::from_value(&json!({"title": "X", "views": 1200}));
        assert_eq!(video.title_or("No title"), "X");
        assert_eq!(video.views_or("N/A"), "1200");
        assert_eq!(video.channel_or("Unknown"), "Unknown");
        assert_eq!(video.duration_or("N/A"), "N/A");
    }

    #[test]
    fn test_cache_stats_defaults() {
        let envelope = Envelope::parse(r#"{"total_entries": 4, "cache_duration_hours": 24}"#).unwrap();
        let stats = CacheStats::from_envelope(&envelope);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.valid_entries, 0);
        assert_eq!(stats.cache_duration_hours.to_string(), "24");
    }

    #[test]
    fn test_run_report_counts() {
        let mut report = RunReport::new("local", "http://localhost:8000");
        assert!(!report.succeeded());

        report.results.push(CaseResult {
            name: "Backend Health".to_string(),
            passed: true,
            duration: Duration::from_millis(100),
        });
        report.results.push(CaseResult {
            name: "Cache Stats".to_string(),
            passed: false,
            duration: Duration::from_millis(50),
        });

        assert_eq!(report.passed(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.all_passed());
        assert_eq!(report.total_duration(), Duration::from_millis(150));
        assert!(report.case_passed("Backend Health"));
        assert!(!report.case_passed("Cache Stats"));
        assert!(!report.case_passed("YouTube Search"));
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let response = ProbeResponse::new(500, "Phở Bò error details");
        assert_eq!(response.snippet(6), "Phở Bò");
    }
}
