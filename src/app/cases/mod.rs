//! 內建的 smoke test 案例。每個案例自行處理錯誤並輸出診斷訊息，
//! 回傳通過與否，必要時要求中止後續案例。

pub mod cache_stats;
pub mod details;
pub mod endpoints;
pub mod health;
pub mod search;
pub mod trending;

pub use cache_stats::CacheStatsCase;
pub use details::YoutubeDetails;
pub use endpoints::EndpointListing;
pub use health::HealthCheck;
pub use search::{SearchRequest, YoutubeSearch};
pub use trending::YoutubeTrending;

use crate::domain::model::{ProbeResponse, VideoSummary};
use crate::domain::ports::Console;
use serde_json::Value;

/// 錯誤回應內容最多顯示的字元數
pub const BODY_SNIPPET_CHARS: usize = 200;

/// 影片清單的呈現方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStyle {
    /// 編號清單，含頻道、長度與觀看數
    Listing,
    /// 編號清單，只有長度與觀看數
    Compact,
    /// 只顯示第一部影片的完整欄位
    Sample,
    /// 只顯示第一部影片的標題前 50 字
    Headline,
}

pub(crate) fn print_status(console: &dyn Console, response: &ProbeResponse) {
    console.line(&format!("📡 Response status: {}", response.status));
}

pub(crate) fn print_body(console: &dyn Console, response: &ProbeResponse) {
    if !response.body.is_empty() {
        console.line(&format!("Response: {}", response.snippet(BODY_SNIPPET_CHARS)));
    }
}

pub(crate) fn print_hints(console: &dyn Console, hints: &[&str]) {
    console.line("💡 Possible causes:");
    for (i, hint) in hints.iter().enumerate() {
        console.line(&format!("   {}. {}", i + 1, hint));
    }
}

pub(crate) fn render_videos(console: &dyn Console, videos: &[Value], style: VideoStyle, limit: usize) {
    match style {
        VideoStyle::Listing | VideoStyle::Compact => {
            for (i, video) in videos.iter().take(limit).enumerate() {
                let video = VideoSummary::from_value(video);
                console.line(&format!("{}. {}", i + 1, video.title_or("No title")));
                if style == VideoStyle::Listing {
                    console.line(&format!("   Channel: {}", video.channel_or("Unknown")));
                }
                console.line(&format!(
                    "   Duration: {} | Views: {}",
                    video.duration_or("N/A"),
                    video.views_or("N/A")
                ));
                if style == VideoStyle::Listing {
                    console.blank();
                }
            }
        }
        VideoStyle::Sample => {
            if let Some(video) = videos.first() {
                let video = VideoSummary::from_value(video);
                console.line("📹 Sample video:");
                console.line(&format!("   Title: {}", video.title_or("N/A")));
                console.line(&format!("   Channel: {}", video.channel_or("N/A")));
                console.line(&format!("   Duration: {}", video.duration_or("N/A")));
                console.line(&format!("   Views: {}", video.views_or("N/A")));
            }
        }
        VideoStyle::Headline => {
            if let Some(video) = videos.first() {
                let video = VideoSummary::from_value(video);
                let headline: String = video.title_or("N/A").chars().take(50).collect();
                console.line(&format!("📹 Sample: {}...", headline));
            }
        }
    }
}
