use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
pub const RENDER_BASE_URL: &str = "https://openfood-backend.onrender.com";

/// 內建的測試組合
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// 本機後端的完整測試：健康檢查、搜尋、熱門影片、快取統計
    #[default]
    Local,
    /// 只測試搜尋
    Simple,
    /// 診斷已部署的後端，列出端點並解釋失敗原因
    RenderDirect,
    /// 部署完成後的驗證，先等待部署生效
    RenderDeploy,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Local => "local",
            Profile::Simple => "simple",
            Profile::RenderDirect => "render-direct",
            Profile::RenderDeploy => "render-deploy",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Profile::Local | Profile::Simple => LOCAL_BASE_URL,
            Profile::RenderDirect | Profile::RenderDeploy => RENDER_BASE_URL,
        }
    }

    pub fn default_query(&self) -> &'static str {
        match self {
            Profile::Local => "Cá hồi nướng với khoai lang và rau củ",
            _ => "Phở Bò",
        }
    }

    pub fn default_max_results(&self) -> u32 {
        match self {
            Profile::RenderDeploy => 2,
            _ => 3,
        }
    }

    pub fn default_trending_max_results(&self) -> u32 {
        match self {
            Profile::RenderDeploy => 2,
            _ => 5,
        }
    }

    pub fn default_startup_delay(&self) -> Duration {
        match self {
            Profile::RenderDeploy => Duration::from_secs(30),
            _ => Duration::ZERO,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
