use crate::config::profile::Profile;
use crate::config::settings::SettingsOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "yt-smoke")]
#[command(about = "Smoke tests for the OpenFood YouTube proxy backend")]
pub struct CliConfig {
    /// Built-in suite to run (default: local, or the profile named in --config)
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Backend base URL, overrides the profile's target
    #[arg(long)]
    pub base_url: Option<String>,

    /// Search query sent to /youtube/search
    #[arg(long)]
    pub query: Option<String>,

    /// Seconds to wait before the first request
    #[arg(long)]
    pub wait: Option<u64>,

    /// Optional TOML suite file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a run report (.json or .csv)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with status 2 when any test fails
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            profile: self.profile,
            base_url: self.base_url.clone(),
            query: self.query.clone(),
            wait_seconds: self.wait,
        }
    }
}
