pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{console::StdoutConsole, http::ProbeClient, report::write_report};
pub use crate::config::{Profile, SettingsOverrides, SuiteFile, SuiteSettings};
pub use crate::core::{runner::SmokeRunner, suite::{SuccessRule, Suite}};
pub use crate::utils::error::{Result, SmokeError};
