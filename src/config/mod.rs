#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use profile::Profile;
pub use settings::{SettingsOverrides, SuiteSettings};
pub use toml_config::SuiteFile;
