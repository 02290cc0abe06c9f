use anyhow::Context;
use clap::Parser;
use yt_smoke::utils::error::SmokeError;
use yt_smoke::utils::{logger, validation::Validate};
use yt_smoke::{write_report, CliConfig, ProbeClient, StdoutConsole, Suite, SuiteFile, SuiteSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let probe = ProbeClient::new(&settings.base_url).context("failed to build HTTP client")?;
    let suite = Suite::from_settings(&settings);

    tracing::info!("Running profile '{}' against {}", suite.profile(), probe.base_url());
    let report = suite.execute(&probe, &StdoutConsole).await;

    if let Some(path) = &cli.report {
        write_report(&report, path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    if cli.strict && !report.succeeded() {
        std::process::exit(2);
    }

    Ok(())
}

fn load_settings(cli: &CliConfig) -> Result<SuiteSettings, SmokeError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading suite file from: {}", path.display());
            Some(SuiteFile::from_file(path)?)
        }
        None => None,
    };

    let settings = SuiteSettings::resolve(file.as_ref(), &cli.overrides());
    settings.validate()?;

    if let Some(path) = &cli.report {
        yt_smoke::utils::validation::validate_file_extension(
            "report",
            path,
            &yt_smoke::adapters::report::REPORT_FORMATS,
        )?;
    }

    Ok(settings)
}
