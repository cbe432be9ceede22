mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m4a2mp3_core::{load_config_or_default, validate_config, Converter, FfmpegConverter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(output) => {
            println!("Conversion complete: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<PathBuf> {
    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!(?config, "Configuration loaded");

    // Fails here, before any file is touched, when ffmpeg is missing
    let converter = FfmpegConverter::new(config.converter.clone())?;
    debug!(ffmpeg = %converter.ffmpeg_path().display(), "Using ffmpeg");

    let request = cli.to_request(&config.defaults.bitrate);
    let result = converter.convert(request).await?;

    Ok(result.output_path)
}
