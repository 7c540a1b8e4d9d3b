//! Wallhaven Sync - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wallhaven_sync::{
    api::WallhavenApi,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_success,
        print_sync_summary, print_warning,
    },
    sync::run_sync,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Api(_)
                | Error::HttpStatus { .. }
                | Error::RetriesExhausted { .. }
                | Error::Http(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Persist { .. } => ExitCode::from(exit_codes::PERSIST_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    config.download.destination = std::path::absolute(&config.download.destination)?;
    print_config_summary(&config);

    let api = WallhavenApi::new(&config.http)?;
    let report = run_sync(&api, &config).await?;

    print_sync_summary(&report);

    // Individual download failures never change the exit status
    match report.outcome {
        Some(outcome) if !outcome.is_clean() => {
            print_warning(&format!(
                "Completed with {} failed download(s); re-run to retry them",
                outcome.failed
            ));
        }
        _ => print_success("Sync complete"),
    }

    Ok(())
}
