// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Elpriskollen.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use anyhow::{Context, Result};
use clap::Parser;
use elpris_cli::{Cli, CliConfig, ReportFormatter, ReportRequest, run_report};
use elpris_core::{PriceSource, StockholmClock};
use elpris_i18n::I18n;
use elpris_source::ElprisetClient;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("elpriskollen: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);

    let language = cli.lang.unwrap_or(config.language);
    let i18n = match I18n::new(language) {
        Ok(i18n) => i18n,
        Err(e) => {
            eprintln!("elpriskollen: {e}");
            return ExitCode::FAILURE;
        }
    };
    let formatter = ReportFormatter::new(&i18n);

    match run(&cli, &config, &formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            let reason = format!("{e:#}");
            let message = formatter.fetch_error(&reason).unwrap_or(reason);
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries only the report.
/// RUST_LOG wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("elpriskollen: failed to initialize logging: {e}");
    }
}

fn run(cli: &Cli, config: &CliConfig, formatter: &ReportFormatter<'_>) -> Result<()> {
    let client = ElprisetClient::builder()
        .base_url(config.api_base_url.as_str())
        .timeout(config.timeout())
        .build()
        .context("Failed to create price API client")?;

    info!(
        "Using {} at {} (language {})",
        client.name(),
        client.base_url(),
        formatter.language()
    );

    let request = ReportRequest {
        zone: cli.zone,
        date: cli.date,
        sorted: cli.sorted,
        charging: cli.charging,
        include_tomorrow: config.include_tomorrow,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(&request, &client, &StockholmClock, formatter, &mut out)
}
