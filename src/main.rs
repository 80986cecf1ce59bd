// src/main.rs
use std::time::Duration;

use clap::Parser;

use ecf_ratings::cli::{Args, is_config_operation};
use ecf_ratings::config::Config;
use ecf_ratings::constants::DEFAULT_API_DOMAIN;
use ecf_ratings::error::AppError;
use ecf_ratings::input::gather_names;
use ecf_ratings::logging::setup_logging;
use ecf_ratings::output::{render_json, render_text};
use ecf_ratings::resolver::http_client::create_http_client_with_timeout;
use ecf_ratings::resolver::{batch_date, parse_batch_date, resolve_all};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging to file (and stdout in debug mode).
    // The guard must be kept alive for the duration of the program.
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if is_config_operation(&args) {
        return handle_config_operation(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let names = gather_names(&args.names, args.input.as_deref()).await?;

    // Determine the batch date once; every rating lookup uses it
    let date = match &args.date {
        Some(date) => parse_batch_date(date)?,
        None => batch_date(),
    };

    let delay_ms = args.delay_ms.unwrap_or(config.request_delay_ms);
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let rows = resolve_all(
        &client,
        &config,
        &names,
        &date,
        Duration::from_millis(delay_ms),
    )
    .await?;

    if args.json {
        println!("{}", render_json(&rows)?);
    } else {
        print!("{}", render_text(&rows));
    }

    Ok(())
}

/// Handles `--config`, `--set-log-file`, `--clear-log-file` and `--list-config`.
async fn handle_config_operation(args: Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = args.new_api_domain {
        // `--config` without a value resets to the default ECF endpoint
        config.api_domain = if new_domain.is_empty() {
            DEFAULT_API_DOMAIN.to_string()
        } else {
            new_domain
        };
    }

    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
