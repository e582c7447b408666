//! Forwarding Monitor CLI
//!
//! Watches one Sysdig events-forwarding integration and posts new errors to a
//! Slack-compatible webhook.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forwarding_monitor::config::DEFAULT_CONFIG_PATH;
use forwarding_monitor::{EndpointClient, Poller, Settings};
use notify::WebhookChannel;

/// Alert a chat webhook about recent events-forwarding errors
#[derive(Parser)]
#[command(name = "forwarding-monitor")]
#[command(about = "Alert a chat webhook about recent events-forwarding errors")]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "FORWARDING_MONITOR_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log output format
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

fn init_tracing(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.verbose);

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    let urls = settings.region_urls();

    info!(
        integration_id = settings.integration_id,
        tenant_id = settings.tenant_id,
        region = settings.region().code(),
        poll_interval_secs = settings.poll_interval_secs,
        "Configuration loaded"
    );

    let http = reqwest::Client::builder()
        .timeout(settings.request_timeout())
        .build()
        .context("Failed to create HTTP client")?;

    let source = EndpointClient::new(
        http.clone(),
        &urls.api_base_url,
        settings.integration_id,
        settings.tenant_id,
        settings.bearer_token.clone(),
    );
    let channel = WebhookChannel::new(http, settings.slack_webhook_url.clone());

    let poller = Poller::new(
        Arc::new(source),
        Arc::new(channel),
        urls.console_base_url,
        settings.poll_interval(),
    );

    if cli.once {
        info!("Running single poll cycle...");
        let outcome = poller.run_cycle().await;
        info!(?outcome, "Cycle finished");
        return Ok(());
    }

    info!("Starting continuous monitoring loop (Ctrl+C to stop)");
    tokio::select! {
        () = poller.run() => {}
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for shutdown signal")?;
            info!("Shutdown signal received, stopping");
        }
    }

    Ok(())
}
