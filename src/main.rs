#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use aws_es_metrics::config::{PluginConfig, cli::Cli};
use aws_es_metrics::plugin;

fn main() -> Result<()> {
    // stdout carries the agent protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse_compat(std::env::args());
    let mut config = PluginConfig::load(&cli.config).context("Failed to load configuration")?;
    cli.apply(&mut config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(plugin::run(&config))
}
