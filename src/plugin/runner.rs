use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    EsPlugin, Plugin,
    output::{self, META_ENV},
    state::{Snapshot, StateFile},
};
use crate::cloudwatch::{StatisticsSource, prepare};
use crate::collector::MetricCollector;
use crate::config::PluginConfig;
use crate::datamodel::{EsDateTime, es_datetime::EsDateTimeExt, graph::graph_definitions};

/// What a single invocation prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Values,
    Meta,
}

impl Mode {
    /// The agent asks for graph definitions by setting [`META_ENV`].
    pub fn from_env() -> Self {
        match std::env::var(META_ENV) {
            Ok(value) if !value.is_empty() => Mode::Meta,
            _ => Mode::Values,
        }
    }
}

/// Runs one invocation described by `config` against stdout.
pub async fn run(config: &PluginConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_configured(config, Mode::from_env(), &mut out).await?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Meta mode prints graph definitions without building the CloudWatch client,
/// so it works on hosts where no region resolves.
pub async fn run_configured<W: Write>(
    config: &PluginConfig,
    mode: Mode,
    out: &mut W,
) -> Result<()> {
    if mode == Mode::Meta {
        let graphs = graph_definitions(config.label_prefix());
        return output::write_meta(out, config.key_prefix(), &graphs);
    }

    if config.domain.is_empty() {
        warn!("No domain configured, queries will return no datapoints");
    }
    if config.client_id.is_empty() {
        warn!("No client id configured, queries will return no datapoints");
    }

    let source: Arc<dyn StatisticsSource> = Arc::new(
        prepare(&config.connection_settings())
            .await
            .context("Failed to set up the CloudWatch client")?,
    );
    let collector = MetricCollector::new(source, &config.domain, &config.client_id)
        .with_concurrency(config.query_concurrency);
    let es = EsPlugin::new(collector, config.key_prefix(), config.label_prefix());
    let state = StateFile::new(config.tempfile_path());

    run_with(&es, &state, Mode::Values, out).await
}

pub async fn run_with<P: Plugin, W: Write>(
    plugin: &P,
    state: &StateFile,
    mode: Mode,
    out: &mut W,
) -> Result<()> {
    let key_prefix = plugin.metric_key_prefix();
    let graphs = plugin.graph_definition();

    if mode == Mode::Meta {
        return output::write_meta(out, &key_prefix, &graphs);
    }

    let stats = plugin
        .fetch_metrics()
        .await
        .context("Failed to fetch metrics")?;
    let now = EsDateTime::now()
        .context("Failed to read the system clock")?
        .to_unix_seconds_i64();

    let written = output::write_values(out, &key_prefix, &graphs, &stats, now)
        .context("Failed to write metric values")?;
    debug!("Wrote {} of {} fetched metrics", written, stats.len());

    if let Some(previous) = state.load() {
        for name in previous.missing_from(&stats) {
            info!(
                "{} reported at {} but missing this cycle",
                name, previous.last_time
            );
        }
    }
    if let Err(e) = state.save(&Snapshot::new(&stats, now)) {
        warn!("{:#}", e);
    }

    Ok(())
}
