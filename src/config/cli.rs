use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use super::{DEFAULT_CONFIG_FILE, PluginConfig};

/// Collects Amazon Elasticsearch Service metrics from CloudWatch.
#[derive(Debug, Parser)]
#[command(name = "aws-es-metrics", version)]
pub struct Cli {
    /// AWS Region
    #[arg(long)]
    pub region: Option<String>,

    /// AWS Access Key ID
    #[arg(long)]
    pub access_key_id: Option<String>,

    /// AWS Secret Access Key
    #[arg(long)]
    pub secret_access_key: Option<String>,

    /// AWS Client ID (account id of the domain owner)
    #[arg(long)]
    pub client_id: Option<String>,

    /// ES domain name
    #[arg(long)]
    pub domain: Option<String>,

    /// Temp file name
    #[arg(long)]
    pub tempfile: Option<PathBuf>,

    /// Metric key prefix
    #[arg(long)]
    pub metric_key_prefix: Option<String>,

    /// Metric label prefix
    #[arg(long)]
    pub metric_label_prefix: Option<String>,

    /// Number of CloudWatch queries in flight
    #[arg(long)]
    pub query_concurrency: Option<usize>,

    /// Configuration file, ignored when missing
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl Cli {
    /// Parses `args` like [`Parser::parse_from`], also accepting long flags
    /// written with a single dash (`-domain=search-prod`, `-region eu-west-1`).
    pub fn parse_compat<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Overrides `config` with every flag given on the command line.
    pub fn apply(self, config: &mut PluginConfig) {
        if let Some(region) = self.region {
            config.region = Some(region);
        }
        if let Some(access_key_id) = self.access_key_id {
            config.access_key_id = Some(access_key_id);
        }
        if let Some(secret_access_key) = self.secret_access_key {
            config.secret_access_key = Some(secret_access_key);
        }
        if let Some(client_id) = self.client_id {
            config.client_id = client_id;
        }
        if let Some(domain) = self.domain {
            config.domain = domain;
        }
        if let Some(tempfile) = self.tempfile {
            config.tempfile = Some(tempfile);
        }
        if let Some(prefix) = self.metric_key_prefix {
            config.metric_key_prefix = prefix;
        }
        if let Some(prefix) = self.metric_label_prefix {
            config.metric_label_prefix = prefix;
        }
        if let Some(concurrency) = self.query_concurrency {
            config.query_concurrency = concurrency;
        }
    }
}

/// Rewrites `-name` and `-name=value` to `--name` when `name` is a long flag.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let command = Cli::command();
    let mut longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .collect();
    longs.extend(["help", "version"]);

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let single_dash_long = match arg.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    longs.contains(&name)
                }
                _ => false,
            };
            if single_dash_long {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
