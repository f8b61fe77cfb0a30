use anyhow::Error;
use confique::Config;
use std::path::{Path, PathBuf};

use crate::cloudwatch::ConnectionSettings;
use crate::datamodel::graph::label_prefix_or_default;

pub mod cli;

pub const DEFAULT_CONFIG_FILE: &str = "aws-es-metrics.toml";
pub const DEFAULT_KEY_PREFIX: &str = "es";
pub const DEFAULT_TEMPFILE_NAME: &str = "mackerel-plugin-aws-es";

#[derive(Debug, Config)]
pub struct PluginConfig {
    #[config(env = "AWS_ES_REGION")]
    pub region: Option<String>,

    #[config(env = "AWS_ES_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,
    #[config(env = "AWS_ES_SECRET_ACCESS_KEY")]
    pub secret_access_key: Option<String>,

    #[config(env = "AWS_ES_CLIENT_ID", default = "")]
    pub client_id: String,
    #[config(env = "AWS_ES_DOMAIN", default = "")]
    pub domain: String,

    #[config(env = "AWS_ES_TEMPFILE")]
    pub tempfile: Option<PathBuf>,

    #[config(env = "AWS_ES_METRIC_KEY_PREFIX", default = "es")]
    pub metric_key_prefix: String,
    #[config(env = "AWS_ES_METRIC_LABEL_PREFIX", default = "AWS ES")]
    pub metric_label_prefix: String,

    #[config(env = "AWS_ES_QUERY_CONCURRENCY", default = 1)]
    pub query_concurrency: usize,
}

impl PluginConfig {
    /// Loads from the environment, then from `file` when it exists.
    pub fn load(file: &Path) -> Result<PluginConfig, Error> {
        let c = PluginConfig::builder().env().file(file).load()?;

        Ok(c)
    }

    pub fn key_prefix(&self) -> &str {
        if self.metric_key_prefix.is_empty() {
            DEFAULT_KEY_PREFIX
        } else {
            &self.metric_key_prefix
        }
    }

    pub fn label_prefix(&self) -> &str {
        label_prefix_or_default(&self.metric_label_prefix)
    }

    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            region: self.region.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
        }
    }

    pub fn tempfile_path(&self) -> PathBuf {
        match &self.tempfile {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => std::env::temp_dir().join(DEFAULT_TEMPFILE_NAME),
        }
    }
}
