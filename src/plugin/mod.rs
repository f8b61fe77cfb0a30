pub mod output;
pub mod runner;
pub mod state;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

use crate::collector::MetricCollector;
use crate::config::DEFAULT_KEY_PREFIX;
use crate::datamodel::{GraphSpec, graph};

pub use runner::run;

/// Callbacks the monitoring agent helper needs from a plugin.
#[async_trait]
pub trait Plugin: Send + Sync {
    async fn fetch_metrics(&self) -> Result<HashMap<String, f64>>;
    fn graph_definition(&self) -> BTreeMap<String, GraphSpec>;
    fn metric_key_prefix(&self) -> String;
    fn metric_label_prefix(&self) -> String;
}

/// The Elasticsearch Service plugin.
#[derive(Debug, Clone)]
pub struct EsPlugin {
    collector: MetricCollector,
    key_prefix: String,
    label_prefix: String,
}

impl EsPlugin {
    pub fn new(collector: MetricCollector, key_prefix: &str, label_prefix: &str) -> Self {
        Self {
            collector,
            key_prefix: key_prefix.to_string(),
            label_prefix: label_prefix.to_string(),
        }
    }
}

#[async_trait]
impl Plugin for EsPlugin {
    async fn fetch_metrics(&self) -> Result<HashMap<String, f64>> {
        Ok(self.collector.fetch_metrics().await)
    }

    fn graph_definition(&self) -> BTreeMap<String, GraphSpec> {
        graph::graph_definitions(&self.label_prefix)
    }

    fn metric_key_prefix(&self) -> String {
        if self.key_prefix.is_empty() {
            DEFAULT_KEY_PREFIX.to_string()
        } else {
            self.key_prefix.clone()
        }
    }

    fn metric_label_prefix(&self) -> String {
        graph::label_prefix_or_default(&self.label_prefix).to_string()
    }
}
