use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::debug;

const LAST_TIME_KEY: &str = "_lastTime";

/// Values of one collection cycle, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "_lastTime")]
    pub last_time: i64,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl Snapshot {
    pub fn new(stats: &HashMap<String, f64>, unix_seconds: i64) -> Self {
        Self {
            last_time: unix_seconds,
            values: stats
                .iter()
                .filter(|(name, _)| name.as_str() != LAST_TIME_KEY)
                .map(|(name, value)| (name.clone(), *value))
                .collect(),
        }
    }

    /// Names present in `self` but absent from `current`.
    pub fn missing_from<'a>(&'a self, current: &HashMap<String, f64>) -> Vec<&'a str> {
        self.values
            .keys()
            .filter(|name| !current.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// JSON file holding the previous cycle's values.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the previous snapshot. A missing or unreadable file yields `None`.
    pub fn load(&self) -> Option<Snapshot> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No previous state at {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_slice(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                debug!("Ignoring corrupt state at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let content = serde_json::to_vec(snapshot).context("Failed to serialize state")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state to {}", self.path.display()))?;
        Ok(())
    }
}
