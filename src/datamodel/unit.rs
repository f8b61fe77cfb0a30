use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit of a graph, as understood by the monitoring agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphUnit {
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "percentage")]
    Percentage,
    #[serde(rename = "bytes")]
    Bytes,
    #[serde(rename = "bytes/sec")]
    BytesPerSecond,
    #[serde(rename = "iops")]
    Iops,
}

impl fmt::Display for GraphUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GraphUnit::Integer => "integer",
            GraphUnit::Float => "float",
            GraphUnit::Percentage => "percentage",
            GraphUnit::Bytes => "bytes",
            GraphUnit::BytesPerSecond => "bytes/sec",
            GraphUnit::Iops => "iops",
        };
        write!(f, "{}", s)
    }
}
