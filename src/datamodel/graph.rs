use serde::Serialize;
use std::collections::BTreeMap;

use super::unit::GraphUnit;

pub const DEFAULT_LABEL_PREFIX: &str = "AWS ES";

/// A metric drawn on a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetric {
    pub name: String,
    pub label: String,
    pub stacked: bool,
}

impl GraphMetric {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            stacked: false,
        }
    }
}

/// Display metadata for one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSpec {
    pub label: String,
    pub unit: GraphUnit,
    pub metrics: Vec<GraphMetric>,
}

struct GraphLayout {
    key: &'static str,
    title: &'static str,
    unit: GraphUnit,
    members: &'static [(&'static str, &'static str)],
}

const fn layout(
    key: &'static str,
    title: &'static str,
    unit: GraphUnit,
    members: &'static [(&'static str, &'static str)],
) -> GraphLayout {
    GraphLayout {
        key,
        title,
        unit,
        members,
    }
}

const LAYOUT: &[GraphLayout] = &[
    layout(
        "ClusterStatus",
        "ClusterStatus",
        GraphUnit::Integer,
        &[
            ("ClusterStatus.green", "green"),
            ("ClusterStatus.yellow", "yellow"),
            ("ClusterStatus.red", "red"),
        ],
    ),
    layout("Nodes", "Nodes", GraphUnit::Integer, &[("Nodes", "Nodes")]),
    layout(
        "SearchableDocuments",
        "SearchableDocuments",
        GraphUnit::Integer,
        &[("SearchableDocuments", "SearchableDocuments")],
    ),
    layout(
        "DeletedDocuments",
        "DeletedDocuments",
        GraphUnit::Integer,
        &[("DeletedDocuments", "DeletedDocuments")],
    ),
    layout(
        "CPUUtilization",
        "CPU Utilization",
        GraphUnit::Percentage,
        &[("CPUUtilization", "CPUUtilization")],
    ),
    layout(
        "FreeStorageSpace",
        "Free Storage Space",
        GraphUnit::Bytes,
        &[("FreeStorageSpace", "FreeStorageSpace")],
    ),
    layout(
        "ClusterUsedSpace",
        "Cluster Used Space",
        GraphUnit::Bytes,
        &[("ClusterUsedSpace", "ClusterUsedSpace")],
    ),
    layout(
        "ClusterIndexWritesBlocked",
        "ClusterIndexWritesBlocked",
        GraphUnit::Integer,
        &[("ClusterIndexWritesBlocked", "ClusterIndexWritesBlocked")],
    ),
    layout(
        "JVMMemoryPressure",
        "JVMMemoryPressure",
        GraphUnit::Percentage,
        &[("JVMMemoryPressure", "JVMMemoryPressure")],
    ),
    layout(
        "AutomatedSnapshotFailure",
        "AutomatedSnapshotFailure",
        GraphUnit::Integer,
        &[("AutomatedSnapshotFailure", "AutomatedSnapshotFailure")],
    ),
    layout(
        "KibanaHealthyNodes",
        "KibanaHealthyNodes",
        GraphUnit::Integer,
        &[("KibanaHealthyNodes", "KibanaHealthyNodes")],
    ),
    layout(
        "MasterCPUUtilization",
        "MasterCPUUtilization",
        GraphUnit::Percentage,
        &[("MasterCPUUtilization", "MasterCPUUtilization")],
    ),
    layout(
        "MasterFreeStorageSpace",
        "MasterFreeStorageSpace",
        GraphUnit::Bytes,
        &[("MasterFreeStorageSpace", "MasterFreeStorageSpace")],
    ),
    layout(
        "MasterJVMMemoryPressure",
        "MasterJVMMemoryPressure",
        GraphUnit::Percentage,
        &[("MasterJVMMemoryPressure", "MasterJVMMemoryPressure")],
    ),
    layout(
        "MasterReachableFromNode",
        "MasterReachableFromNode",
        GraphUnit::Percentage,
        &[("MasterReachableFromNode", "MasterReachableFromNode")],
    ),
    layout(
        "Latency",
        "Latency",
        GraphUnit::Float,
        &[
            ("ReadLatency", "ReadLatency"),
            ("WriteLatency", "WriteLatency"),
        ],
    ),
    layout(
        "Throughput",
        "Throughput",
        GraphUnit::BytesPerSecond,
        &[
            ("ReadThroughput", "ReadThroughput"),
            ("WriteThroughput", "WriteThroughput"),
        ],
    ),
    layout(
        "DiskQueueDepth",
        "DiskQueueDepth",
        GraphUnit::Integer,
        &[("DiskQueueDepth", "DiskQueueDepth")],
    ),
    layout(
        "IOPS",
        "IOPS",
        GraphUnit::Iops,
        &[("ReadIOPS", "ReadIOPS"), ("WriteIOPS", "WriteIOPS")],
    ),
];

/// Falls back to [`DEFAULT_LABEL_PREFIX`] when `configured` is empty.
pub fn label_prefix_or_default(configured: &str) -> &str {
    if configured.is_empty() {
        DEFAULT_LABEL_PREFIX
    } else {
        configured
    }
}

/// Builds the graph definitions, keyed by graph name.
///
/// Every graph label is `"{label_prefix} {title}"`; an empty prefix falls back
/// to [`DEFAULT_LABEL_PREFIX`].
pub fn graph_definitions(label_prefix: &str) -> BTreeMap<String, GraphSpec> {
    let label_prefix = label_prefix_or_default(label_prefix);
    LAYOUT
        .iter()
        .map(|layout| {
            let spec = GraphSpec {
                label: format!("{} {}", label_prefix, layout.title),
                unit: layout.unit,
                metrics: layout
                    .members
                    .iter()
                    .map(|(name, label)| GraphMetric::new(name, label))
                    .collect(),
            };
            (layout.key.to_string(), spec)
        })
        .collect()
}
