use super::Statistic;

/// A tracked backend metric and the statistic requested for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricSpec {
    pub name: &'static str,
    pub statistic: Statistic,
}

impl MetricSpec {
    pub const fn new(name: &'static str, statistic: Statistic) -> Self {
        Self { name, statistic }
    }

    /// Storage metrics are reported in megabytes and published in bytes.
    pub fn is_megabytes(&self) -> bool {
        MEGABYTE_METRICS.contains(&self.name)
    }

    /// Applies the unit conversion for this metric to a raw backend value.
    pub fn convert(&self, value: f64) -> f64 {
        if self.is_megabytes() {
            value * BYTES_PER_MEGABYTE
        } else {
            value
        }
    }
}

pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

pub const MEGABYTE_METRICS: [&str; 3] = [
    "ClusterUsedSpace",
    "MasterFreeStorageSpace",
    "FreeStorageSpace",
];

use Statistic::{Average, Maximum, Minimum, Sum};

pub const CATALOG: [MetricSpec; 24] = [
    MetricSpec::new("ClusterStatus.green", Minimum),
    MetricSpec::new("ClusterStatus.yellow", Maximum),
    MetricSpec::new("ClusterStatus.red", Maximum),
    MetricSpec::new("Nodes", Average),
    MetricSpec::new("SearchableDocuments", Average),
    MetricSpec::new("DeletedDocuments", Average),
    MetricSpec::new("CPUUtilization", Maximum),
    MetricSpec::new("FreeStorageSpace", Minimum),
    MetricSpec::new("ClusterUsedSpace", Minimum),
    MetricSpec::new("ClusterIndexWritesBlocked", Maximum),
    MetricSpec::new("JVMMemoryPressure", Maximum),
    MetricSpec::new("AutomatedSnapshotFailure", Maximum),
    MetricSpec::new("KibanaHealthyNodes", Minimum),
    MetricSpec::new("MasterCPUUtilization", Maximum),
    MetricSpec::new("MasterFreeStorageSpace", Sum),
    MetricSpec::new("MasterJVMMemoryPressure", Maximum),
    MetricSpec::new("MasterReachableFromNode", Minimum),
    MetricSpec::new("ReadLatency", Average),
    MetricSpec::new("WriteLatency", Average),
    MetricSpec::new("ReadThroughput", Average),
    MetricSpec::new("WriteThroughput", Average),
    MetricSpec::new("DiskQueueDepth", Average),
    MetricSpec::new("ReadIOPS", Average),
    MetricSpec::new("WriteIOPS", Average),
];

#[cfg(test)]
pub fn find(name: &str) -> Option<&'static MetricSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}
