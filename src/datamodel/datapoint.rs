use super::EsDateTime;

/// One timestamped sample returned by the backend for a metric query.
///
/// Only the field of the requested statistic is expected to be populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Datapoint {
    pub timestamp: EsDateTime,
    pub average: Option<f64>,
    pub sum: Option<f64>,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
    pub sample_count: Option<f64>,
}

impl Datapoint {
    /// A datapoint with no statistic fields set.
    pub fn at(timestamp: EsDateTime) -> Self {
        Self {
            timestamp,
            average: None,
            sum: None,
            maximum: None,
            minimum: None,
            sample_count: None,
        }
    }
}

/// Returns the newest datapoint.
///
/// Equal timestamps resolve to the one seen last.
pub fn latest_datapoint(datapoints: &[Datapoint]) -> Option<&Datapoint> {
    let mut latest: Option<&Datapoint> = None;
    for datapoint in datapoints {
        match latest {
            Some(best) if datapoint.timestamp < best.timestamp => continue,
            _ => latest = Some(datapoint),
        }
    }
    latest
}
