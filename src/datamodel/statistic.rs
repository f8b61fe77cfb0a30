use std::fmt;

use super::Datapoint;

/// Aggregation requested from the backend for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Average,
    Sum,
    Maximum,
    Minimum,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Average => "Average",
            Statistic::Sum => "Sum",
            Statistic::Maximum => "Maximum",
            Statistic::Minimum => "Minimum",
        }
    }

    /// Reads the field of `datapoint` that carries this statistic.
    pub fn extract(&self, datapoint: &Datapoint) -> Option<f64> {
        match self {
            Statistic::Average => datapoint.average,
            Statistic::Sum => datapoint.sum,
            Statistic::Maximum => datapoint.maximum,
            Statistic::Minimum => datapoint.minimum,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
