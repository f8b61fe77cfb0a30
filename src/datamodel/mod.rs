pub mod datapoint;
pub mod es_datetime;
pub mod graph;
pub mod metric_spec;
pub mod statistic;
pub mod unit;

pub use datapoint::Datapoint;
pub use es_datetime::EsDateTime;
pub use graph::{GraphMetric, GraphSpec};
pub use metric_spec::MetricSpec;
pub use statistic::Statistic;
pub use unit::GraphUnit;
