use aws_es_metrics::datamodel::metric_spec::CATALOG;
use aws_es_metrics::test_utils::ScriptedSource;

use super::{at, datapoint};

/// A source answering every tracked metric with one datapoint of value 1.
pub fn healthy_cluster() -> ScriptedSource {
    CATALOG.iter().fold(ScriptedSource::new(), |source, spec| {
        source.with_datapoints(
            spec.name,
            vec![datapoint(at(10, 2, 0), spec.statistic, 1.0)],
        )
    })
}
