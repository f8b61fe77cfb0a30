mod common;

use aws_es_metrics::cloudwatch::{StatisticsSource, WINDOW_SECONDS};
use aws_es_metrics::collector::MetricCollector;
use aws_es_metrics::datamodel::{
    MetricSpec, Statistic, es_datetime::EsDateTimeExt, metric_spec::CATALOG,
};
use aws_es_metrics::test_utils::ScriptedSource;
use common::fixtures::healthy_cluster;
use common::{at, datapoint, test_now};
use std::collections::HashSet;
use std::sync::Arc;

fn collector(source: &Arc<ScriptedSource>) -> MetricCollector {
    let source: Arc<dyn StatisticsSource> = source.clone();
    MetricCollector::new(source, "search-prod", "123456789012")
}

mod selection_tests {
    use super::*;

    #[tokio::test]
    async fn test_latest_datapoint_wins() {
        let source = Arc::new(ScriptedSource::new().with_datapoints(
            "CPUUtilization",
            vec![
                datapoint(at(10, 0, 0), Statistic::Maximum, 5.0),
                datapoint(at(10, 1, 0), Statistic::Maximum, 7.0),
            ],
        ));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert_eq!(stats.get("CPUUtilization"), Some(&7.0));
    }

    #[tokio::test]
    async fn test_latest_datapoint_wins_out_of_order() {
        let source = Arc::new(ScriptedSource::new().with_datapoints(
            "JVMMemoryPressure",
            vec![
                datapoint(at(10, 2, 0), Statistic::Maximum, 61.0),
                datapoint(at(10, 0, 0), Statistic::Maximum, 80.0),
                datapoint(at(10, 1, 0), Statistic::Maximum, 70.0),
            ],
        ));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert_eq!(stats.get("JVMMemoryPressure"), Some(&61.0));
    }

    #[tokio::test]
    async fn test_equal_timestamps_last_seen_wins() {
        let source = Arc::new(ScriptedSource::new().with_datapoints(
            "Nodes",
            vec![
                datapoint(at(10, 1, 0), Statistic::Average, 3.0),
                datapoint(at(10, 1, 0), Statistic::Average, 4.0),
            ],
        ));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert_eq!(stats.get("Nodes"), Some(&4.0));
    }

    #[tokio::test]
    async fn test_single_datapoint_is_always_selected() {
        let source = Arc::new(ScriptedSource::new().with_datapoints(
            "KibanaHealthyNodes",
            vec![datapoint(at(0, 0, 0), Statistic::Minimum, 0.0)],
        ));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert_eq!(stats.get("KibanaHealthyNodes"), Some(&0.0));
    }

    #[tokio::test]
    async fn test_empty_result_is_absent() {
        let source = Arc::new(ScriptedSource::new().with_datapoints("Nodes", vec![]));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert!(!stats.contains_key("Nodes"));
        assert!(stats.is_empty());
    }
}

mod conversion_tests {
    use super::*;

    #[tokio::test]
    async fn test_free_storage_space_in_bytes() {
        let source = Arc::new(ScriptedSource::new().with_datapoints(
            "FreeStorageSpace",
            vec![datapoint(at(10, 0, 0), Statistic::Minimum, 200.0)],
        ));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert_eq!(stats.get("FreeStorageSpace"), Some(&209_715_200.0));
    }

    #[tokio::test]
    async fn test_only_storage_metrics_are_scaled() {
        let source = Arc::new(healthy_cluster());

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert_eq!(stats.len(), CATALOG.len());
        for spec in CATALOG.iter() {
            let expected = match spec.name {
                "ClusterUsedSpace" | "MasterFreeStorageSpace" | "FreeStorageSpace" => {
                    1024.0 * 1024.0
                }
                _ => 1.0,
            };
            assert_eq!(stats[spec.name], expected, "{}", spec.name);
        }
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_query_does_not_block_others() {
        let source = Arc::new(healthy_cluster().with_failure("JVMMemoryPressure", "throttled"));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert!(!stats.contains_key("JVMMemoryPressure"));
        assert_eq!(stats.len(), CATALOG.len() - 1);

        let queried = source.queried_metrics();
        assert_eq!(queried.len(), CATALOG.len());
        assert!(queried.iter().any(|name| name == "JVMMemoryPressure"));
    }

    #[tokio::test]
    async fn test_every_query_failing_gives_empty_mapping() {
        let source = Arc::new(CATALOG.iter().fold(ScriptedSource::new(), |s, spec| {
            s.with_failure(spec.name, "down")
        }));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        assert!(stats.is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_gives_empty_mapping() {
        let source = Arc::new(healthy_cluster());

        let stats = collector(&source)
            .with_catalog(Vec::new())
            .fetch_metrics_at(test_now())
            .await;
        assert!(stats.is_empty());
        assert!(source.queries().is_empty());
    }
}

mod query_tests {
    use super::*;

    #[tokio::test]
    async fn test_queries_follow_catalog_order() {
        let source = Arc::new(ScriptedSource::new());

        collector(&source).fetch_metrics_at(test_now()).await;
        let expected: Vec<String> = CATALOG.iter().map(|s| s.name.to_string()).collect();
        assert_eq!(source.queried_metrics(), expected);
    }

    #[tokio::test]
    async fn test_query_shape() {
        let source = Arc::new(ScriptedSource::new());

        collector(&source)
            .with_catalog(vec![MetricSpec::new(
                "MasterFreeStorageSpace",
                Statistic::Sum,
            )])
            .fetch_metrics_at(test_now())
            .await;

        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        let query = &queries[0];
        assert_eq!(query.namespace, "AWS/ES");
        assert_eq!(query.metric_name, "MasterFreeStorageSpace");
        assert_eq!(query.statistic, Statistic::Sum);
        assert_eq!(
            query.dimensions,
            vec![
                ("DomainName".to_string(), "search-prod".to_string()),
                ("ClientId".to_string(), "123456789012".to_string()),
            ]
        );
        assert_eq!(query.window.end, test_now());
        assert_eq!(
            query.window.end.to_unix_seconds_i64() - query.window.start.to_unix_seconds_i64(),
            WINDOW_SECONDS
        );
        assert_eq!(query.window.period_seconds, 60);
    }

    #[tokio::test]
    async fn test_result_keys_come_from_catalog() {
        let source = Arc::new(healthy_cluster().with_datapoints(
            "IndexingRate",
            vec![datapoint(at(10, 0, 0), Statistic::Average, 9.0)],
        ));

        let stats = collector(&source).fetch_metrics_at(test_now()).await;
        let names: HashSet<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert!(stats.keys().all(|key| names.contains(key.as_str())));
        assert!(!stats.contains_key("IndexingRate"));
    }

    #[tokio::test]
    async fn test_concurrency_does_not_change_results() {
        let source = Arc::new(
            healthy_cluster()
                .with_failure("Nodes", "boom")
                .with_datapoints("ReadIOPS", vec![]),
        );

        let sequential = collector(&source).fetch_metrics_at(test_now()).await;
        let concurrent = collector(&source)
            .with_concurrency(8)
            .fetch_metrics_at(test_now())
            .await;
        assert_eq!(sequential, concurrent);
        assert_eq!(sequential.len(), CATALOG.len() - 2);
    }
}
