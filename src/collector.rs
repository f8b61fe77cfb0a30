use futures::{StreamExt, stream};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::cloudwatch::{QueryError, QueryWindow, StatisticsQuery, StatisticsSource};
use crate::datamodel::{EsDateTime, MetricSpec, datapoint::latest_datapoint, metric_spec::CATALOG};

/// Queries every tracked metric and keeps the newest value of each.
#[derive(Debug, Clone)]
pub struct MetricCollector {
    source: Arc<dyn StatisticsSource>,
    domain: String,
    client_id: String,
    catalog: Vec<MetricSpec>,
    concurrency: usize,
}

impl MetricCollector {
    pub fn new(source: Arc<dyn StatisticsSource>, domain: &str, client_id: &str) -> Self {
        Self {
            source,
            domain: domain.to_string(),
            client_id: client_id.to_string(),
            catalog: CATALOG.to_vec(),
            concurrency: 1,
        }
    }

    /// Replaces the tracked metrics.
    pub fn with_catalog(mut self, catalog: Vec<MetricSpec>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Maximum number of queries in flight. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn catalog(&self) -> &[MetricSpec] {
        &self.catalog
    }

    /// Collects one value per metric over the window ending now.
    ///
    /// Metrics whose query fails or returns no datapoint are left out.
    pub async fn fetch_metrics(&self) -> HashMap<String, f64> {
        match EsDateTime::now() {
            Ok(now) => self.fetch_metrics_at(now).await,
            Err(e) => {
                error!("Unable to read the system clock: {}", e);
                HashMap::new()
            }
        }
    }

    pub async fn fetch_metrics_at(&self, now: EsDateTime) -> HashMap<String, f64> {
        let window = QueryWindow::trailing(now);

        // `buffered` yields in catalog order whatever the completion order.
        let results: Vec<(&MetricSpec, Result<Option<f64>, QueryError>)> = stream::iter(
            self.catalog
                .iter()
                .map(|spec| async move { (spec, self.fetch_one(spec, window).await) })
                .collect::<Vec<_>>(),
        )
        .buffered(self.concurrency)
        .collect()
        .await;

        let mut stats = HashMap::with_capacity(results.len());
        for (spec, result) in results {
            match result {
                Ok(Some(value)) => {
                    stats.insert(spec.name.to_string(), value);
                }
                Ok(None) => debug!("No datapoint for {} in the last window", spec.name),
                Err(e) => {
                    warn!("{} ({}): {}", spec.name, spec.statistic, e);
                }
            }
        }
        stats
    }

    /// Queries one metric and returns its converted newest value, if any.
    ///
    /// # Panics
    ///
    /// The backend answers with the statistic it was asked for. A newest
    /// datapoint without that field breaks this contract and panics.
    pub async fn fetch_one(
        &self,
        spec: &MetricSpec,
        window: QueryWindow,
    ) -> Result<Option<f64>, QueryError> {
        let query = StatisticsQuery::new(
            spec.name,
            spec.statistic,
            &self.domain,
            &self.client_id,
            window,
        );
        let datapoints = self.source.get_metric_statistics(&query).await?;

        let Some(latest) = latest_datapoint(&datapoints) else {
            return Ok(None);
        };
        let Some(value) = spec.statistic.extract(latest) else {
            panic!(
                "Datapoint for {} carries no {} value",
                spec.name, spec.statistic
            );
        };
        debug!(
            "{}: {} over {} samples",
            spec.name,
            value,
            latest.sample_count.unwrap_or_default()
        );

        Ok(Some(spec.convert(value)))
    }
}
