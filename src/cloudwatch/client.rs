use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::{
    Client,
    config::{Credentials, Region},
    error::DisplayErrorContext,
    primitives::DateTime,
    types::{Dimension, Statistic as CloudWatchStatistic},
};
use hifitime::Unit;
use tracing::{debug, info};

use super::{QueryError, SetupError, StatisticsQuery, StatisticsSource};
use crate::datamodel::{Datapoint, EsDateTime, Statistic, es_datetime::EsDateTimeExt};

/// Inputs of [`prepare`]. Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSettings {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl ConnectionSettings {
    fn pinned_region(&self) -> Option<&str> {
        self.region.as_deref().filter(|region| !region.is_empty())
    }

    fn static_credentials(&self) -> Option<Credentials> {
        match (
            self.access_key_id.as_deref(),
            self.secret_access_key.as_deref(),
        ) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => Some(
                Credentials::new(id, secret, None, None, "aws-es-metrics-static"),
            ),
            _ => None,
        }
    }
}

/// [`StatisticsSource`] backed by the CloudWatch `GetMetricStatistics` API.
#[derive(Debug, Clone)]
pub struct CloudWatchSource {
    client: Client,
}

impl CloudWatchSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Builds the CloudWatch client used for the rest of the process.
///
/// Static credentials are used only when both key fields are set, otherwise
/// the default provider chain applies (environment, profile, instance role).
/// Without a pinned region the default region chain is consulted, which
/// includes the instance metadata service.
pub async fn prepare(settings: &ConnectionSettings) -> Result<CloudWatchSource, SetupError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = settings.pinned_region() {
        loader = loader.region(Region::new(region.to_string()));
    }
    if let Some(credentials) = settings.static_credentials() {
        debug!("Using static credentials");
        loader = loader.credentials_provider(credentials);
    }

    let sdk_config = loader.load().await;
    let region = sdk_config.region().ok_or(SetupError::MissingRegion)?;
    info!("CloudWatch client ready in region {}", region);

    Ok(CloudWatchSource::new(Client::new(&sdk_config)))
}

fn to_cloudwatch_statistic(statistic: Statistic) -> CloudWatchStatistic {
    match statistic {
        Statistic::Average => CloudWatchStatistic::Average,
        Statistic::Sum => CloudWatchStatistic::Sum,
        Statistic::Maximum => CloudWatchStatistic::Maximum,
        Statistic::Minimum => CloudWatchStatistic::Minimum,
    }
}

fn to_smithy_datetime(datetime: &EsDateTime) -> DateTime {
    DateTime::from_millis(datetime.to_unix_milliseconds_i64())
}

fn from_smithy_datetime(datetime: &DateTime) -> EsDateTime {
    // Seconds and nanoseconds are added as durations; their product overflows i64
    EsDateTime::from_unix_seconds_i64(datetime.secs())
        + i64::from(datetime.subsec_nanos()) * Unit::Nanosecond
}

fn build_dimensions(query: &StatisticsQuery) -> Result<Vec<Dimension>, QueryError> {
    query
        .dimensions
        .iter()
        .map(|(name, value)| Ok(Dimension::builder().name(name).value(value).build()))
        .collect()
}

fn convert_datapoint(datapoint: aws_sdk_cloudwatch::types::Datapoint) -> Option<Datapoint> {
    let timestamp = datapoint.timestamp.as_ref().map(from_smithy_datetime)?;
    Some(Datapoint {
        timestamp,
        average: datapoint.average,
        sum: datapoint.sum,
        maximum: datapoint.maximum,
        minimum: datapoint.minimum,
        sample_count: datapoint.sample_count,
    })
}

#[async_trait]
impl StatisticsSource for CloudWatchSource {
    async fn get_metric_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Vec<Datapoint>, QueryError> {
        let dimensions = build_dimensions(query)?;

        let output = self
            .client
            .get_metric_statistics()
            .namespace(&query.namespace)
            .metric_name(&query.metric_name)
            .set_dimensions(Some(dimensions))
            .start_time(to_smithy_datetime(&query.window.start))
            .end_time(to_smithy_datetime(&query.window.end))
            .period(query.window.period_seconds)
            .statistics(to_cloudwatch_statistic(query.statistic))
            .send()
            .await
            .map_err(|e| QueryError::Backend(DisplayErrorContext(&e).to_string()))?;

        let raw = output.datapoints.unwrap_or_default();
        let total = raw.len();
        let datapoints: Vec<Datapoint> = raw.into_iter().filter_map(convert_datapoint).collect();
        if datapoints.len() != total {
            debug!(
                "Dropped {} datapoints without timestamp for {}",
                total - datapoints.len(),
                query.metric_name
            );
        }
        Ok(datapoints)
    }
}
