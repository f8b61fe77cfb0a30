pub mod client;
pub mod error;

use async_trait::async_trait;
use hifitime::Unit;
use std::fmt::Debug;

use crate::datamodel::{Datapoint, EsDateTime, Statistic};
pub use client::{CloudWatchSource, ConnectionSettings, prepare};
pub use error::{QueryError, SetupError};

pub const NAMESPACE: &str = "AWS/ES";
pub const DOMAIN_DIMENSION: &str = "DomainName";
pub const CLIENT_DIMENSION: &str = "ClientId";

pub const WINDOW_SECONDS: i64 = 180;
pub const PERIOD_SECONDS: i32 = 60;

/// Trailing fixed-width time range a query covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryWindow {
    pub start: EsDateTime,
    pub end: EsDateTime,
    pub period_seconds: i32,
}

impl QueryWindow {
    pub fn trailing(now: EsDateTime) -> Self {
        Self {
            start: now - WINDOW_SECONDS * Unit::Second,
            end: now,
            period_seconds: PERIOD_SECONDS,
        }
    }
}

/// One statistics request for one metric of one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub namespace: String,
    pub metric_name: String,
    pub dimensions: Vec<(String, String)>,
    pub statistic: Statistic,
    pub window: QueryWindow,
}

impl StatisticsQuery {
    pub fn new(
        metric_name: &str,
        statistic: Statistic,
        domain: &str,
        client_id: &str,
        window: QueryWindow,
    ) -> Self {
        Self {
            namespace: NAMESPACE.to_string(),
            metric_name: metric_name.to_string(),
            dimensions: vec![
                (DOMAIN_DIMENSION.to_string(), domain.to_string()),
                (CLIENT_DIMENSION.to_string(), client_id.to_string()),
            ],
            statistic,
            window,
        }
    }
}

#[async_trait]
pub trait StatisticsSource: Send + Sync + Debug {
    async fn get_metric_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Vec<Datapoint>, QueryError>;
}
