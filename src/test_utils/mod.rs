use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::cloudwatch::{QueryError, StatisticsQuery, StatisticsSource};
use crate::datamodel::Datapoint;

/// Canned response for one metric name.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Datapoints(Vec<Datapoint>),
    Failure(String),
}

/// In-memory [`StatisticsSource`] answering from a fixed script.
///
/// Metrics without a script entry get an empty datapoint list. Every query
/// received is recorded in arrival order.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: HashMap<String, ScriptedResponse>,
    queries: Mutex<Vec<StatisticsQuery>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_datapoints(mut self, metric: &str, datapoints: Vec<Datapoint>) -> Self {
        self.responses
            .insert(metric.to_string(), ScriptedResponse::Datapoints(datapoints));
        self
    }

    pub fn with_failure(mut self, metric: &str, message: &str) -> Self {
        self.responses.insert(
            metric.to_string(),
            ScriptedResponse::Failure(message.to_string()),
        );
        self
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<StatisticsQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    pub fn queried_metrics(&self) -> Vec<String> {
        self.queries()
            .into_iter()
            .map(|query| query.metric_name)
            .collect()
    }
}

#[async_trait]
impl StatisticsSource for ScriptedSource {
    async fn get_metric_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Vec<Datapoint>, QueryError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        match self.responses.get(&query.metric_name) {
            Some(ScriptedResponse::Datapoints(datapoints)) => Ok(datapoints.clone()),
            Some(ScriptedResponse::Failure(message)) => Err(QueryError::Backend(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
