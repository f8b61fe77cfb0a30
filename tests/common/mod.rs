use aws_es_metrics::datamodel::{Datapoint, EsDateTime, Statistic, es_datetime::EsDateTimeExt};

pub mod fixtures;

/// 2024-01-01T10:03:00Z, the end of every test window.
pub fn test_now() -> EsDateTime {
    EsDateTime::from_unix_seconds_i64(1_704_103_380)
}

/// A time of day on 2024-01-01 (UTC).
pub fn at(hours: i64, minutes: i64, seconds: i64) -> EsDateTime {
    EsDateTime::from_unix_seconds_i64(1_704_067_200 + hours * 3600 + minutes * 60 + seconds)
}

/// A datapoint carrying only `statistic`.
pub fn datapoint(timestamp: EsDateTime, statistic: Statistic, value: f64) -> Datapoint {
    let mut datapoint = Datapoint::at(timestamp);
    match statistic {
        Statistic::Average => datapoint.average = Some(value),
        Statistic::Sum => datapoint.sum = Some(value),
        Statistic::Maximum => datapoint.maximum = Some(value),
        Statistic::Minimum => datapoint.minimum = Some(value),
    }
    datapoint
}
