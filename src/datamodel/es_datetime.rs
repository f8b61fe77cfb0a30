pub type EsDateTime = hifitime::Epoch;

use hifitime::{UNIX_REF_EPOCH, Unit};

pub trait EsDateTimeExt {
    fn from_unix_milliseconds_i64(timestamp: i64) -> Self;
    fn from_unix_seconds_i64(timestamp: i64) -> Self;
    fn to_unix_milliseconds_i64(&self) -> i64;
    fn to_unix_seconds_i64(&self) -> i64;
}

impl EsDateTimeExt for EsDateTime {
    fn from_unix_milliseconds_i64(timestamp: i64) -> Self {
        Self::from_utc_duration(UNIX_REF_EPOCH.to_utc_duration() + timestamp * Unit::Millisecond)
    }
    fn from_unix_seconds_i64(timestamp: i64) -> Self {
        Self::from_utc_duration(UNIX_REF_EPOCH.to_utc_duration() + timestamp * Unit::Second)
    }
    fn to_unix_milliseconds_i64(&self) -> i64 {
        self.to_unix_milliseconds().round() as i64
    }
    fn to_unix_seconds_i64(&self) -> i64 {
        self.to_unix_milliseconds_i64().div_euclid(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn test_send() {
        assert_send::<EsDateTime>();
    }

    #[test]
    fn test_milliseconds_roundtrip() {
        let test_cases: &[i64] = &[
            1000,          // Small value
            1704067200000, // Jan 1, 2024 00:00:00 UTC
            1704067200123, // With subsecond precision
        ];

        for &input_ms in test_cases {
            let epoch = EsDateTime::from_unix_milliseconds_i64(input_ms);
            assert_eq!(
                input_ms,
                epoch.to_unix_milliseconds_i64(),
                "from_unix_milliseconds_i64 should roundtrip for {}",
                input_ms
            );
        }
    }

    #[test]
    fn test_units_agree() {
        let from_seconds = EsDateTime::from_unix_seconds_i64(1_704_067_260);
        let from_millis = EsDateTime::from_unix_milliseconds_i64(1_704_067_260_000);
        assert_eq!(from_seconds, from_millis);
        assert_eq!(from_seconds.to_unix_seconds_i64(), 1_704_067_260);
    }
}
