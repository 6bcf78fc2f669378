//! Wire format for timestamps.
//!
//! Every timestamp leaves the service as a UTC ISO-8601 string with
//! millisecond precision and a `Z` suffix, e.g. `2026-01-02T03:04:05.678Z`.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serializer;

/// Current time, truncated to the precision that survives serialization.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp the way it appears in response bodies.
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` adapter for `DateTime<Utc>` fields.
pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_uses_millis_and_zulu() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&ts), "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn now_has_no_sub_millisecond_component() {
        let ts = now();
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn formatted_value_parses_back() {
        let ts = now();
        let parsed = DateTime::parse_from_rfc3339(&format(&ts)).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), ts);
    }
}
