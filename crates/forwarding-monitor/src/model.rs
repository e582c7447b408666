//! Wire types for the events-forwarding errors API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response body of `GET <api>/<integrationId>/<tenantId>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub customer_id: i64,
    pub integration_id: i64,
    pub count: i64,
    /// Errors as reported by the API. `null` decodes as empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub errors: Vec<ErrorEvent>,
}

/// A single forwarding error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    #[serde(rename = "error")]
    pub message: String,
    /// RFC 3339 timestamp, usually with nanosecond precision.
    pub timestamp: String,
}

impl ErrorEvent {
    /// Parse the timestamp into an absolute UTC instant.
    ///
    /// Accepts RFC 3339 with either `T` or a space between date and time.
    pub fn parsed_timestamp(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.timestamp).map(|t| t.with_timezone(&Utc))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ErrorEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ErrorEvent>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decodes_api_body() {
        let body = r#"{
            "customerId": 7,
            "integrationId": 42,
            "count": 1,
            "errors": [
                { "error": "connection refused", "timestamp": "2024-05-01T10:00:00.123456789Z" }
            ]
        }"#;

        let report: ErrorReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.customer_id, 7);
        assert_eq!(report.integration_id, 42);
        assert_eq!(report.count, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "connection refused");
    }

    #[test]
    fn test_null_errors_decode_as_empty() {
        let body = r#"{"customerId": 7, "integrationId": 42, "count": 0, "errors": null}"#;
        let report: ErrorReport = serde_json::from_str(body).unwrap();
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = r#"{"customerId": 7, "count": 0, "errors": []}"#;
        assert!(serde_json::from_str::<ErrorReport>(body).is_err());
    }

    #[test]
    fn test_timestamp_with_offset_is_normalized_to_utc() {
        let event = ErrorEvent {
            message: "x".to_string(),
            timestamp: "2024-05-01T12:00:00.5+02:00".to_string(),
        };
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(event.parsed_timestamp().unwrap(), expected);
    }

    #[test]
    fn test_space_separator_is_accepted() {
        let event = ErrorEvent {
            message: "x".to_string(),
            timestamp: "2024-05-01 10:00:00Z".to_string(),
        };
        assert_eq!(
            event.parsed_timestamp().unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_offset_fails_to_parse() {
        let event = ErrorEvent {
            message: "x".to_string(),
            timestamp: "2024-05-01T10:00:00".to_string(),
        };
        assert!(event.parsed_timestamp().is_err());
    }

    #[test]
    fn test_garbage_timestamp_fails_to_parse() {
        let event = ErrorEvent {
            message: "x".to_string(),
            timestamp: "not-a-date".to_string(),
        };
        assert!(event.parsed_timestamp().is_err());
    }
}
