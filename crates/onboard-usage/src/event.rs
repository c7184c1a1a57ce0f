//! Telemetry event records
//!
//! Events arrive as the JSON export of the meeting-notes reporting view.
//! Column names are accepted both in camelCase and in the view's original
//! PascalCase spelling.

use crate::error::{UsageError, UsageResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Event type recorded when a user signs in
pub const USER_LOGIN: &str = "userLogin";
/// Event type recorded when notes are generated from a transcript
pub const NOTES_GENERATED: &str = "notesGenerated";
/// Tour action marking the start of the guided tour
pub const TOUR_STARTED: &str = "started";
/// Tour action marking a finished guided tour
pub const TOUR_COMPLETED: &str = "completed";

/// One telemetry row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    /// Event identifier
    #[serde(alias = "EventID", alias = "eventID", default, deserialize_with = "text_or_number")]
    pub event_id: String,
    /// User that raised the event
    #[serde(alias = "UserEmail", default)]
    pub user_email: String,
    /// Event type such as `userLogin` or `pdfExport`
    #[serde(alias = "EventType", default)]
    pub event_type: String,
    /// Day the event happened
    #[serde(alias = "EventDate", default, deserialize_with = "lenient_date")]
    pub event_date: Option<NaiveDate>,
    /// Guided tour action, if any
    #[serde(alias = "TourAction", default)]
    pub tour_action: Option<String>,
}

impl UsageEvent {
    /// Whether the event is an export of any kind
    #[must_use]
    pub fn is_export(&self) -> bool {
        is_export_type(&self.event_type)
    }

    /// Whether the event type matches exactly
    #[inline]
    #[must_use]
    pub fn is(&self, event_type: &str) -> bool {
        self.event_type == event_type
    }

    /// Whether the tour action matches exactly
    #[inline]
    #[must_use]
    pub fn tour_is(&self, action: &str) -> bool {
        self.tour_action.as_deref() == Some(action)
    }
}

/// Export event types contain `export` in any case
#[must_use]
pub fn is_export_type(event_type: &str) -> bool {
    event_type.to_lowercase().contains("export")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Int(n)) => n.to_string(),
        Some(TextOrNumber::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Accepts a plain date, an RFC 3339 timestamp or a naive timestamp.
/// Anything else becomes `None` so one bad row does not sink the export.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|dt| dt.date())
        });

    if parsed.is_none() {
        tracing::debug!("Ignoring unreadable event date '{}'", raw);
    }
    Ok(parsed)
}

/// Parse a JSON array of events
pub fn events_from_json(json: &str) -> UsageResult<Vec<UsageEvent>> {
    let events: Vec<UsageEvent> = serde_json::from_str(json)?;
    tracing::debug!("Loaded {} usage events", events.len());
    Ok(events)
}

/// Read and parse a JSON export from disk
pub fn load_events(path: impl AsRef<Path>) -> UsageResult<Vec<UsageEvent>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| UsageError::io_error(path, e))?;
    events_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_columns() {
        let json = r#"[{"EventID": 42, "UserEmail": "a@x.com", "EventType": "pdfExport",
                        "EventDate": "2025-03-01T09:30:00Z", "TourAction": null}]"#;
        let events = events_from_json(json).unwrap();
        assert_eq!(events[0].event_id, "42");
        assert_eq!(events[0].user_email, "a@x.com");
        assert_eq!(events[0].event_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert!(events[0].tour_action.is_none());
        assert!(events[0].is_export());
    }

    #[test]
    fn camel_case_columns() {
        let json = r#"[{"eventId": "e-1", "userEmail": "b@x.com", "eventType": "tour",
                        "eventDate": "2025-03-02", "tourAction": "started"}]"#;
        let events = events_from_json(json).unwrap();
        assert!(events[0].tour_is(TOUR_STARTED));
        assert_eq!(events[0].event_date, NaiveDate::from_ymd_opt(2025, 3, 2));
    }

    #[test]
    fn bad_dates_become_none() {
        let json = r#"[{"eventType": "userLogin", "eventDate": "last tuesday"},
                       {"eventType": "userLogin", "eventDate": ""},
                       {"eventType": "userLogin", "eventDate": "2025-03-02 08:00:00"}]"#;
        let events = events_from_json(json).unwrap();
        assert!(events[0].event_date.is_none());
        assert!(events[1].event_date.is_none());
        assert_eq!(events[2].event_date, NaiveDate::from_ymd_opt(2025, 3, 2));
    }

    #[test]
    fn export_detection_ignores_case() {
        assert!(is_export_type("pdfExport"));
        assert!(is_export_type("EXPORT_CSV"));
        assert!(!is_export_type("notesGenerated"));
    }

    #[test]
    fn load_missing_file() {
        let err = load_events("/nonexistent/usage.json").unwrap_err();
        assert!(matches!(err, UsageError::Io { .. }));
    }
}
