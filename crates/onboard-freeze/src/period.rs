//! Freeze-period records and date-containment resolution

use crate::error::{FreezeError, FreezeResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Subject/body pair with `{placeholder}` tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Subject line template
    pub subject: String,
    /// Body template
    pub body: String,
}

impl Default for EmailTemplate {
    fn default() -> Self {
        Self {
            subject: "{requestType} request during freeze: {employeeName}".to_string(),
            body: "Please open a Helix ticket for the following {requestType} request.\n\n\
                   Employee: {employeeName} ({employeeId})\n\
                   Email: {employeeEmail}\n\
                   Role: {role}\n\
                   Department: {department}\n\
                   Start date: {startDate}\n\
                   End date: {endDate}\n\
                   Manager: {manager}\n\n\
                   Automated provisioning is paused for {freezePeriodName} \
                   ({freezeStartDate} to {freezeEndDate})."
                .to_string(),
        }
    }
}

/// A validated freeze period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezePeriod {
    /// Period identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// First frozen day
    pub start_date: NaiveDate,
    /// Last frozen day (inclusive)
    pub end_date: NaiveDate,
    /// Whether the period is considered at all
    pub is_active: bool,
    /// Notification template
    pub email_template: EmailTemplate,
    /// Helix intake mailbox
    pub helix_email: String,
    /// Additional recipients
    pub cc_recipients: Vec<String>,
}

impl FreezePeriod {
    /// Create an active period with the default template
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            is_active: true,
            email_template: EmailTemplate::default(),
            helix_email: String::new(),
            cc_recipients: Vec::new(),
        }
    }

    /// With active flag
    #[inline]
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// With notification routing
    #[inline]
    #[must_use]
    pub fn with_routing(mut self, helix_email: impl Into<String>, cc: Vec<String>) -> Self {
        self.helix_email = helix_email.into();
        self.cc_recipients = cc;
        self
    }

    /// With notification template
    #[inline]
    #[must_use]
    pub fn with_template(mut self, template: EmailTemplate) -> Self {
        self.email_template = template;
        self
    }

    /// Whether the calendar day of `at` falls inside the range.
    ///
    /// `at` is normalised to midnight and `end_date` to end of day, which
    /// makes this a plain inclusive comparison of calendar days. The active
    /// flag is not consulted.
    #[inline]
    #[must_use]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let day = at.date();
        self.start_date <= day && day <= self.end_date
    }

    /// Active and containing `at`
    #[inline]
    #[must_use]
    pub fn covers(&self, at: NaiveDateTime) -> bool {
        self.is_active && self.contains(at)
    }

    /// Whether two periods share at least one day
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &FreezePeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

/// Whether any active period covers `at`
#[must_use]
pub fn is_active(at: NaiveDateTime, periods: &[FreezePeriod]) -> bool {
    get_active(at, periods).is_some()
}

/// First period, in input order, that is active and covers `at`
#[must_use]
pub fn get_active(at: NaiveDateTime, periods: &[FreezePeriod]) -> Option<&FreezePeriod> {
    periods.iter().find(|p| p.covers(at))
}

/// Freeze period as administered, with dates still in string form.
///
/// Accepts both the admin UI's camelCase keys and snake_case config keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezePeriodRecord {
    /// Period identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// `YYYY-MM-DD` or RFC 3339
    #[serde(alias = "startDate")]
    pub start_date: String,
    /// `YYYY-MM-DD` or RFC 3339
    #[serde(alias = "endDate")]
    pub end_date: String,
    /// Whether the period is considered
    #[serde(alias = "isActive", default = "default_active")]
    pub is_active: bool,
    /// Notification template
    #[serde(alias = "emailTemplate", default)]
    pub email_template: EmailTemplate,
    /// Helix intake mailbox
    #[serde(alias = "helixEmail", default)]
    pub helix_email: String,
    /// Additional recipients
    #[serde(alias = "ccRecipients", default)]
    pub cc_recipients: Vec<String>,
}

fn default_active() -> bool {
    true
}

/// Parse a configured date, accepting a bare date or an RFC 3339 timestamp
///
/// # Errors
/// Returns [`FreezeError::InvalidDate`] when neither form parses.
pub fn parse_date(id: &str, field: &'static str, raw: &str) -> FreezeResult<NaiveDate> {
    let value = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    Err(FreezeError::invalid_date(id, field, raw))
}

impl TryFrom<FreezePeriodRecord> for FreezePeriod {
    type Error = FreezeError;

    fn try_from(record: FreezePeriodRecord) -> Result<Self, Self::Error> {
        let start_date = parse_date(&record.id, "start_date", &record.start_date)?;
        let end_date = parse_date(&record.id, "end_date", &record.end_date)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            start_date,
            end_date,
            is_active: record.is_active,
            email_template: record.email_template,
            helix_email: record.helix_email,
            cc_recipients: record.cc_recipients,
        })
    }
}

/// Convert records, dropping those with unparseable dates.
///
/// A period whose dates cannot be read can never match a date, so it is
/// logged and left out rather than failing the whole configuration.
pub fn resolve_records(records: impl IntoIterator<Item = FreezePeriodRecord>) -> Vec<FreezePeriod> {
    records
        .into_iter()
        .filter_map(|record| match FreezePeriod::try_from(record) {
            Ok(period) => Some(period),
            Err(e) => {
                tracing::warn!("Ignoring freeze period: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap())
    }

    fn holiday() -> FreezePeriod {
        FreezePeriod::new("fp-2024", "Holiday freeze", date(2024, 11, 1), date(2025, 1, 5))
    }

    #[test]
    fn end_date_is_inclusive_to_end_of_day() {
        let periods = [holiday()];
        assert!(is_active(at(2025, 1, 5, 23), &periods));
        assert!(!is_active(at(2025, 1, 6, 0), &periods));
    }

    #[test]
    fn start_date_counts_from_midnight() {
        let periods = [holiday()];
        assert!(is_active(at(2024, 11, 1, 0), &periods));
        assert!(!is_active(at(2024, 10, 31, 23), &periods));
    }

    #[test]
    fn inactive_period_never_covers() {
        let periods = [holiday().with_active(false)];
        assert!(!is_active(at(2024, 12, 1, 9), &periods));
        assert!(periods[0].contains(at(2024, 12, 1, 9)));
    }

    #[test]
    fn first_listed_wins() {
        let mut second = holiday();
        second.id = "fp-later".into();
        let periods = [holiday(), second];
        assert_eq!(get_active(at(2024, 12, 1, 9), &periods).unwrap().id, "fp-2024");
    }

    #[test]
    fn no_periods_no_freeze() {
        assert!(get_active(at(2024, 12, 1, 9), &[]).is_none());
    }

    #[test]
    fn parse_date_forms() {
        assert_eq!(parse_date("x", "start_date", "2024-11-01").unwrap(), date(2024, 11, 1));
        assert_eq!(
            parse_date("x", "start_date", "2024-11-01T00:00:00Z").unwrap(),
            date(2024, 11, 1)
        );
        assert_eq!(
            parse_date("x", "end_date", "2025-01-05T23:59:59.999").unwrap(),
            date(2025, 1, 5)
        );
        assert!(parse_date("x", "end_date", "next week").is_err());
    }

    #[test]
    fn record_accepts_camel_case() {
        let json = r#"{
            "id": "fp-1",
            "name": "Holiday",
            "startDate": "2024-11-01",
            "endDate": "2025-01-05",
            "isActive": true,
            "helixEmail": "helix@example.com",
            "ccRecipients": ["lead@example.com"]
        }"#;
        let record: FreezePeriodRecord = serde_json::from_str(json).unwrap();
        let period = FreezePeriod::try_from(record).unwrap();
        assert_eq!(period.helix_email, "helix@example.com");
        assert_eq!(period.email_template, EmailTemplate::default());
    }

    #[test]
    fn resolve_drops_unparseable_dates() {
        let good = FreezePeriodRecord {
            id: "good".into(),
            name: String::new(),
            start_date: "2024-11-01".into(),
            end_date: "2025-01-05".into(),
            is_active: true,
            email_template: EmailTemplate::default(),
            helix_email: String::new(),
            cc_recipients: Vec::new(),
        };
        let bad = FreezePeriodRecord {
            id: "bad".into(),
            start_date: "TBD".into(),
            ..good.clone()
        };
        let periods = resolve_records(vec![bad, good]);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].id, "good");
    }
}
