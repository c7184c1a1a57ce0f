//! Placeholder substitution for freeze notification emails
//!
//! Tokens are `{identifier}` and are replaced globally. Missing person
//! fields render as a fixed fallback; unknown tokens are left untouched.
//! No escaping is performed.

use crate::period::{EmailTemplate, FreezePeriod};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback for a missing email address
pub const NOT_PROVIDED: &str = "Not provided";
/// Fallback for missing dates, role and department
pub const NOT_SPECIFIED: &str = "Not specified";
/// Fallback for a missing manager
pub const NOT_ASSIGNED: &str = "Not assigned";

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("Invalid regex"));

/// Pre-hire or leaver record used to fill templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Record identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Work email, if already issued
    #[serde(default)]
    pub email: Option<String>,
    /// First working day
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last working day
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Job title
    #[serde(default)]
    pub role: Option<String>,
    /// Department
    #[serde(default)]
    pub department: Option<String>,
    /// Line manager
    #[serde(default)]
    pub manager: Option<String>,
    /// Hiring manager
    #[serde(default)]
    pub hiring_manager: Option<String>,
}

impl Person {
    /// Create a record with only the required fields
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Kind of provisioning request being routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// New starter
    Onboarding,
    /// Leaver
    Offboarding,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Onboarding => "Onboarding",
            Self::Offboarding => "Offboarding",
        })
    }
}

/// Render a date the way notification emails show it
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Values available to a template
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    person: &'a Person,
    request: RequestType,
    period: Option<&'a FreezePeriod>,
}

impl<'a> TemplateContext<'a> {
    /// Context for a person and request
    #[inline]
    #[must_use]
    pub fn new(person: &'a Person, request: RequestType) -> Self {
        Self {
            person,
            request,
            period: None,
        }
    }

    /// With the freeze period being reported
    #[inline]
    #[must_use]
    pub fn with_period(mut self, period: &'a FreezePeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Value for a token, or `None` if the token is unknown
    #[must_use]
    pub fn value(&self, token: &str) -> Option<String> {
        let p = self.person;
        let text = |v: &Option<String>, fallback: &str| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        let day = |v: Option<NaiveDate>| v.map_or_else(|| NOT_SPECIFIED.to_string(), format_date);

        let value = match token {
            "employeeName" => p.name.clone(),
            "employeeId" => p.id.clone(),
            "employeeEmail" => text(&p.email, NOT_PROVIDED),
            "startDate" => day(p.start_date),
            "endDate" => day(p.end_date),
            "role" => text(&p.role, NOT_SPECIFIED),
            "department" => text(&p.department, NOT_SPECIFIED),
            "manager" => text(&p.manager, NOT_ASSIGNED),
            "hiringManager" => text(&p.hiring_manager, NOT_ASSIGNED),
            "requestType" => self.request.to_string(),
            "freezePeriodName" => self.period?.name.clone(),
            "freezeStartDate" => format_date(self.period?.start_date),
            "freezeEndDate" => format_date(self.period?.end_date),
            _ => return None,
        };
        Some(value)
    }
}

/// Substitute every known `{token}` in `template`
#[must_use]
pub fn render(template: &str, ctx: &TemplateContext<'_>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            ctx.value(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Subject and body after substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEmail {
    /// Rendered subject
    pub subject: String,
    /// Rendered body
    pub body: String,
}

impl EmailTemplate {
    /// Render both subject and body
    #[must_use]
    pub fn render(&self, ctx: &TemplateContext<'_>) -> RenderedEmail {
        RenderedEmail {
            subject: render(&self.subject, ctx),
            body: render(&self.body, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_start_date_uses_fallback() {
        let person = Person::new("ph-17", "Priya Patel");
        let ctx = TemplateContext::new(&person, RequestType::Onboarding);
        assert_eq!(
            render("Hello {employeeName}, start {startDate}", &ctx),
            "Hello Priya Patel, start Not specified"
        );
    }

    #[test]
    fn fallbacks_per_field() {
        let person = Person::new("ph-17", "Priya Patel");
        let ctx = TemplateContext::new(&person, RequestType::Onboarding);
        assert_eq!(render("{employeeEmail}", &ctx), NOT_PROVIDED);
        assert_eq!(
            render("{role}|{department}|{endDate}", &ctx),
            "Not specified|Not specified|Not specified"
        );
        assert_eq!(render("{manager}|{hiringManager}", &ctx), "Not assigned|Not assigned");
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let person = Person {
            email: Some("  ".into()),
            ..Person::new("1", "A")
        };
        let ctx = TemplateContext::new(&person, RequestType::Onboarding);
        assert_eq!(render("{employeeEmail}", &ctx), NOT_PROVIDED);
    }

    #[test]
    fn replaces_every_occurrence() {
        let person = Person::new("1", "Ada");
        let ctx = TemplateContext::new(&person, RequestType::Offboarding);
        assert_eq!(
            render("{employeeName}/{employeeName} {requestType}", &ctx),
            "Ada/Ada Offboarding"
        );
    }

    #[test]
    fn unknown_tokens_are_left_alone() {
        let person = Person::new("1", "Ada");
        let ctx = TemplateContext::new(&person, RequestType::Onboarding);
        assert_eq!(render("{nope} {employeeName} {}", &ctx), "{nope} Ada {}");
    }

    #[test]
    fn period_tokens_need_a_period() {
        let person = Person::new("1", "Ada");
        let period = FreezePeriod::new("fp", "Holiday freeze", date(2024, 11, 1), date(2025, 1, 5));

        let without = TemplateContext::new(&person, RequestType::Onboarding);
        assert_eq!(render("{freezePeriodName}", &without), "{freezePeriodName}");

        let with = without.with_period(&period);
        assert_eq!(
            render("{freezePeriodName}: {freezeStartDate} - {freezeEndDate}", &with),
            "Holiday freeze: November 1, 2024 - January 5, 2025"
        );
    }

    #[test]
    fn no_escaping() {
        let person = Person::new("1", "<b>Ada</b> & {role}");
        let ctx = TemplateContext::new(&person, RequestType::Onboarding);
        // Substituted values are not rescanned for tokens
        assert_eq!(render("{employeeName}", &ctx), "<b>Ada</b> & {role}");
    }

    #[test]
    fn person_deserializes_camel_case() {
        let json = r#"{"id":"ph-1","name":"Ada","startDate":"2025-01-13","hiringManager":"Grace"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.start_date, Some(date(2025, 1, 13)));
        assert_eq!(person.hiring_manager.as_deref(), Some("Grace"));
    }
}
