//! Routing of provisioning requests around freeze periods
//!
//! Outside a freeze, requests go through automated provisioning. Inside
//! one, a notice is composed for the Helix intake mailbox so the request is
//! handled as a manual ticket.

use crate::period::{get_active, FreezePeriod};
use crate::template::{Person, RequestType, TemplateContext};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Email asking the service desk to handle a request by hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeNotice {
    /// Freeze period that triggered the notice
    pub period_id: String,
    /// Helix intake mailbox
    pub to: String,
    /// Additional recipients
    pub cc: Vec<String>,
    /// Rendered subject
    pub subject: String,
    /// Rendered body
    pub body: String,
}

/// Where a provisioning request should go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Routing {
    /// No freeze in force
    Automated,
    /// Freeze in force, send the notice
    ManualTicket(FreezeNotice),
}

impl Routing {
    /// Whether the request needs a manual ticket
    #[inline]
    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::ManualTicket(_))
    }
}

/// Render the period's template for a person
#[must_use]
pub fn compose_notice(
    period: &FreezePeriod,
    person: &Person,
    request: RequestType,
) -> FreezeNotice {
    if period.helix_email.trim().is_empty() {
        tracing::warn!("Freeze period {} has no Helix mailbox configured", period.id);
    }

    let ctx = TemplateContext::new(person, request).with_period(period);
    let email = period.email_template.render(&ctx);

    FreezeNotice {
        period_id: period.id.clone(),
        to: period.helix_email.clone(),
        cc: period.cc_recipients.clone(),
        subject: email.subject,
        body: email.body,
    }
}

/// Decide how a request made at `at` is provisioned
#[must_use]
pub fn route(
    at: NaiveDateTime,
    periods: &[FreezePeriod],
    person: &Person,
    request: RequestType,
) -> Routing {
    match get_active(at, periods) {
        Some(period) => {
            tracing::info!(
                "{} for {} falls in freeze period {}, routing to manual ticket",
                request,
                person.id,
                period.id
            );
            Routing::ManualTicket(compose_notice(period, person, request))
        }
        None => Routing::Automated,
    }
}
