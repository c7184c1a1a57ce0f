//! Headline adoption figures

use crate::event::{UsageEvent, NOTES_GENERATED, TOUR_COMPLETED, TOUR_STARTED};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Overview cards for the adoption dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    /// Distinct non-blank user emails
    pub total_users: usize,
    /// `notesGenerated` events
    pub notes_generated: usize,
    /// Export events of any kind
    pub total_exports: usize,
    /// Tours started
    pub tours_started: usize,
    /// Tours completed
    pub tours_completed: usize,
    /// `completed / started * 100`, or 0 when no tour was started
    pub tour_completion_rate: f64,
}

impl KpiSummary {
    /// Compute the summary over a set of events
    #[must_use]
    pub fn compute(events: &[UsageEvent]) -> Self {
        let users: HashSet<&str> = events
            .iter()
            .map(|e| e.user_email.trim())
            .filter(|u| !u.is_empty())
            .collect();
        let notes_generated = events.iter().filter(|e| e.is(NOTES_GENERATED)).count();
        let total_exports = events.iter().filter(|e| e.is_export()).count();
        let tours_started = events.iter().filter(|e| e.tour_is(TOUR_STARTED)).count();
        let tours_completed = events.iter().filter(|e| e.tour_is(TOUR_COMPLETED)).count();

        Self {
            total_users: users.len(),
            notes_generated,
            total_exports,
            tours_started,
            tours_completed,
            tour_completion_rate: percent(tours_completed, tours_started),
        }
    }
}

/// `part / whole * 100`, 0 for an empty whole
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(user: &str, kind: &str, tour: Option<&str>) -> UsageEvent {
        UsageEvent {
            event_id: String::new(),
            user_email: user.to_string(),
            event_type: kind.to_string(),
            event_date: None,
            tour_action: tour.map(str::to_string),
        }
    }

    #[test]
    fn empty_events() {
        let kpis = KpiSummary::compute(&[]);
        assert_eq!(kpis.total_users, 0);
        assert!(kpis.tour_completion_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn counts_and_rate() {
        let events = [
            ev("a@x.com", "userLogin", None),
            ev("a@x.com", "notesGenerated", None),
            ev("b@x.com", "csvExport", None),
            ev("", "userLogin", None),
            ev("b@x.com", "tour", Some("started")),
            ev("a@x.com", "tour", Some("started")),
            ev("a@x.com", "tour", Some("started")),
            ev("a@x.com", "tour", Some("completed")),
        ];
        let kpis = KpiSummary::compute(&events);
        assert_eq!(kpis.total_users, 2);
        assert_eq!(kpis.notes_generated, 1);
        assert_eq!(kpis.total_exports, 1);
        assert_eq!(kpis.tours_started, 3);
        assert!((kpis.tour_completion_rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn percent_of_zero() {
        assert!(percent(5, 0).abs() < f64::EPSILON);
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
