//! Daily event counts for the busiest event types

use crate::event::UsageEvent;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Events of one type on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Calendar day
    pub date: NaiveDate,
    /// Events on that day
    pub count: usize,
}

/// Daily counts for one event type, oldest day first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSeries {
    /// Event type
    pub event_type: String,
    /// Days with at least one event
    pub points: Vec<DailyCount>,
}

/// Event types ranked by frequency, ties by first appearance
#[must_use]
pub fn ranked_event_types(events: &[UsageEvent]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for event in events {
        *counts.entry(event.event_type.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(kind, n)| (kind.to_string(), n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// One series per event type among the `top_n` most frequent.
///
/// Ranking counts every event; events without a date only drop out of the
/// daily points.
#[must_use]
pub fn usage_over_time(events: &[UsageEvent], top_n: usize) -> Vec<EventSeries> {
    let undated = events.iter().filter(|e| e.event_date.is_none()).count();
    if undated > 0 {
        tracing::debug!("{} events have no date and are left out of the timeline", undated);
    }

    ranked_event_types(events)
        .into_iter()
        .take(top_n)
        .map(|(event_type, _)| {
            let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
            for event in events.iter().filter(|e| e.is(&event_type)) {
                if let Some(date) = event.event_date {
                    *days.entry(date).or_default() += 1;
                }
            }
            EventSeries {
                event_type,
                points: days
                    .into_iter()
                    .map(|(date, count)| DailyCount { date, count })
                    .collect(),
            }
        })
        .collect()
}
