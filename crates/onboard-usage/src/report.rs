//! All dashboard views computed in one pass over the caller's events

use crate::event::UsageEvent;
use crate::exports::{export_breakdown, ExportShare};
use crate::funnel::{adoption_funnel, FunnelStage};
use crate::kpi::KpiSummary;
use crate::timeline::{usage_over_time, EventSeries};
use crate::users::{top_users, UserActivity};
use serde::{Deserialize, Serialize};

/// Rows in the top users table
pub const DEFAULT_TOP_USERS: usize = 10;
/// Event types plotted over time
pub const DEFAULT_TOP_EVENT_TYPES: usize = 5;

/// Complete usage dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// Headline figures
    pub kpis: KpiSummary,
    /// Most active users
    pub top_users: Vec<UserActivity>,
    /// Daily counts for the busiest event types
    pub usage_over_time: Vec<EventSeries>,
    /// Adoption funnel
    pub funnel: Vec<FunnelStage>,
    /// Export format distribution
    pub exports: Vec<ExportShare>,
}

impl UsageReport {
    /// Build every view with the default limits
    #[must_use]
    pub fn build(events: &[UsageEvent]) -> Self {
        Self::build_with(events, DEFAULT_TOP_USERS, DEFAULT_TOP_EVENT_TYPES)
    }

    /// Build every view with explicit limits
    #[must_use]
    pub fn build_with(events: &[UsageEvent], user_limit: usize, top_event_types: usize) -> Self {
        tracing::info!("Building usage report over {} events", events.len());
        Self {
            kpis: KpiSummary::compute(events),
            top_users: top_users(events, user_limit),
            usage_over_time: usage_over_time(events, top_event_types),
            funnel: adoption_funnel(events),
            exports: export_breakdown(events),
        }
    }
}
