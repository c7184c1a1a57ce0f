//! Onboard Usage
//!
//! Adoption analytics over meeting-notes telemetry: headline KPIs, the
//! most active users, daily activity, the login → generate → export funnel
//! and the export format mix.
//!
//! # Example
//!
//! ```rust
//! use onboard_usage::{events_from_json, KpiSummary};
//!
//! let events = events_from_json(
//!     r#"[{"UserEmail": "ana@example.com", "EventType": "notesGenerated"}]"#,
//! ).unwrap();
//! let kpis = KpiSummary::compute(&events);
//! assert_eq!(kpis.total_users, 1);
//! assert_eq!(kpis.notes_generated, 1);
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod event;
pub mod exports;
pub mod funnel;
pub mod kpi;
pub mod report;
pub mod timeline;
pub mod users;

pub use error::{UsageError, UsageResult};
pub use event::{events_from_json, is_export_type, load_events, UsageEvent};
pub use exports::{export_breakdown, export_label, ExportShare};
pub use funnel::{adoption_funnel, FunnelStage};
pub use kpi::KpiSummary;
pub use report::{UsageReport, DEFAULT_TOP_EVENT_TYPES, DEFAULT_TOP_USERS};
pub use timeline::{ranked_event_types, usage_over_time, DailyCount, EventSeries};
pub use users::{display_name, top_users, UserActivity};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
