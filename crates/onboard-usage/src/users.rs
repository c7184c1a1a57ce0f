//! Most active users

use crate::event::{UsageEvent, NOTES_GENERATED};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activity of one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    /// Short name shown in tables
    pub user: String,
    /// Full email address
    pub email: String,
    /// All events raised by the user
    pub total_events: usize,
    /// `notesGenerated` events
    pub notes_generated: usize,
    /// Export events
    pub total_exports: usize,
}

/// Part of the email before `@`, or the whole value if there is none
#[must_use]
pub fn display_name(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// The `limit` users with the most events.
///
/// Sorted by total events descending; users with equal totals keep the
/// order in which they first appear.
#[must_use]
pub fn top_users(events: &[UsageEvent], limit: usize) -> Vec<UserActivity> {
    let mut by_user: IndexMap<&str, UserActivity> = IndexMap::new();
    for event in events {
        let row = by_user
            .entry(event.user_email.as_str())
            .or_insert_with(|| UserActivity {
                user: display_name(&event.user_email).to_string(),
                email: event.user_email.clone(),
                total_events: 0,
                notes_generated: 0,
                total_exports: 0,
            });
        row.total_events += 1;
        if event.is(NOTES_GENERATED) {
            row.notes_generated += 1;
        }
        if event.is_export() {
            row.total_exports += 1;
        }
    }

    let mut rows: Vec<UserActivity> = by_user.into_values().collect();
    rows.sort_by(|a, b| b.total_events.cmp(&a.total_events));
    rows.truncate(limit);
    rows
}
