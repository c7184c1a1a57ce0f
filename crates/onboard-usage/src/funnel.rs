//! Login → generate → export adoption funnel

use crate::event::{UsageEvent, NOTES_GENERATED, USER_LOGIN};
use crate::kpi::percent;
use serde::{Deserialize, Serialize};

/// One funnel stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    /// Stage label
    pub stage: String,
    /// Events at this stage
    pub count: usize,
    /// Percentage of logins, absent for the first stage
    pub conversion: Option<f64>,
}

/// Count logins, generated notes and exports, with conversion relative to
/// logins (0 when there are none)
#[must_use]
pub fn adoption_funnel(events: &[UsageEvent]) -> Vec<FunnelStage> {
    let logins = events.iter().filter(|e| e.is(USER_LOGIN)).count();
    let notes = events.iter().filter(|e| e.is(NOTES_GENERATED)).count();
    let exports = events.iter().filter(|e| e.is_export()).count();

    vec![
        FunnelStage {
            stage: "User Login".to_string(),
            count: logins,
            conversion: None,
        },
        FunnelStage {
            stage: "Notes Generated".to_string(),
            count: notes,
            conversion: Some(percent(notes, logins)),
        },
        FunnelStage {
            stage: "Exported".to_string(),
            count: exports,
            conversion: Some(percent(exports, logins)),
        },
    ]
}
