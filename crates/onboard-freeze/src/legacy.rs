//! Hardcoded holiday freeze kept for callers that predate configurable periods

use chrono::{Datelike, NaiveDateTime};

/// First frozen day of the legacy window, as (month, day)
pub const LEGACY_FREEZE_START: (u32, u32) = (11, 1);

/// Last frozen day of the legacy window, as (month, day), in the following year
pub const LEGACY_FREEZE_END: (u32, u32) = (1, 5);

/// Whether `at` falls in the fixed November 1 to January 5 window.
///
/// The window crosses the year boundary, so it is checked by month/day
/// rather than as a single range.
#[deprecated(note = "configure freeze periods and use `FreezeCalendar` instead")]
#[must_use]
pub fn is_in_legacy_freeze(at: NaiveDateTime) -> bool {
    let md = (at.month(), at.day());
    md >= LEGACY_FREEZE_START || md <= LEGACY_FREEZE_END
}
