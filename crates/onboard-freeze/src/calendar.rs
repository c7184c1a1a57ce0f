//! Validated set of freeze periods
//!
//! The free functions in [`crate::period`] let the earlier-listed period win
//! when ranges overlap. The calendar rules that situation out up front.

use crate::error::{FreezeError, FreezeResult};
use crate::period::{get_active, resolve_records, FreezePeriod, FreezePeriodRecord};
use chrono::{NaiveDate, NaiveDateTime};

/// Freeze periods checked for well-formed, non-overlapping ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreezeCalendar {
    periods: Vec<FreezePeriod>,
}

impl FreezeCalendar {
    /// Validate and wrap periods.
    ///
    /// Inactive periods may overlap anything since they never match.
    ///
    /// # Errors
    /// - [`FreezeError::InvertedRange`] if a period ends before it starts
    /// - [`FreezeError::Overlap`] if two active periods share a day
    pub fn new(periods: Vec<FreezePeriod>) -> FreezeResult<Self> {
        for period in &periods {
            if period.end_date < period.start_date {
                return Err(FreezeError::InvertedRange {
                    id: period.id.clone(),
                    start: period.start_date,
                    end: period.end_date,
                });
            }
        }

        let active: Vec<&FreezePeriod> = periods.iter().filter(|p| p.is_active).collect();
        for (i, first) in active.iter().enumerate() {
            if let Some(second) = active[i + 1..].iter().find(|p| first.overlaps(p)) {
                return Err(FreezeError::Overlap {
                    first: first.id.clone(),
                    second: second.id.clone(),
                });
            }
        }

        tracing::debug!(periods = periods.len(), "Freeze calendar validated");
        Ok(Self { periods })
    }

    /// Build from raw records, skipping those with unparseable dates
    ///
    /// # Errors
    /// Same as [`FreezeCalendar::new`].
    pub fn from_records(
        records: impl IntoIterator<Item = FreezePeriodRecord>,
    ) -> FreezeResult<Self> {
        Self::new(resolve_records(records))
    }

    /// All periods, in configured order
    #[inline]
    #[must_use]
    pub fn periods(&self) -> &[FreezePeriod] {
        &self.periods
    }

    /// Period in force at `at`
    #[inline]
    #[must_use]
    pub fn active_at(&self, at: NaiveDateTime) -> Option<&FreezePeriod> {
        get_active(at, &self.periods)
    }

    /// Whether provisioning is frozen at `at`
    #[inline]
    #[must_use]
    pub fn is_frozen(&self, at: NaiveDateTime) -> bool {
        self.active_at(at).is_some()
    }

    /// Earliest active period starting after `today`
    #[must_use]
    pub fn next_after(&self, today: NaiveDate) -> Option<&FreezePeriod> {
        self.periods
            .iter()
            .filter(|p| p.is_active && p.start_date > today)
            .min_by_key(|p| p.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(id: &str, start: NaiveDate, end: NaiveDate) -> FreezePeriod {
        FreezePeriod::new(id, id, start, end)
    }

    #[test]
    fn accepts_disjoint_periods() {
        let calendar = FreezeCalendar::new(vec![
            period("winter", date(2024, 11, 1), date(2025, 1, 5)),
            period("summer", date(2025, 7, 1), date(2025, 7, 14)),
        ])
        .unwrap();
        assert_eq!(calendar.periods().len(), 2);
        assert!(calendar.is_frozen(date(2025, 7, 14).and_hms_opt(12, 0, 0).unwrap()));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = FreezeCalendar::new(vec![period("bad", date(2025, 1, 5), date(2024, 11, 1))])
            .unwrap_err();
        assert!(matches!(err, FreezeError::InvertedRange { .. }));
    }

    #[test]
    fn rejects_overlap_between_active_periods() {
        let err = FreezeCalendar::new(vec![
            period("a", date(2024, 11, 1), date(2025, 1, 5)),
            period("b", date(2025, 1, 5), date(2025, 1, 10)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            FreezeError::Overlap {
                first: "a".into(),
                second: "b".into()
            }
        );
    }

    #[test]
    fn inactive_periods_may_overlap() {
        let calendar = FreezeCalendar::new(vec![
            period("a", date(2024, 11, 1), date(2025, 1, 5)),
            period("draft", date(2024, 12, 1), date(2024, 12, 31)).with_active(false),
        ]);
        assert!(calendar.is_ok());
    }

    #[test]
    fn next_after_skips_past_and_inactive() {
        let calendar = FreezeCalendar::new(vec![
            period("past", date(2024, 1, 1), date(2024, 1, 2)),
            period("off", date(2025, 3, 1), date(2025, 3, 2)).with_active(false),
            period("later", date(2025, 7, 1), date(2025, 7, 2)),
            period("soon", date(2025, 5, 1), date(2025, 5, 2)),
        ])
        .unwrap();
        assert_eq!(calendar.next_after(date(2025, 2, 1)).unwrap().id, "soon");
        assert!(calendar.next_after(date(2025, 8, 1)).is_none());
    }
}
