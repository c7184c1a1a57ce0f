//! Error types for freeze-period configuration
//!
//! Resolution itself never fails; these errors come from turning admin
//! configuration into a validated [`crate::FreezeCalendar`].

use chrono::NaiveDate;

/// Errors in freeze-period configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreezeError {
    /// Date string could not be parsed
    #[error("invalid {field} for freeze period '{id}': '{value}'")]
    InvalidDate {
        /// Period identifier
        id: String,
        /// Field name (`start_date` or `end_date`)
        field: &'static str,
        /// Offending raw value
        value: String,
    },

    /// Period ends before it starts
    #[error("freeze period '{id}' ends ({end}) before it starts ({start})")]
    InvertedRange {
        /// Period identifier
        id: String,
        /// Configured start
        start: NaiveDate,
        /// Configured end
        end: NaiveDate,
    },

    /// Two active periods cover a common day
    #[error("active freeze periods '{first}' and '{second}' overlap")]
    Overlap {
        /// Earlier-listed period
        first: String,
        /// Later-listed period
        second: String,
    },
}

impl FreezeError {
    /// Create invalid date error
    pub fn invalid_date(
        id: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidDate {
            id: id.into(),
            field,
            value: value.into(),
        }
    }
}

/// Result type alias for freeze operations
pub type FreezeResult<T> = Result<T, FreezeError>;
