//! Onboard Freeze
//!
//! Decides whether onboarding and offboarding requests can be provisioned
//! automatically or must go to the Helix service desk because a freeze
//! period is in force.
//!
//! # Core Concepts
//!
//! - [`FreezePeriod`]: inclusive date range with routing and template
//! - [`FreezeCalendar`]: periods validated for sane, non-overlapping ranges
//! - [`render`]: `{placeholder}` substitution with per-field fallbacks
//! - [`route`]: automated provisioning or a [`FreezeNotice`]
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use onboard_freeze::{is_active, FreezePeriod};
//!
//! let period = FreezePeriod::new(
//!     "fp-2024",
//!     "Holiday freeze",
//!     NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
//! );
//! let late = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap().and_hms_opt(23, 0, 0).unwrap();
//! assert!(is_active(late, &[period]));
//! ```

#![warn(unreachable_pub)]

pub mod calendar;
pub mod error;
pub mod legacy;
pub mod notice;
pub mod period;
pub mod template;

pub use calendar::FreezeCalendar;
pub use error::{FreezeError, FreezeResult};
pub use notice::{compose_notice, route, FreezeNotice, Routing};
pub use period::{
    get_active, is_active, parse_date, resolve_records, EmailTemplate, FreezePeriod,
    FreezePeriodRecord,
};
pub use template::{
    format_date, render, Person, RenderedEmail, RequestType, TemplateContext, NOT_ASSIGNED,
    NOT_PROVIDED, NOT_SPECIFIED,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
