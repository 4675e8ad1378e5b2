//! Timezone-aware calendar date/time values for the koyomi calendar model.
//!
//! [`TimeValue`] represents either a DATE or a DATE-TIME (floating, UTC, or
//! anchored to a named timezone), with normalization, calendar math, zone
//! conversion, epoch bridging, and ordering that stay correct across
//! month/year boundaries, leap years, and DST transitions. [`TimeSpan`]
//! carries half-open UTC intervals for free/busy overlap queries.
//!
//! Timezone offset rules are never computed here: [`chrono_tz::Tz`] is the
//! external, read-only registry, and this crate only asks it for the offset
//! and DST state at an instant.
//!
//! ## Example
//!
//! ```rust
//! use chrono_tz::Tz;
//! use koyomi_time::TimeValue;
//!
//! let local = TimeValue::zoned(1998, 1, 19, 2, 0, 0, Tz::America__New_York);
//! let utc = local.to_zone(Tz::UTC);
//! assert_eq!(utc.to_string(), "19980119T070000Z");
//! assert_eq!(local.compare(utc), std::cmp::Ordering::Equal);
//! ```

pub mod math;

mod compare;
mod epoch;
mod norm;
mod span;
mod value;
mod zone;

pub use span::TimeSpan;
pub use value::TimeValue;
pub use zone::{ZoneError, resolve_tzid};
