//! Timezone resolution and conversion against the IANA registry.
//!
//! The registry itself is external: [`chrono_tz::Tz`] is a borrowed handle
//! into compiled-in, read-only zone data, and this module only asks it for
//! the UTC offset and DST state at a given instant. No offset rules or DST
//! transition tables are computed here.

use chrono::{Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::{OffsetComponents, Tz, TzOffset};

use crate::TimeValue;

/// Error during timezone identifier resolution.
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// ## Summary
/// Resolves a TZID to a zone handle in the IANA registry.
///
/// Identifiers carrying the vendor prefixes some calendar clients emit
/// (`/mozilla.org/`, `/softwarestudio.org/`) are accepted as their bare
/// IANA names.
///
/// ## Errors
///
/// Returns [`ZoneError::UnknownTimezone`] if the identifier is not in the
/// registry.
pub fn resolve_tzid(tzid: &str) -> Result<Tz, ZoneError> {
    let bare = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);
    bare.parse::<Tz>()
        .map_err(|_e| ZoneError::UnknownTimezone(tzid.to_string()))
}

/// Wall-clock fields as a chrono handle for registry queries.
///
/// `None` when the fields are outside calendar ranges; callers normalize
/// first.
fn local_naive(t: &TimeValue) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(
        t.year,
        u32::try_from(t.month).ok()?,
        u32::try_from(t.day).ok()?,
    )?;
    date.and_hms_opt(
        u32::try_from(t.hour).ok()?,
        u32::try_from(t.minute).ok()?,
        u32::try_from(t.second).ok()?,
    )
}

/// Seconds east of UTC plus DST state for a resolved offset.
fn split_offset(offset: &TzOffset) -> (i32, bool) {
    (offset.fix().local_minus_utc(), !offset.dst_offset().is_zero())
}

/// ## Summary
/// UTC offset and DST state of `tz` at a local wall-clock reading.
///
/// A DST fold uses the earlier of the two candidate offsets (RFC 5545
/// §3.3.5: the first occurrence); a DST gap falls back to the zone's
/// UTC-side interpretation of the same reading. Both fallbacks emit a
/// `tracing` warning.
fn offset_at_local(tz: Tz, local: NaiveDateTime) -> (i32, bool) {
    match tz.offset_from_local_datetime(&local) {
        LocalResult::Single(offset) => split_offset(&offset),
        LocalResult::Ambiguous(earlier, _later) => {
            tracing::warn!(%tz, %local, "ambiguous local time (DST fold), using earlier offset");
            split_offset(&earlier)
        }
        LocalResult::None => {
            tracing::warn!(%tz, %local, "non-existent local time (DST gap), using UTC-side offset");
            split_offset(&tz.offset_from_utc_datetime(&local))
        }
    }
}

impl TimeValue {
    /// ## Summary
    /// Converts this value to `target`, preserving the absolute instant.
    ///
    /// - A DATE value is returned as an exact copy with the zone
    ///   reassigned: dates carry no time-of-day, so no offset applies.
    /// - A floating value is reinterpreted: the same wall-clock reading,
    ///   now in `target`, with no arithmetic shift.
    /// - Otherwise both zones are asked for their offset at this instant
    ///   and the signed difference is applied through
    ///   [`TimeValue::adjust`]. Converting to the current zone is a no-op.
    ///
    /// The null sentinel and values whose fields cannot be folded into a
    /// real calendar date pass through unchanged.
    #[must_use]
    pub fn to_zone(self, target: Tz) -> Self {
        if self.is_null() {
            return self;
        }
        if self.is_date {
            return Self {
                zone: Some(target),
                ..self
            };
        }
        let Some(source) = self.zone else {
            // Floating time is defined as the same clock reading in any
            // zone, so attaching a zone is not a conversion.
            return Self {
                zone: Some(target),
                ..self
            };
        };
        if source == target {
            return self;
        }

        let t = self.normalize();
        let Some(local) = local_naive(&t) else {
            return self;
        };
        let (from_offset, _) = offset_at_local(source, local);
        let utc = local - Duration::seconds(i64::from(from_offset));
        let (to_offset, to_daylight) = split_offset(&target.offset_from_utc_datetime(&utc));

        let mut out = t.adjust(0, 0, 0, to_offset - from_offset);
        out.zone = Some(target);
        out.is_daylight = to_daylight;
        out
    }

    /// Reinterprets the same field values as belonging to `zone`, with no
    /// arithmetic adjustment. This changes which instant the value denotes;
    /// use [`TimeValue::to_zone`] to preserve the instant.
    #[must_use]
    pub const fn with_zone(self, zone: Option<Tz>) -> Self {
        Self { zone, ..self }
    }

    /// Returns the IANA identifier of the attached zone, or `None` for
    /// floating time.
    #[must_use]
    pub fn tzid(&self) -> Option<&'static str> {
        self.zone.map(|z| z.name())
    }
}
