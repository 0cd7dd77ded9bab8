//! World-clock lookup over a fixed timezone allow-list.
//!
//! This is the wall-clock side of the service; elapsed-time accounting in
//! [`crate::stopwatch`] runs on the monotonic clock and never touches the
//! timezone database.

use crate::error::{Error, Result};
use chrono::Utc;
use chrono_tz::Tz;

/// Timezone keys the clock endpoint accepts, with their tz-database zones.
///
/// Matching is exact: any other key is rejected, including otherwise-valid
/// IANA names, to bound the exposed surface.
const ALLOWED_ZONES: &[(&str, Tz)] = &[
    ("UTC", chrono_tz::UTC),
    ("Asia/Tokyo", chrono_tz::Asia::Tokyo),
    ("America/New_York", chrono_tz::America::New_York),
    ("Europe/London", chrono_tz::Europe::London),
];

/// Current wall-clock time in one supported zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTime {
    /// Canonical allow-list key.
    pub zone: &'static str,
    /// ISO-8601 timestamp with UTC offset.
    pub iso: String,
    /// Unix epoch milliseconds, truncated.
    pub epoch_ms: i64,
}

/// Resolve an allow-listed timezone key to the current time in that zone.
///
/// Pure function of the allow-list and the current real time; fails with
/// [`Error::InvalidTimezone`] for any key outside the list.
pub fn resolve(zone_key: &str) -> Result<ZoneTime> {
    let (zone, tz) = ALLOWED_ZONES
        .iter()
        .copied()
        .find(|(key, _)| *key == zone_key)
        .ok_or_else(|| Error::InvalidTimezone(zone_key.to_string()))?;

    let now = Utc::now().with_timezone(&tz);
    Ok(ZoneTime {
        zone,
        iso: now.to_rfc3339(),
        epoch_ms: now.timestamp_millis(),
    })
}
