// Instant module
// Point in time stored as seconds from a fixed reference epoch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::codec::Codec;

/// Seconds between the Unix epoch and the reference epoch (2001-01-01T00:00:00Z)
pub const REFERENCE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

/// A point in time as a floating-point offset, in seconds, from
/// 2001-01-01T00:00:00Z.
///
/// The offset is absolute: no timezone or calendar is involved until the
/// instant is converted to a [`DateTime`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant {
    offset: f64,
}

impl Instant {
    /// The reference epoch itself (offset `0.0`)
    pub const REFERENCE: Instant = Instant { offset: 0.0 };

    pub const fn from_offset(offset: f64) -> Self {
        Self { offset }
    }

    /// Seconds since the reference epoch
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// A leap second (sub-second nanos of one billion or more) counts as
    /// the start of the following second.
    ///
    /// # Examples
    /// ```
    /// use appearance_prefs::models::instant::Instant;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let start = Utc.with_ymd_and_hms(2001, 1, 1, 0, 1, 0).unwrap();
    /// assert_eq!(Instant::from_datetime(start).offset(), 60.0);
    /// ```
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let mut seconds = datetime.timestamp() - REFERENCE_EPOCH_UNIX_SECONDS;
        let mut nanos = datetime.timestamp_subsec_nanos();
        if nanos >= 1_000_000_000 {
            seconds += 1;
            nanos -= 1_000_000_000;
        }
        let fraction = f64::from(nanos) / 1_000_000_000.0;
        Self::from_offset(seconds as f64 + fraction)
    }

    /// Convert to a UTC date-time.
    ///
    /// Returns `None` for non-finite offsets and for instants outside the
    /// range chrono can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.offset.is_finite() {
            return None;
        }

        let whole = self.offset.floor();
        let mut nanos = ((self.offset - whole) * 1_000_000_000.0).round();
        let mut seconds = whole;
        if nanos >= 1_000_000_000.0 {
            seconds += 1.0;
            nanos = 0.0;
        }

        // Beyond this magnitude the i64 cast saturates.
        if seconds.abs() > 9.0e15 {
            return None;
        }

        let unix_seconds = (seconds as i64).checked_add(REFERENCE_EPOCH_UNIX_SECONDS)?;
        DateTime::from_timestamp(unix_seconds, nanos as u32)
    }

    /// Text form for a string-only preference slot.
    ///
    /// Uses the shortest decimal representation that parses back to the
    /// same `f64`, so [`Instant::decode`] restores the exact offset.
    pub fn encode(&self) -> String {
        self.offset.to_string()
    }

    /// Parse the text form written by [`Instant::encode`].
    ///
    /// Never fails: text that is not a number resolves to the reference
    /// epoch. The caller cannot tell a stored epoch from a corrupt entry;
    /// the fallback is only visible in the log.
    pub fn decode(text: &str) -> Self {
        match text.parse::<f64>() {
            Ok(offset) => Self::from_offset(offset),
            Err(e) => {
                log::warn!(
                    "Unparseable instant '{}' ({}), falling back to reference epoch",
                    text,
                    e
                );
                Self::REFERENCE
            }
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset)
    }
}

impl From<&str> for Instant {
    fn from(text: &str) -> Self {
        Self::decode(text)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

/// Stores an [`Instant`] as its decimal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantStringCodec;

impl Codec for InstantStringCodec {
    type Value = Instant;
    type Primitive = String;

    fn encode(&self, value: &Instant) -> String {
        value.encode()
    }

    fn decode(&self, raw: String) -> Instant {
        Instant::decode(&raw)
    }
}
