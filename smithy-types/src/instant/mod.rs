/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Point-in-time values carried by timestamp members.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde-deserialize")]
mod de;
#[cfg(feature = "serde-serialize")]
mod ser;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An instant in time, stored as seconds since the Unix epoch plus a sub-second remainder.
///
/// `subsecond_nanos` is always in `0..1_000_000_000` and always moves time forward, so
/// `-1.5` epoch seconds is stored as `seconds = -2, subsecond_nanos = 500_000_000`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Builds an instant from whole seconds and a fraction in `[0, 1)`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Self::from_secs_and_nanos(epoch_seconds, nanos)
    }

    /// Builds an instant from seconds and nanoseconds. Nanoseconds beyond one second
    /// carry into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant {
                        seconds: seconds - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s.trim())
                    .map_err(|err| ParseError::new(format!("invalid date-time `{}`: {}", s, err)))?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => parse_epoch_seconds(s.trim()),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date) => date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                // outside chrono's representable range
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    return self.seconds.to_string();
                }
                let (sign, whole, nanos) = if self.seconds < 0 {
                    ("-", -(self.seconds + 1), NANOS_PER_SECOND - self.subsecond_nanos)
                } else {
                    ("", self.seconds, self.subsecond_nanos)
                };
                let fraction = format!("{:0>9}", nanos);
                format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

fn parse_epoch_seconds(s: &str) -> Result<Instant, ParseError> {
    let invalid = || ParseError::new(format!("invalid epoch seconds `{}`", s));
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };
    if whole.is_empty()
        || fraction.len() > 9
        || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let nanos: u32 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<9}", fraction).parse().map_err(|_| invalid())?
    };
    Ok(match (negative, nanos) {
        (false, _) => Instant::from_secs_and_nanos(whole, nanos),
        (true, 0) => Instant::from_epoch_seconds(-whole),
        (true, nanos) => Instant {
            seconds: -whole - 1,
            subsecond_nanos: NANOS_PER_SECOND - nanos,
        },
    })
}

/// Wire formats for [`Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339 in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Fractional seconds since the Unix epoch, e.g. `1576540098.52`.
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ParseError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.520Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn negative_epoch_seconds() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds),
            Ok(instant)
        );
    }

    #[test]
    fn parse_date_time() {
        let instant = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime)
            .expect("valid date-time");
        assert_eq!(instant, Instant::from_fractional_seconds(1576540098, 0.52));
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
        assert!(Instant::from_str("12.", Format::EpochSeconds).is_ok());
        assert!(Instant::from_str("1.2.3", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("", Format::EpochSeconds).is_err());
    }

    #[test]
    fn rounding_carries_into_seconds() {
        let instant = Instant::from_fractional_seconds(5, 0.9999999999);
        assert_eq!(instant, Instant::from_epoch_seconds(6));
    }

    #[test]
    fn system_time_before_epoch() {
        let time = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(Instant::from(time), Instant::from_f64(-1.5));
    }

    proptest! {
        #[test]
        fn epoch_seconds_text_round_trips(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let text = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&text, Format::EpochSeconds), Ok(instant));
        }

        #[test]
        fn date_time_text_round_trips(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let text = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&text, Format::DateTime), Ok(instant));
        }
    }
}
