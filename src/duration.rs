use crate::error::VastError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

/// A playback time span, rendered in VAST as `HH:MM:SS` with an
/// optional `.mmm` millisecond fraction.
///
/// Wraps [`std::time::Duration`], so negative spans are
/// unrepresentable. Spans of 100 hours or more render with a wider
/// hour field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(pub StdDuration);

impl Duration {
    pub fn from_secs(secs: u64) -> Self {
        Duration(StdDuration::from_secs(secs))
    }

    pub fn from_millis(millis: u64) -> Self {
        Duration(StdDuration::from_millis(millis))
    }

    pub fn as_std(&self) -> StdDuration {
        self.0
    }
}

impl From<StdDuration> for Duration {
    fn from(d: StdDuration) -> Self {
        Duration(d)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        // subsec_millis truncates, as the text form requires
        let millis = self.0.subsec_millis();
        if millis > 0 {
            write!(f, "{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
        } else {
            write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

impl FromStr for Duration {
    type Err = VastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
            .map(Duration)
            .ok_or_else(|| VastError::InvalidDuration(s.to_string()))
    }
}

/// Strict `HH:MM:SS[.mmm]` grammar: one or more hour digits, exactly
/// two minute and second digits each below 60, and an optional
/// fraction of exactly three digits. Anything else is rejected.
fn parse_duration(s: &str) -> Option<StdDuration> {
    let mut fields = s.splitn(3, ':');
    let hours = fields.next()?;
    let minutes = fields.next()?;
    let seconds = fields.next()?;

    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u64 = hours.parse().ok()?;

    let minutes = parse_sexagesimal(minutes)?;

    let (seconds, millis) = match seconds.split_once('.') {
        Some((whole, frac)) => {
            if frac.len() != 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            (parse_sexagesimal(whole)?, frac.parse::<u64>().ok()?)
        }
        None => (parse_sexagesimal(seconds)?, 0),
    };

    let total = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
    Some(StdDuration::new(total, millis as u32 * 1_000_000))
}

/// Exactly two ASCII digits in [00, 59].
fn parse_sexagesimal(s: &str) -> Option<u64> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let v: u64 = s.parse().ok()?;
    if v > 59 {
        return None;
    }
    Some(v)
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
