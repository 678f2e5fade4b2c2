use crate::duration::Duration;
use crate::error::VastError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A point on the playback timeline, expressed either as a fraction
/// of total duration (`10%`) or as an absolute [`Duration`]
/// (`00:00:05`).
///
/// When `duration` is populated it takes precedence; otherwise the
/// offset is the percentage form. A zero percentage is identical to
/// an unset one, matching the wire format, which has no way to tell
/// them apart.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Fraction of the total duration, in [0.0, 1.0]
    pub percent: f64,

    /// Absolute form; overrides `percent` when set
    pub duration: Option<Duration>,
}

impl Offset {
    pub fn percent(percent: f64) -> Self {
        Offset {
            percent,
            duration: None,
        }
    }

    pub fn duration(duration: Duration) -> Self {
        Offset {
            percent: 0.0,
            duration: Some(duration),
        }
    }
}

impl From<Duration> for Offset {
    fn from(d: Duration) -> Self {
        Offset::duration(d)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(duration) = &self.duration {
            return fmt::Display::fmt(duration, f);
        }
        // Re-round to micro-percent so 0.1 prints as 10, not
        // 10.000000000000002
        let percent = (self.percent * 100.0 * 1e6).round() / 1e6;
        if percent.fract() == 0.0 {
            write!(f, "{}%", percent as i64)
        } else {
            write!(f, "{percent}%")
        }
    }
}

impl FromStr for Offset {
    type Err = VastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(number) = s.strip_suffix('%') {
            let percent: f64 = number
                .parse()
                .map_err(|_| VastError::InvalidOffset(s.to_string()))?;
            return Ok(Offset::percent(percent / 100.0));
        }
        let duration: Duration = s
            .parse()
            .map_err(|_| VastError::InvalidOffset(s.to_string()))?;
        Ok(Offset::duration(duration))
    }
}

impl Serialize for Offset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Offset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
