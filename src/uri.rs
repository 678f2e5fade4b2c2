use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A URI-valued text field.
///
/// VAST documents routinely pad URIs with newlines and indentation,
/// so construction strips leading and trailing whitespace. The stored
/// value is canonical and renders unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    pub fn new(value: impl AsRef<str>) -> Self {
        Uri(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Uri {
    fn from(value: &str) -> Self {
        Uri::new(value)
    }
}

impl From<String> for Uri {
    fn from(value: String) -> Self {
        Uri::new(value)
    }
}

impl FromStr for Uri {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Uri::new(s))
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Uri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Uri::new(s))
    }
}
