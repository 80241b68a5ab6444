//! Network identifiers as they appear in deployment configuration.

use crate::errors::ParseNetworkIdError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Identifies a deployment target network.
///
/// Configuration may name a network with either a number (`1`) or a string
/// (`"1"`, `"sepolia"`). Both are kept as their textual form, so the
/// number `1` and the string `"1"` are the same network. The text is used
/// verbatim as a directory name inside the broadcast output and as the key in
/// the generated deployment mapping.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NetworkId(String);

impl NetworkId {
    /// Returns the textual form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NetworkId {
    type Err = ParseNetworkIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the identifier becomes a single path component
        if s.is_empty() || s == "." || s == ".." || s.contains(['/', '\\']) {
            return Err(ParseNetworkIdError(s.to_string()));
        }
        Ok(NetworkId(s.to_string()))
    }
}

impl From<u64> for NetworkId {
    fn from(chain_id: u64) -> Self {
        NetworkId(chain_id.to_string())
    }
}

impl AsRef<str> for NetworkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NetworkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            String(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(number) => number.to_string(),
            Raw::String(name) => name,
        };
        text.parse().map_err(de::Error::custom)
    }
}
