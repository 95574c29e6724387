//! # Schema Version Tag
//!
//! The transaction wire format exists in two incompatible schema versions.
//! The tag selecting between them always travels out of band (configuration
//! or caller argument), never inside the serialized bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The wire schema a codec speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Numeric namespace ids resolved through the bijective mapping cache.
    V1,
    /// Textual namespace ids validated in place.
    V2,
}

impl SchemaVersion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configured schema version does not name a known schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown schema version [{0}]")]
pub struct UnknownSchemaVersion(pub String);

impl FromStr for SchemaVersion {
    type Err = UnknownSchemaVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            other => Err(UnknownSchemaVersion(other.to_string())),
        }
    }
}
