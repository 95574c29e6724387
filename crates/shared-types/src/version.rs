//! # Namespace Version Counter
//!
//! A row's version is an unsigned 64-bit counter. On the wire it is a
//! standard base-128 varint (little-endian group order), the same encoding
//! the transaction wire format uses for integer fields.

use prost::encoding::{decode_varint, encode_varint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row's version.
///
/// `VersionNumber(0)` is the version of a namespace that has never been
/// written. Version bytes of length 0 denote "no version" for a brand-new
/// key; they decode to 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct VersionNumber(pub u64);

impl VersionNumber {
    /// Encode this version as its varint wire representation.
    pub fn to_bytes(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(10);
        encode_varint(self.0, &mut buf);
        buf
    }

    /// Decode a version from its wire representation.
    ///
    /// Defined on every input: empty, truncated, or otherwise malformed
    /// bytes decode to `VersionNumber(0)`. Never panics.
    pub fn from_bytes(mut bytes: &[u8]) -> Self {
        Self(decode_varint(&mut bytes).unwrap_or(0))
    }
}

impl From<u64> for VersionNumber {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<VersionNumber> for u64 {
    fn from(v: VersionNumber) -> Self {
        v.0
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for v in [0u64, 1, 127, 128, 300, 1 << 63, u64::MAX] {
            let version = VersionNumber(v);
            assert_eq!(VersionNumber::from_bytes(&version.to_bytes()), version);
        }
    }

    #[test]
    fn test_single_byte_values() {
        assert_eq!(VersionNumber(0).to_bytes(), vec![0x00]);
        assert_eq!(VersionNumber(1).to_bytes(), vec![0x01]);
        assert_eq!(VersionNumber(127).to_bytes(), vec![0x7f]);
    }

    #[test]
    fn test_continuation_bit() {
        // 128 = 0b1000_0000 -> two groups, low group first
        assert_eq!(VersionNumber(128).to_bytes(), vec![0x80, 0x01]);
    }

    #[test]
    fn test_empty_input_is_no_version() {
        assert_eq!(VersionNumber::from_bytes(&[]), VersionNumber(0));
    }

    #[test]
    fn test_truncated_input_does_not_panic() {
        // Continuation bit set with no following group.
        assert_eq!(VersionNumber::from_bytes(&[0x80]), VersionNumber(0));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = VersionNumber(300).to_bytes();
        bytes.extend_from_slice(b"trailing");
        assert_eq!(VersionNumber::from_bytes(&bytes), VersionNumber(300));
    }
}
