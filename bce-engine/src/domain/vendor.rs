//! Fare data vendor code type.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Error returned when parsing an invalid vendor code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid vendor code: {reason}")]
pub struct InvalidVendorCode {
    reason: &'static str,
}

/// A data vendor code such as "ATP" (ATPCO) or "SITA".
///
/// Vendor codes are 2 to 4 uppercase ASCII letters or digits. Anything that
/// is not ATPCO or SITA is a private vendor; fares from private vendors are
/// "SMF" fares and look up booking code exceptions under their own rules.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct VendorCode {
    bytes: [u8; 4],
    len: u8,
}

impl VendorCode {
    /// ATPCO.
    pub const ATPCO: VendorCode = VendorCode {
        bytes: *b"ATP ",
        len: 3,
    };

    /// SITA.
    pub const SITA: VendorCode = VendorCode {
        bytes: *b"SITA",
        len: 4,
    };

    /// Parse a vendor code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidVendorCode> {
        let raw = s.as_bytes();

        if !(2..=4).contains(&raw.len()) {
            return Err(InvalidVendorCode {
                reason: "must be 2 to 4 characters",
            });
        }

        if !raw
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidVendorCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        let mut bytes = [b' '; 4];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(VendorCode {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the vendor code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    /// True for ATPCO and SITA, the public fare vendors.
    pub fn is_public(&self) -> bool {
        *self == Self::ATPCO || *self == Self::SITA
    }
}

impl TryFrom<String> for VendorCode {
    type Error = InvalidVendorCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl Serialize for VendorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Debug for VendorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VendorCode({})", self.as_str())
    }
}

impl fmt::Display for VendorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
