//! Airline carrier code type.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Error returned when parsing an invalid carrier code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrierCode {
    reason: &'static str,
}

/// A valid 2-character IATA airline designator.
///
/// Designators are uppercase letters or digits, with at least one letter
/// (e.g., "EY" for Etihad, "9W" for Jet Airways). The industry pseudo
/// carrier "YY" is a valid designator and is exposed as
/// [`CarrierCode::INDUSTRY`].
///
/// # Examples
///
/// ```
/// use bce_engine::domain::CarrierCode;
///
/// let ey = CarrierCode::parse("EY").unwrap();
/// assert_eq!(ey.as_str(), "EY");
/// assert!(CarrierCode::parse("9W").is_ok());
///
/// assert!(CarrierCode::parse("ey").is_err());
/// assert!(CarrierCode::parse("99").is_err());
/// assert!(CarrierCode::parse("EYX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CarrierCode([u8; 2]);

impl CarrierCode {
    /// The industry carrier used on fares filed by no single airline.
    pub const INDUSTRY: CarrierCode = CarrierCode(*b"YY");

    /// Parse a carrier code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCarrierCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCarrierCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidCarrierCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        if bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidCarrierCode {
                reason: "must contain at least one letter",
            });
        }

        Ok(CarrierCode([bytes[0], bytes[1]]))
    }

    /// Returns the carrier code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// True for the industry pseudo carrier "YY".
    pub fn is_industry(&self) -> bool {
        *self == Self::INDUSTRY
    }
}

impl TryFrom<String> for CarrierCode {
    type Error = InvalidCarrierCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl Serialize for CarrierCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.as_str())
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
