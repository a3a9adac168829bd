//! Booking code (RBD) type.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Error returned when parsing an invalid booking code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking code: {reason}")]
pub struct InvalidBookingCode {
    reason: &'static str,
}

/// A reservation booking designator: one or two uppercase letters.
///
/// # Examples
///
/// ```
/// use bce_engine::domain::BookingCode;
///
/// assert_eq!(BookingCode::parse("Y").unwrap().as_str(), "Y");
/// assert_eq!(BookingCode::parse("YN").unwrap().as_str(), "YN");
/// assert!(BookingCode::parse("").is_err());
/// assert!(BookingCode::parse("y").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct BookingCode {
    bytes: [u8; 2],
    len: u8,
}

impl BookingCode {
    /// Parse a booking code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidBookingCode> {
        let raw = s.as_bytes();

        if raw.is_empty() || raw.len() > 2 {
            return Err(InvalidBookingCode {
                reason: "must be 1 or 2 characters",
            });
        }

        if !raw.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidBookingCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        let mut bytes = [b' '; 2];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(BookingCode {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the booking code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl TryFrom<String> for BookingCode {
    type Error = InvalidBookingCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl Serialize for BookingCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Debug for BookingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookingCode({})", self.as_str())
    }
}

impl fmt::Display for BookingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
