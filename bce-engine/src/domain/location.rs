//! Location code types: airport / city codes, nations and IATA areas.

use std::fmt;

use serde::Deserialize;

/// Error returned when parsing an invalid airport or city code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport or city code.
///
/// # Examples
///
/// ```
/// use bce_engine::domain::LocCode;
///
/// let lux = LocCode::parse("LUX").unwrap();
/// assert_eq!(lux.as_str(), "LUX");
///
/// assert!(LocCode::parse("lux").is_err());
/// assert!(LocCode::parse("LU").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct LocCode([u8; 3]);

impl LocCode {
    /// Parse a location code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidLocCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidLocCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidLocCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(LocCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the location code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl TryFrom<String> for LocCode {
    type Error = InvalidLocCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Debug for LocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocCode({})", self.as_str())
    }
}

impl fmt::Display for LocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid nation code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid nation code: {reason}")]
pub struct InvalidNationCode {
    reason: &'static str,
}

/// A 2-letter ISO nation code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct NationCode([u8; 2]);

impl NationCode {
    pub const UNITED_STATES: NationCode = NationCode(*b"US");
    pub const CANADA: NationCode = NationCode(*b"CA");

    /// Parse a nation code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidNationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidNationCode {
                reason: "must be exactly 2 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidNationCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(NationCode([bytes[0], bytes[1]]))
    }

    /// Returns the nation code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// True for the United States and Canada.
    pub fn is_us_or_canada(&self) -> bool {
        *self == Self::UNITED_STATES || *self == Self::CANADA
    }
}

impl TryFrom<String> for NationCode {
    type Error = InvalidNationCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Debug for NationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NationCode({})", self.as_str())
    }
}

impl fmt::Display for NationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid IATA area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA area: {0:?}")]
pub struct InvalidIataArea(String);

/// One of the three IATA traffic conference areas.
///
/// Area 1 is the Americas, area 2 Europe / Middle East / Africa, area 3
/// Asia / Pacific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IataArea {
    Area1,
    Area2,
    Area3,
}

impl IataArea {
    /// Parse an area from its digit ("1", "2" or "3").
    pub fn parse(s: &str) -> Result<Self, InvalidIataArea> {
        match s {
            "1" => Ok(IataArea::Area1),
            "2" => Ok(IataArea::Area2),
            "3" => Ok(IataArea::Area3),
            other => Err(InvalidIataArea(other.to_string())),
        }
    }

    /// Returns the area digit.
    pub fn as_str(&self) -> &'static str {
        match self {
            IataArea::Area1 => "1",
            IataArea::Area2 => "2",
            IataArea::Area3 => "3",
        }
    }
}

impl TryFrom<String> for IataArea {
    type Error = InvalidIataArea;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Display for IataArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
