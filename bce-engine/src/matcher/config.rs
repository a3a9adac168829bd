//! Per-transaction matcher configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fare display request type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum RequestType {
    /// `RB`: booking code rule text display.
    Rb,
    /// `FQ`: fare quote display.
    #[default]
    Fq,
    /// Any other display.
    Other(String),
}

impl From<String> for RequestType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "RB" => RequestType::Rb,
            "FQ" => RequestType::Fq,
            _ => RequestType::Other(s),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestType::Rb => f.write_str("RB"),
            RequestType::Fq => f.write_str("FQ"),
            RequestType::Other(s) => f.write_str(s),
        }
    }
}

/// Booking code exception convention.
///
/// Convention 1 tables are filed at carrier level under rule 0000;
/// convention 2 tables are filed per fare rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Convention {
    #[default]
    One,
    Two,
}

impl TryFrom<u8> for Convention {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Convention::One),
            2 => Ok(Convention::Two),
            other => Err(format!("unknown convention {other}")),
        }
    }
}

impl From<Convention> for u8 {
    fn from(c: Convention) -> u8 {
        match c {
            Convention::One => 1,
            Convention::Two => 2,
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Configuration for a [`BceMatcher`](super::BceMatcher).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Display request type. RB requests collect rule text data items.
    pub request_type: RequestType,

    /// Convention in force until a sequence list is processed.
    pub convention: Convention,
}

impl MatcherConfig {
    pub fn new(request_type: RequestType, convention: Convention) -> Self {
        Self {
            request_type,
            convention,
        }
    }
}
