//! Coded fields of booking code exception records.
//!
//! Table 999 stores most of its fields as single characters where blank
//! means "not specified". Each field is modelled here as a closed enum, and
//! every enum deserializes from the one-character string the tables carry.

use serde::{Deserialize, Deserializer};

use crate::domain::CarrierCode;

use super::RecordError;

/// Split a raw coded field into "blank" or a single character.
fn single_code(field: &'static str, raw: &str) -> Result<Option<char>, RecordError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) | (Some(' '), None) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(RecordError::UnknownCode {
            field,
            code: raw.to_string(),
        }),
    }
}

fn unknown(field: &'static str, c: char) -> RecordError {
    RecordError::UnknownCode {
        field,
        code: c.to_string(),
    }
}

/// A free single-character indicator where blank means unset.
///
/// Used with `#[serde(deserialize_with = "...")]` on `Option<char>` fields.
pub(crate) fn indicator<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => single_code("indicator", &s).map_err(serde::de::Error::custom),
    }
}

/// A portion of travel code where blank means unrestricted.
pub(crate) fn portion<'de, D>(deserializer: D) -> Result<Option<TravelPortion>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TravelPortion::parse))
}

/// A location reference where a blank code means no location.
pub(crate) fn location<'de, D>(deserializer: D) -> Result<Option<LocKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let key = Option::<LocKey>::deserialize(deserializer)?;
    Ok(key.filter(|k| !k.is_blank()))
}

/// Scope of a sequence's `IF` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum IfTag {
    /// Applies to any matching flight.
    #[default]
    Blank,
    /// `1`: the first segment describes the fare component.
    FareComponent,
    /// `2`: the first segment may match any travel segment.
    AnyTravelSeg,
}

impl TryFrom<String> for IfTag {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match single_code("if tag", &s)? {
            None => Ok(IfTag::Blank),
            Some('1') => Ok(IfTag::FareComponent),
            Some('2') => Ok(IfTag::AnyTravelSeg),
            Some(c) => Err(unknown("if tag", c)),
        }
    }
}

/// Whether a sequence applies to constructed or specified fares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ConstructSpecified {
    #[default]
    Blank,
    /// `C`
    Constructed,
    /// `S`
    Specified,
}

impl TryFrom<String> for ConstructSpecified {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match single_code("construct/specified", &s)? {
            None => Ok(ConstructSpecified::Blank),
            Some('C') => Ok(ConstructSpecified::Constructed),
            Some('S') => Ok(ConstructSpecified::Specified),
            Some(c) => Err(unknown("construct/specified", c)),
        }
    }
}

/// What a segment says about its booking codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum RestrictionTag {
    /// `P`
    Permitted,
    /// `R`
    Required,
    /// `O`
    PermittedIfPrimeNotOffered,
    /// `A`
    PermittedIfPrimeNotAvailable,
    /// `G`
    RequiredIfPrimeNotOffered,
    /// `H`
    RequiredIfPrimeNotAvailable,
    /// `W`
    RequiredWhenOffered,
    /// `V`
    RequiredWhenAvailable,
    /// `B`
    Rbd2PermittedIfRbd1Available,
    /// `D`
    Rbd2RequiredIfRbd1Available,
    /// `U`
    AdditionalDataApplies,
    /// `S`
    Standby,
    /// `X`
    NotPermitted,
    /// `N`
    DoesNotExist,
}

impl RestrictionTag {
    /// Map a table character to its tag.
    pub fn from_code(c: char) -> Result<Self, RecordError> {
        use RestrictionTag::*;
        Ok(match c {
            'P' => Permitted,
            'R' => Required,
            'O' => PermittedIfPrimeNotOffered,
            'A' => PermittedIfPrimeNotAvailable,
            'G' => RequiredIfPrimeNotOffered,
            'H' => RequiredIfPrimeNotAvailable,
            'W' => RequiredWhenOffered,
            'V' => RequiredWhenAvailable,
            'B' => Rbd2PermittedIfRbd1Available,
            'D' => Rbd2RequiredIfRbd1Available,
            'U' => AdditionalDataApplies,
            'S' => Standby,
            'X' => NotPermitted,
            'N' => DoesNotExist,
            other => return Err(unknown("restriction tag", other)),
        })
    }

    /// The table character for this tag.
    pub fn code(&self) -> char {
        use RestrictionTag::*;
        match self {
            Permitted => 'P',
            Required => 'R',
            PermittedIfPrimeNotOffered => 'O',
            PermittedIfPrimeNotAvailable => 'A',
            RequiredIfPrimeNotOffered => 'G',
            RequiredIfPrimeNotAvailable => 'H',
            RequiredWhenOffered => 'W',
            RequiredWhenAvailable => 'V',
            Rbd2PermittedIfRbd1Available => 'B',
            Rbd2RequiredIfRbd1Available => 'D',
            AdditionalDataApplies => 'U',
            Standby => 'S',
            NotPermitted => 'X',
            DoesNotExist => 'N',
        }
    }
}

impl TryFrom<String> for RestrictionTag {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match single_code("restriction tag", &s)? {
            Some(c) => Self::from_code(c),
            None => Err(RecordError::MissingField("restriction tag")),
        }
    }
}

/// Carrier filter on a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ViaCarrier {
    /// Blank: any carrier.
    #[default]
    Any,
    /// `$$`: any carrier.
    DollarDollar,
    /// `X$`: any carrier other than the fare's own.
    XDollar,
    /// A specific carrier, including the industry carrier `YY`.
    Carrier(CarrierCode),
}

impl ViaCarrier {
    pub fn parse(s: &str) -> Result<Self, RecordError> {
        match s.trim() {
            "" => Ok(ViaCarrier::Any),
            "$$" => Ok(ViaCarrier::DollarDollar),
            "X$" => Ok(ViaCarrier::XDollar),
            code => CarrierCode::parse(code)
                .map(ViaCarrier::Carrier)
                .map_err(|e| RecordError::InvalidField {
                    field: "via carrier",
                    message: e.to_string(),
                }),
        }
    }

    /// The specific carrier named, if any.
    pub fn carrier(&self) -> Option<CarrierCode> {
        match self {
            ViaCarrier::Carrier(code) => Some(*code),
            _ => None,
        }
    }
}

impl TryFrom<String> for ViaCarrier {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// Geographic portion of travel a segment is restricted to.
///
/// Tables dispatch on the first letter of the two-letter code; the second
/// letter only disambiguates the `C` and `F` families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelPortion {
    /// AT: via the Atlantic.
    Atlantic,
    /// CA: wholly within Canada.
    Canada,
    /// CO: the controlling portion.
    Controlling,
    /// DO: domestic or foreign domestic.
    Domestic,
    /// EH: Eastern Hemisphere.
    EasternHemisphere,
    /// FD: foreign domestic, excluding US and Canada.
    ForeignDomestic,
    /// FE: Far East.
    FarEast,
    /// PA: via the Pacific.
    Pacific,
    /// TB: transborder between the US and Canada.
    Transborder,
    /// US: wholly within the United States.
    UsDomestic,
    /// WH: Western Hemisphere.
    WesternHemisphere,
    /// A `C` or `F` code outside CA, CO, FD and FE. Never matches.
    Unmatched(String),
    /// Any other code. Always matches.
    Unrestricted(String),
}

impl TravelPortion {
    /// Parse a portion code. Blank codes are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim();
        let mut chars = code.chars();
        let first = chars.next()?;
        let second = chars.next();
        Some(match (first, second) {
            ('A', _) => TravelPortion::Atlantic,
            ('C', Some('A')) => TravelPortion::Canada,
            ('C', Some('O')) => TravelPortion::Controlling,
            ('C', _) => TravelPortion::Unmatched(code.to_string()),
            ('D', _) => TravelPortion::Domestic,
            ('E', _) => TravelPortion::EasternHemisphere,
            ('F', Some('D')) => TravelPortion::ForeignDomestic,
            ('F', Some('E')) => TravelPortion::FarEast,
            ('F', _) => TravelPortion::Unmatched(code.to_string()),
            ('P', _) => TravelPortion::Pacific,
            ('T', _) => TravelPortion::Transborder,
            ('U', _) => TravelPortion::UsDomestic,
            ('W', _) => TravelPortion::WesternHemisphere,
            _ => TravelPortion::Unrestricted(code.to_string()),
        })
    }
}

/// Directionality of the loc1 / loc2 pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DirectionInd {
    /// Blank: travel between loc1 and loc2 in either direction.
    #[default]
    Between,
    /// `1`: travel from loc1 to loc2.
    FromLoc1,
    /// `2`: travel from loc2 to loc1.
    FromLoc2,
    /// `3`: fares originating at loc1.
    OriginLoc1,
    /// `4`: fares originating at loc2.
    OriginLoc2,
    /// Any other code. Fails the sequence.
    Other(char),
}

impl TryFrom<String> for DirectionInd {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Ok(match single_code("direction", &s)? {
            None => DirectionInd::Between,
            Some('1') => DirectionInd::FromLoc1,
            Some('2') => DirectionInd::FromLoc2,
            Some('3') => DirectionInd::OriginLoc1,
            Some('4') => DirectionInd::OriginLoc2,
            Some(c) => DirectionInd::Other(c),
        })
    }
}

/// Primary / secondary sector restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PrimarySecondary {
    #[default]
    Blank,
    /// `P`
    Primary,
    /// `S`
    Secondary,
    /// `T`: from / to the primary sector.
    FromToPrimary,
}

impl TryFrom<String> for PrimarySecondary {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match single_code("primary/secondary", &s)? {
            None => Ok(PrimarySecondary::Blank),
            Some('P') => Ok(PrimarySecondary::Primary),
            Some('S') => Ok(PrimarySecondary::Secondary),
            Some('T') => Ok(PrimarySecondary::FromToPrimary),
            Some(c) => Err(unknown("primary/secondary", c)),
        }
    }
}

/// How a segment's `fareclass` field is compared with the fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum FareClassType {
    #[default]
    Blank,
    /// `T`: fare type.
    FareType,
    /// `F`: full fare class.
    FareClass,
    /// `M`: fare class mask with `-` and `?` wildcards.
    Mask,
    /// `A`: first letter of the fare class.
    FirstLetter,
    /// Any other code. Never matches.
    Other(char),
}

impl TryFrom<String> for FareClassType {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match single_code("fare class type", &s)? {
            None => Ok(FareClassType::Blank),
            Some('T') => Ok(FareClassType::FareType),
            Some('F') => Ok(FareClassType::FareClass),
            Some('M') => Ok(FareClassType::Mask),
            Some('A') => Ok(FareClassType::FirstLetter),
            Some(c) => Ok(FareClassType::Other(c)),
        }
    }
}

/// Kind of location a [`LocKey`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LocType {
    /// Blank: matched against the airport or city code.
    #[default]
    Unspecified,
    /// `A`
    Area,
    /// `*`
    SubArea,
    /// `C`
    City,
    /// `P`
    Airport,
    /// `N`
    Nation,
    /// `S`
    State,
    /// `Z`
    Zone,
}

impl TryFrom<String> for LocType {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match single_code("location type", &s)? {
            None => Ok(LocType::Unspecified),
            Some('A') => Ok(LocType::Area),
            Some('*') => Ok(LocType::SubArea),
            Some('C') => Ok(LocType::City),
            Some('P') => Ok(LocType::Airport),
            Some('N') => Ok(LocType::Nation),
            Some('S') => Ok(LocType::State),
            Some('Z') => Ok(LocType::Zone),
            Some(c) => Err(unknown("location type", c)),
        }
    }
}

/// A typed location reference, e.g. city `LUX` or area `2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct LocKey {
    #[serde(rename = "type", default)]
    pub loc_type: LocType,
    pub code: String,
}

impl LocKey {
    pub fn new(loc_type: LocType, code: impl Into<String>) -> Self {
        Self {
            loc_type,
            code: code.into(),
        }
    }

    /// True if no location code is given.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}
