//! Resolved locations and travel segments.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{CarrierCode, IataArea, LocCode, NationCode};

/// A resolved airport with its city, nation and IATA area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Loc {
    /// Airport code.
    pub code: LocCode,
    /// Metropolitan city code; the airport code when absent.
    #[serde(default)]
    pub city: Option<LocCode>,
    pub nation: NationCode,
    pub area: IataArea,
    /// IATA sub area, e.g. "21" for Europe.
    #[serde(default)]
    pub sub_area: Option<String>,
    /// State or province, for US and Canadian points.
    #[serde(default)]
    pub state: Option<String>,
}

impl Loc {
    /// Create a location with no city, sub area or state.
    pub fn new(code: LocCode, nation: NationCode, area: IataArea) -> Self {
        Self {
            code,
            city: None,
            nation,
            area,
            sub_area: None,
            state: None,
        }
    }

    /// The metropolitan city of the airport.
    pub fn city(&self) -> LocCode {
        self.city.unwrap_or(self.code)
    }
}

/// A flown air segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TravelSeg {
    pub origin: Loc,
    pub destination: Loc,
    /// Marketing carrier. Absent on surface or open segments.
    #[serde(default)]
    pub carrier: Option<CarrierCode>,
    pub departure: NaiveDate,
}

impl TravelSeg {
    pub fn new(
        origin: Loc,
        destination: Loc,
        carrier: Option<CarrierCode>,
        departure: NaiveDate,
    ) -> Self {
        Self {
            origin,
            destination,
            carrier,
            departure,
        }
    }

    pub fn orig_airport(&self) -> LocCode {
        self.origin.code
    }

    pub fn dest_airport(&self) -> LocCode {
        self.destination.code
    }
}
