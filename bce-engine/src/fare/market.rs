//! Fare markets and their directionality.

use serde::Deserialize;

use crate::domain::{CarrierCode, LocCode};

use super::loc::{Loc, TravelSeg};

/// Direction of a fare market relative to the journey origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FmDirection {
    #[default]
    Unknown,
    Outbound,
    Inbound,
}

/// Global direction assigned to a fare.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GlobalDirection {
    /// Via Africa.
    AF,
    /// Via the Atlantic and Pacific.
    AP,
    /// Via the Atlantic.
    AT,
    /// Circle trip.
    CT,
    /// Domestic.
    DO,
    /// Eastern Hemisphere.
    EH,
    /// Within Europe and the Middle East.
    EM,
    /// Via Europe.
    EU,
    /// Far East.
    FE,
    /// Via the Middle East.
    ME,
    /// Within North America.
    NA,
    /// Via the Pacific.
    PA,
    /// Via the North / Central Pacific.
    PN,
    /// Via the polar route.
    PO,
    /// Russia and area 3.
    RU,
    /// Round the world.
    RW,
    /// Via the South Atlantic.
    SA,
    /// Via the Trans-Siberian route.
    TS,
    /// Western Hemisphere.
    WH,
}

/// The origin / destination pair a fare applies to, with its flown segments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FareMarket {
    pub origin: Loc,
    pub destination: Loc,
    /// Board point city as used for multi-airport cities.
    #[serde(default)]
    pub board_multi_city: Option<LocCode>,
    pub governing_carrier: CarrierCode,
    #[serde(default)]
    pub direction: FmDirection,
    pub travel_segs: Vec<TravelSeg>,
}

impl FareMarket {
    /// The first flown segment of the market.
    pub fn first_travel_seg(&self) -> Option<&TravelSeg> {
        self.travel_segs.first()
    }

    /// Origin and destination, swapped for inbound markets.
    pub fn directional_endpoints(&self) -> (&Loc, &Loc) {
        match self.direction {
            FmDirection::Inbound => (&self.destination, &self.origin),
            _ => (&self.origin, &self.destination),
        }
    }

    /// True if the market's board city is the given airport code.
    pub fn boards_at(&self, airport: LocCode) -> bool {
        self.board_multi_city == Some(airport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(direction: &str) -> FareMarket {
        let json = format!(
            r#"{{
                "origin": {{"code": "LUX", "nation": "LU", "area": "2"}},
                "destination": {{"code": "AUH", "nation": "AE", "area": "2"}},
                "governing_carrier": "EY",
                "direction": "{direction}",
                "travel_segs": []
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn outbound_endpoints_are_unchanged() {
        let fm = market("outbound");
        let (orig, dest) = fm.directional_endpoints();
        assert_eq!(orig.code.as_str(), "LUX");
        assert_eq!(dest.code.as_str(), "AUH");
    }

    #[test]
    fn inbound_endpoints_are_swapped() {
        let fm = market("inbound");
        assert_eq!(fm.direction, FmDirection::Inbound);
        let (orig, dest) = fm.directional_endpoints();
        assert_eq!(orig.code.as_str(), "AUH");
        assert_eq!(dest.code.as_str(), "LUX");
    }

    #[test]
    fn empty_market_has_no_first_segment() {
        let fm = market("unknown");
        assert!(fm.first_travel_seg().is_none());
        assert!(!fm.boards_at(LocCode::parse("LUX").unwrap()));
    }

    #[test]
    fn global_direction_from_code() {
        let gd: GlobalDirection = serde_json::from_str("\"AT\"").unwrap();
        assert_eq!(gd, GlobalDirection::AT);
        assert!(serde_json::from_str::<GlobalDirection>("\"QQ\"").is_err());
    }
}
