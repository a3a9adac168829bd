use crate::domain::{IataArea, NationCode};
use crate::fare::{GlobalDirection, TravelSeg};
use crate::geo;
use crate::record::{BceSegment, BceSequence, IfTag, TravelPortion};

use super::BceMatcher;

impl BceMatcher<'_> {
    /// Match the segment's portion of travel.
    ///
    /// Fare component segments of `IF 1` / `IF 2` sequences are checked
    /// against the first travel segment of the fare market, every other
    /// segment against `sector`.
    pub fn validate_portion_of_travel(
        &self,
        segment: &BceSegment,
        sequence: &BceSequence,
        sector: &TravelSeg,
    ) -> bool {
        let Some(portion) = &segment.tvl_portion else {
            return true;
        };

        let secondary = sequence.if_tag == IfTag::Blank || segment.seg_no > 1;
        let seg = if secondary {
            sector
        } else {
            match self.fare.first_travel_seg() {
                Some(seg) => seg,
                None => return false,
            }
        };
        let (orig, dest) = (&seg.origin, &seg.destination);
        let areas = (orig.area, dest.area);

        use IataArea::*;
        match portion {
            TravelPortion::Atlantic => {
                (secondary || self.fare.global_direction == Some(GlobalDirection::AT))
                    && crosses_area_one(areas)
            }
            TravelPortion::Pacific => {
                (secondary || self.fare.global_direction == Some(GlobalDirection::PA))
                    && crosses_area_one(areas)
            }
            TravelPortion::Canada => geo::is_within_nation(orig, dest, NationCode::CANADA),
            TravelPortion::UsDomestic => {
                geo::is_within_nation(orig, dest, NationCode::UNITED_STATES)
            }
            TravelPortion::Controlling => orig.area != dest.area || orig.nation != dest.nation,
            TravelPortion::Domestic => {
                geo::is_domestic(orig, dest) || geo::is_foreign_domestic(orig, dest)
            }
            TravelPortion::ForeignDomestic => {
                geo::is_foreign_domestic(orig, dest) && !geo::is_domestic(orig, dest)
            }
            TravelPortion::Transborder => geo::is_transborder(orig, dest),
            TravelPortion::EasternHemisphere => {
                matches!(areas, (Area2, Area2) | (Area2, Area3) | (Area3, Area2))
            }
            TravelPortion::FarEast => areas == (Area3, Area3),
            TravelPortion::WesternHemisphere => areas == (Area1, Area1),
            TravelPortion::Unmatched(_) => false,
            TravelPortion::Unrestricted(_) => true,
        }
    }
}

/// Endpoints in different areas, one of them area 1.
fn crosses_area_one((a, b): (IataArea, IataArea)) -> bool {
    a != b && (a == IataArea::Area1 || b == IataArea::Area1)
}
