use crate::fare::TravelSeg;
use crate::record::{BceSegment, BceSequence, IfTag, ViaCarrier};

use super::BceMatcher;

impl BceMatcher<'_> {
    /// Match the segment's via carrier against the fare, sector and
    /// governing carriers.
    pub fn validate_carrier(
        &self,
        segment: &BceSegment,
        sequence: &BceSequence,
        sector: &TravelSeg,
    ) -> bool {
        let fare_carrier = self.fare.carrier;
        let industry = self.fare.is_industry();
        let foreign_sector = sector.carrier != Some(fare_carrier);

        let via = match segment.via_carrier {
            ViaCarrier::Any | ViaCarrier::DollarDollar => return true,
            ViaCarrier::XDollar if industry || foreign_sector => return true,
            ViaCarrier::XDollar => return false,
            ViaCarrier::Carrier(code) => code,
        };

        if sequence.is_fare_component_segment(segment) {
            if via.is_industry() && industry {
                return true;
            }
            if via == fare_carrier {
                return true;
            }
            return self
                .rb()
                .is_some_and(|rb| !rb.secondary_city_pair_same_as_prime)
                && sector.carrier == Some(via);
        }

        if via == fare_carrier {
            let conditional = sequence.if_tag == IfTag::Blank || segment.seg_no > 1;
            return !(self.is_rb_request() && sector.carrier != Some(via) && conditional);
        }

        sector.carrier == Some(via) || via == self.fare.market.governing_carrier
    }
}
