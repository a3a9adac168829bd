use crate::fare::TravelSeg;
use crate::record::{BceSegment, BceSequence, IfTag, PrimarySecondary};

use super::BceMatcher;

impl BceMatcher<'_> {
    /// Match the segment's primary / secondary sector restriction.
    pub fn validate_primary_secondary(
        &self,
        segment: &BceSegment,
        sequence: &BceSequence,
        sector: &TravelSeg,
    ) -> bool {
        if segment.primary_secondary == PrimarySecondary::Blank {
            return true;
        }
        if self.fare.is_within_one_country_group() {
            return false;
        }

        let market = &self.fare.market;
        let governing = market.governing_carrier;
        let travel_carrier = sector.carrier.unwrap_or(governing);

        if sequence.if_tag == IfTag::Blank && travel_carrier == governing {
            return true;
        }

        match segment.primary_secondary {
            PrimarySecondary::Primary => {
                let prime_sector = travel_carrier == governing
                    && sector.origin.code == market.origin.code
                    && sector.destination.code == market.destination.code;
                prime_sector
                    || (self.is_rb_secondary()
                        && (sector.origin.code == market.origin.code
                            || market.boards_at(sector.orig_airport())))
            }
            PrimarySecondary::Secondary | PrimarySecondary::FromToPrimary => {
                self.is_rb_secondary()
            }
            PrimarySecondary::Blank => true,
        }
    }
}
