//! TSI and the qualifier checks a fare display does not evaluate.

use tracing::trace;

use crate::fare::TravelSeg;
use crate::record::{BceSegment, BceSequence, IfTag};

use super::BceMatcher;

impl BceMatcher<'_> {
    /// A segment with a TSI applies only if the TSI selects some segment.
    pub fn validate_tsi(
        &self,
        segment: &BceSegment,
        sequence: &BceSequence,
        sector: &TravelSeg,
    ) -> bool {
        if segment.tsi == 0 {
            return true;
        }

        let sector = if sequence.if_tag == IfTag::Blank || segment.seg_no != 1 {
            sector
        } else {
            match self.fare.first_travel_seg() {
                Some(seg) => seg,
                None => return false,
            }
        };

        match self.tsi.scope(segment.tsi, sector, &self.fare.market) {
            Ok(applicable) => !applicable.is_empty(),
            Err(err) => {
                trace!(tsi = segment.tsi, %err, "tsi not resolved");
                false
            }
        }
    }

    /// Point of sale is checked when the fare is priced, not displayed.
    pub fn validate_point_of_sale(&self, _segment: &BceSegment, _sequence: &BceSequence) -> bool {
        true
    }

    pub fn validate_sold_tag(&self, _segment: &BceSegment, _sequence: &BceSequence) -> bool {
        true
    }

    pub fn validate_date_time_dow(&self, _segment: &BceSegment, _sequence: &BceSequence) -> bool {
        true
    }
}
