use crate::domain::BookingCode;
use crate::record::{BceSegment, RestrictionTag};

use super::BceMatcher;

impl BceMatcher<'_> {
    /// Apply a segment's booking code to the fare's change-fare-basis slot.
    ///
    /// Returns true if the segment decided the slot, either by writing the
    /// code or by clearing it.
    pub fn change_fare_basis_code(&mut self, segment: &BceSegment, code: BookingCode) -> bool {
        use RestrictionTag::*;

        let conditional = segment.has_qualifier_data()
            || segment.tvl_portion.is_some()
            || segment.sold_in_out_ind.is_some();
        if conditional {
            return false;
        }

        match segment.restriction_tag {
            PermittedIfPrimeNotOffered
            | PermittedIfPrimeNotAvailable
            | RequiredIfPrimeNotOffered
            | RequiredIfPrimeNotAvailable
            | AdditionalDataApplies
            | DoesNotExist => {
                self.fare.set_change_fare_basis_bkg_code(None);
                true
            }
            Permitted | Required | RequiredWhenOffered | RequiredWhenAvailable => {
                self.fare.set_change_fare_basis_bkg_code(Some(code));
                true
            }
            Standby | NotPermitted | Rbd2PermittedIfRbd1Available | Rbd2RequiredIfRbd1Available => {
                false
            }
        }
    }
}
