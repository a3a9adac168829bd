//! Conditional segment classification.

use crate::record::{BceSegment, RestrictionTag};

use super::{BceMatcher, Convention};

impl BceMatcher<'_> {
    /// True if the segment only applies under conditions a fare display
    /// cannot check, so its booking codes are shown as conditional.
    pub fn is_rb_segment_conditional(&self, segment: &BceSegment) -> bool {
        use RestrictionTag::*;

        if segment.has_qualifier_data() {
            return true;
        }
        match segment.restriction_tag {
            Permitted
            | PermittedIfPrimeNotOffered
            | PermittedIfPrimeNotAvailable
            | RequiredIfPrimeNotOffered
            | RequiredIfPrimeNotAvailable
            | RequiredWhenOffered
            | RequiredWhenAvailable => true,
            Rbd2PermittedIfRbd1Available | Rbd2RequiredIfRbd1Available => {
                self.convention == Convention::Two
            }
            _ => false,
        }
    }
}
