use crate::record::{BceSegment, BceSequence, RestrictionTag};

use super::BceMatcher;

impl BceMatcher<'_> {
    /// True if `seg_b` duplicates `seg_a` and may be dropped.
    ///
    /// A lone segment, or segment 2 of a two-segment sequence, is kept
    /// unless both segments are required. Otherwise the segments must
    /// carry the same conditional data.
    pub fn can_remove_segment(
        &self,
        seg_a: &BceSegment,
        seg_b: &BceSegment,
        seq_a: &BceSequence,
        _seq_b: &BceSequence,
    ) -> bool {
        let guarded = seq_a.seg_cnt == 1 || (seq_a.seg_cnt == 2 && seg_a.seg_no == 2);
        let both_required = seg_a.restriction_tag == RestrictionTag::Required
            && seg_b.restriction_tag == RestrictionTag::Required;
        if guarded && !both_required {
            return false;
        }

        seg_a.flt_range_appl == seg_b.flt_range_appl
            && seg_a.flight1 == seg_b.flight1
            && seg_a.flight2 == seg_b.flight2
            && seg_a.equip_type == seg_b.equip_type
            && seg_a.pos_tsi == seg_b.pos_tsi
            && seg_a.pos_loc_type == seg_b.pos_loc_type
            && seg_a.pos_loc == seg_b.pos_loc
            && seg_a.sell_tkt_ind == seg_b.sell_tkt_ind
            && seg_a.window == seg_b.window
            && seg_a.restriction_tag == seg_b.restriction_tag
            && seg_a.arb_zone_no == seg_b.arb_zone_no
    }
}
