//! Sequence evaluation, deduplication and booking code collection.

use tracing::debug;

use crate::domain::{BookingCode, VendorCode};
use crate::record::BceSequence;

use super::{BceMatcher, Convention, RbDataItem, SequencePass};

/// A sequence whose segments all matched.
#[derive(Debug, Clone, Copy)]
struct MatchedSequence<'s> {
    sequence: &'s BceSequence,
    conditional: bool,
    forced: bool,
}

impl BceMatcher<'_> {
    /// Evaluate a sequence list and collect the booking codes of the
    /// sequences that apply.
    ///
    /// Sequences are tried in order until one applies unconditionally.
    /// Matched sequences that repeat an earlier match are dropped before
    /// their codes are collected.
    pub fn process_sequences(
        &mut self,
        sequences: &[BceSequence],
        booking_codes: &mut Vec<BookingCode>,
        convention: Convention,
        vendor: VendorCode,
    ) -> bool {
        self.set_convention(convention);
        self.bce_bkg_updated = false;

        let rb_request = self.is_rb_request();
        let mut matched = Vec::new();

        for sequence in sequences {
            if !self.is_valid_sequence(sequence) {
                debug!(item_no = sequence.item_no, seq_no = sequence.seq_no, "sequence skipped");
                continue;
            }

            let mut pass = SequencePass::new();
            let mut all_valid = !sequence.segments.is_empty();
            let mut conditional = false;
            let mut codes_found = false;
            for segment in &sequence.segments {
                if !self.is_valid_segment(segment, sequence, &mut pass) {
                    all_valid = false;
                    break;
                }
                conditional = self.is_rb_segment_conditional(segment) || pass.force_conditional;
                if !rb_request && booking_codes.len() > 1 {
                    debug!(
                        item_no = sequence.item_no,
                        seq_no = sequence.seq_no,
                        codes = booking_codes.len(),
                        "booking codes already found"
                    );
                    codes_found = true;
                    break;
                }
            }

            if !all_valid {
                debug!(item_no = sequence.item_no, seq_no = sequence.seq_no, "sequence did not match");
                continue;
            }

            debug!(
                item_no = sequence.item_no,
                seq_no = sequence.seq_no,
                conditional,
                forced = pass.force_conditional,
                "sequence matched"
            );
            matched.push(MatchedSequence {
                sequence,
                conditional,
                forced: pass.force_conditional,
            });
            if !conditional || codes_found {
                break;
            }
        }

        let mut i = 0;
        while i < matched.len() {
            let mut j = i + 1;
            while j < matched.len() {
                if self.is_duplicate(&matched[i], &matched[j]) {
                    debug!(
                        seq_no = matched[j].sequence.seq_no,
                        kept = matched[i].sequence.seq_no,
                        "duplicate sequence dropped"
                    );
                    matched.remove(j);
                } else {
                    j += 1;
                }
            }
            self.collect(&matched[i], booking_codes, vendor);
            i += 1;
        }

        true
    }

    fn is_duplicate(&self, kept: &MatchedSequence<'_>, other: &MatchedSequence<'_>) -> bool {
        let (a, b) = (kept.sequence, other.sequence);
        if kept.forced || other.forced {
            return false;
        }
        if a.seg_cnt != b.seg_cnt || a.segments.len() != b.segments.len() {
            return false;
        }
        a.segments
            .iter()
            .zip(&b.segments)
            .all(|(seg_a, seg_b)| self.can_remove_segment(seg_a, seg_b, a, b))
    }

    fn collect(
        &mut self,
        matched: &MatchedSequence<'_>,
        booking_codes: &mut Vec<BookingCode>,
        vendor: VendorCode,
    ) {
        let sequence = matched.sequence;

        if self.is_rb_request() {
            for segment in &sequence.segments {
                if let Some(rb) = self.rb_data.as_deref_mut() {
                    rb.add_item(RbDataItem {
                        vendor,
                        item_no: sequence.item_no,
                        seq_no: sequence.seq_no,
                        seg_no: segment.seg_no,
                    });
                    rb.set_last_segment_conditional(matched.conditional);
                }
                booking_codes.extend(segment.booking_codes());
            }
            return;
        }

        let rewrite_fare_basis =
            self.convention == Convention::One && self.fare.carrier.is_industry();
        for segment in &sequence.segments {
            for code in segment.booking_codes() {
                booking_codes.push(code);
                if rewrite_fare_basis
                    && !self.bce_bkg_updated
                    && self.change_fare_basis_code(segment, code)
                {
                    debug!(seq_no = sequence.seq_no, %code, "fare basis booking code updated");
                    self.bce_bkg_updated = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{BookingCode, VendorCode};
    use crate::fare::Owrt;
    use crate::matcher::fixtures::{Fixture, bkg, key};
    use crate::matcher::{Convention, RequestType};
    use crate::record::{
        BceSegment, BceSequence, ConstructSpecified, DirectionInd, IfTag, LocType,
        RestrictionTag,
    };

    fn seq(seq_no: u32, segments: Vec<BceSegment>) -> BceSequence {
        BceSequence::new(1, seq_no, IfTag::FareComponent, segments)
    }

    fn seg(seg_no: u16, tag: RestrictionTag, code: &str) -> BceSegment {
        BceSegment::new(seg_no, tag).with_booking_code(bkg(code))
    }

    fn codes(codes: &[BookingCode]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn run(fx: &mut Fixture, sequences: &[BceSequence], convention: Convention) -> Vec<BookingCode> {
        let mut booking_codes = Vec::new();
        assert!(fx.matcher().process_sequences(
            sequences,
            &mut booking_codes,
            convention,
            VendorCode::ATPCO
        ));
        booking_codes
    }

    #[test]
    fn stops_after_unconditional_sequence() {
        let mut fx = Fixture::fbr();
        let sequences = [
            seq(100, vec![seg(1, RestrictionTag::Required, "A")]),
            seq(200, vec![seg(1, RestrictionTag::Required, "B")]),
        ];
        let found = run(&mut fx, &sequences, Convention::Two);
        assert_eq!(codes(&found), ["A"]);
        assert_eq!(fx.rb.items().len(), 1);
        assert_eq!(fx.rb.items()[0].seq_no, 100);
        assert!(!fx.rb.is_last_segment_conditional());
    }

    #[test]
    fn conditional_sequence_continues() {
        let mut fx = Fixture::fbr();
        let sequences = [
            seq(100, vec![seg(1, RestrictionTag::Permitted, "A")]),
            seq(200, vec![seg(1, RestrictionTag::Required, "B")]),
            seq(300, vec![seg(1, RestrictionTag::Required, "C")]),
        ];
        let found = run(&mut fx, &sequences, Convention::Two);
        assert_eq!(codes(&found), ["A", "B"]);

        let seq_nos: Vec<_> = fx.rb.items().iter().map(|i| i.seq_no).collect();
        assert_eq!(seq_nos, [100, 200]);
        assert_eq!(fx.rb.items()[0].vendor, VendorCode::ATPCO);
    }

    #[test]
    fn failing_and_gated_sequences_are_skipped() {
        let mut fx = Fixture::fbr();
        let mut failing = seg(1, RestrictionTag::Required, "A");
        failing.tsi = 2;
        let mut constructed = seq(200, vec![seg(1, RestrictionTag::Required, "B")]);
        constructed.construct_specified = ConstructSpecified::Constructed;
        let sequences = [
            seq(100, vec![failing]),
            constructed,
            seq(300, vec![]),
            seq(400, vec![seg(1, RestrictionTag::Required, "D")]),
        ];
        let found = run(&mut fx, &sequences, Convention::Two);
        assert_eq!(codes(&found), ["D"]);
    }

    fn flight_restricted(seq_no: u32, code: &str) -> BceSequence {
        let mut seg1 = seg(1, RestrictionTag::Required, code);
        let mut seg2 = seg(2, RestrictionTag::Required, code);
        seg1.flight1 = 100;
        seg2.flight1 = 100;
        seq(seq_no, vec![seg1, seg2])
    }

    #[test]
    fn duplicate_sequences_are_dropped() {
        let mut fx = Fixture::fbr();
        let sequences = [flight_restricted(100, "A"), flight_restricted(200, "B")];
        let found = run(&mut fx, &sequences, Convention::Two);
        assert_eq!(codes(&found), ["A", "A"]);

        let items: Vec<_> = fx.rb.items().iter().map(|i| (i.seq_no, i.seg_no)).collect();
        assert_eq!(items, [(100, 1), (100, 2)]);
        assert!(fx.rb.is_last_segment_conditional());
    }

    #[test]
    fn different_flights_are_kept() {
        let mut fx = Fixture::fbr();
        let mut other = flight_restricted(200, "B");
        other.segments[0].flight1 = 200;
        let sequences = [flight_restricted(100, "A"), other];
        let found = run(&mut fx, &sequences, Convention::Two);
        assert_eq!(codes(&found), ["A", "A", "B", "B"]);
    }

    #[test]
    fn forced_sequences_are_not_deduplicated() {
        let mut fx = Fixture::fbr();
        fx.fare.owrt = Owrt::RoundTripMayNotBeHalved;
        let located = |seq_no, code| {
            let mut s = flight_restricted(seq_no, code);
            s.segments[0].direction_ind = DirectionInd::FromLoc1;
            s.segments[0].loc1 = key(LocType::City, "AUH");
            s.segments[0].loc2 = key(LocType::City, "LUX");
            s
        };
        let sequences = [located(100, "A"), located(200, "B")];
        let found = run(&mut fx, &sequences, Convention::Two);
        assert_eq!(codes(&found), ["A", "A", "B", "B"]);
    }

    #[test]
    fn industry_fare_rewrites_fare_basis_under_convention_one() {
        let mut fx = Fixture::industry();
        fx.config.request_type = RequestType::Fq;
        let sequences = [seq(100, vec![seg(1, RestrictionTag::Required, "A")])];

        let found = run(&mut fx, &sequences, Convention::One);
        assert_eq!(codes(&found), ["A"]);
        assert_eq!(fx.fare.change_fare_basis_bkg_code(), Some(bkg("A")));
        assert!(fx.rb.items().is_empty());
    }

    #[test]
    fn fare_basis_untouched_under_convention_two() {
        let mut fx = Fixture::industry();
        fx.config.request_type = RequestType::Fq;
        let sequences = [seq(100, vec![seg(1, RestrictionTag::Required, "A")])];

        run(&mut fx, &sequences, Convention::Two);
        assert!(fx.fare.change_fare_basis_bkg_code().is_none());
    }

    #[test]
    fn first_decisive_code_wins() {
        let mut fx = Fixture::industry();
        fx.config.request_type = RequestType::Fq;
        let mut first = seg(1, RestrictionTag::Required, "A");
        first.booking_code2 = Some(bkg("B"));
        let sequences = [seq(100, vec![first])];

        let found = run(&mut fx, &sequences, Convention::One);
        assert_eq!(codes(&found), ["A", "B"]);
        assert_eq!(fx.fare.change_fare_basis_bkg_code(), Some(bkg("A")));
    }

    #[test]
    fn non_rb_request_with_codes_keeps_matching_sequence() {
        let mut fx = Fixture::fbr();
        fx.config.request_type = RequestType::Fq;
        let sequences = [seq(100, vec![seg(1, RestrictionTag::Required, "A")])];
        let mut booking_codes = vec![bkg("Y"), bkg("B")];
        fx.matcher().process_sequences(
            &sequences,
            &mut booking_codes,
            Convention::Two,
            VendorCode::ATPCO,
        );
        assert_eq!(codes(&booking_codes), ["Y", "B", "A"]);
    }

    #[test]
    fn non_rb_request_with_codes_stops_after_first_match() {
        let mut fx = Fixture::fbr();
        fx.config.request_type = RequestType::Fq;
        let sequences = [
            seq(100, vec![seg(1, RestrictionTag::Permitted, "A")]),
            seq(200, vec![seg(1, RestrictionTag::Required, "C")]),
        ];
        let mut booking_codes = vec![bkg("Y"), bkg("B")];
        fx.matcher().process_sequences(
            &sequences,
            &mut booking_codes,
            Convention::Two,
            VendorCode::ATPCO,
        );
        assert_eq!(codes(&booking_codes), ["Y", "B", "A"]);
    }

    #[test]
    fn process_sets_convention() {
        let mut fx = Fixture::fbr();
        let mut m = fx.matcher();
        let mut booking_codes = Vec::new();
        m.process_sequences(&[], &mut booking_codes, Convention::Two, VendorCode::ATPCO);
        assert_eq!(m.convention(), Convention::Two);
        assert!(booking_codes.is_empty());
    }
}
