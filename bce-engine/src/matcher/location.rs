use crate::fare::Loc;
use crate::record::{BceSegment, BceSequence, DirectionInd, LocKey};

use super::{BceMatcher, CondDirState, SequencePass};

/// Result of one directional check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocCheck {
    Pass,
    /// The sector does not match; the sequence may still apply through
    /// an earlier conditional match.
    FailFlight,
    FailSequence,
}

impl BceMatcher<'_> {
    fn in_loc(&self, loc: &Loc, key: Option<&LocKey>) -> bool {
        key.is_none_or(|key| key.is_blank() || self.locs.is_in_loc(loc, key))
    }

    /// Match the segment's loc1 / loc2 pair and direction.
    ///
    /// Fare component segments are checked against the fare market's
    /// endpoints, other segments against the sector under display. A
    /// conditional segment that matches between its locations satisfies
    /// the rest of the sequence; one that misses fails the sequence if it
    /// is the last segment.
    pub fn validate_location(
        &self,
        segment: &BceSegment,
        sequence: &BceSequence,
        pass: &mut SequencePass,
    ) -> bool {
        let last = sequence.is_last_segment(segment);
        if !segment.has_locations() || pass.state == CondDirState::Matched {
            return !(pass.state == CondDirState::NotMatched && last);
        }

        let Some(sector) = self
            .display_sector()
            .or_else(|| self.fare.first_travel_seg())
        else {
            return false;
        };

        let market = &self.fare.market;
        let fare_component = sequence.is_fare_component_segment(segment);
        let round_trip = self.is_rb_request() && self.fare.is_round_trip();
        let loc1 = segment.loc1.as_ref();
        let loc2 = segment.loc2.as_ref();

        // Fare endpoints with the round trip rescue: either location may
        // match the opposite end of a round trip fare.
        let fare_ends = |first: &Loc, second: &Loc, pass: &mut SequencePass| {
            let ok = (self.in_loc(first, loc1) || (round_trip && self.in_loc(second, loc1)))
                && (self.in_loc(second, loc2) || (round_trip && self.in_loc(first, loc2)));
            if !ok {
                return LocCheck::FailSequence;
            }
            if round_trip {
                pass.force_conditional = true;
            }
            LocCheck::Pass
        };
        let sector_ends = |first: &Loc, second: &Loc| {
            if self.in_loc(first, loc1) && self.in_loc(second, loc2) {
                LocCheck::Pass
            } else {
                LocCheck::FailFlight
            }
        };

        let check = match segment.direction_ind {
            DirectionInd::FromLoc1 if fare_component => {
                fare_ends(&market.origin, &market.destination, pass)
            }
            DirectionInd::FromLoc1 => sector_ends(&sector.origin, &sector.destination),
            DirectionInd::FromLoc2 if fare_component => {
                fare_ends(&market.destination, &market.origin, pass)
            }
            DirectionInd::FromLoc2 => sector_ends(&sector.destination, &sector.origin),
            DirectionInd::OriginLoc1 | DirectionInd::OriginLoc2 if fare_component => {
                let (orig, dest) = market.directional_endpoints();
                let (first, second) = if segment.direction_ind == DirectionInd::OriginLoc1 {
                    (orig, dest)
                } else {
                    (dest, orig)
                };
                if self.in_loc(first, loc1) && self.in_loc(second, loc2) {
                    LocCheck::Pass
                } else {
                    LocCheck::FailSequence
                }
            }
            DirectionInd::OriginLoc1 | DirectionInd::OriginLoc2 => LocCheck::FailFlight,
            DirectionInd::Between => {
                let (orig, dest) = if fare_component {
                    (&market.origin, &market.destination)
                } else {
                    (&sector.origin, &sector.destination)
                };
                let within = loc1.is_some_and(|l| !l.is_blank()) && loc1 == loc2;
                let matched = if within {
                    self.in_loc(orig, loc1) && self.in_loc(dest, loc1)
                } else {
                    (self.in_loc(orig, loc1) && self.in_loc(dest, loc2))
                        || (self.in_loc(orig, loc2) && self.in_loc(dest, loc1))
                };

                match (matched, fare_component, within) {
                    (true, false, false) => {
                        pass.state = CondDirState::Matched;
                        LocCheck::Pass
                    }
                    (true, _, _) => LocCheck::Pass,
                    (false, true, _) => LocCheck::FailSequence,
                    (false, false, true) => LocCheck::FailFlight,
                    (false, false, false) => {
                        pass.state = CondDirState::NotMatched;
                        LocCheck::FailFlight
                    }
                }
            }
            DirectionInd::Other(_) => LocCheck::FailSequence,
        };

        if pass.state == CondDirState::NotMatched && last {
            return false;
        }
        match check {
            LocCheck::Pass => true,
            LocCheck::FailFlight => pass.state != CondDirState::NoValidation,
            LocCheck::FailSequence => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fare::{FmDirection, Owrt};
    use crate::matcher::fixtures::{Fixture, key};
    use crate::matcher::{CondDirState, SequencePass};
    use crate::record::{BceSegment, BceSequence, DirectionInd, IfTag, LocType};

    fn located(dir: DirectionInd, loc_type: LocType, loc1: &str, loc2: &str) -> BceSegment {
        let mut seg = Fixture::segment();
        seg.direction_ind = dir;
        seg.loc1 = key(loc_type, loc1);
        seg.loc2 = key(loc_type, loc2);
        seg
    }

    fn primary(fx: &mut Fixture, dir: DirectionInd, loc1: &str, loc2: &str) -> bool {
        let seg = located(dir, LocType::City, loc1, loc2);
        let seq = Fixture::sequence();
        fx.matcher()
            .validate_location(&seg, &seq, &mut SequencePass::new())
    }

    /// Second segment of a two-segment `IF 1` sequence.
    fn secondary(fx: &mut Fixture, dir: DirectionInd, loc1: &str, loc2: &str) -> bool {
        let mut seg = located(dir, LocType::City, loc1, loc2);
        seg.seg_no = 2;
        let mut seq = Fixture::sequence();
        seq.seg_cnt = 2;
        fx.matcher()
            .validate_location(&seg, &seq, &mut SequencePass::new())
    }

    fn blank_if(fx: &mut Fixture, loc_type: LocType, loc1: &str, loc2: &str) -> bool {
        let seg = located(DirectionInd::Between, loc_type, loc1, loc2);
        let mut seq = Fixture::sequence();
        seq.if_tag = IfTag::Blank;
        fx.matcher()
            .validate_location(&seg, &seq, &mut SequencePass::new())
    }

    fn secondary_display() -> Fixture {
        let mut fx = Fixture::fbr();
        fx.rb.air_seg = Some(Fixture::secondary_sector("IB"));
        fx
    }

    #[test]
    fn no_locations_pass() {
        let mut fx = Fixture::fbr();
        let seq = Fixture::sequence();
        for dir in [
            DirectionInd::Between,
            DirectionInd::FromLoc1,
            DirectionInd::FromLoc2,
            DirectionInd::OriginLoc1,
            DirectionInd::OriginLoc2,
            DirectionInd::Other('9'),
        ] {
            let mut seg = Fixture::segment();
            seg.direction_ind = dir;
            assert!(
                fx.matcher()
                    .validate_location(&seg, &seq, &mut SequencePass::new()),
                "{dir:?}"
            );
        }
    }

    #[test]
    fn blank_locations_pass() {
        let mut fx = Fixture::fbr();
        let seq = Fixture::sequence();
        for dir in [
            DirectionInd::Between,
            DirectionInd::FromLoc1,
            DirectionInd::OriginLoc1,
        ] {
            let seg = located(dir, LocType::Unspecified, "", " ");
            assert!(
                fx.matcher()
                    .validate_location(&seg, &seq, &mut SequencePass::new()),
                "{dir:?}"
            );
        }

        let json = r#"{
            "direction_ind": "1",
            "loc1": {"type": " ", "code": ""},
            "loc2": {"type": " ", "code": ""}
        }"#;
        let seg: BceSegment = serde_json::from_str(json).unwrap();
        assert!(
            fx.matcher()
                .validate_location(&seg, &seq, &mut SequencePass::new())
        );
    }

    #[test]
    fn one_blank_location_leaves_the_other() {
        let mut fx = Fixture::fbr();
        let seq = Fixture::sequence();
        let mut seg = located(DirectionInd::FromLoc1, LocType::City, "", "AUH");
        assert!(
            fx.matcher()
                .validate_location(&seg, &seq, &mut SequencePass::new())
        );
        seg.loc2 = key(LocType::City, "NYC");
        assert!(
            !fx.matcher()
                .validate_location(&seg, &seq, &mut SequencePass::new())
        );
    }

    #[test]
    fn not_matched_fails_last_segment() {
        let mut fx = Fixture::fbr();
        let seq = Fixture::sequence();
        let seg = Fixture::segment();
        let mut pass = SequencePass::new();
        pass.state = CondDirState::NotMatched;
        assert!(!fx.matcher().validate_location(&seg, &seq, &mut pass));
    }

    #[test]
    fn from_loc1_primary() {
        let mut fx = Fixture::fbr();
        let dir = DirectionInd::FromLoc1;
        assert!(!primary(&mut fx, dir, "LUX", "ABC"));
        assert!(!primary(&mut fx, dir, "ABC", "AUH"));
        assert!(primary(&mut fx, dir, "LUX", "AUH"));
        assert!(!primary(&mut fx, dir, "AUH", "LUX"));

        fx.fare.owrt = Owrt::RoundTripMayNotBeHalved;
        assert!(primary(&mut fx, dir, "AUH", "LUX"));
    }

    #[test]
    fn round_trip_forces_conditional() {
        let mut fx = Fixture::fbr();
        fx.fare.owrt = Owrt::RoundTripMayNotBeHalved;
        let seg = located(DirectionInd::FromLoc1, LocType::City, "AUH", "LUX");
        let mut pass = SequencePass::new();
        assert!(fx
            .matcher()
            .validate_location(&seg, &Fixture::sequence(), &mut pass));
        assert!(pass.force_conditional);
    }

    #[test]
    fn round_trip_rescue_is_rb_only() {
        let mut fx = Fixture::fbr();
        fx.fare.owrt = Owrt::RoundTripMayNotBeHalved;
        fx.config.request_type = crate::matcher::RequestType::Fq;
        assert!(!primary(&mut fx, DirectionInd::FromLoc1, "AUH", "LUX"));
    }

    #[test]
    fn from_loc1_secondary() {
        let mut fx = secondary_display();
        let dir = DirectionInd::FromLoc1;
        assert!(!secondary(&mut fx, dir, "LON", "ABC"));
        assert!(!secondary(&mut fx, dir, "ABC", "MAD"));
        assert!(secondary(&mut fx, dir, "LON", "MAD"));
        assert!(!secondary(&mut fx, dir, "MAD", "LON"));
    }

    #[test]
    fn from_loc2_primary() {
        let mut fx = Fixture::fbr();
        let dir = DirectionInd::FromLoc2;
        assert!(!primary(&mut fx, dir, "LUX", "ABC"));
        assert!(!primary(&mut fx, dir, "ABC", "AUH"));
        assert!(!primary(&mut fx, dir, "LUX", "AUH"));
        assert!(primary(&mut fx, dir, "AUH", "LUX"));

        fx.fare.owrt = Owrt::RoundTripMayNotBeHalved;
        assert!(primary(&mut fx, dir, "LUX", "AUH"));
    }

    #[test]
    fn from_loc2_secondary() {
        let mut fx = secondary_display();
        let dir = DirectionInd::FromLoc2;
        assert!(!secondary(&mut fx, dir, "LON", "MAD"));
        assert!(secondary(&mut fx, dir, "MAD", "LON"));
    }

    #[test]
    fn origin_loc1() {
        let mut fx = Fixture::fbr();
        let dir = DirectionInd::OriginLoc1;
        assert!(primary(&mut fx, dir, "LUX", "AUH"));
        assert!(!primary(&mut fx, dir, "AUH", "LUX"));

        fx.fare.market.direction = FmDirection::Inbound;
        assert!(primary(&mut fx, dir, "AUH", "LUX"));

        let mut fx = secondary_display();
        assert!(!secondary(&mut fx, dir, "LON", "MAD"));
    }

    #[test]
    fn origin_loc2() {
        let mut fx = Fixture::fbr();
        let dir = DirectionInd::OriginLoc2;
        assert!(!primary(&mut fx, dir, "LUX", "AUH"));
        assert!(primary(&mut fx, dir, "AUH", "LUX"));

        fx.fare.market.direction = FmDirection::Inbound;
        assert!(primary(&mut fx, dir, "LUX", "AUH"));

        let mut fx = secondary_display();
        assert!(!secondary(&mut fx, dir, "MAD", "LON"));
    }

    #[test]
    fn unknown_direction_fails() {
        let mut fx = Fixture::fbr();
        assert!(!primary(&mut fx, DirectionInd::Other('9'), "LUX", "AUH"));
    }

    #[test]
    fn between_primary() {
        let mut fx = Fixture::fbr();
        let dir = DirectionInd::Between;
        let area = |loc1: &str, loc2: &str| located(dir, LocType::Area, loc1, loc2);
        let seq = Fixture::sequence();
        let mut run = |seg: BceSegment| {
            fx.matcher()
                .validate_location(&seg, &seq, &mut SequencePass::new())
        };
        assert!(!run(area("1", "2")));
        assert!(!run(area("2", "1")));
        assert!(run(area("2", "2")));

        assert!(!primary(&mut fx, dir, "LUX", "ABC"));
        assert!(!primary(&mut fx, dir, "ABC", "AUH"));
        assert!(primary(&mut fx, dir, "LUX", "AUH"));
        assert!(primary(&mut fx, dir, "AUH", "LUX"));
    }

    #[test]
    fn between_one_location() {
        let mut fx = Fixture::fbr();
        let mut seg = located(DirectionInd::Between, LocType::City, "AUH", "");
        seg.loc2 = None;
        assert!(fx
            .matcher()
            .validate_location(&seg, &Fixture::sequence(), &mut SequencePass::new()));
    }

    #[test]
    fn between_blank_if_tag() {
        let mut fx = secondary_display();
        assert!(!blank_if(&mut fx, LocType::Area, "1", "2"));
        assert!(!blank_if(&mut fx, LocType::Area, "2", "1"));
        assert!(blank_if(&mut fx, LocType::Area, "2", "2"));
        assert!(!blank_if(&mut fx, LocType::City, "LON", "ABC"));
        assert!(!blank_if(&mut fx, LocType::City, "ABC", "MAD"));
        assert!(blank_if(&mut fx, LocType::City, "LON", "MAD"));
        assert!(blank_if(&mut fx, LocType::City, "MAD", "LON"));
    }

    /// Evaluate two between segments of a blank `IF` sequence in one pass.
    fn chain(first: (&str, &str), second: (&str, &str)) -> (bool, bool) {
        let mut fx = secondary_display();
        let mut seg1 = located(DirectionInd::Between, LocType::Unspecified, first.0, first.1);
        let mut seg2 = located(DirectionInd::Between, LocType::Unspecified, second.0, second.1);
        seg1.seg_no = 1;
        seg2.seg_no = 2;
        let seq = BceSequence::new(1, 100, IfTag::Blank, vec![seg1.clone(), seg2.clone()]);

        let m = fx.matcher();
        let mut pass = SequencePass::new();
        let r1 = m.validate_location(&seg1, &seq, &mut pass);
        let r2 = m.validate_location(&seg2, &seq, &mut pass);
        (r1, r2)
    }

    #[test]
    fn conditional_between_carries_over() {
        assert_eq!(chain(("KRK", "WAW"), ("WAW", "LON")), (true, false));
        assert_eq!(chain(("WAW", "LON"), ("LON", "MAD")), (true, true));
        assert_eq!(chain(("LON", "MAD"), ("MAD", "WAW")), (true, true));
    }

    #[test]
    fn no_sector_fails() {
        let mut fx = Fixture::fbr();
        fx.rb.air_seg = None;
        fx.fare.market.travel_segs.clear();
        assert!(!primary(&mut fx, DirectionInd::FromLoc1, "LUX", "AUH"));
    }
}
