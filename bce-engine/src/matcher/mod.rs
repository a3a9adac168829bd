//! Booking code exception matching for fare display.
//!
//! A [`BceMatcher`] evaluates Table 999 sequences against one fare and the
//! sector under display. Each segment of a sequence passes through a chain
//! of predicates (primary/secondary, carrier, portion of travel, TSI,
//! location, point of sale, sold tag, date/time/DOW, fare class type);
//! a sequence applies when all of its segments pass.
//!
//! The matched sequences are then deduplicated and their booking codes
//! collected, see [`BceMatcher::process_sequences`].
//!
//! # Example
//!
//! ```
//! use bce_engine::geo::StandardLocResolver;
//! use bce_engine::matcher::{BceMatcher, MatcherConfig};
//! use bce_engine::record::{BceSegment, RestrictionTag};
//! use bce_engine::tsi::UnresolvedTsi;
//! # use bce_engine::fare::PaxTypeFare;
//! # let mut fare: PaxTypeFare = serde_json::from_str(r#"{
//! #     "vendor": "ATP", "carrier": "EY",
//! #     "rule": {"tariff": 44, "rule": "EY01"}, "fare_class": "AOWLU",
//! #     "market": {
//! #         "origin": {"code": "LUX", "nation": "LU", "area": "2"},
//! #         "destination": {"code": "AUH", "nation": "AE", "area": "2"},
//! #         "governing_carrier": "EY", "travel_segs": []
//! #     }
//! # }"#).unwrap();
//!
//! let locs = StandardLocResolver::new();
//! let matcher = BceMatcher::new(&mut fare, None, MatcherConfig::default(), &locs, &UnresolvedTsi);
//!
//! let permitted = BceSegment::new(1, RestrictionTag::Permitted);
//! assert!(matcher.is_rb_segment_conditional(&permitted));
//! ```

mod carrier;
mod conditional;
mod config;
mod fare_basis;
mod fare_class;
mod gates;
mod location;
mod lookup;
mod pass;
mod portion;
mod primary_secondary;
mod process;
mod rb_data;
mod removal;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::{Convention, MatcherConfig, RequestType};
pub use fare_class::{match_fare_class_mask, match_fare_type};
pub use pass::{CondDirState, SequencePass};
pub use rb_data::{RbData, RbDataItem};

use tracing::trace;

use crate::fare::{PaxTypeFare, TravelSeg};
use crate::geo::LocResolver;
use crate::record::{BceSegment, BceSequence, ConstructSpecified};
use crate::tsi::TsiResolver;

/// Evaluates booking code exception sequences for one fare.
///
/// A matcher lives for one display transaction. It holds the fare and the
/// RB display state mutably because matching writes the change-fare-basis
/// booking code and the RB data items.
pub struct BceMatcher<'a> {
    fare: &'a mut PaxTypeFare,
    rb_data: Option<&'a mut RbData>,
    config: MatcherConfig,
    locs: &'a dyn LocResolver,
    tsi: &'a dyn TsiResolver,
    convention: Convention,
    bce_bkg_updated: bool,
}

impl<'a> BceMatcher<'a> {
    pub fn new(
        fare: &'a mut PaxTypeFare,
        rb_data: Option<&'a mut RbData>,
        config: MatcherConfig,
        locs: &'a dyn LocResolver,
        tsi: &'a dyn TsiResolver,
    ) -> Self {
        let convention = config.convention;
        Self {
            fare,
            rb_data,
            config,
            locs,
            tsi,
            convention,
            bce_bkg_updated: false,
        }
    }

    pub fn fare(&self) -> &PaxTypeFare {
        self.fare
    }

    pub fn rb_data(&self) -> Option<&RbData> {
        self.rb_data.as_deref()
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// The convention of the sequence list being processed.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn set_convention(&mut self, convention: Convention) {
        self.convention = convention;
    }

    /// RB data is present and the display is a rule text request.
    pub fn is_rb_request(&self) -> bool {
        self.rb_data.is_some() && self.config.request_type == RequestType::Rb
    }

    /// RB data for RB requests only.
    fn rb(&self) -> Option<&RbData> {
        if self.is_rb_request() {
            self.rb_data.as_deref()
        } else {
            None
        }
    }

    fn is_rb_secondary(&self) -> bool {
        self.rb().is_some_and(RbData::is_secondary)
    }

    /// The sector under display: the RB sector for RB requests, else the
    /// first travel segment of the fare market.
    pub fn display_sector(&self) -> Option<&TravelSeg> {
        match self.rb() {
            Some(rb) => rb.air_seg.as_ref(),
            None => self.fare.first_travel_seg(),
        }
    }

    /// Construct/specified gate.
    pub fn is_valid_sequence(&self, sequence: &BceSequence) -> bool {
        match sequence.construct_specified {
            ConstructSpecified::Blank => true,
            ConstructSpecified::Constructed => self.fare.is_constructed(),
            ConstructSpecified::Specified => !self.fare.is_constructed(),
        }
    }

    /// Run every segment predicate against the sector under display.
    pub fn is_valid_segment(
        &self,
        segment: &BceSegment,
        sequence: &BceSequence,
        pass: &mut SequencePass,
    ) -> bool {
        let Some(sector) = self.display_sector() else {
            trace!(seq_no = sequence.seq_no, "no sector to validate against");
            return false;
        };

        if sequence.prime_ind && sector.carrier == Some(self.fare.carrier) {
            trace!(seq_no = sequence.seq_no, "prime sequence on fare carrier");
            return false;
        }

        let failed = if !self.validate_primary_secondary(segment, sequence, sector) {
            Some("primary/secondary")
        } else if !self.validate_carrier(segment, sequence, sector) {
            Some("carrier")
        } else if segment.tvl_portion.is_some()
            && !self.validate_portion_of_travel(segment, sequence, sector)
        {
            Some("portion of travel")
        } else if !self.validate_tsi(segment, sequence, sector) {
            Some("tsi")
        } else if !self.validate_location(segment, sequence, pass) {
            Some("location")
        } else if !self.validate_point_of_sale(segment, sequence) {
            Some("point of sale")
        } else if !self.validate_sold_tag(segment, sequence) {
            Some("sold tag")
        } else if !self.validate_date_time_dow(segment, sequence) {
            Some("date/time/dow")
        } else if !self.validate_fare_class_type(segment, sequence) {
            Some("fare class type")
        } else {
            None
        };

        match failed {
            Some(check) => {
                trace!(
                    item_no = sequence.item_no,
                    seq_no = sequence.seq_no,
                    seg_no = segment.seg_no,
                    check,
                    "segment failed"
                );
                false
            }
            None => true,
        }
    }
}
