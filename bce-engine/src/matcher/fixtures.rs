//! Shared test fixtures for the matcher.

use chrono::NaiveDate;

use crate::domain::{BookingCode, CarrierCode, IataArea, LocCode, NationCode, VendorCode};
use crate::fare::{
    FareMarket, FmDirection, FareRule, GlobalDirection, Loc, Owrt, PaxTypeFare, TravelSeg,
};
use crate::geo::StandardLocResolver;
use crate::record::{BceSegment, BceSequence, IfTag, LocKey, LocType, RestrictionTag};
use crate::tsi::{TsiScope, TsiTable};

use super::{BceMatcher, Convention, MatcherConfig, RbData, RequestType};

pub(crate) fn cxr(code: &str) -> CarrierCode {
    CarrierCode::parse(code).unwrap()
}

pub(crate) fn bkg(code: &str) -> BookingCode {
    BookingCode::parse(code).unwrap()
}

pub(crate) fn area(digit: &str) -> IataArea {
    IataArea::parse(digit).unwrap()
}

pub(crate) fn loc(code: &str, nation: &str, area_digit: &str) -> Loc {
    Loc::new(
        LocCode::parse(code).unwrap(),
        NationCode::parse(nation).unwrap(),
        area(area_digit),
    )
}

pub(crate) fn key(loc_type: LocType, code: &str) -> Option<LocKey> {
    Some(LocKey::new(loc_type, code))
}

fn travel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub(crate) fn sector(orig: Loc, dest: Loc, carrier: &str) -> TravelSeg {
    TravelSeg::new(orig, dest, Some(cxr(carrier)), travel_date())
}

/// An EY fare LUX-AUH displayed on a secondary LHR-MAD sector.
pub(crate) struct Fixture {
    pub fare: PaxTypeFare,
    pub rb: RbData,
    pub config: MatcherConfig,
    pub locs: StandardLocResolver,
    pub tsi: TsiTable,
}

impl Fixture {
    pub fn fbr() -> Self {
        let lux = loc("LUX", "LU", "2");
        let auh = loc("AUH", "AE", "2");
        let market = FareMarket {
            origin: lux.clone(),
            destination: auh.clone(),
            board_multi_city: None,
            governing_carrier: cxr("EY"),
            direction: FmDirection::Outbound,
            travel_segs: vec![sector(lux, auh, "EY")],
        };

        let mut fare = PaxTypeFare::new(
            VendorCode::ATPCO,
            cxr("EY"),
            FareRule::new(44, "EY01"),
            "AOWLU",
            market,
        );
        fare.fca_fare_type = "PIT".to_string();
        fare.booking_code_tbl_item_no = 1;
        fare.owrt = Owrt::OneWayMayNotBeDoubled;
        fare.global_direction = Some(GlobalDirection::EH);

        let mut tsi = TsiTable::new();
        tsi.insert(2, TsiScope::Nothing);
        tsi.insert(3, TsiScope::Sector);

        Self {
            fare,
            rb: RbData::new(Some(Self::secondary_sector("BA"))),
            config: MatcherConfig::new(RequestType::Rb, Convention::One),
            locs: StandardLocResolver::new(),
            tsi,
        }
    }

    /// The same market priced with an industry (YY) fare governed by LH.
    pub fn industry() -> Self {
        let mut fx = Self::fbr();
        fx.fare.carrier = CarrierCode::INDUSTRY;
        fx.fare.status.industry = true;
        fx.fare.market.governing_carrier = cxr("LH");
        fx
    }

    /// LHR (city LON) to MAD on the given carrier.
    pub fn secondary_sector(carrier: &str) -> TravelSeg {
        let mut lhr = loc("LHR", "GB", "2");
        lhr.city = Some(LocCode::parse("LON").unwrap());
        sector(lhr, loc("MAD", "ES", "2"), carrier)
    }

    /// An `IF 1` sequence with a single segment counted.
    pub fn sequence() -> BceSequence {
        let mut seq = BceSequence::new(1, 0, IfTag::FareComponent, vec![]);
        seq.seg_cnt = 1;
        seq
    }

    /// An unrestricted required segment for booking code A.
    pub fn segment() -> BceSegment {
        BceSegment::new(1, RestrictionTag::Required).with_booking_code(bkg("A"))
    }

    /// Set the areas of the fare market's first travel segment.
    pub fn set_primary_areas(&mut self, orig: &str, dest: &str) {
        let seg = &mut self.fare.market.travel_segs[0];
        seg.origin.area = area(orig);
        seg.destination.area = area(dest);
    }

    pub fn matcher(&mut self) -> BceMatcher<'_> {
        BceMatcher::new(
            &mut self.fare,
            Some(&mut self.rb),
            self.config.clone(),
            &self.locs,
            &self.tsi,
        )
    }

    pub fn matcher_without_rb(&mut self) -> BceMatcher<'_> {
        BceMatcher::new(
            &mut self.fare,
            None,
            self.config.clone(),
            &self.locs,
            &self.tsi,
        )
    }
}
