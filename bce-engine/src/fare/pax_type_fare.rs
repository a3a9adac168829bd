//! The fare under evaluation.

use serde::Deserialize;

use crate::domain::{BookingCode, CarrierCode, VendorCode};

use super::loc::TravelSeg;
use super::market::{FareMarket, GlobalDirection};

/// Rule number used for carrier-level booking code exception data.
pub const RULE_ZERO: &str = "0000";

/// One-way / round-trip indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Owrt {
    /// `1`: one way, may be doubled.
    #[default]
    #[serde(rename = "1")]
    OneWayMayBeDoubled,
    /// `2`: round trip, may not be halved.
    #[serde(rename = "2")]
    RoundTripMayNotBeHalved,
    /// `3`: one way, may not be doubled.
    #[serde(rename = "3")]
    OneWayMayNotBeDoubled,
}

/// Classification flags of a fare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FareStatus {
    pub constructed: bool,
    pub industry: bool,
    pub domestic: bool,
    pub transborder: bool,
    pub foreign_domestic: bool,
}

/// Tariff and rule under which a fare is filed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FareRule {
    pub tariff: u16,
    pub rule: String,
}

impl FareRule {
    pub fn new(tariff: u16, rule: impl Into<String>) -> Self {
        Self {
            tariff,
            rule: rule.into(),
        }
    }
}

/// The base fare a calculated fare-by-rule fare was built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseFare {
    pub carrier: CarrierCode,
    pub rule: FareRule,
}

/// Fare-by-rule (category 25) data attached to a fare.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FareByRule {
    /// A specified FBR fare is filed outright; otherwise it is calculated
    /// from `base_fare`.
    pub specified: bool,
    /// The rule item's prime sector indicator was `X`.
    pub prime_sector: bool,
    pub base_fare: Option<BaseFare>,
}

/// A fare for one passenger type on one fare market.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaxTypeFare {
    pub vendor: VendorCode,
    pub carrier: CarrierCode,
    pub rule: FareRule,
    pub fare_class: String,
    #[serde(default)]
    pub fca_fare_type: String,
    /// Booking code exception table item number from the fare class record.
    #[serde(default)]
    pub booking_code_tbl_item_no: u32,
    #[serde(default)]
    pub owrt: Owrt,
    #[serde(default)]
    pub global_direction: Option<GlobalDirection>,
    #[serde(default)]
    pub status: FareStatus,
    pub market: FareMarket,
    #[serde(default)]
    pub fare_by_rule: Option<FareByRule>,
    #[serde(skip)]
    change_fare_basis_bkg_code: Option<BookingCode>,
}

impl PaxTypeFare {
    pub fn new(
        vendor: VendorCode,
        carrier: CarrierCode,
        rule: FareRule,
        fare_class: impl Into<String>,
        market: FareMarket,
    ) -> Self {
        Self {
            vendor,
            carrier,
            rule,
            fare_class: fare_class.into(),
            fca_fare_type: String::new(),
            booking_code_tbl_item_no: 0,
            owrt: Owrt::default(),
            global_direction: None,
            status: FareStatus::default(),
            market,
            fare_by_rule: None,
            change_fare_basis_bkg_code: None,
        }
    }

    pub fn is_constructed(&self) -> bool {
        self.status.constructed
    }

    pub fn is_industry(&self) -> bool {
        self.status.industry
    }

    pub fn is_round_trip(&self) -> bool {
        self.owrt == Owrt::RoundTripMayNotBeHalved
    }

    /// Domestic, transborder or foreign domestic.
    pub fn is_within_one_country_group(&self) -> bool {
        self.status.domestic || self.status.transborder || self.status.foreign_domestic
    }

    pub fn first_travel_seg(&self) -> Option<&TravelSeg> {
        self.market.first_travel_seg()
    }

    /// Booking code that replaces the prime booking code in the fare basis.
    pub fn change_fare_basis_bkg_code(&self) -> Option<BookingCode> {
        self.change_fare_basis_bkg_code
    }

    pub fn set_change_fare_basis_bkg_code(&mut self, code: Option<BookingCode>) {
        self.change_fare_basis_bkg_code = code;
    }
}
