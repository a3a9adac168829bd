//! A single segment of a booking code exception sequence.

use serde::Deserialize;

use crate::domain::BookingCode;

use super::codes::{
    DirectionInd, FareClassType, LocKey, LocType, PrimarySecondary, RestrictionTag,
    TravelPortion, ViaCarrier, indicator, location, portion,
};

/// Travel time value meaning "no time specified".
pub const TIME_UNSET: u16 = 65535;

/// Travel date, day-of-week and time-of-day restrictions of a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TravelWindow {
    pub eff_year: u16,
    pub eff_month: u16,
    pub eff_day: u16,
    pub disc_year: u16,
    pub disc_month: u16,
    pub disc_day: u16,
    pub days_of_week: String,
    /// Minutes after midnight; 0 or [`TIME_UNSET`] when unset.
    pub start_time: u16,
    /// Minutes after midnight; 0 or [`TIME_UNSET`] when unset.
    pub end_time: u16,
}

impl TravelWindow {
    /// True if any date, day-of-week or time restriction is present.
    pub fn is_set(&self) -> bool {
        self.eff_year > 0
            || self.eff_month > 0
            || self.eff_day > 0
            || self.disc_year > 0
            || self.disc_month > 0
            || self.disc_day > 0
            || !self.days_of_week.is_empty()
            || time_is_set(self.start_time)
            || time_is_set(self.end_time)
    }
}

fn time_is_set(t: u16) -> bool {
    t != 0 && t != TIME_UNSET
}

/// One ordered segment of a Table 999 sequence.
///
/// Segment 1 is the primary segment; segments numbered above 1 are
/// conditional. Every field left at its default means "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BceSegment {
    pub seg_no: u16,
    pub restriction_tag: RestrictionTag,
    pub via_carrier: ViaCarrier,
    pub primary_secondary: PrimarySecondary,
    #[serde(deserialize_with = "portion")]
    pub tvl_portion: Option<TravelPortion>,
    pub tsi: u16,
    pub direction_ind: DirectionInd,
    #[serde(deserialize_with = "location")]
    pub loc1: Option<LocKey>,
    #[serde(deserialize_with = "location")]
    pub loc2: Option<LocKey>,
    #[serde(deserialize_with = "indicator")]
    pub flt_range_appl: Option<char>,
    pub flight1: u32,
    pub flight2: u32,
    pub equip_type: String,
    pub pos_tsi: u16,
    pub pos_loc_type: Option<LocType>,
    pub pos_loc: String,
    #[serde(deserialize_with = "indicator")]
    pub sell_tkt_ind: Option<char>,
    #[serde(deserialize_with = "indicator")]
    pub sold_in_out_ind: Option<char>,
    pub window: TravelWindow,
    pub arb_zone_no: String,
    pub fareclass_type: FareClassType,
    pub fareclass: String,
    pub booking_code1: Option<BookingCode>,
    pub booking_code2: Option<BookingCode>,
}

impl Default for BceSegment {
    /// A primary segment with no restrictions, tagged required.
    fn default() -> Self {
        Self {
            seg_no: 1,
            restriction_tag: RestrictionTag::Required,
            via_carrier: ViaCarrier::Any,
            primary_secondary: PrimarySecondary::Blank,
            tvl_portion: None,
            tsi: 0,
            direction_ind: DirectionInd::Between,
            loc1: None,
            loc2: None,
            flt_range_appl: None,
            flight1: 0,
            flight2: 0,
            equip_type: String::new(),
            pos_tsi: 0,
            pos_loc_type: None,
            pos_loc: String::new(),
            sell_tkt_ind: None,
            sold_in_out_ind: None,
            window: TravelWindow::default(),
            arb_zone_no: String::new(),
            fareclass_type: FareClassType::Blank,
            fareclass: String::new(),
            booking_code1: None,
            booking_code2: None,
        }
    }
}

impl BceSegment {
    /// Create an unrestricted segment with the given number and tag.
    pub fn new(seg_no: u16, restriction_tag: RestrictionTag) -> Self {
        Self {
            seg_no,
            restriction_tag,
            ..Self::default()
        }
    }

    /// Set the first booking code.
    pub fn with_booking_code(mut self, code: BookingCode) -> Self {
        self.booking_code1 = Some(code);
        self
    }

    /// True if the segment carries any location restriction.
    pub fn has_locations(&self) -> bool {
        [&self.loc1, &self.loc2]
            .into_iter()
            .any(|key| key.as_ref().is_some_and(|k| !k.is_blank()))
    }

    /// Flight, equipment, point-of-sale, ticketing and travel window data.
    ///
    /// These are the qualifiers a segment can carry besides its restriction
    /// tag. Portion of travel and the sold in/out indicator are not included.
    pub fn has_qualifier_data(&self) -> bool {
        self.flt_range_appl.is_some()
            || self.flight1 > 0
            || self.flight2 > 0
            || !self.equip_type.is_empty()
            || self.pos_tsi > 0
            || self.pos_loc_type.is_some_and(|t| t != LocType::Unspecified)
            || !self.pos_loc.is_empty()
            || self.sell_tkt_ind.is_some()
            || self.window.is_set()
            || !self.arb_zone_no.is_empty()
    }

    /// Booking codes named by the segment, in table order.
    pub fn booking_codes(&self) -> impl Iterator<Item = BookingCode> + '_ {
        self.booking_code1.iter().chain(self.booking_code2.iter()).copied()
    }
}
