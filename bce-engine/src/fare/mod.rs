//! Fare model consumed by the matcher.
//!
//! These types describe the fare under display: its market, its flown
//! segments and the locations they connect.

mod loc;
mod market;
mod pax_type_fare;

pub use loc::{Loc, TravelSeg};
pub use market::{FareMarket, FmDirection, GlobalDirection};
pub use pax_type_fare::{
    BaseFare, FareByRule, FareRule, FareStatus, Owrt, PaxTypeFare, RULE_ZERO,
};
