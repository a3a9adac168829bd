//! Domain code types for booking code exception matching.
//!
//! Every code type validates its format at construction time, so code that
//! receives these types can trust their validity.

mod booking_code;
mod carrier;
mod location;
mod vendor;

pub use booking_code::{BookingCode, InvalidBookingCode};
pub use carrier::{CarrierCode, InvalidCarrierCode};
pub use location::{
    IataArea, InvalidIataArea, InvalidLocCode, InvalidNationCode, LocCode, NationCode,
};
pub use vendor::{InvalidVendorCode, VendorCode};
