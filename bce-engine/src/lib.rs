//! Booking code exception matching for airline fare display.
//!
//! Answers: "for this fare, displayed on this sector, which booking codes
//! does the Table 999 data allow, and are they conditional?"

pub mod domain;
pub mod fare;
pub mod geo;
pub mod matcher;
pub mod record;
pub mod source;
pub mod tsi;
