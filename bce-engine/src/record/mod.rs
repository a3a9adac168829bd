//! Booking code exception (Table 999) records.
//!
//! Records are loaded once and never mutated during matching.

mod codes;
mod segment;
mod sequence;

pub use codes::{
    ConstructSpecified, DirectionInd, FareClassType, IfTag, LocKey, LocType, PrimarySecondary,
    RestrictionTag, TravelPortion, ViaCarrier,
};
pub use segment::{BceSegment, TIME_UNSET, TravelWindow};
pub use sequence::BceSequence;

/// Errors for malformed record fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A coded field carries a value outside its code set
    #[error("unknown {field} code {code:?}")]
    UnknownCode { field: &'static str, code: String },

    /// A field that must be present was blank
    #[error("{0} must not be blank")]
    MissingField(&'static str),

    /// A field failed validation
    #[error("invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },
}
