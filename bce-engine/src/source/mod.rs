//! Booking code exception table sources.
//!
//! Tables are looked up either by item number (the fare class record names
//! the item) or by rule: vendor, carrier, tariff, rule number and
//! convention, effective on the travel date.

mod cached;
mod json;

pub use cached::{CacheConfig, CachedSequenceSource};
pub use json::{BceTable, JsonSequenceSource, RuleBinding};

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{CarrierCode, VendorCode};
use crate::matcher::Convention;
use crate::record::{BceSequence, RecordError};

/// Key for rule-level booking code exception data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub vendor: VendorCode,
    pub carrier: CarrierCode,
    pub tariff: u16,
    pub rule: String,
    pub convention: Convention,
}

impl RuleKey {
    pub fn new(
        vendor: VendorCode,
        carrier: CarrierCode,
        tariff: u16,
        rule: impl Into<String>,
        convention: Convention,
    ) -> Self {
        Self {
            vendor,
            carrier,
            tariff,
            rule: rule.into(),
            convention,
        }
    }
}

/// Errors that can occur when loading booking code exception tables.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Reading a table file or directory failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// A table file is not valid JSON for its schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table is well-formed JSON but inconsistent
    #[error("bad table: {0}")]
    Record(#[from] RecordError),

    /// The table directory holds no table files
    #[error("no table files found in {0}")]
    EmptyDir(String),
}

/// Provides booking code exception sequences, ordered by sequence number.
///
/// Lookups that find nothing return an empty list.
pub trait SequenceSource: Send + Sync {
    fn sequences_for_item(
        &self,
        vendor: VendorCode,
        item_no: u32,
    ) -> Result<Arc<Vec<BceSequence>>, SourceError>;

    fn sequences_for_rule(
        &self,
        key: &RuleKey,
        date: NaiveDate,
    ) -> Result<Arc<Vec<BceSequence>>, SourceError>;
}

impl<S: SequenceSource + ?Sized> SequenceSource for Arc<S> {
    fn sequences_for_item(
        &self,
        vendor: VendorCode,
        item_no: u32,
    ) -> Result<Arc<Vec<BceSequence>>, SourceError> {
        (**self).sequences_for_item(vendor, item_no)
    }

    fn sequences_for_rule(
        &self,
        key: &RuleKey,
        date: NaiveDate,
    ) -> Result<Arc<Vec<BceSequence>>, SourceError> {
        (**self).sequences_for_rule(key, date)
    }
}
