//! Travel segment indicator (TSI) resolution.
//!
//! A TSI names a subset of the journey's travel segments, e.g. "the
//! transoceanic sector" or "every sector of the fare component". A segment
//! carrying a TSI only applies if the TSI selects at least one segment.

use std::collections::HashMap;

use serde::Deserialize;

use crate::fare::{FareMarket, TravelSeg};

/// Errors raised while resolving a TSI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TsiError {
    /// The TSI number is not defined
    #[error("unknown TSI {0}")]
    Unknown(u16),

    /// The TSI is defined but cannot be evaluated here
    #[error("TSI {tsi} cannot be resolved: {reason}")]
    Unresolvable { tsi: u16, reason: &'static str },
}

/// Resolves a TSI against a sector and its fare market.
pub trait TsiResolver {
    /// The travel segments the TSI selects. An empty list means the TSI
    /// does not apply.
    fn scope<'a>(
        &self,
        tsi: u16,
        sector: &'a TravelSeg,
        market: &'a FareMarket,
    ) -> Result<Vec<&'a TravelSeg>, TsiError>;
}

/// What a TSI in a [`TsiTable`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TsiScope {
    /// The sector under evaluation.
    Sector,
    /// Every travel segment of the fare market.
    FareComponent,
    /// No segment.
    Nothing,
}

/// A fixed table of TSI numbers and the segments they select.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TsiTable {
    scopes: HashMap<u16, TsiScope>,
}

impl TsiTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define what a TSI selects.
    pub fn insert(&mut self, tsi: u16, scope: TsiScope) {
        self.scopes.insert(tsi, scope);
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl TsiResolver for TsiTable {
    fn scope<'a>(
        &self,
        tsi: u16,
        sector: &'a TravelSeg,
        market: &'a FareMarket,
    ) -> Result<Vec<&'a TravelSeg>, TsiError> {
        match self.scopes.get(&tsi) {
            None => Err(TsiError::Unknown(tsi)),
            Some(TsiScope::Sector) => Ok(vec![sector]),
            Some(TsiScope::FareComponent) => Ok(market.travel_segs.iter().collect()),
            Some(TsiScope::Nothing) => Ok(Vec::new()),
        }
    }
}

/// Resolver that rejects every TSI, so segments carrying one never apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedTsi;

impl TsiResolver for UnresolvedTsi {
    fn scope<'a>(
        &self,
        tsi: u16,
        _sector: &'a TravelSeg,
        _market: &'a FareMarket,
    ) -> Result<Vec<&'a TravelSeg>, TsiError> {
        Err(TsiError::Unresolvable {
            tsi,
            reason: "no TSI data loaded",
        })
    }
}
