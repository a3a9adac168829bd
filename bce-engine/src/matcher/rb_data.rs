//! Rule text (RB) display state.

use serde::{Deserialize, Serialize};

use crate::domain::VendorCode;
use crate::fare::TravelSeg;

/// A matched segment reported back to an RB display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RbDataItem {
    pub vendor: VendorCode,
    pub item_no: u32,
    pub seq_no: u32,
    pub seg_no: u16,
}

/// State shared between an RB display and the matcher.
///
/// The caller sets the sector and the secondary flags; the matcher appends
/// the matched segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RbData {
    /// The sector being displayed.
    pub air_seg: Option<TravelSeg>,
    /// The displayed sector is a secondary sector of the fare component.
    pub secondary: bool,
    /// The secondary sector has the same city pair as the prime sector.
    pub secondary_city_pair_same_as_prime: bool,
    #[serde(skip)]
    items: Vec<RbDataItem>,
    #[serde(skip)]
    last_segment_conditional: bool,
}

impl RbData {
    /// Create RB data for the given sector.
    pub fn new(air_seg: Option<TravelSeg>) -> Self {
        Self {
            air_seg,
            ..Self::default()
        }
    }

    pub fn is_secondary(&self) -> bool {
        self.secondary
    }

    pub fn add_item(&mut self, item: RbDataItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[RbDataItem] {
        &self.items
    }

    pub fn set_last_segment_conditional(&mut self, conditional: bool) {
        self.last_segment_conditional = conditional;
    }

    /// Whether the sequence of the last added item had a conditional segment.
    pub fn is_last_segment_conditional(&self) -> bool {
        self.last_segment_conditional
    }
}
