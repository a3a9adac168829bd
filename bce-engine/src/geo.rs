//! Geography for location and portion-of-travel matching.
//!
//! A [`LocResolver`] answers whether a resolved [`Loc`] lies inside a typed
//! [`LocKey`] such as nation `US` or zone `210`. The classification helpers
//! at the bottom of this module describe pairs of locations.

use std::collections::HashMap;

use crate::domain::NationCode;
use crate::fare::Loc;
use crate::record::{LocKey, LocType};

/// Resolves location membership.
pub trait LocResolver {
    /// True if `loc` lies within the location named by `key`.
    fn is_in_loc(&self, loc: &Loc, key: &LocKey) -> bool;
}

/// Resolver over the fields carried by [`Loc`] plus a table of zones.
///
/// Zones are user-defined groups of other locations. A zone member may not
/// itself be a zone.
#[derive(Debug, Clone, Default)]
pub struct StandardLocResolver {
    zones: HashMap<String, Vec<LocKey>>,
}

impl StandardLocResolver {
    /// Create a resolver with no zones.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a zone. Zone members are ignored.
    pub fn add_zone(&mut self, zone: impl Into<String>, members: Vec<LocKey>) {
        let members = members
            .into_iter()
            .filter(|m| m.loc_type != LocType::Zone)
            .collect();
        self.zones.insert(zone.into(), members);
    }

    /// Returns the number of defined zones.
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    fn matches_field(loc: &Loc, key: &LocKey) -> bool {
        let code = key.code.as_str();
        match key.loc_type {
            LocType::Unspecified => loc.code.as_str() == code || loc.city().as_str() == code,
            LocType::Area => loc.area.as_str() == code,
            LocType::SubArea => loc.sub_area.as_deref() == Some(code),
            LocType::City => loc.city().as_str() == code,
            LocType::Airport => loc.code.as_str() == code,
            LocType::Nation => loc.nation.as_str() == code,
            LocType::State => loc.state.as_deref() == Some(code),
            LocType::Zone => false,
        }
    }
}

impl LocResolver for StandardLocResolver {
    fn is_in_loc(&self, loc: &Loc, key: &LocKey) -> bool {
        if key.code.is_empty() {
            return false;
        }
        match key.loc_type {
            LocType::Zone => self
                .zones
                .get(&key.code)
                .is_some_and(|members| members.iter().any(|m| Self::matches_field(loc, m))),
            _ => Self::matches_field(loc, key),
        }
    }
}

/// Both points in the same nation, and that nation is the US or Canada.
pub fn is_domestic(a: &Loc, b: &Loc) -> bool {
    a.nation == b.nation && a.nation.is_us_or_canada()
}

/// One point in the US and the other in Canada.
pub fn is_transborder(a: &Loc, b: &Loc) -> bool {
    a.nation != b.nation && a.nation.is_us_or_canada() && b.nation.is_us_or_canada()
}

/// Both points in the same nation, other than the US and Canada.
pub fn is_foreign_domestic(a: &Loc, b: &Loc) -> bool {
    a.nation == b.nation && !is_domestic(a, b)
}

/// Both points in the given nation.
pub fn is_within_nation(a: &Loc, b: &Loc, nation: NationCode) -> bool {
    a.nation == nation && b.nation == nation
}
