use crate::record::{BceSegment, BceSequence, FareClassType};

use super::BceMatcher;

/// Fare type families addressable as `*X`.
const FARE_TYPE_FAMILIES: &str = "RFBEWXSPAZJ";

/// Fare type families covered by `*Y`.
const ECONOMY_FAMILIES: &str = "EXAPS";

/// Match a fare type rule such as `PIT`, `*E` or `**` against a fare type.
pub fn match_fare_type(rule: &str, fare_type: &str) -> bool {
    if rule.is_empty() || rule == fare_type {
        return true;
    }
    let Some(family) = rule.strip_prefix('*') else {
        return false;
    };
    let first = fare_type.chars().next();
    match family.chars().next() {
        Some('*') => true,
        Some('Y') => first.is_some_and(|c| ECONOMY_FAMILIES.contains(c)),
        Some(f) if FARE_TYPE_FAMILIES.contains(f) => first == Some(f),
        _ => false,
    }
}

/// Match a fare class mask where `-` stands for one or more characters and
/// `?` for exactly one.
pub fn match_fare_class_mask(mask: &str, fare_class: &str) -> bool {
    mask_matches(mask.as_bytes(), fare_class.as_bytes())
}

fn mask_matches(mask: &[u8], class: &[u8]) -> bool {
    match mask.split_first() {
        None => class.is_empty(),
        Some((b'-', rest)) => (1..=class.len()).any(|n| mask_matches(rest, &class[n..])),
        Some((b'?', rest)) => !class.is_empty() && mask_matches(rest, &class[1..]),
        Some((c, rest)) => class.first() == Some(c) && mask_matches(rest, &class[1..]),
    }
}

impl BceMatcher<'_> {
    /// Match the segment's fare class restriction.
    pub fn validate_fare_class_type(&self, segment: &BceSegment, _sequence: &BceSequence) -> bool {
        let rule = segment.fareclass.as_str();
        if rule.is_empty() {
            return true;
        }

        let fare_class = self.fare.fare_class.as_str();
        match segment.fareclass_type {
            FareClassType::FareType => match_fare_type(rule, &self.fare.fca_fare_type),
            FareClassType::FareClass => rule == fare_class,
            FareClassType::Mask => match_fare_class_mask(rule, fare_class),
            FareClassType::FirstLetter => {
                rule.chars().next().is_some_and(|c| fare_class.starts_with(c))
            }
            FareClassType::Blank | FareClassType::Other(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::fixtures::Fixture;

    fn check(fareclass_type: FareClassType, fareclass: &str) -> bool {
        let mut fx = Fixture::fbr();
        let mut seg = Fixture::segment();
        seg.fareclass_type = fareclass_type;
        seg.fareclass = fareclass.to_string();
        fx.matcher()
            .validate_fare_class_type(&seg, &Fixture::sequence())
    }

    #[test]
    fn unknown_fare_class_type_never_matches() {
        assert!(!check(FareClassType::Other('Q'), "AOWLU"));
        assert!(check(FareClassType::FareClass, "AOWLU"));
    }

    #[test]
    fn empty_fare_class_passes() {
        assert!(check(FareClassType::Blank, ""));
        assert!(check(FareClassType::FareClass, ""));
    }

    #[test]
    fn fare_type() {
        assert!(!check(FareClassType::FareType, "FR"));
        assert!(check(FareClassType::FareType, "PIT"));
        assert!(check(FareClassType::FareType, "*P"));
        assert!(check(FareClassType::FareType, "*Y"));
        assert!(!check(FareClassType::FareType, "*F"));
    }

    #[test]
    fn fare_class() {
        assert!(!check(FareClassType::FareClass, "Y"));
        assert!(check(FareClassType::FareClass, "AOWLU"));
    }

    #[test]
    fn mask() {
        assert!(!check(FareClassType::Mask, "A-BA"));
        assert!(check(FareClassType::Mask, "A-WLU"));
        assert!(check(FareClassType::Mask, "A?WLU"));
        assert!(check(FareClassType::Mask, "A-"));
    }

    #[test]
    fn first_letter() {
        assert!(!check(FareClassType::FirstLetter, "B"));
        assert!(check(FareClassType::FirstLetter, "A"));
    }

    #[test]
    fn blank_type_with_fare_class_fails() {
        assert!(!check(FareClassType::Blank, "AOWLU"));
    }

    #[test]
    fn fare_type_families() {
        assert!(match_fare_type("", "XEX"));
        assert!(match_fare_type("**", "PIT"));
        assert!(match_fare_type("*E", "EOW"));
        assert!(!match_fare_type("*E", "XEX"));
        assert!(match_fare_type("*Y", "XEX"));
        assert!(match_fare_type("*Y", "SIP"));
        assert!(!match_fare_type("*Y", "BUS"));
        assert!(!match_fare_type("*Q", "QQQ"));
        assert!(!match_fare_type("*E", ""));
        assert!(!match_fare_type("PIT", "PIX"));
    }

    #[test]
    fn mask_wildcards() {
        assert!(match_fare_class_mask("Y-", "YOW"));
        assert!(!match_fare_class_mask("Y-", "Y"));
        assert!(match_fare_class_mask("-OW", "YHOW"));
        assert!(match_fare_class_mask("?OW", "YOW"));
        assert!(!match_fare_class_mask("?OW", "YHOW"));
        assert!(match_fare_class_mask("B-E-", "BAPEX1"));
        assert!(!match_fare_class_mask("BOW", "BOWX"));
    }
}
