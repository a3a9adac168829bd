//! A booking code exception sequence.

use serde::Deserialize;

use super::codes::{ConstructSpecified, IfTag, indicator};
use super::segment::BceSegment;

/// A Table 999 sequence: an ordered group of segments that apply together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BceSequence {
    pub item_no: u32,
    pub seq_no: u32,
    pub if_tag: IfTag,
    /// `X`: the sequence does not apply to travel on the fare's own carrier.
    #[serde(deserialize_with = "prime_ind")]
    pub prime_ind: bool,
    #[serde(deserialize_with = "indicator")]
    pub table_type: Option<char>,
    pub construct_specified: ConstructSpecified,
    pub seg_cnt: u16,
    pub segments: Vec<BceSegment>,
}

impl Default for BceSequence {
    fn default() -> Self {
        Self {
            item_no: 0,
            seq_no: 0,
            if_tag: IfTag::FareComponent,
            prime_ind: false,
            table_type: None,
            construct_specified: ConstructSpecified::Blank,
            seg_cnt: 0,
            segments: Vec::new(),
        }
    }
}

impl BceSequence {
    /// Create a sequence holding the given segments.
    ///
    /// `seg_cnt` is taken from the number of segments.
    pub fn new(item_no: u32, seq_no: u32, if_tag: IfTag, segments: Vec<BceSegment>) -> Self {
        Self {
            item_no,
            seq_no,
            if_tag,
            seg_cnt: u16::try_from(segments.len()).unwrap_or(u16::MAX),
            segments,
            ..Self::default()
        }
    }

    /// True if the segment is the fare component segment of an `IF 1` sequence.
    pub fn is_fare_component_segment(&self, segment: &BceSegment) -> bool {
        self.if_tag == IfTag::FareComponent && segment.seg_no == 1
    }

    /// True if the segment is the last one counted by `seg_cnt`.
    pub fn is_last_segment(&self, segment: &BceSegment) -> bool {
        segment.seg_no == self.seg_cnt
    }
}

fn prime_ind<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match indicator(deserializer)? {
        None => Ok(false),
        Some('X') => Ok(true),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unknown prime indicator {other:?}"
        ))),
    }
}
