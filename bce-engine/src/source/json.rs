//! Table source backed by a directory of JSON files.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{CarrierCode, VendorCode};
use crate::matcher::Convention;
use crate::record::{BceSequence, RecordError};

use super::{RuleKey, SequenceSource, SourceError};

/// The rule a table is filed under, for rule-level lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleBinding {
    pub carrier: CarrierCode,
    pub tariff: u16,
    pub rule: String,
    #[serde(default)]
    pub convention: Convention,
    /// First travel date the table applies to. Open when absent.
    #[serde(default)]
    pub effective: Option<NaiveDate>,
    /// Last travel date the table applies to. Open when absent.
    #[serde(default)]
    pub discontinue: Option<NaiveDate>,
}

impl RuleBinding {
    fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.effective.is_none_or(|from| from <= date)
            && self.discontinue.is_none_or(|to| date <= to)
    }
}

/// One table file: a Table 999 item and its sequences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BceTable {
    pub vendor: VendorCode,
    pub item_no: u32,
    #[serde(default)]
    pub rule: Option<RuleBinding>,
    pub sequences: Vec<BceSequence>,
}

impl BceTable {
    /// Fill in defaulted sequence fields, number segments by position and
    /// order the sequences.
    fn normalize(mut self) -> Result<Self, RecordError> {
        for seq in &mut self.sequences {
            if seq.item_no == 0 {
                seq.item_no = self.item_no;
            } else if seq.item_no != self.item_no {
                return Err(RecordError::InvalidField {
                    field: "item_no",
                    message: format!(
                        "sequence {} belongs to item {}, not {}",
                        seq.seq_no, seq.item_no, self.item_no
                    ),
                });
            }
            let seg_cnt = u16::try_from(seq.segments.len()).map_err(|_| {
                RecordError::InvalidField {
                    field: "segments",
                    message: format!(
                        "sequence {} has {} segments",
                        seq.seq_no,
                        seq.segments.len()
                    ),
                }
            })?;
            if seq.seg_cnt == 0 {
                seq.seg_cnt = seg_cnt;
            }
            for (seg_no, seg) in (1..=seg_cnt).zip(seq.segments.iter_mut()) {
                seg.seg_no = seg_no;
            }
        }
        self.sequences.sort_by_key(|s| s.seq_no);
        Ok(self)
    }
}

#[derive(Debug, Clone)]
struct RuleEntry {
    binding: RuleBinding,
    sequences: Arc<Vec<BceSequence>>,
}

/// Source that serves tables loaded from JSON files.
#[derive(Debug, Clone, Default)]
pub struct JsonSequenceSource {
    items: HashMap<(VendorCode, u32), Arc<Vec<BceSequence>>>,
    rules: HashMap<RuleKey, Vec<RuleEntry>>,
}

impl JsonSequenceSource {
    /// Load every `*.json` file in a directory as a [`BceTable`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SourceError> {
        let dir = dir.as_ref();
        let io_err = |path: &Path, e: std::io::Error| SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
            let path = entry.map_err(|e| io_err(dir, e))?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        if paths.is_empty() {
            return Err(SourceError::EmptyDir(dir.display().to_string()));
        }
        paths.sort();

        let mut tables = Vec::with_capacity(paths.len());
        for path in &paths {
            let json = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
            let table: BceTable = serde_json::from_str(&json)?;
            debug!(path = %path.display(), item_no = table.item_no, "loaded table");
            tables.push(table);
        }

        let source = Self::from_tables(tables)?;
        info!(
            dir = %dir.display(),
            items = source.item_count(),
            rules = source.rules.len(),
            "booking code exception tables loaded"
        );
        Ok(source)
    }

    /// Build a source from tables already in memory.
    ///
    /// Tables sharing a vendor and item number are merged.
    pub fn from_tables(tables: impl IntoIterator<Item = BceTable>) -> Result<Self, SourceError> {
        let mut items: HashMap<(VendorCode, u32), Vec<BceSequence>> = HashMap::new();
        let mut rules: HashMap<RuleKey, Vec<RuleEntry>> = HashMap::new();

        for table in tables {
            let table = table.normalize()?;
            if let Some(binding) = table.rule.clone() {
                let key = RuleKey::new(
                    table.vendor,
                    binding.carrier,
                    binding.tariff,
                    binding.rule.clone(),
                    binding.convention,
                );
                rules.entry(key).or_default().push(RuleEntry {
                    binding,
                    sequences: Arc::new(table.sequences.clone()),
                });
            }
            items
                .entry((table.vendor, table.item_no))
                .or_default()
                .extend(table.sequences);
        }

        let items = items
            .into_iter()
            .map(|(key, mut sequences)| {
                sequences.sort_by_key(|s| s.seq_no);
                (key, Arc::new(sequences))
            })
            .collect();

        Ok(Self { items, rules })
    }

    /// Returns the number of distinct items loaded.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl SequenceSource for JsonSequenceSource {
    fn sequences_for_item(
        &self,
        vendor: VendorCode,
        item_no: u32,
    ) -> Result<Arc<Vec<BceSequence>>, SourceError> {
        Ok(self
            .items
            .get(&(vendor, item_no))
            .cloned()
            .unwrap_or_default())
    }

    fn sequences_for_rule(
        &self,
        key: &RuleKey,
        date: NaiveDate,
    ) -> Result<Arc<Vec<BceSequence>>, SourceError> {
        Ok(self
            .rules
            .get(key)
            .and_then(|entries| entries.iter().find(|e| e.binding.is_effective_on(date)))
            .map(|e| Arc::clone(&e.sequences))
            .unwrap_or_default())
    }
}
