//! Catalog of item records
//!
//! An ordered collection of [`ItemRecord`]s with unique ids. Catalog position
//! is the order records were supplied in and serves as the final tie-break
//! wherever results must be stable.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TagpathError};
use crate::item::{ItemRecord, RawRecord};
use crate::trace_time;

/// Field name reported when an array entry is not a record object
pub const FIELD_RECORD: &str = "record";

/// What to do with a record that fails conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestPolicy {
    /// Fail the whole load on the first malformed record
    #[default]
    Abort,
    /// Log and drop malformed records
    Skip,
}

impl std::str::FromStr for IngestPolicy {
    type Err = TagpathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(IngestPolicy::Abort),
            "skip" => Ok(IngestPolicy::Skip),
            other => Err(TagpathError::invalid_value("ingest policy", other)),
        }
    }
}

/// Options applied while turning raw records into a catalog
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub policy: IngestPolicy,
    /// Alias tag name -> canonical tag name
    pub tag_aliases: HashMap<String, String>,
}

/// Outcome of an ingestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Ordered collection of item records indexed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemRecord>,
    positions: HashMap<u32, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-normalized records.
    ///
    /// Rejects duplicate ids so they never reach the graph builder.
    pub fn from_records(records: impl IntoIterator<Item = ItemRecord>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for record in records {
            catalog.push(record)?;
        }
        Ok(catalog)
    }

    /// Convert raw records and assemble a catalog according to `opts`.
    pub fn from_raw_records(
        raw: Vec<RawRecord>,
        opts: &IngestOptions,
    ) -> Result<(Self, IngestReport)> {
        Self::ingest(raw.into_iter().map(Ok).enumerate(), opts)
    }

    /// Assemble a catalog from the entries of a JSON array.
    ///
    /// `null` entries are placeholders and are dropped without counting as
    /// skipped. Any other entry that is not a record object is malformed and
    /// goes through the ingest policy like a record with a bad field.
    pub fn from_json_values(
        entries: Vec<Value>,
        opts: &IngestOptions,
    ) -> Result<(Self, IngestReport)> {
        let records = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Value::Null => {
                    debug!(index, "placeholder_entry");
                    None
                }
                entry => Some((
                    index,
                    serde_json::from_value::<RawRecord>(entry)
                        .map_err(|e| TagpathError::malformed(index, FIELD_RECORD, e)),
                )),
            });
        Self::ingest(records, opts)
    }

    fn ingest(
        records: impl Iterator<Item = (usize, Result<RawRecord>)>,
        opts: &IngestOptions,
    ) -> Result<(Self, IngestReport)> {
        let mut catalog = Catalog::new();
        let mut report = IngestReport::default();

        for (index, record) in records {
            let converted = record
                .and_then(|raw| ItemRecord::try_from(raw).map_err(|e| e.at_index(index)))
                .map(|item| item.with_tag_aliases(&opts.tag_aliases));

            match (converted, opts.policy) {
                (Ok(item), _) => {
                    catalog.push(item)?;
                    report.loaded += 1;
                }
                (Err(err), IngestPolicy::Skip) => {
                    warn!(index, error = %err, "skipping malformed record");
                    report.skipped += 1;
                }
                (Err(err), IngestPolicy::Abort) => return Err(err),
            }
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped,
            "catalog_ingested"
        );
        Ok((catalog, report))
    }

    /// Append a record, rejecting duplicate ids
    pub fn push(&mut self, record: ItemRecord) -> Result<()> {
        let id = record.id();
        if self.positions.contains_key(&id) {
            return Err(TagpathError::DuplicateId { id });
        }
        self.positions.insert(id, self.items.len());
        self.items.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&ItemRecord> {
        self.positions.get(&id).map(|&pos| &self.items[pos])
    }

    /// Catalog position of an id
    pub fn position(&self, id: u32) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.positions.contains_key(&id)
    }

    /// Records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, ItemRecord> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ItemRecord] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ItemRecord;
    type IntoIter = std::slice::Iter<'a, ItemRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Load a catalog from a JSON array of raw records (the fetcher's dump format)
pub fn load_json(path: &Path, opts: &IngestOptions) -> Result<(Catalog, IngestReport)> {
    let start = Instant::now();

    if !path.exists() {
        return Err(TagpathError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let entries: Vec<Value> = serde_json::from_str(&content)?;
    trace_time!(start, "catalog_parse", entries = entries.len());

    Catalog::from_json_values(entries, opts)
}
