//! Persisted rating cache keyed by Cyrillic spelling
//!
//! Loaded once at batch start, saved once at batch end.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::record::FrequencyRecord;
use crate::error::Result;
use crate::storage::write_lines;

/// Already-rated words, in rating order
#[derive(Debug, Clone, Default)]
pub struct RatingCache {
    records: Vec<FrequencyRecord>,
    rated: HashSet<String>,
}

impl RatingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache file; a missing file is an empty cache
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no rating cache at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let cache = Self::parse(&content)?;
        log::info!("{} rated words loaded from {}", cache.len(), path.display());
        Ok(cache)
    }

    /// Parse cache content; blank lines are ignored
    pub fn parse(content: &str) -> Result<Self> {
        let mut cache = Self::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            cache.insert(FrequencyRecord::parse_line(line, i + 1)?);
        }
        Ok(cache)
    }

    /// Write all records, one per line
    pub fn save(&self, path: &Path) -> Result<()> {
        write_lines(path, self.records.iter().map(ToString::to_string))?;
        log::info!("{} rated words saved to {}", self.len(), path.display());
        Ok(())
    }

    pub fn contains(&self, cyrillic: &str) -> bool {
        self.rated.contains(cyrillic)
    }

    /// Add a record; a word that is already rated keeps its first record
    pub fn insert(&mut self, record: FrequencyRecord) -> bool {
        if !self.rated.insert(record.cyrillic.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[FrequencyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
