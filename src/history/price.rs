// src/history/price.rs

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local};
use tracing::debug;

use crate::error::HistoryError;
use crate::model::{PriceMap, PriceSnapshot};
use crate::params::{PRICE_HISTORY_FILE, PRICE_RETENTION_DAYS};

/// Append-only price snapshots in scrape order, pruned to the last
/// [`PRICE_RETENTION_DAYS`] days. No upsert: a same-day duplicate is a
/// legitimate new entry.
pub struct PriceStore {
    path: PathBuf,
}

impl PriceStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn default_path() -> Self {
        Self::new(PRICE_HISTORY_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full retained sequence, oldest first; empty if no store exists yet.
    pub fn load_all(&self) -> Result<Vec<PriceSnapshot>, HistoryError> {
        super::load_json(&self.path)
    }

    /// Append one snapshot dated now, prune the window, persist.
    pub fn append(&self, prices: PriceMap) -> Result<(), HistoryError> {
        self.append_at(prices, Local::now())
    }

    pub fn append_at(&self, prices: PriceMap, now: DateTime<Local>) -> Result<(), HistoryError> {
        let mut history = self.load_all()?;
        history.push(PriceSnapshot { date: now, prices });

        let cutoff = now - Duration::days(PRICE_RETENTION_DAYS);
        history.retain(|s| s.date > cutoff);

        debug!(entries = history.len(), "price history appended");
        super::store_json(&self.path, &history)
    }
}
