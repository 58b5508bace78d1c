// src/history/menu.rs

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local};
use tracing::debug;

use crate::error::HistoryError;
use crate::model::{MenuItem, WeekSnapshot};
use crate::params::{MAX_WEEKS, MENU_HISTORY_FILE};

/// Weekly menu snapshots, newest week first, at most [`MAX_WEEKS`] entries.
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn default_path() -> Self {
        Self::new(MENU_HISTORY_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored snapshots, or empty if no store exists yet.
    pub fn load(&self) -> Result<Vec<WeekSnapshot>, HistoryError> {
        super::load_json(&self.path)
    }

    /// Insert-or-update the current calendar week, then persist.
    pub fn upsert_week(&self, items: Vec<MenuItem>) -> Result<WeekSnapshot, HistoryError> {
        self.upsert_week_at(items, Local::now())
    }

    /// Same as [`upsert_week`](Self::upsert_week) with an explicit clock,
    /// which is what the tests use.
    pub fn upsert_week_at(
        &self,
        items: Vec<MenuItem>,
        now: DateTime<Local>,
    ) -> Result<WeekSnapshot, HistoryError> {
        let mut history = self.load()?;
        let key = WeekSnapshot::key_for(now);

        // Taken before truncation: a stored file may legitimately hold
        // twelve weeks newer than `now` (clock correction, hand-edited
        // file), in which case this snapshot is the one truncated away.
        let snapshot = match history.iter_mut().find(|s| s.week_key == key) {
            Some(existing) => {
                existing.items = items;
                existing.updated_at = now;
                debug!(week = %key, "updated existing week snapshot");
                existing.clone()
            }
            None => {
                let iso = now.iso_week();
                let snapshot = WeekSnapshot {
                    week_key: key.clone(),
                    year: iso.year(),
                    week_number: iso.week(),
                    items,
                    scraped_at: now,
                    updated_at: now,
                };
                history.push(snapshot.clone());
                debug!(week = %key, "created week snapshot");
                snapshot
            }
        };

        history.sort_by(|a, b| b.week_key.cmp(&a.week_key));
        history.truncate(MAX_WEEKS);

        super::store_json(&self.path, &history)?;
        Ok(snapshot)
    }
}
