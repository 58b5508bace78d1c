// src/model.rs
//
// Data model for the menu/price pipeline. The serde shapes here are the
// on-disk format of menu_history.json and price_history.json, so field
// names are load-bearing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// One dish on one day, as extracted from the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub day: String,
    pub name: String,
    pub scraped_at: DateTime<Local>,
}

/// One calendar week's menu. Keyed by `week_key` ("YYYY-Www", ISO week);
/// created once per week and updated in place on repeated scrapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekSnapshot {
    pub week_key: String,
    pub year: i32,
    pub week_number: u32,
    pub items: Vec<MenuItem>,
    pub scraped_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl WeekSnapshot {
    /// "YYYY-Www" for the ISO week containing `at`. Zero-padded so the
    /// lexicographic order of keys is the chronological order.
    pub fn key_for(at: DateTime<Local>) -> String {
        let iso = at.iso_week();
        format!("{}-W{:02}", iso.year(), iso.week())
    }

    /// Distinct dish names; the day attribution is irrelevant for
    /// week-over-week comparison.
    pub fn dish_names(&self) -> BTreeSet<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }
}

/// The fixed set of price categories the page advertises. Categories absent
/// from a scrape are simply absent from the mapping, never zero-filled.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PriceCategory {
    #[serde(rename = "Lunchbuffé")]
    Buffet,
    #[serde(rename = "Tidig lunch (10-11)")]
    EarlyLunch,
    #[serde(rename = "Pensionärspris")]
    Senior,
    #[serde(rename = "Take away")]
    TakeAway,
}

impl PriceCategory {
    pub const ALL: [PriceCategory; 4] = [
        PriceCategory::Buffet,
        PriceCategory::EarlyLunch,
        PriceCategory::Senior,
        PriceCategory::TakeAway,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceCategory::Buffet => "Lunchbuffé",
            PriceCategory::EarlyLunch => "Tidig lunch (10-11)",
            PriceCategory::Senior => "Pensionärspris",
            PriceCategory::TakeAway => "Take away",
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category → whole-kronor amount.
pub type PriceMap = BTreeMap<PriceCategory, u32>;

/// Timestamped price listing. Append-only; identical consecutive entries
/// are expected and kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub date: DateTime<Local>,
    pub prices: PriceMap,
}

/// Movement of one category between two snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceChange {
    pub category: PriceCategory,
    pub old: u32,
    pub new: u32,
    pub diff: i64,
    pub percent: f64,
}

/// Dish-name set difference between the two most recent weeks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DishDelta {
    pub added: BTreeSet<String>,
    pub removed: BTreeSet<String>,
    pub common: BTreeSet<String>,
}

impl DishDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.common.is_empty()
    }
}
