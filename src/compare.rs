// src/compare.rs
//
// Pure comparison over loaded history. Menus are compared as dish-name
// sets (day attribution discarded); prices as per-category numeric deltas.
// Comparison always takes the two most recent entries as stored — a week
// gap between them is compared like any other pair.

use tracing::warn;

use crate::model::{DishDelta, PriceChange, PriceMap, PriceSnapshot, WeekSnapshot};

/// Set difference between the newest and second-newest week. Fewer than two
/// stored weeks compares as three empty sets.
pub fn compare_weeks(history: &[WeekSnapshot]) -> DishDelta {
    let (Some(newest), Some(previous)) = (history.first(), history.get(1)) else {
        return DishDelta::default();
    };

    let current = newest.dish_names();
    let earlier = previous.dish_names();

    DishDelta {
        added: current.difference(&earlier).cloned().collect(),
        removed: earlier.difference(&current).cloned().collect(),
        common: current.intersection(&earlier).cloned().collect(),
    }
}

/// Per-category changes between the two most recent price snapshots.
pub fn price_deltas(history: &[PriceSnapshot]) -> Vec<PriceChange> {
    if history.len() < 2 {
        return Vec::new();
    }
    changes_between(
        &history[history.len() - 2].prices,
        &history[history.len() - 1].prices,
    )
}

/// Long-horizon drift: oldest retained snapshot against the newest.
pub fn price_drift(history: &[PriceSnapshot]) -> Vec<PriceChange> {
    let (Some(oldest), Some(newest)) = (history.first(), history.last()) else {
        return Vec::new();
    };
    if history.len() < 2 {
        return Vec::new();
    }
    changes_between(&oldest.prices, &newest.prices)
}

/// Changes for categories present in both mappings with differing amounts.
/// An old amount of zero cannot be expressed as a percentage; the entry is
/// dropped with a warning rather than passed on as infinity.
fn changes_between(old: &PriceMap, new: &PriceMap) -> Vec<PriceChange> {
    let mut changes = Vec::new();
    for (category, &new_amount) in new {
        let Some(&old_amount) = old.get(category) else { continue };
        if new_amount == old_amount {
            continue;
        }
        if old_amount == 0 {
            warn!(%category, new_amount, "old price is zero, skipping percent computation");
            continue;
        }
        let diff = i64::from(new_amount) - i64::from(old_amount);
        let percent = (diff as f64 / old_amount as f64 * 1000.0).round() / 10.0;
        changes.push(PriceChange {
            category: *category,
            old: old_amount,
            new: new_amount,
            diff,
            percent,
        });
    }
    changes
}
