// tests/history.rs
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Local, TimeZone};

use lunch_scrape::error::HistoryError;
use lunch_scrape::history::{MenuStore, PriceStore};
use lunch_scrape::model::{MenuItem, PriceCategory, PriceMap};
use lunch_scrape::params::MAX_WEEKS;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("lunch_history_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn items(now: DateTime<Local>, names: &[&str]) -> Vec<MenuItem> {
    names
        .iter()
        .map(|n| MenuItem { day: "MÅNDAG 24/11".into(), name: (*n).to_string(), scraped_at: now })
        .collect()
}

#[test]
fn same_week_twice_updates_in_place() {
    let dir = tmp_dir("upsert");
    let store = MenuStore::new(dir.join("menu_history.json"));

    let monday = at(2025, 11, 24, 10);
    store.upsert_week_at(items(monday, &["Köttbullar med mos"]), monday).unwrap();

    let tuesday = at(2025, 11, 25, 10);
    let snap = store
        .upsert_week_at(items(tuesday, &["Köttbullar med mos", "Stekt fisk med remoulad"]), tuesday)
        .unwrap();

    let history = store.load().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(snap.week_key, "2025-W48");
    assert_eq!(snap.week_number, 48);
    assert_eq!(history[0].items.len(), 2);
    // first write's timestamp survives as scraped_at, second as updated_at
    assert_eq!(history[0].scraped_at, monday);
    assert_eq!(history[0].updated_at, tuesday);
}

#[test]
fn history_is_capped_to_newest_weeks() {
    let dir = tmp_dir("cap");
    let store = MenuStore::new(dir.join("menu_history.json"));

    // 2025-09-01 is a Monday; step one week at a time for 14 weeks.
    let start = at(2025, 9, 1, 12);
    for week in 0..14 {
        let now = start + Duration::weeks(week);
        store.upsert_week_at(items(now, &["Dagens husman"]), now).unwrap();
    }

    let history = store.load().unwrap();
    assert_eq!(history.len(), MAX_WEEKS);
    // newest first, the two oldest weeks are gone
    assert_eq!(history[0].week_key, "2025-W49");
    assert_eq!(history.last().unwrap().week_key, "2025-W38");
}

#[test]
fn older_week_than_a_full_history_is_returned_not_kept() {
    let dir = tmp_dir("full_of_newer");
    let store = MenuStore::new(dir.join("menu_history.json"));

    // Fill the store with 12 weeks from 2026 (2026-01-05 is a Monday).
    let start = at(2026, 1, 5, 12);
    for week in 0..12 {
        let now = start + Duration::weeks(week);
        store.upsert_week_at(items(now, &["Dagens husman"]), now).unwrap();
    }

    // A scrape dated before all of them, as after a clock correction.
    let earlier = at(2025, 11, 24, 12);
    let snap = store.upsert_week_at(items(earlier, &["Köttbullar med mos"]), earlier).unwrap();
    assert_eq!(snap.week_key, "2025-W48");
    assert_eq!(snap.items.len(), 1);

    // The newest 12 keys win; the older week never makes it to disk.
    let history = store.load().unwrap();
    assert_eq!(history.len(), MAX_WEEKS);
    assert!(history.iter().all(|s| s.week_key.as_str() > "2025-W48"));
}

#[test]
fn reload_round_trips_snapshots() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("menu_history.json");

    let now = at(2025, 11, 24, 10);
    let written = MenuStore::new(&path)
        .upsert_week_at(items(now, &["Pannbiff med lök", "Fisksoppa med aioli"]), now)
        .unwrap();

    let reloaded = MenuStore::new(&path).load().unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].week_key, written.week_key);
    assert_eq!(reloaded[0].items, written.items);
}

#[test]
fn missing_file_is_an_empty_history() {
    let dir = tmp_dir("missing");
    assert!(MenuStore::new(dir.join("nope.json")).load().unwrap().is_empty());
    assert!(PriceStore::new(dir.join("nope.json")).load_all().unwrap().is_empty());
}

#[test]
fn malformed_file_is_an_error_not_empty() {
    let dir = tmp_dir("malformed");
    let path = dir.join("menu_history.json");
    fs::write(&path, "{ not json").unwrap();

    let err = MenuStore::new(&path).load().unwrap_err();
    assert!(matches!(err, HistoryError::Malformed { .. }));
}

fn prices(amount: u32) -> PriceMap {
    let mut map = PriceMap::new();
    map.insert(PriceCategory::Buffet, amount);
    map
}

#[test]
fn price_appends_accumulate() {
    let dir = tmp_dir("price_append");
    let store = PriceStore::new(dir.join("price_history.json"));

    store.append_at(prices(125), at(2025, 11, 17, 11)).unwrap();
    store.append_at(prices(129), at(2025, 11, 24, 11)).unwrap();

    let history = store.load_all().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].prices[&PriceCategory::Buffet], 125);
    assert_eq!(history[1].prices[&PriceCategory::Buffet], 129);
}

#[test]
fn price_entries_older_than_the_window_are_pruned() {
    let dir = tmp_dir("price_prune");
    let store = PriceStore::new(dir.join("price_history.json"));

    let now = at(2025, 11, 24, 11);
    store.append_at(prices(115), now - Duration::days(200)).unwrap();
    store.append_at(prices(125), now - Duration::days(30)).unwrap();
    store.append_at(prices(129), now).unwrap();

    let history = store.load_all().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].prices[&PriceCategory::Buffet], 125);
}
