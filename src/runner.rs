// src/runner.rs
//
// One full run: acquire page, extract menu/prices/week label, persist,
// compare with history, present. Fetch and persistence failures are
// terminal for their dependent steps; extraction anomalies degrade to
// empty results and never overwrite good history.

use std::error::Error;

use chrono::{Datelike, Local};
use scraper::Html;
use tracing::warn;

use crate::compare;
use crate::config::Config;
use crate::export;
use crate::extract::{menu, node, price, week};
use crate::fetch;
use crate::history::{MenuStore, PriceStore};
use crate::report::{self, console, html};

pub struct RunFlags {
    pub no_report: bool,
    pub save: bool,
}

pub fn run(cfg: &Config, flags: &RunFlags) -> Result<(), Box<dyn Error>> {
    console::header("🍽  LUNCH MENU SCRAPER  🍽");
    let now = Local::now();

    // Local cache wins over the network.
    let (page, from_cache) = match &cfg.local_file {
        Some(path) => (fetch::read_local(path)?, true),
        None => {
            let url = cfg
                .target_url
                .as_deref()
                .ok_or("config needs target_url or local_file")?;
            (fetch::fetch_url(url, &cfg.fetch_options())?, false)
        }
    };

    let doc = Html::parse_document(&page.html);
    let root = doc.root_element();

    // Cached fragments go through the static event fold; live documents
    // through the sibling walk. Same rendered content, same items.
    let items: Vec<_> = if from_cache {
        menu::extract_items(&page.html, now).collect()
    } else {
        node::extract_live(&root, now)
    };

    let live_label = if from_cache { None } else { week::live_week_label(&root) };
    let week_label = week::resolve_week_label(live_label, &items, now.year());

    let prices = price::extract_prices(price::price_fragments(&root));

    let menu_store = MenuStore::new(&cfg.menu_history_file);
    let price_store = PriceStore::new(&cfg.price_history_file);

    if !prices.is_empty() {
        console::success("Priser extraherade");
        console::print_prices(&prices);
        price_store.append_at(prices, now)?;
        console::success("Prishistorik sparad");
    }

    let price_history = price_store.load_all()?;
    let price_changes = compare::price_deltas(&price_history);
    let drift = compare::price_drift(&price_history);

    if items.is_empty() {
        // Empty parse: show what history allows, write nothing over the
        // last good week.
        warn!("no menu items extracted from page");
        console::warning("Inga menyposter hittades.");
        console::print_price_changes(&price_changes);
        console::print_drift(&price_history, &drift);
        return Ok(());
    }

    console::success(&format!("Hittade {} menyposter", items.len()));
    let days = report::group_days(&items);
    console::print_menu(&days, week_label.as_deref());

    let snapshot = menu_store.upsert_week_at(items.clone(), now)?;
    console::success(&format!("Menyhistorik sparad (Vecka {})", snapshot.week_number));

    let menu_history = menu_store.load()?;
    let delta = compare::compare_weeks(&menu_history);

    console::print_price_changes(&price_changes);
    console::print_drift(&price_history, &drift);
    console::print_week_delta(&delta);

    if !flags.no_report {
        let input = html::ReportInput {
            days: &days,
            delta: &delta,
            price_changes: &price_changes,
            drift: &drift,
            price_history: &price_history,
            week_label: week_label.as_deref(),
            generated_at: now,
        };
        html::write_report(&cfg.report_file, &input)?;
        console::success(&format!("HTML-fil skapad: {}", cfg.report_file.display()));
    }

    if cfg.save_to_file || flags.save {
        let path = export::save_data(&items, cfg.output_format, &cfg.output_file)?;
        console::success(&format!("Data sparad: {}", path.display()));
    }

    console::header("✅  KLART!  ✅");
    Ok(())
}
