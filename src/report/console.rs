// src/report/console.rs
//
// User-facing console presentation, separate from tracing diagnostics.
// ANSI styling matches the report the tool has always printed; logs go
// through tracing and can be filtered independently.

use crate::model::{DishDelta, PriceChange, PriceMap, PriceSnapshot};

pub const BOLD: &str = "\x1b[1m";
pub const CYAN: &str = "\x1b[96m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const RESET: &str = "\x1b[0m";

const MAX_LISTED_DISHES: usize = 5;

pub fn header(text: &str) {
    let bar = "=".repeat(60);
    println!("\n{BOLD}{CYAN}{bar}{RESET}");
    println!("{BOLD}{CYAN}{text:^60}{RESET}");
    println!("{BOLD}{CYAN}{bar}{RESET}\n");
}

pub fn success(text: &str) {
    println!("{GREEN}✓ {text}{RESET}");
}

pub fn warning(text: &str) {
    println!("{YELLOW}⚠ {text}{RESET}");
}

/// Weekly menu, grouped per day, with an optional "Vecka N" line on top.
pub fn print_menu(days: &[(String, Vec<String>)], week_label: Option<&str>) {
    if let Some(label) = week_label {
        println!("{BOLD}{CYAN}📅 {label}{RESET}\n");
    }
    println!("{BOLD}{YELLOW}Veckomeny:{RESET}\n");
    for (day, dishes) in days {
        println!("{BOLD}{CYAN}  {day}{RESET}");
        for dish in dishes {
            println!("{GREEN}    🍽  {dish}{RESET}");
        }
        println!();
    }
}

pub fn print_prices(prices: &PriceMap) {
    for (category, amount) in prices {
        println!("{YELLOW}    💰 {category}: {amount} kr{RESET}");
    }
}

/// Changes against the previous scrape.
pub fn print_price_changes(changes: &[PriceChange]) {
    if changes.is_empty() {
        return;
    }
    println!("\n{BOLD}{YELLOW}PRISFÖRÄNDRINGAR SEDAN FÖRRA UPPDATERINGEN:{RESET}");
    for change in changes {
        let (symbol, color) = if change.diff > 0 { ("📈", RED) } else { ("📉", GREEN) };
        println!(
            "{color}  {symbol} {}: {} kr → {} kr ({:+} kr, {:+.1}%){RESET}",
            change.category, change.old, change.new, change.diff, change.percent
        );
    }
}

/// Long-horizon drift over the retained window.
pub fn print_drift(history: &[PriceSnapshot], drift: &[PriceChange]) {
    if drift.is_empty() {
        return;
    }
    let Some(oldest) = history.first() else { return };
    println!("\n{BOLD}{CYAN}PRISHISTORIK:{RESET}");
    println!("{BOLD}  Jämförelse från {} till idag:{RESET}", oldest.date.format("%Y-%m-%d"));
    for change in drift {
        let (symbol, color) = if change.diff > 0 { ("📈", RED) } else { ("📉", GREEN) };
        println!(
            "{color}  {symbol} {}: {} kr → {} kr ({:+} kr, {:+.1}%){RESET}",
            change.category, change.old, change.new, change.diff, change.percent
        );
    }
}

/// Week-over-week added/removed/recurring summary, capped lists.
pub fn print_week_delta(delta: &DishDelta) {
    if delta.added.is_empty() && delta.removed.is_empty() {
        return;
    }
    println!("\n{BOLD}{CYAN}JÄMFÖRELSE MED FÖRRA VECKAN:{RESET}");

    if !delta.added.is_empty() {
        println!("\n{GREEN}  ✨ NYA RÄTTER ({}):{RESET}", delta.added.len());
        for dish in delta.added.iter().take(MAX_LISTED_DISHES) {
            println!("{GREEN}    + {dish}{RESET}");
        }
    }
    if !delta.removed.is_empty() {
        println!("\n{RED}  👋 BORTTAGNA RÄTTER ({}):{RESET}", delta.removed.len());
        for dish in delta.removed.iter().take(MAX_LISTED_DISHES) {
            println!("{RED}    - {dish}{RESET}");
        }
    }
    if !delta.common.is_empty() {
        println!("\n{YELLOW}  🔄 ÅTERKOMMANDE ({} rätter){RESET}", delta.common.len());
    }
}
