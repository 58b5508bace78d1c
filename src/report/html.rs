// src/report/html.rs
//
// Static HTML report: this week's menu with new-dish highlighting, price
// alerts, and a Chart.js line chart over the retained price history.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::model::{DishDelta, PriceCategory, PriceChange, PriceSnapshot};

const HEAD: &str = include_str!("report_head.html");
const TITLE: &str = "Veckans lunchmeny";
const CHART_COLORS: [&str; 4] = ["#e53e3e", "#3182ce", "#38a169", "#d69e2e"];
const TABLE_SNAPSHOTS: usize = 5;

pub struct ReportInput<'a> {
    pub days: &'a [(String, Vec<String>)],
    pub delta: &'a DishDelta,
    pub price_changes: &'a [PriceChange],
    pub drift: &'a [PriceChange],
    pub price_history: &'a [PriceSnapshot],
    pub week_label: Option<&'a str>,
    pub generated_at: DateTime<Local>,
}

pub fn write_report(path: &Path, input: &ReportInput) -> io::Result<()> {
    fs::write(path, render(input))
}

pub fn render(input: &ReportInput) -> String {
    let title = match input.week_label {
        Some(label) => format!("{TITLE} - {label}"),
        None => TITLE.to_string(),
    };

    let mut page = HEAD.replace("{{TITLE}}", &esc(&title));

    // Header
    page.push_str("        <div class=\"header\">\n");
    let _ = writeln!(page, "            <h1>{TITLE}</h1>");
    page.push_str("            <div class=\"subtitle\">Lunchmeny och prisutveckling</div>\n");
    if let Some(label) = input.week_label {
        let _ = writeln!(page, "            <span class=\"week-badge\">{}</span>", esc(label));
    }
    page.push_str("        </div>\n        <div class=\"content\">\n");

    push_alerts(&mut page, input);
    push_stats(&mut page, input);
    push_days(&mut page, input);
    push_prices(&mut page, input);

    // Footer
    let _ = writeln!(
        page,
        "        </div>\n        <div class=\"footer\">Uppdaterad {}</div>\n    </div>",
        input.generated_at.format("%Y-%m-%d kl %H:%M")
    );
    push_chart_script(&mut page, input);
    page.push_str("</body>\n</html>\n");
    page
}

fn push_alerts(page: &mut String, input: &ReportInput) {
    if !input.price_changes.is_empty() {
        page.push_str("            <div class=\"alert alert-warning\">\n");
        page.push_str("                <strong>Prisändringar</strong><br>\n");
        for change in input.price_changes {
            let symbol = if change.diff > 0 { "↑" } else { "↓" };
            let _ = writeln!(
                page,
                "                {symbol} {}: {} → {} kr<br>",
                esc(change.category.label()),
                change.old,
                change.new
            );
        }
        page.push_str("            </div>\n");
    }

    if !input.drift.is_empty() {
        if let Some(oldest) = input.price_history.first() {
            page.push_str("            <div class=\"alert alert-info\">\n");
            let _ = writeln!(
                page,
                "                <strong>Prisutveckling sedan {}</strong><br>",
                oldest.date.format("%Y-%m-%d")
            );
            for change in input.drift {
                let _ = writeln!(
                    page,
                    "                {}: {} → {} kr ({:+} kr, {:+.1}%)<br>",
                    esc(change.category.label()),
                    change.old,
                    change.new,
                    change.diff,
                    change.percent
                );
            }
            page.push_str("            </div>\n");
        }
    }
}

fn push_stats(page: &mut String, input: &ReportInput) {
    let total_dishes: usize = input.days.iter().map(|(_, d)| d.len()).sum();
    let stats = [
        (input.days.len(), "Dagar"),
        (total_dishes, "Rätter"),
        (input.delta.added.len(), "Nya"),
    ];
    page.push_str("            <div class=\"stats\">\n");
    for (value, label) in stats {
        let _ = writeln!(
            page,
            "                <div class=\"stat\"><div class=\"stat-value\">{value}</div><div class=\"stat-label\">{label}</div></div>"
        );
    }
    page.push_str("            </div>\n");
}

fn push_days(page: &mut String, input: &ReportInput) {
    for (day, dishes) in input.days {
        page.push_str("            <div class=\"day-section\">\n");
        let _ = writeln!(page, "                <h2>{}</h2>", esc(day));
        for dish in dishes {
            let class =
                if input.delta.added.contains(dish) { "menu-item new" } else { "menu-item" };
            let _ = writeln!(page, "                <div class=\"{class}\">{}</div>", esc(dish));
        }
        page.push_str("            </div>\n");
    }
}

/// Categories that occur anywhere in the retained history, in fixed order.
fn charted_categories(history: &[PriceSnapshot]) -> Vec<PriceCategory> {
    PriceCategory::ALL
        .into_iter()
        .filter(|c| history.iter().any(|s| s.prices.contains_key(c)))
        .collect()
}

fn push_prices(page: &mut String, input: &ReportInput) {
    let history = input.price_history;
    if history.len() < 2 {
        return;
    }

    page.push_str("            <div class=\"chart-container\">\n");
    page.push_str("                <div class=\"chart-title\">Prisutveckling över tid</div>\n");
    page.push_str("                <canvas id=\"priceChart\"></canvas>\n");
    page.push_str("            </div>\n");

    let recent = &history[history.len().saturating_sub(TABLE_SNAPSHOTS)..];

    page.push_str("            <table class=\"price-table\">\n                <thead><tr><th>Typ</th>");
    for snapshot in recent {
        let _ = write!(page, "<th>{}</th>", snapshot.date.format("%Y-%m-%d"));
    }
    page.push_str("<th>Förändring</th></tr></thead>\n                <tbody>\n");

    for category in charted_categories(history) {
        let _ = write!(page, "                    <tr><td>{}</td>", esc(category.label()));
        let amounts: Vec<u32> =
            recent.iter().map(|s| s.prices.get(&category).copied().unwrap_or(0)).collect();
        for amount in &amounts {
            let _ = write!(page, "<td>{amount} kr</td>");
        }
        match (amounts.first(), amounts.last()) {
            (Some(&first), Some(&last)) if first > 0 && amounts.len() >= 2 => {
                let diff = i64::from(last) - i64::from(first);
                let percent = (diff as f64 / first as f64 * 1000.0).round() / 10.0;
                let (class, symbol) = match diff.cmp(&0) {
                    std::cmp::Ordering::Greater => ("up", "↑"),
                    std::cmp::Ordering::Less => ("down", "↓"),
                    std::cmp::Ordering::Equal => ("", "→"),
                };
                let _ = write!(
                    page,
                    "<td class=\"price-change {class}\">{symbol} {diff:+} kr ({percent:+.1}%)</td>"
                );
            }
            _ => page.push_str("<td>-</td>"),
        }
        page.push_str("</tr>\n");
    }
    page.push_str("                </tbody>\n            </table>\n");
}

fn push_chart_script(page: &mut String, input: &ReportInput) {
    let history = input.price_history;
    if history.len() < 2 {
        return;
    }

    let labels: Vec<String> =
        history.iter().map(|s| s.date.format("%Y-%m-%d").to_string()).collect();
    let labels_json = serde_json::to_string(&labels).unwrap_or_else(|_| "[]".into());

    page.push_str("    <script>\n");
    page.push_str("        const ctx = document.getElementById('priceChart');\n");
    page.push_str("        new Chart(ctx, {\n            type: 'line',\n            data: {\n");
    let _ = writeln!(page, "                labels: {labels_json},");
    page.push_str("                datasets: [\n");

    let categories = charted_categories(history);
    for (idx, category) in categories.iter().enumerate() {
        let amounts: Vec<u32> =
            history.iter().map(|s| s.prices.get(category).copied().unwrap_or(0)).collect();
        let data_json = serde_json::to_string(&amounts).unwrap_or_else(|_| "[]".into());
        let color = CHART_COLORS[idx % CHART_COLORS.len()];
        let comma = if idx + 1 < categories.len() { "," } else { "" };
        let _ = writeln!(
            page,
            "                    {{ label: {}, data: {data_json}, borderColor: '{color}', backgroundColor: '{color}33', tension: 0.3, fill: false }}{comma}",
            serde_json::to_string(category.label()).unwrap_or_else(|_| "\"\"".into())
        );
    }

    page.push_str(
        "                ]\n            },\n            options: {\n                responsive: true,\n                plugins: { legend: { position: 'bottom' } },\n                scales: { y: { beginAtZero: false, ticks: { callback: v => v + ' kr' } } }\n            }\n        });\n    </script>\n",
    );
}

fn esc(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceMap;
    use std::collections::BTreeSet;

    fn snapshot(amount: u32) -> PriceSnapshot {
        let mut prices = PriceMap::new();
        prices.insert(PriceCategory::Buffet, amount);
        PriceSnapshot { date: Local::now(), prices }
    }

    fn input_fixture<'a>(
        days: &'a [(String, Vec<String>)],
        delta: &'a DishDelta,
        history: &'a [PriceSnapshot],
    ) -> ReportInput<'a> {
        ReportInput {
            days,
            delta,
            price_changes: &[],
            drift: &[],
            price_history: history,
            week_label: Some("Vecka 48"),
            generated_at: Local::now(),
        }
    }

    #[test]
    fn new_dishes_are_highlighted() {
        let days = vec![(
            "MÅNDAG 24/11".to_string(),
            vec!["Köttbullar med mos".to_string(), "Ny fiskrätt med dill".to_string()],
        )];
        let mut added = BTreeSet::new();
        added.insert("Ny fiskrätt med dill".to_string());
        let delta = DishDelta { added, ..DishDelta::default() };

        let html = render(&input_fixture(&days, &delta, &[]));
        assert!(html.contains("menu-item new\">Ny fiskrätt med dill"));
        assert!(html.contains("menu-item\">Köttbullar med mos"));
        assert!(html.contains("Vecka 48"));
    }

    #[test]
    fn chart_appears_only_with_enough_history() {
        let days = Vec::new();
        let delta = DishDelta::default();

        let html = render(&input_fixture(&days, &delta, &[snapshot(129)]));
        assert!(!html.contains("priceChart"));

        let html = render(&input_fixture(&days, &delta, &[snapshot(125), snapshot(129)]));
        assert!(html.contains("priceChart"));
        assert!(html.contains("Lunchbuffé"));
    }

    #[test]
    fn markup_in_dish_names_is_escaped() {
        let days = vec![(
            "MÅNDAG 24/11".to_string(),
            vec!["Grillad <br> kyckling & ris".to_string()],
        )];
        let delta = DishDelta::default();
        let html = render(&input_fixture(&days, &delta, &[]));
        assert!(html.contains("Grillad &lt;br&gt; kyckling &amp; ris"));
        assert!(!html.contains("<br> kyckling"));
    }
}
