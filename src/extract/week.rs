// src/extract/week.rs
//
// Week label resolution. The page sometimes carries an explicit "Vecka N"
// heading; when it does not, the label is derived from the D/M date in the
// first day heading plus the current year.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::model::MenuItem;

use super::node::{MarkupNode, collect_nodes};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})").expect("date pattern"));
static WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Vv]ecka\s*(\d+)").expect("week pattern"));

/// Derive "Vecka {n}" from a day heading like "MÅNDAG 24/11" and a year.
/// No date pattern, or a date that does not exist, is "unknown" — not an
/// error.
pub fn week_from_heading(heading: &str, year: i32) -> Option<String> {
    let caps = DATE_RE.captures(heading)?;
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("Vecka {}", date.iso_week().week()))
}

/// Normalize any "Vecka N" mention in a text to the canonical label.
pub fn week_label_in(text: &str) -> Option<String> {
    let caps = WEEK_RE.captures(text)?;
    Some(format!("Vecka {}", caps.get(1)?.as_str()))
}

/// Scan headings/paragraphs of a live document for an explicit week label.
pub fn live_week_label<N: MarkupNode>(root: &N) -> Option<String> {
    collect_nodes(root, &|n: &N| matches!(n.tag_name(), "h2" | "h3" | "p"))
        .iter()
        .find_map(|n| week_label_in(&n.text_content()))
}

/// Pick the week label for a run: an explicit page label wins over the
/// date-derived one.
pub fn resolve_week_label(
    live: Option<String>,
    items: &[MenuItem],
    year: i32,
) -> Option<String> {
    live.or_else(|| items.first().and_then(|item| week_from_heading(&item.day, year)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn heading_date_maps_to_iso_week() {
        // 2025-11-24 is a Monday in ISO week 48.
        assert_eq!(week_from_heading("MÅNDAG 24/11", 2025).as_deref(), Some("Vecka 48"));
        assert_eq!(week_from_heading("Tisdag 1/1", 2025).as_deref(), Some("Vecka 1"));
    }

    #[test]
    fn heading_without_date_is_unknown() {
        assert_eq!(week_from_heading("MÅNDAG", 2025), None);
        assert_eq!(week_from_heading("", 2025), None);
    }

    #[test]
    fn impossible_date_is_unknown() {
        assert_eq!(week_from_heading("LÖRDAG 31/2", 2025), None);
        assert_eq!(week_from_heading("SÖNDAG 24/13", 2025), None);
    }

    #[test]
    fn explicit_label_is_normalized() {
        assert_eq!(week_label_in("Meny för vecka 48").as_deref(), Some("Vecka 48"));
        assert_eq!(week_label_in("Vecka48").as_deref(), Some("Vecka 48"));
        assert_eq!(week_label_in("Veckans soppa"), None);
    }

    #[test]
    fn live_label_beats_date_derived() {
        let items = vec![MenuItem {
            day: "MÅNDAG 24/11".into(),
            name: "Köttbullar med mos".into(),
            scraped_at: Local::now(),
        }];
        let label = resolve_week_label(Some("Vecka 50".into()), &items, 2025);
        assert_eq!(label.as_deref(), Some("Vecka 50"));
    }

    #[test]
    fn date_derivation_is_the_fallback() {
        let items = vec![MenuItem {
            day: "MÅNDAG 24/11".into(),
            name: "Köttbullar med mos".into(),
            scraped_at: Local::now(),
        }];
        assert_eq!(resolve_week_label(None, &items, 2025).as_deref(), Some("Vecka 48"));
        assert_eq!(resolve_week_label(None, &[], 2025), None);
    }
}
