// src/extract/menu.rs
//
// Static-fragment extraction path: the document is flattened into a stream
// of markup events, and an explicit accumulator is folded over that stream.
// All parser state lives in MenuWalk, so repeated extractions can never
// bleed into each other.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use scraper::{ElementRef, Html};

use crate::model::MenuItem;
use crate::params::{CENTERED_CLASS, DAY_HEADING_CLASS, MENU_TEXT_CLASS, MIN_ITEM_LEN};

use super::normalize_ws;

/// The three markup shapes the day listing is built from.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent {
    /// `<h3 class="...day-heading...">` — text is the new current day.
    DayHeading(String),
    /// Any `<p>`; `centered` marks pricing/footer paragraphs to skip.
    Paragraph { text: String, centered: bool },
    /// `<div class="...menu-text...">` — the day listing is over.
    ListingEnd,
}

/// Flatten a markup fragment into menu events, in document order.
/// Unexpected nodes are simply not events; nothing here fails.
pub fn menu_events(html: &str) -> Vec<MenuEvent> {
    let doc = Html::parse_document(html);
    let mut events = Vec::new();

    for node in doc.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else { continue };
        let class = el.value().attr("class").unwrap_or("");
        match el.value().name() {
            "h3" if class.contains(DAY_HEADING_CLASS) => {
                events.push(MenuEvent::DayHeading(normalize_ws(&el.text().collect::<String>())));
            }
            "p" => {
                let centered =
                    class.contains(CENTERED_CLASS) || class.contains(MENU_TEXT_CLASS);
                events.push(MenuEvent::Paragraph {
                    text: normalize_ws(&el.text().collect::<String>()),
                    centered,
                });
            }
            "div" if class.contains(MENU_TEXT_CLASS) => {
                events.push(MenuEvent::ListingEnd);
            }
            _ => {}
        }
    }

    events
}

/// Fold state for one extraction pass: the current-day register plus the
/// (day, name) pairs already emitted.
#[derive(Default)]
pub struct MenuWalk {
    day: Option<String>,
    seen: HashSet<(String, String)>,
}

impl MenuWalk {
    /// Advance by one event; returns the item it produced, if any.
    pub fn step(&mut self, event: MenuEvent, at: DateTime<Local>) -> Option<MenuItem> {
        match event {
            MenuEvent::DayHeading(text) => {
                if !text.is_empty() {
                    self.day = Some(text);
                }
                None
            }
            MenuEvent::ListingEnd => {
                // Stray paragraphs after the listing must not be attributed
                // to the last day.
                self.day = None;
                None
            }
            MenuEvent::Paragraph { centered: true, .. } => None,
            MenuEvent::Paragraph { text, centered: false } => {
                let day = self.day.clone()?;
                if text.chars().count() < MIN_ITEM_LEN {
                    return None;
                }
                if !self.seen.insert((day.clone(), text.clone())) {
                    return None; // first occurrence wins
                }
                Some(MenuItem { day, name: text, scraped_at: at })
            }
        }
    }
}

/// Lazily fold events into deduplicated menu items.
pub fn fold_items(
    events: Vec<MenuEvent>,
    at: DateTime<Local>,
) -> impl Iterator<Item = MenuItem> {
    events
        .into_iter()
        .scan(MenuWalk::default(), move |walk, ev| Some(walk.step(ev, at)))
        .flatten()
}

/// Full static path: markup fragment in, one-shot item sequence out.
/// A fragment with no day heading yields an empty sequence, not an error.
pub fn extract_items(html: &str, at: DateTime<Local>) -> impl Iterator<Item = MenuItem> {
    fold_items(menu_events(html), at)
}
