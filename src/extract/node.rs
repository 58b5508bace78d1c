// src/extract/node.rs
//
// Live-document extraction path. The sibling walk is written against a
// minimal node capability (tag / text / attributes / children) instead of
// any concrete DOM type; scraper's ElementRef is just one binding.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use scraper::ElementRef;

use crate::model::MenuItem;
use crate::params::{CENTERED_CLASS, DAY_HEADING_CLASS, MENU_TEXT_CLASS, MIN_ITEM_LEN};

use super::normalize_ws;

/// What a walk needs to know about a markup node, and nothing more.
pub trait MarkupNode: Sized + Clone {
    fn tag_name(&self) -> &str;
    fn text_content(&self) -> String;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn child_elements(&self) -> Vec<Self>;

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class").unwrap_or("").contains(class)
    }
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn text_content(&self) -> String {
        normalize_ws(&self.text().collect::<String>())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }
}

fn is_day_heading<N: MarkupNode>(node: &N) -> bool {
    node.tag_name() == "h3" && node.has_class(DAY_HEADING_CLASS)
}

/// Depth-first search for the element whose direct children hold the day
/// headings. Returns the container itself.
pub fn find_day_container<N: MarkupNode>(root: &N) -> Option<N> {
    let kids = root.child_elements();
    if kids.iter().any(is_day_heading) {
        return Some(root.clone());
    }
    for kid in kids {
        if let Some(found) = find_day_container(&kid) {
            return Some(found);
        }
    }
    None
}

/// Walk the container's children in document order: each day heading opens
/// a section, the "menu-text" block closes the whole listing, non-centered
/// paragraphs in between are dish candidates.
pub fn walk_day_sections<N: MarkupNode>(container: &N, at: DateTime<Local>) -> Vec<MenuItem> {
    let mut items = Vec::new();
    let mut day: Option<String> = None;
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for child in container.child_elements() {
        match child.tag_name() {
            "h3" if is_day_heading(&child) => {
                let text = child.text_content();
                if !text.is_empty() {
                    day = Some(text);
                }
            }
            "div" if child.has_class(MENU_TEXT_CLASS) => break,
            "p" if !child.has_class(CENTERED_CLASS) => {
                let Some(d) = &day else { continue };
                let name = child.text_content();
                if name.chars().count() < MIN_ITEM_LEN {
                    continue;
                }
                if seen.insert((d.clone(), name.clone())) {
                    items.push(MenuItem { day: d.clone(), name, scraped_at: at });
                }
            }
            _ => {}
        }
    }

    items
}

/// Live path entry point: locate the day listing anywhere under `root` and
/// walk it. No listing means no items.
pub fn extract_live<N: MarkupNode>(root: &N, at: DateTime<Local>) -> Vec<MenuItem> {
    match find_day_container(root) {
        Some(container) => walk_day_sections(&container, at),
        None => Vec::new(),
    }
}

/// Collect every node under `root` (pre-order) matching `pred`.
pub fn collect_nodes<N: MarkupNode>(root: &N, pred: &dyn Fn(&N) -> bool) -> Vec<N> {
    let mut out = Vec::new();
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if pred(&node) {
            out.push(node.clone());
        }
        let mut kids = node.child_elements();
        kids.reverse();
        stack.extend(kids);
    }
    out
}
