// src/extract/price.rs
//
// Scan the centered pricing paragraphs for "<digits> kr" amounts and sort
// them into the fixed category set by keyword. Order of the keyword checks
// is deliberate: buffet > "10-11" > senior > takeaway, first match wins
// within a fragment; across fragments the last fragment for a category wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{PriceCategory, PriceMap};

use super::node::{MarkupNode, collect_nodes};
use crate::params::CENTERED_CLASS;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*kr").expect("price pattern"));

/// First "<digits> kr" amount in the fragment, if any.
pub fn first_amount(text: &str) -> Option<u32> {
    PRICE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Classify a fragment into at most one category.
pub fn classify_fragment(text: &str) -> Option<PriceCategory> {
    let lower = text.to_lowercase();
    if lower.contains("lunchbuffé") {
        Some(PriceCategory::Buffet)
    } else if text.contains("10-11") {
        Some(PriceCategory::EarlyLunch)
    } else if lower.contains("pensionär") {
        Some(PriceCategory::Senior)
    } else if lower.contains("take away") {
        Some(PriceCategory::TakeAway)
    } else {
        None
    }
}

/// Build the category → amount mapping from candidate pricing fragments.
/// Fragments without an amount or a keyword contribute nothing; categories
/// never present are omitted, not zero-filled.
pub fn extract_prices<I>(fragments: I) -> PriceMap
where
    I: IntoIterator<Item = String>,
{
    let mut prices = PriceMap::new();
    for fragment in fragments {
        let Some(amount) = first_amount(&fragment) else { continue };
        if let Some(category) = classify_fragment(&fragment) {
            prices.insert(category, amount);
        }
    }
    prices
}

/// Pull the candidate pricing fragments (centered paragraphs) out of a
/// document.
pub fn price_fragments<N: MarkupNode>(root: &N) -> Vec<String> {
    collect_nodes(root, &|n: &N| n.tag_name() == "p" && n.has_class(CENTERED_CLASS))
        .iter()
        .map(|n| n.text_content())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frags(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classifies_all_four_categories() {
        let prices = extract_prices(frags(&[
            "Lunchbuffé 129 kr inkl. dryck",
            "Tidig lunch 10-11: 115 kr",
            "Pensionärer 105 kr",
            "Take away 119 kr",
        ]));
        assert_eq!(prices.get(&PriceCategory::Buffet), Some(&129));
        assert_eq!(prices.get(&PriceCategory::EarlyLunch), Some(&115));
        assert_eq!(prices.get(&PriceCategory::Senior), Some(&105));
        assert_eq!(prices.get(&PriceCategory::TakeAway), Some(&119));
    }

    #[test]
    fn buffet_keyword_outranks_time_range() {
        // A fragment naming both the buffet and the 10-11 window is a
        // buffet fragment.
        let prices = extract_prices(frags(&["Lunchbuffé 10-11 endast 115 kr"]));
        assert_eq!(prices.get(&PriceCategory::Buffet), Some(&115));
        assert!(!prices.contains_key(&PriceCategory::EarlyLunch));
    }

    #[test]
    fn first_number_in_fragment_is_the_amount() {
        let prices = extract_prices(frags(&["Lunchbuffé 129 kr (ord. 149 kr)"]));
        assert_eq!(prices.get(&PriceCategory::Buffet), Some(&129));
    }

    #[test]
    fn later_fragment_overwrites_earlier_for_same_category() {
        let prices =
            extract_prices(frags(&["Lunchbuffé 129 kr", "Lunchbuffé nu 135 kr"]));
        assert_eq!(prices.get(&PriceCategory::Buffet), Some(&135));
    }

    #[test]
    fn fragment_without_kr_amount_is_skipped() {
        let prices = extract_prices(frags(&["Lunchbuffé serveras dagligen"]));
        assert!(prices.is_empty());
    }

    #[test]
    fn fragment_without_keyword_contributes_nothing() {
        let prices = extract_prices(frags(&["Kaffe 25 kr"]));
        assert!(prices.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let prices = extract_prices(frags(&["LUNCHBUFFÉ 129 KR", "TAKE AWAY 119Kr"]));
        assert_eq!(prices.get(&PriceCategory::Buffet), Some(&129));
        assert_eq!(prices.get(&PriceCategory::TakeAway), Some(&119));
    }
}
