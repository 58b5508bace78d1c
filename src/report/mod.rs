// src/report/mod.rs

pub mod console;
pub mod html;

use crate::model::MenuItem;

/// Day labels in Swedish-weekday order, each with its dishes in page order.
pub fn group_days(items: &[MenuItem]) -> Vec<(String, Vec<String>)> {
    let mut days: Vec<(String, Vec<String>)> = Vec::new();
    for item in items {
        match days.iter_mut().find(|(day, _)| day == &item.day) {
            Some((_, names)) => names.push(item.name.clone()),
            None => days.push((item.day.clone(), vec![item.name.clone()])),
        }
    }
    days.sort_by_key(|(day, _)| weekday_rank(day));
    days
}

/// Rank a day heading like "MÅNDAG 24/11" by its leading weekday name.
/// Unknown headings sort last, in page order.
pub fn weekday_rank(day: &str) -> u8 {
    let first = day.split_whitespace().next().unwrap_or("");
    match first.to_uppercase().as_str() {
        "MÅNDAG" => 1,
        "TISDAG" => 2,
        "ONSDAG" => 3,
        "TORSDAG" => 4,
        "FREDAG" => 5,
        "LÖRDAG" => 6,
        "SÖNDAG" => 7,
        _ => 99,
    }
}
