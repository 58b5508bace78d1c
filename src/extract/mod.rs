// src/extract/mod.rs

pub mod menu;
pub mod node;
pub mod price;
pub mod week;

/// Collapse runs of whitespace to single spaces and trim.
/// Rendered text from the page arrives with layout newlines baked in.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
