// src/params.rs

// History files
pub const MENU_HISTORY_FILE: &str = "menu_history.json";
pub const PRICE_HISTORY_FILE: &str = "price_history.json";

// Retention
pub const MAX_WEEKS: usize = 12;
pub const PRICE_RETENTION_DAYS: i64 = 180;

// Extraction
pub const MIN_ITEM_LEN: usize = 6; // trimmed dish names shorter than this are markup noise

// Page structure (matochmat layout)
pub const DAY_HEADING_CLASS: &str = "matochmat-wrap__day-heading";
pub const CENTERED_CLASS: &str = "has-text-align-center";
pub const MENU_TEXT_CLASS: &str = "matochmat__menu-text";

// Fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Output
pub const REPORT_FILE: &str = "menu.html";
pub const DEFAULT_OUTPUT_FILE: &str = "output/menu_data";
