// src/config.rs
//
// config.json loader. Every field has a sensible default so a minimal
// config only needs a target_url (or local_file). The core treats these
// values as opaque inputs.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::fetch::FetchOptions;
use crate::params::{
    DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MENU_HISTORY_FILE,
    PRICE_HISTORY_FILE, REPORT_FILE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page to scrape. Ignored when `local_file` is set.
    pub target_url: Option<String>,
    /// Cached copy of the page; takes precedence over the network.
    pub local_file: Option<PathBuf>,

    /// Fetch timeout in seconds.
    pub timeout: u64,
    pub user_agent: String,
    pub verify_ssl: bool,

    pub output_format: OutputFormat,
    /// Export path without extension.
    pub output_file: PathBuf,
    pub save_to_file: bool,

    pub menu_history_file: PathBuf,
    pub price_history_file: PathBuf,
    pub report_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: None,
            local_file: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verify_ssl: true,
            output_format: OutputFormat::Json,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            save_to_file: false,
            menu_history_file: PathBuf::from(MENU_HISTORY_FILE),
            price_history_file: PathBuf::from(PRICE_HISTORY_FILE),
            report_file: PathBuf::from(REPORT_FILE),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("could not read config {}: {e}", path.display()))?;
        let config = serde_json::from_str(&text)
            .map_err(|e| format!("invalid JSON in config {}: {e}", path.display()))?;
        Ok(config)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
            verify_ssl: self.verify_ssl,
        }
    }
}
