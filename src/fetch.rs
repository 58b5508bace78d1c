// src/fetch.rs
//
// Page acquisition, the one collaborator boundary that blocks on the
// network. Either a live GET with the configured timeout/user-agent/TLS
// policy, or a locally cached copy of the page for offline runs.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::error::FetchError;

/// Raw rendered markup of one retrieved page.
pub struct FetchedPage {
    pub html: String,
}

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub verify_ssl: bool,
}

/// Blocking GET. Any failure here is terminal for the current run; the
/// caller proceeds with no data and history untouched.
pub fn fetch_url(url: &str, opts: &FetchOptions) -> Result<FetchedPage, FetchError> {
    info!(url, timeout_secs = opts.timeout.as_secs(), "fetching page");

    let client = reqwest::blocking::Client::builder()
        .timeout(opts.timeout)
        .user_agent(&opts.user_agent)
        .danger_accept_invalid_certs(!opts.verify_ssl)
        .build()
        .map_err(|e| FetchError::Http { url: url.to_string(), source: e })?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Http { url: url.to_string(), source: e })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
    }

    let html = response
        .text()
        .map_err(|e| FetchError::Http { url: url.to_string(), source: e })?;

    info!(bytes = html.len(), "page fetched");
    Ok(FetchedPage { html })
}

/// Read a cached markup fragment instead of going to the network.
pub fn read_local(path: &Path) -> Result<FetchedPage, FetchError> {
    info!(path = %path.display(), "reading local page");
    let html = fs::read_to_string(path)
        .map_err(|e| FetchError::LocalFile { path: path.to_path_buf(), source: e })?;
    Ok(FetchedPage { html })
}
