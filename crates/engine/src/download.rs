//! Blocking HTTP downloader
//!
//! Streams a URL to a destination path. URLs must parse and use HTTPS;
//! non-success responses are errors. Parent directories are created before
//! the transfer starts.

use std::fs::{self, File};
use std::path::Path;
use toolcase_core::{Downloader, Error, Result};
use tracing::{debug, info};
use url::Url;

/// Validate that a URL is acceptable for downloading
fn validate_url(url_str: &str) -> Result<()> {
    let url =
        Url::parse(url_str).map_err(|e| Error::Download(format!("Invalid URL {url_str}: {e}")))?;
    if url.scheme() != "https" {
        return Err(Error::Download(format!("URL must use HTTPS: {url_str}")));
    }
    Ok(())
}

/// Downloader backed by a blocking reqwest client
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    /// Create a downloader with a default client
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        validate_url(url)?;
        info!("Downloading {url} to {}", dest.display());

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::Download(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!(
                "Download of {url} failed with status {status}"
            )));
        }

        let mut file = File::create(dest)?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|e| Error::Download(format!("Failed to write {}: {e}", dest.display())))?;
        debug!("Downloaded {bytes} bytes to {}", dest.display());
        Ok(())
    }
}
