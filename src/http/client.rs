//! Streaming HTTP download client.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::io::Write;

use super::error::classify_error;
use super::progress::ProgressMode;

/// HTTP client for fetching the installer's single artifact.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the default client. Redirects are followed by reqwest's default policy.
    pub fn from_defaults() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("rw-installer/", env!("RW_INSTALLER_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::new(client))
    }

    /// Downloads `url` into the writer produced by `create_writer`.
    ///
    /// The writer is only created once the server has answered with a success
    /// status, so a rejected request never touches the filesystem. There is a
    /// single attempt; any failure is returned to the caller.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(
        &self,
        url: &str,
        create_writer: F,
        progress: ProgressMode,
    ) -> Result<u64>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to download {}", url))?;

        let mut response = response.error_for_status().map_err(classify_error)?;

        let bar = progress.bar(response.content_length())?;
        let mut writer = create_writer()?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .context("Failed to read chunk from download stream")?
        {
            writer
                .write_all(&chunk)
                .context("Failed to write chunk to file")?;
            downloaded_bytes += chunk.len() as u64;
            bar.inc(chunk.len() as u64);
        }

        writer.flush().context("Failed to flush downloaded file")?;
        bar.finish_and_clear();

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}
