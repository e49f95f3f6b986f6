//! Download progress indicator.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Environment variable that toggles the progress indicator. `0` hides it.
pub const PROGRESS_ENV: &str = "RW_PROGRESS_BAR";

/// Whether the download shows a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressMode {
    #[default]
    Bar,
    Hidden,
}

impl ProgressMode {
    /// Maps the raw toggle value. Only `"0"` disables the indicator; unset and
    /// every other value keep it on.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("0") => ProgressMode::Hidden,
            _ => ProgressMode::Bar,
        }
    }

    /// Build the indicator for a transfer of `total` bytes, or a byte-counting
    /// spinner when the server sent no `Content-Length`.
    pub fn bar(self, total: Option<u64>) -> Result<ProgressBar> {
        if self == ProgressMode::Hidden {
            return Ok(ProgressBar::hidden());
        }

        let bar = match total {
            Some(len) => ProgressBar::new(len).with_style(
                ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
                    .context("Invalid progress bar template")?
                    .progress_chars("#>-"),
            ),
            None => ProgressBar::new_spinner().with_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {bytes} downloaded")
                    .context("Invalid progress spinner template")?,
            ),
        };

        Ok(bar)
    }
}
