use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    cleanup::{CleanupGuard, new_shared, watch_interrupt},
    http::{HttpClient, ProgressMode},
    platform::{DefaultPlatformDetector, PlatformDetector},
    runtime::Runtime,
};

pub mod config;
pub mod guidance;
pub mod paths;

use config::{InstallConfig, SHELL_ENV};
use guidance::{Shell, write_next_steps, write_success};
use paths::{EXECUTABLE_NAME, download_url, partial_path};

/// Permission bits for the installed executable: `rwxr-xr-x`.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Install `rw` for the current user, writing progress and guidance to stdout.
#[tracing::instrument(skip(runtime))]
pub async fn install<R: Runtime + 'static>(runtime: R, host: Option<String>) -> Result<()> {
    let config = InstallConfig::resolve(&runtime, host)?;
    let installer = Installer::new(runtime, DefaultPlatformDetector, HttpClient::from_defaults()?);
    let mut stdout = std::io::stdout();
    installer.install(&config, &mut stdout).await?;
    Ok(())
}

pub struct Installer<R: Runtime, P: PlatformDetector> {
    pub runtime: R,
    pub detector: P,
    pub client: HttpClient,
}

impl<R: Runtime, P: PlatformDetector> Installer<R, P> {
    pub fn new(runtime: R, detector: P, client: HttpClient) -> Self {
        Self {
            runtime,
            detector,
            client,
        }
    }

    /// Run the whole procedure. Returns the installed executable's path.
    ///
    /// Steps run strictly in order and the first failure aborts the rest:
    /// the directory is created before any network traffic, and the success
    /// message is only written once the file is in place and executable.
    #[tracing::instrument(skip(self, config, out))]
    pub async fn install<W: Write>(&self, config: &InstallConfig, out: &mut W) -> Result<PathBuf> {
        let target = config.target_path();

        self.runtime
            .create_dir_all(&config.install_dir)
            .with_context(|| {
                format!(
                    "Failed to create installation directory {}",
                    config.install_dir.display()
                )
            })?;

        let platform = self.detector.detect();
        let url = download_url(&config.host, &platform);
        info!("Detected platform {}, downloading {}", platform, url);

        self.fetch(&url, &target, config.progress).await?;

        self.runtime
            .set_permissions(&target, EXECUTABLE_MODE)
            .with_context(|| format!("Failed to mark {} as executable", target.display()))?;

        write_success(out, &target)?;
        self.print_next_steps(out, &target)?;

        Ok(target)
    }

    /// Stream `url` into a partial file next to `target`, then move it over
    /// `target`. A failed attempt leaves nothing behind at either path.
    #[tracing::instrument(skip(self, progress))]
    async fn fetch(&self, url: &str, target: &Path, progress: ProgressMode) -> Result<()> {
        let partial = partial_path(target);

        let cleanup_ctx = new_shared();
        let guard = CleanupGuard::new(Arc::clone(&cleanup_ctx), partial.clone());
        let interrupt_handler = watch_interrupt(Arc::clone(&cleanup_ctx));

        let result = async {
            let bytes = self
                .client
                .download_file(
                    url,
                    || {
                        self.runtime
                            .create_file(&partial)
                            .with_context(|| format!("Failed to create {}", partial.display()))
                    },
                    progress,
                )
                .await?;
            debug!("Received {} bytes", bytes);
            self.runtime.rename(&partial, target)
        }
        .await;

        interrupt_handler.abort();

        if let Err(e) = result {
            if self.runtime.exists(&partial) {
                if let Err(remove_err) = self.runtime.remove_file(&partial) {
                    warn!("Failed to remove partial download: {}", remove_err);
                }
            }
            return Err(e);
        }

        guard.success();
        Ok(())
    }

    fn print_next_steps<W: Write>(&self, out: &mut W, target: &Path) -> Result<()> {
        let on_path = self.runtime.find_executable(EXECUTABLE_NAME).is_some();
        debug!("{} resolvable on PATH: {}", EXECUTABLE_NAME, on_path);

        let shell = if on_path {
            Shell::Default
        } else {
            Shell::from_env_value(self.runtime.env_var(SHELL_ENV).ok().as_deref())
        };

        write_next_steps(out, target, on_path, shell)?;
        Ok(())
    }
}
