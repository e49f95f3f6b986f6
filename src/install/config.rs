use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use super::paths::{default_install_dir, target_path};
use crate::http::{PROGRESS_ENV, ProgressMode};
use crate::runtime::Runtime;

/// Artifact host used when neither `--host` nor `RW_DOWNLOAD_HOST` is given.
pub const DEFAULT_DOWNLOAD_HOST: &str = "rw-installer.redwoodjs.com";

/// Environment variable that overrides the artifact host.
pub const HOST_ENV: &str = "RW_DOWNLOAD_HOST";

/// Shell-identification variable, used only to pick a profile file to recommend.
pub const SHELL_ENV: &str = "SHELL";

/// Everything the installer needs, resolved up front from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallConfig {
    pub install_dir: PathBuf,
    pub host: String,
    pub progress: ProgressMode,
}

impl InstallConfig {
    #[tracing::instrument(skip(runtime))]
    pub fn resolve<R: Runtime>(runtime: &R, host: Option<String>) -> Result<Self> {
        let install_dir = default_install_dir(runtime)?;
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_HOST.to_string());
        let progress = ProgressMode::from_env_value(runtime.env_var(PROGRESS_ENV).ok().as_deref());

        debug!("Resolved host {} with progress {:?}", host, progress);

        Ok(Self {
            install_dir,
            host,
            progress,
        })
    }

    pub fn target_path(&self) -> PathBuf {
        target_path(&self.install_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;
    use mockall::predicate::eq;

    fn runtime_with_progress(value: Option<&'static str>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| Some(test_home()));
        runtime
            .expect_env_var()
            .with(eq(PROGRESS_ENV))
            .returning(move |_| value.map(str::to_string).ok_or(std::env::VarError::NotPresent));
        runtime
    }

    #[test]
    fn test_resolve_defaults() {
        let runtime = runtime_with_progress(None);

        let config = InstallConfig::resolve(&runtime, None).unwrap();

        assert_eq!(config.install_dir, test_home().join(".redwoodjs/bin"));
        assert_eq!(config.target_path(), test_home().join(".redwoodjs/bin/rw"));
        assert_eq!(config.host, DEFAULT_DOWNLOAD_HOST);
        assert_eq!(config.progress, ProgressMode::Bar);
    }

    #[test]
    fn test_resolve_progress_disabled() {
        let runtime = runtime_with_progress(Some("0"));

        let config = InstallConfig::resolve(&runtime, None).unwrap();
        assert_eq!(config.progress, ProgressMode::Hidden);
    }

    #[test]
    fn test_resolve_progress_other_value() {
        let runtime = runtime_with_progress(Some("1"));

        let config = InstallConfig::resolve(&runtime, None).unwrap();
        assert_eq!(config.progress, ProgressMode::Bar);
    }

    #[test]
    fn test_resolve_custom_host() {
        let runtime = runtime_with_progress(None);

        let config =
            InstallConfig::resolve(&runtime, Some("mirror.example.com".to_string())).unwrap();
        assert_eq!(config.host, "mirror.example.com");
    }

    #[test]
    fn test_resolve_blank_host_falls_back() {
        let runtime = runtime_with_progress(None);

        let config = InstallConfig::resolve(&runtime, Some("  ".to_string())).unwrap();
        assert_eq!(config.host, DEFAULT_DOWNLOAD_HOST);
    }

    #[test]
    fn test_resolve_without_home_fails() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| None);

        assert!(InstallConfig::resolve(&runtime, None).is_err());
    }
}
