use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::runtime::Runtime;

/// Per-user directory, relative to home, that holds everything we install.
pub const INSTALL_ROOT_NAME: &str = ".redwoodjs";

/// Name of the installed executable, both locally and on the artifact host.
pub const EXECUTABLE_NAME: &str = "rw";

/// Directory the executable is placed in: `<home>/.redwoodjs/bin`
pub fn install_dir(home: &Path) -> PathBuf {
    home.join(INSTALL_ROOT_NAME).join("bin")
}

/// Full path of the installed executable: `<install_dir>/rw`
pub fn target_path(install_dir: &Path) -> PathBuf {
    install_dir.join(EXECUTABLE_NAME)
}

/// Sibling file the download is streamed into before it replaces the target.
pub fn partial_path(target: &Path) -> PathBuf {
    target.with_file_name(format!("{}.download", EXECUTABLE_NAME))
}

/// Resolve the installation directory from the user's home directory.
#[tracing::instrument(skip(runtime))]
pub fn default_install_dir<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home_dir = runtime
        .home_dir()
        .context("Could not find home directory")?;
    let dir = install_dir(&home_dir);
    info!("Using install directory: {}", dir.display());
    Ok(dir)
}

/// Base URL for the artifact host. A bare host name gets `https://`; a value
/// with an explicit scheme is kept as-is. Trailing slashes are dropped.
pub fn base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// `<base>/<os>/<arch>/rw`
pub fn download_url(host: &str, platform: &Platform) -> String {
    format!(
        "{}/{}/{}/{}",
        base_url(host),
        platform.os,
        platform.arch,
        EXECUTABLE_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;

    #[test]
    fn test_install_dir_and_target() {
        let dir = install_dir(&test_home());
        assert_eq!(dir, test_home().join(".redwoodjs").join("bin"));
        assert_eq!(target_path(&dir), dir.join("rw"));
        assert_eq!(partial_path(&target_path(&dir)), dir.join("rw.download"));
    }

    #[test]
    fn test_default_install_dir() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| Some(test_home()));

        let dir = default_install_dir(&runtime).unwrap();
        assert_eq!(dir, test_home().join(".redwoodjs/bin"));
    }

    #[test]
    fn test_default_install_dir_no_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| None);

        let result = default_install_dir(&runtime);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("home directory"));
    }

    #[test]
    fn test_download_url_bare_host() {
        let platform = Platform::new("linux", "x86_64");
        assert_eq!(
            download_url("downloads.example.com", &platform),
            "https://downloads.example.com/linux/x86_64/rw"
        );
    }

    #[test]
    fn test_download_url_lowercases_platform() {
        let platform = Platform::new("Darwin", "ARM64");
        assert_eq!(
            download_url("downloads.example.com", &platform),
            "https://downloads.example.com/darwin/arm64/rw"
        );
    }

    #[test]
    fn test_download_url_keeps_explicit_scheme() {
        let platform = Platform::new("linux", "aarch64");
        assert_eq!(
            download_url("http://127.0.0.1:8080/", &platform),
            "http://127.0.0.1:8080/linux/aarch64/rw"
        );
    }

    #[test]
    fn test_download_url_every_supported_pair() {
        for (os, arch) in [
            ("linux", "x86_64"),
            ("linux", "aarch64"),
            ("darwin", "x86_64"),
            ("darwin", "arm64"),
        ] {
            let url = download_url("host.example", &Platform::new(os, arch));
            assert_eq!(url, format!("https://host.example/{}/{}/rw", os, arch));
        }
    }
}
