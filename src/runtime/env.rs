//! Environment and search-path operations.

use std::env;
use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn env_var_impl(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn home_dir_impl(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn find_executable_impl(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_env_and_dirs() {
        let runtime = RealRuntime;

        // PATH should exist on all systems
        assert!(runtime.env_var("PATH").is_ok());
        assert!(runtime.env_var("RW_INSTALLER_SURELY_UNSET_VAR").is_err());

        let home = runtime.home_dir();
        assert!(home.is_some() || cfg!(target_os = "linux")); // CI might not have home
    }

    #[test]
    fn test_real_runtime_find_executable() {
        let runtime = RealRuntime;

        assert!(runtime
            .find_executable("rw-installer-command-that-does-not-exist")
            .is_none());

        #[cfg(unix)]
        {
            let sh = runtime.find_executable("sh").unwrap();
            assert!(sh.is_absolute());
        }
    }
}
