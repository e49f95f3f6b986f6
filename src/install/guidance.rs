//! Follow-up instructions printed after a successful install.

use std::io::{self, Write};
use std::path::Path;

use super::paths::{EXECUTABLE_NAME, INSTALL_ROOT_NAME};

/// Interactive shell, as far as choosing a start-up file is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Zsh,
    /// Anything else gets bash's start-up file.
    Default,
}

impl Shell {
    /// Classify the value of `SHELL`, e.g. `/bin/zsh` or `/usr/local/bin/zsh`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let name = value
            .map(Path::new)
            .and_then(Path::file_name)
            .and_then(|name| name.to_str());

        match name {
            Some("zsh") => Shell::Zsh,
            _ => Shell::Default,
        }
    }

    pub fn profile(self) -> &'static str {
        match self {
            Shell::Zsh => "~/.zshrc",
            Shell::Default => "~/.bashrc",
        }
    }
}

/// The two lines a user adds to their profile to put the install dir on `PATH`.
pub fn export_lines() -> [String; 2] {
    [
        format!("export RW_INSTALL=\"$HOME/{}\"", INSTALL_ROOT_NAME),
        "export PATH=\"$RW_INSTALL/bin:$PATH\"".to_string(),
    ]
}

pub fn write_success<W: Write>(out: &mut W, target: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{} was installed successfully to {}",
        EXECUTABLE_NAME,
        target.display()
    )
}

/// When `rw` already resolves on `PATH`, only the help hint is printed.
/// Otherwise the profile edit comes first and the hint uses the absolute path.
pub fn write_next_steps<W: Write>(
    out: &mut W,
    target: &Path,
    on_path: bool,
    shell: Shell,
) -> io::Result<()> {
    if on_path {
        return writeln!(out, "Run '{} --help' to get started", EXECUTABLE_NAME);
    }

    writeln!(
        out,
        "Manually add the directory to your {} (or similar):",
        shell.profile()
    )?;
    for line in export_lines() {
        writeln!(out, "  {}", line)?;
    }
    writeln!(out, "Run '{} --help' to get started", target.display())
}
