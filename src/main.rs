use anyhow::Result;
use clap::Parser;
use rw_installer::install::config::HOST_ENV;
use rw_installer::install::install;

/// rw-installer - install the `rw` command for the current user
///
/// Downloads the prebuilt `rw` binary for this OS and architecture into
/// ~/.redwoodjs/bin and explains how to add that directory to your PATH.
///
/// Set RW_PROGRESS_BAR=0 to hide the download progress bar.
#[derive(Parser, Debug)]
#[command(author, version = env!("RW_INSTALLER_VERSION"), about)]
struct Cli {
    /// Show debug output
    #[arg(short, long)]
    verbose: bool,

    /// Host serving the prebuilt binaries (bare host name or full base URL)
    #[arg(long = "host", env = HOST_ENV, value_name = "HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runtime = rw_installer::runtime::RealRuntime;
    install(runtime, cli.host).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::try_parse_from(["rw-installer"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_verbose_parsing() {
        let cli = Cli::try_parse_from(["rw-installer", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["rw-installer", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_host_parsing() {
        let cli = Cli::try_parse_from(["rw-installer", "--host", "mirror.example.com"]).unwrap();
        assert_eq!(cli.host.as_deref(), Some("mirror.example.com"));
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let result = Cli::try_parse_from(["rw-installer", "some/dir"]);
        assert!(result.is_err());
    }
}
