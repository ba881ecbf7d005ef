//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Environment;

/// A blog listing service with per-user ownership
#[derive(Parser, Debug)]
#[command(name = "bloglist")]
#[command(about = "A blog listing REST service with token authentication")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute; defaults to serve
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Loads the given TOML file instead of the layered config directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which environment-specific configuration file is loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// Run pending database migrations and exit
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_invocation() {
        let cli = Cli::try_parse_from(["bloglist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_serve_with_overrides() {
        let cli = Cli::try_parse_from(["bloglist", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .unwrap();
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("Expected serve command, got {:?}", other),
        }
    }

    #[test]
    fn parses_migrate_command() {
        let cli = Cli::try_parse_from(["bloglist", "migrate"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Migrate)));
    }

    #[test]
    fn parses_environment_flag() {
        let cli = Cli::try_parse_from(["bloglist", "--env", "production"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["bloglist", "--verbose", "--quiet"]).is_err());
    }
}
