//! Command-line entry point.
//!
//! Parses arguments, loads configuration with CLI overrides applied, sets
//! up logging, and dispatches to the requested command.

pub mod parser;

pub use parser::{Cli, Commands};

use clap::Parser;

use crate::config::{ConfigLoader, Settings};
use crate::db;
use crate::logger::init_logger;
use crate::server::Server;

/// Runs the application from command-line arguments.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    init_logger(&settings.logger)?;

    match cli.command {
        Some(Commands::Migrate) => {
            if settings.database.url.is_empty() {
                anyhow::bail!("database.url must be configured to run migrations");
            }
            db::run_pending_migrations(&settings.database.url).await?;
            tracing::info!("Migrations complete");
            Ok(())
        }
        Some(Commands::Serve { .. }) | None => Server::new(settings).run().await,
    }
}

/// Loads settings from configuration files and applies CLI overrides.
///
/// Precedence, highest first: CLI flags, environment variables, local and
/// environment-specific files, defaults.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = if let Some(path) = &cli.config {
        ConfigLoader::load_from_file(path)?
    } else {
        let mut loader = ConfigLoader::new();
        if let Some(env) = cli.env {
            loader = loader.with_environment(env);
        }
        loader.load()?
    };

    if let Some(Commands::Serve { host, port }) = &cli.command {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
    }

    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn verbose_flag_overrides_logger_level() {
        let file = config_file("[logger]\nlevel = \"info\"\n");
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["bloglist", "--config", path, "--verbose"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn serve_flags_override_server_settings() {
        let file = config_file("[server]\nhost = \"10.0.0.1\"\nport = 4000\n");
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "bloglist", "--config", path, "serve", "--host", "0.0.0.0", "--port", "8080",
        ])
        .unwrap();
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn config_file_values_survive_without_overrides() {
        let file = config_file("[server]\nport = 4000\n");
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["bloglist", "--config", path]).unwrap();
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.server.port, 4000);
    }
}
