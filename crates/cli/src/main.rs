//! Gallery CLI - browse the catalog and send enquiries

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use std::path::PathBuf;
use tracing::{Level, error, info};

#[derive(Debug, Parser)]
#[command(name = "gallery")]
#[command(about = "Browse the gallery catalog and send enquiries")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// TOML configuration file, overridden by GALLERY_* environment variables
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.into())?;

    let settings = config::load_settings(cli.config.as_deref())?;
    info!(api_url = %settings.api_url, "Starting gallery CLI");

    match cli.command.execute(settings).await {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{EngagementType, EnquiryKind};

    #[test]
    fn test_parse_enquire_masterclass() {
        let cli = Cli::try_parse_from([
            "gallery",
            "enquire",
            "masterclass",
            "m1",
            "--message",
            "Team booking",
            "--type",
            "Corporate",
        ])
        .unwrap();

        let Commands::Enquire {
            kind,
            id,
            subject,
            message,
            selected_type,
        } = cli.command
        else {
            panic!("expected enquire");
        };
        assert_eq!(kind, EnquiryKind::Masterclass);
        assert_eq!(id, "m1");
        assert_eq!(subject, None);
        assert_eq!(message, "Team booking");
        assert_eq!(selected_type, Some(EngagementType::Corporate));
    }

    #[test]
    fn test_enquire_requires_message() {
        assert!(Cli::try_parse_from(["gallery", "enquire", "artwork", "42"]).is_err());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(
            Cli::try_parse_from(["gallery", "enquire", "sculpture", "1", "--message", "hi"])
                .is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gallery",
            "artworks",
            "--log-level",
            "debug",
            "--config",
            "gallery.toml",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.config, Some(PathBuf::from("gallery.toml")));
        assert!(matches!(cli.command, Commands::Artworks));
    }

    #[test]
    fn test_sign_in_takes_email_and_password() {
        let cli = Cli::try_parse_from([
            "gallery",
            "sign-in",
            "--email",
            "mei@example.com",
            "--password",
            "pw",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::SignIn { ref email, .. } if email == "mei@example.com"
        ));
    }
}
