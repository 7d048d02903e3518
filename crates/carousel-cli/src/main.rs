use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carousel_core::{AppConfig, IndicatorSize};

mod commands;
mod pages;

use pages::Demo;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A paging carousel in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this configuration file instead of ~/.config/carousel/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a carousel (default: the onboarding demo)
    Run(RunArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Built-in page set
    #[arg(short, long, value_enum, conflicts_with = "pages")]
    pub demo: Option<Demo>,

    /// Text files to show, one page each
    #[arg(short, long, num_args = 1..)]
    pub pages: Vec<PathBuf>,

    /// Seconds per page when auto-scrolling
    #[arg(long)]
    pub duration: Option<f64>,

    /// Stop at the last page instead of wrapping around
    #[arg(long)]
    pub no_repeat: bool,

    /// Only move when dragged
    #[arg(long)]
    pub manual: bool,

    /// Indicator dot size
    #[arg(long, value_parser = parse_size)]
    pub size: Option<IndicatorSize>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file if none exists
    Init,
}

fn parse_size(value: &str) -> std::result::Result<IndicatorSize, String> {
    match value.to_ascii_lowercase().replace('-', "_").as_str() {
        "small" => Ok(IndicatorSize::Small),
        "medium" => Ok(IndicatorSize::Medium),
        "large" => Ok(IndicatorSize::Large),
        "extra_large" | "extralarge" => Ok(IndicatorSize::ExtraLarge),
        "largest" => Ok(IndicatorSize::Largest),
        other => Err(format!(
            "unknown size '{}' (small, medium, large, extra-large, largest)",
            other
        )),
    }
}

/// The TUI owns the terminal, so it logs to a file; everything else logs
/// to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    let command = cli.command.unwrap_or(Commands::Run(RunArgs::default()));
    init_logging(&config, matches!(command, Commands::Run(_)))?;

    match command {
        Commands::Run(args) => commands::run::run(config, args).await,
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(&config_path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::parse_from([
            "carousel", "run", "--demo", "recipes", "--duration", "3", "--no-repeat", "--size",
            "extra-large",
        ]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.demo, Some(Demo::Recipes));
        assert_eq!(args.duration, Some(3.0));
        assert!(args.no_repeat);
        assert_eq!(args.size, Some(IndicatorSize::ExtraLarge));
    }

    #[test]
    fn test_demo_conflicts_with_pages() {
        let result = Cli::try_parse_from(["carousel", "run", "--demo", "gallery", "--pages", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("Largest"), Ok(IndicatorSize::Largest));
        assert!(parse_size("huge").is_err());
    }
}
