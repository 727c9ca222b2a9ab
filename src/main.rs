//! safedeck - Terminal UI for multisig wallets

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use safedeck::{App, Config, paths};
use std::path::{Path, PathBuf};

/// Terminal UI for multisig wallets
#[derive(Parser)]
#[command(name = "safedeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as JSON
    ShowConfig,
}

fn init_logging() {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(dir, "safedeck.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::InitConfig { force }) => {
            let path = cli.config.unwrap_or_else(Config::default_path);
            cmd_init_config(&path, force)
        }
        Some(Commands::ShowConfig) => {
            let config = load_config(cli.config.as_deref())?;
            println!("{}", config.to_json()?);
            Ok(())
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            safedeck::tui::run(App::new(config))
        }
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to initialize config at {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
