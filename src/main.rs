mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod keys;
mod logging;
mod metrics;
mod node;
mod refresh;
mod session;
mod source;
#[cfg(test)]
mod test_support;
mod ui;
mod units;

use crate::config::{Config, ConfigError, ConfigOverrides, get_config_path};
use crate::session::{run_headless_mode, run_status, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Settings shared by every command. Each one overrides the config file.
#[derive(clap::Args, Debug, Clone, Default)]
struct SettingsArgs {
    /// Config file to read (default: ~/.lightdash/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the beacon node HTTP API
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Beacon chain database directory
    #[arg(long, value_name = "PATH")]
    db_path: Option<PathBuf>,

    /// Validator public key: 0x followed by 96 hex digits
    #[arg(long, value_name = "PUBKEY")]
    pubkey: Option<String>,

    /// Seconds between refreshes
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Deadline for each node request, in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Deadline for the database size walk, in seconds
    #[arg(long, value_name = "SECS")]
    dbsize_timeout: Option<u64>,

    /// Memory usage percentage at which the gauge turns red
    #[arg(long, value_name = "PERCENT")]
    memory_warning: Option<u16>,

    /// Consecutive failures before a field is marked stale
    #[arg(long, value_name = "COUNT")]
    stale_after: Option<u32>,
}

impl SettingsArgs {
    fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => get_config_path(),
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            db_path: self.db_path.clone(),
            validator_pubkey: self.pubkey.clone(),
            refresh_interval_secs: self.interval,
            request_timeout_ms: self.timeout_ms,
            dbsize_timeout_secs: self.dbsize_timeout,
            memory_warning_percent: self.memory_warning,
            stale_after_failures: self.stale_after,
        }
    }

    fn resolve(&self) -> Result<(PathBuf, Config), ConfigError> {
        let path = self.config_path()?;
        let config = Config::resolve(&path, self.overrides())?;
        Ok((path, config))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print one line per refresh instead of drawing the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Write diagnostics to this file while the dashboard is shown
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },
    /// Refresh once and print the result
    Status {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the snapshot and errors as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Validate the settings and write them to the config file
    Init {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Overwrite an existing config file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        print_cmd_error!("lightdash failed", "{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Start {
            settings,
            headless,
            log_file,
        } => {
            let (_, config) = settings.resolve()?;
            if headless {
                logging::init_stderr();
            } else if let Some(path) = &log_file {
                logging::init_file(path)?;
            }
            log::info!("Polling {} every {}s", config.base_url, config.refresh_interval_secs);

            let session = setup_session(&config)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Status { settings, json } => {
            let (_, config) = settings.resolve()?;
            logging::init_stderr();
            run_status(&config, json).await
        }
        Command::Init { settings, force } => {
            let (path, config) = settings.resolve()?;
            if path.exists() && !force {
                return Err(format!(
                    "config file {} already exists, pass --force to overwrite it",
                    path.display()
                )
                .into());
            }
            config.save(&path)?;
            print_cmd_success!("Configuration saved", "{}", path.display());
            print_cmd_info!("Next step", "run `lightdash start`");
            Ok(())
        }
    }
}
