use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use depot::domain::config::DepotConfig;
use depot::kernel::config::load_config;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "depot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Route deliveries and orders through a Depot warehouse")]
pub struct Cli {
    /// Configuration file (TOML, JSON, YAML...). Defaults to `depot.*` in the working directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay a JSON script of warehouse steps (`-` reads stdin)
    Run {
        script: PathBuf,
    },
    /// Print the occupancy report of the configured layout
    Layout {},
}

impl Cli {
    /// Loads the configuration named by `--config`, or the optional `depot.*` file.
    ///
    /// Only an absent `depot.*` falls back to the default layout.
    ///
    /// # Errors
    /// Fails when an explicit config file is missing or malformed, or when a `depot.*`
    /// file exists but is malformed.
    pub fn load_config(&self) -> Result<DepotConfig> {
        match &self.config {
            Some(path) => load_config(Some(path))
                .with_context(|| format!("Configuration {} is malformed", path.display())),
            None => match load_config(None::<&Path>) {
                Err(err) if err.is_missing_file() => Ok(DepotConfig::default()),
                loaded => loaded.context("Configuration depot.* in the working directory is malformed"),
            },
        }
    }
}
