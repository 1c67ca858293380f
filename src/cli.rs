//! Command-line flags shared by both binaries.

use crate::config::{ConfigError, PlotConfig};
use clap::Args;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML file with plot settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cells per axis
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Starting iteration depth (must be above 10)
    #[arg(short = 'i', long)]
    pub max_iterations: Option<u32>,

    /// Repaint on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl CommonArgs {
    /// Reads the config file, if any, and applies the flag overrides on top.
    pub fn plot_config(&self) -> Result<PlotConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::load(path)?,
            None => PlotConfig::default(),
        };

        if let Some(size) = self.size {
            config.grid_size = size;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if self.serial {
            config.parallel = false;
        }

        Ok(config)
    }

    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
