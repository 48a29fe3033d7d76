//! Command-line interface for the morris binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::EngineConfig;
use crate::error::ConfigError;

/// Three Men's Morris with a minimax/alpha-beta computer opponent
#[derive(Parser, Debug)]
#[command(name = "morris")]
#[command(about = "Play Three Men's Morris against a search-based opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Default search depth, overrides the config file
    #[arg(long, global = true)]
    pub depth: Option<i8>,

    /// Front-end to run (defaults to the GUI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front-ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the graphical board
    Gui,
    /// Run the text menu in the terminal
    Console,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Gui)
    }

    /// Config file values with command-line overrides applied.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        let config = match self.depth {
            Some(depth) => config.with_depth(depth),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }
}
