//! Three Men's Morris
//!
//! Runs the GUI by default, or the text console with `morris console`.

use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use morris::cli::{Cli, Command};
use morris::ui::MorrisApp;
use morris::{console, EngineConfig, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config().context("Failed to load engine config")?;
    info!(?config, command = ?cli.command(), "Starting morris");

    match cli.command() {
        Command::Gui => run_gui(config),
        Command::Console => run_console(config),
    }
}

fn run_gui(config: EngineConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Three Men's Morris"),
        ..Default::default()
    };

    eframe::run_native(
        "Three Men's Morris",
        options,
        Box::new(move |cc| Ok(Box::new(MorrisApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}

fn run_console(config: EngineConfig) -> Result<()> {
    let mut session = Session::with_config(config);
    let stdin = io::stdin();
    console::run(&mut session, config.depth, stdin.lock(), io::stdout()).context("Console I/O failed")
}
