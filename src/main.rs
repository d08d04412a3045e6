// tabshell: tabbed terminal application template.
// Parses arguments, loads config, starts logging and runs the UI loop.

mod app;
mod backend;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::backend::get_backend_client;
use crate::config::{AppConfig, paths};

#[derive(Parser, Debug)]
#[command(name = "tabshell", version, about)]
struct Args {
    /// Development mode (debug logging)
    #[arg(long)]
    dev: bool,
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?.with_overrides(
        args.dev,
        args.host,
        args.port,
    );

    if args.write_config {
        let path = args
            .config
            .or_else(paths::config_path)
            .context("no config directory available")?;
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if let Some(log_path) = paths::log_path() {
        logging::init(&log_path, config.log_level())?;
    }
    info!(
        dev_mode = config.dev_mode,
        host = %config.host,
        port = config.port,
        "starting tabshell"
    );

    let backend = get_backend_client();
    let (text1, text2) = tokio::try_join!(backend.get_text1(), backend.get_text2())?;

    let mut app = App::new(config, vec![text1, text2])?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    info!("exiting");
    Ok(())
}
