mod api;
mod app;
mod browser;
mod cli;
mod config;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use api::ApiClient;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::RoomFinderConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    dotenvy::from_filename(".env.room-finder").ok();

    // Read the local offset while this is still the only thread.
    time_utils::init_local_offset();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => print_config_path(),
        Commands::Run => run(false),
        Commands::Dev => run(true),
    }
}

fn print_config_path() -> Result<()> {
    let path = RoomFinderConfig::config_path()?;
    if !path.exists() {
        RoomFinderConfig::default().save()?;
        println!("Created default config at:");
    }
    println!("{}", path.display());
    Ok(())
}

fn run(dev: bool) -> Result<()> {
    let cfg = RoomFinderConfig::load()?;
    let range = cfg.allowed_range()?;
    logging::init(&RoomFinderConfig::log_path()?)?;

    let client = if dev {
        ApiClient::dev()
    } else {
        ApiClient::new(&cfg.api_url, &cfg.anon_key)?
    };
    tracing::info!(dev = client.is_dev(), api_url = %cfg.api_url, "Starting room finder");

    let mut app = App::new(&cfg, range, time_utils::local_now());

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = rt.block_on(runtime::run_app(
        &mut terminal,
        &mut app,
        &client,
        cfg.debounce_delay(),
    ));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Room finder exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
