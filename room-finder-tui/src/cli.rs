use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "room-finder")]
#[command(about = "Terminal UI for finding free campus rooms")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured backend (default)
    Run,
    /// Run with local in-memory rooms and bookings
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
