mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "photoview", about = "Single-image viewer with fit, zoom, pan and rotation")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewer config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an image's folder listing and dimensions
    Info(commands::info::InfoArgs),
    /// Render one view of an image to a file
    Render(commands::render::RenderArgs),
    /// Run a script of viewer commands
    Replay(commands::replay::ReplayArgs),
    /// Render every image of a folder, fitted, to a directory
    Export(commands::export::ExportArgs),
    /// Print or save the default viewer config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Replay(args) => commands::replay::run(args, &config),
        Commands::Export(args) => commands::export::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
