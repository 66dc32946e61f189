use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod export;
mod models;
mod reconcile;
mod store;

use commands::{
    ConfigCommand, ExportCommand, LogCommand, RoutineCommand, TimerCommand, WeekCommand,
};
use config::Config;
use store::JsonStore;

#[derive(Parser)]
#[command(name = "gymtrack")]
#[command(version)]
#[command(about = "A personal workout tracking CLI", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the weekly routine template
    Routine(RoutineCommand),

    /// Show and record workout session logs
    Log(LogCommand),

    /// Show or set the current training week
    Week(WeekCommand),

    /// Export a week's completed sets to a spreadsheet
    Export(ExportCommand),

    /// Run the session stopwatch
    Timer(TimerCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymtrack=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;
    let store = JsonStore::new(&config.data_dir);

    match cli.command {
        Some(Commands::Routine(cmd)) => cmd.run(&store),
        Some(Commands::Log(cmd)) => cmd.run(&store, &config),
        Some(Commands::Week(cmd)) => cmd.run(&store),
        Some(Commands::Export(cmd)) => cmd.run(&store),
        Some(Commands::Timer(cmd)) => cmd.run(),
        Some(Commands::Config(cmd)) => cmd.run(&config),
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}
