use anyhow::Result;
use clap::Parser;
use commands::Commands;
use config::StoreConfig;
use pharmafind_core::PharmaFind;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod dispatch;
mod output;

#[derive(Parser)]
#[command(
    name = "pharmafind",
    version,
    about = "Pharmacy stock lookup with alternative suggestions"
)]
struct Cli {
    #[command(flatten)]
    store: StoreConfig,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG overrides --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app = PharmaFind::new(cli.store.open()?);

    let stdout = std::io::stdout();
    dispatch::run(cli.command, &mut app, &mut stdout.lock())?;

    Ok(())
}
