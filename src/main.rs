use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod check;
mod config;
mod extraction;
mod feed;
mod output;
mod show;
mod source;
mod telemetry;
mod timefmt;
mod view;

#[derive(Parser)]
#[command(name = "events", about = "Event listings from an RSS feed")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,
    /// Pretty-print JSON output
    #[arg(global = true, long, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Show(show::ShowCmd),
    Check(check::CheckCmd),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let cli = Cli::parse();

    // initialize logging/tracing (stderr). Respect RUST_LOG and EVENTS_LOG_FORMAT
    telemetry::config::init_tracing();
    let out = output::config::OutputConfig::from_env().with_flags(cli.json, cli.pretty);
    let cfg = config::AppConfig::from_env()?;

    match cli.command {
        Commands::Show(args) => show::run(cfg, out, args).await,
        Commands::Check(args) => check::run(cfg, out, args).await,
    }
}
