use clap::Parser;
use colored::*;
use recstore::api::RecstoreApi;
use recstore::config::RecstoreConfig;
use recstore::error::Result;
use recstore::request::Request;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const LOG_ENV: &str = "RECSTORE_LOG";
const CONFIG_ENV: &str = "RECSTORE_CONFIG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Bad arguments are reported before the config is even looked at.
    let request = Request::from_arguments(&cli.to_arguments())?;

    let config = match config_path(cli) {
        Some(path) => RecstoreConfig::load(&path)?,
        None => RecstoreConfig::default(),
    };
    tracing::debug!(?config, "loaded config");

    let api = RecstoreApi::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = api.execute(&request, &mut out)?;
    out.flush()?;
    tracing::debug!(?outcome, "done");
    Ok(())
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(RecstoreConfig::default_path)
}

/// Logs go to stderr; stdout carries command output only.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
