//! millstore - command-line front end for the warehouse workbook store.
//!
//! Every command prints its response as JSON on stdout. A failed operation
//! prints `{"status":"error","kind":..,"message":..}` and exits with status 1.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Command, RootArgs};
use millstore_core::{ErrorResponse, Store, StoreConfig, StoreError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MILLSTORE_LOG";

fn load_config(args: &RootArgs) -> Result<StoreConfig> {
    let mut config = match &args.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::discover()?,
    };
    if let Some(file) = &args.file {
        config.file = file.clone();
    }
    Ok(config)
}

fn init_logging(config: &StoreConfig) -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(&config.log_filter),
    }
    .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run one command against the store and print its response.
fn run(store: &Store, command: Command) -> Result<()> {
    match command {
        Command::Init => print_json(&serde_json::json!({
            "status": "success",
            "file": store.path().display().to_string(),
        })),
        Command::BinMap => print_json(&store.get_bin_map()?),
        Command::Options => print_json(&store.get_dropdown_options()?),
        Command::Submit(args) => print_json(&store.submit_intake(&args.into())?),
        Command::SalesLookups => print_json(&store.get_sales_lookups()?),
        Command::Customers(args) => print_json(&store.search_customers(&args.into())?),
        Command::Goods => print_json(&store.get_goods()?),
        Command::Ledger => print_json(&store.ledger_rows()?),
    }
}

fn main() -> Result<()> {
    let args = RootArgs::parse();
    let config = load_config(&args)?;
    init_logging(&config)?;

    let outcome = Store::open(&config)
        .map_err(anyhow::Error::from)
        .and_then(|store| run(&store, args.command));
    let Err(err) = outcome else {
        return Ok(());
    };
    // Store failures are reported as an error body; anything else is fatal.
    let store_err = err.downcast::<StoreError>()?;
    tracing::error!(kind = store_err.kind(), "{store_err}");
    print_json(&ErrorResponse::from(&store_err))?;
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_survive_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();
        let store = Store::open_path(&path).unwrap();

        let err = run(&store, Command::Goods).unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert_eq!(store_err.kind(), "StorageUnreadable");
    }
}
