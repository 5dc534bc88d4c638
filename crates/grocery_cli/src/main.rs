//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open (or create) a grocery database and initialize every store.
//! - Print the seeded/current items as JSON for quick local checks.
//!
//! Usage: `grocery_cli [DB_PATH]`. Other settings come from `GROCERY_*`
//! environment variables.

use grocery_core::{init_logging, GroceryService, ItemRepository, StoreConfig};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("grocery_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut config = StoreConfig::from_env()?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.db_path = PathBuf::from(path);
    }
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    println!("grocery_core version={}", grocery_core::core_version());
    println!("db_path={}", config.db_path.display());

    let mut service = GroceryService::new(config.connection_helper());
    service.initialize()?;
    let items = service.items_mut().list_all()?;
    log::info!("event=cli_list module=cli status=ok items={}", items.len());

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
