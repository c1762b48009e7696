//! # Select Café
//!
//! Runs one selection against a fixture file and prints the outcome.
//!
//! ## Usage
//! ```bash
//! # Select a café by hash id
//! cargo run -p cafe-store --bin select-cafe -- --fixtures ./fixtures.json abc
//!
//! # Override locale and config file
//! cargo run -p cafe-store --bin select-cafe -- \
//!     --fixtures ./fixtures.json --locale de --config ./store.toml '$mydomain'
//! ```
//!
//! ## Output
//! Prints a JSON document with the selection result and the getter values
//! afterwards. Set `RUST_LOG=cafe_store=debug` to watch the fetches commit.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cafe_store::{CafeStore, FixtureClient, StoreConfig, TracingEmitter};

const USAGE: &str =
    "usage: select-cafe --fixtures <file.json> [--locale <locale>] [--config <store.toml>] <cafe-id>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut fixtures: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut locale: Option<String> = None;
    let mut cafe_id: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fixtures" | "-f" => {
                if i + 1 < args.len() {
                    fixtures = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--locale" | "-l" => {
                if i + 1 < args.len() {
                    locale = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => cafe_id = Some(other.to_string()),
        }
        i += 1;
    }

    let (Some(fixtures), Some(cafe_id)) = (fixtures, cafe_id) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let config = StoreConfig::load(config_path)?;
    info!(locale = %config.locale, mode = %config.mode, "Configuration loaded");

    let client = FixtureClient::load(&fixtures).await?;
    let store = CafeStore::with_emitter(config, Arc::new(client), Arc::new(TracingEmitter));

    let result = store.select_cafe(&cafe_id, locale.as_deref()).await?;

    let output = json!({
        "result": result,
        "getters": {
            "cafe": store.current_cafe(),
            "advertisements": store.current_advertisements(),
            "discounts": store.current_discounts(),
        },
        "status": store.status(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Initializes tracing with `RUST_LOG` support.
///
/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cafe_store=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
