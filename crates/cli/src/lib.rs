//! `stockroom` command-line front end.
//!
//! Every command loads the inventory file and applies one operation. The
//! file is written back only when the operation changed the table and the
//! file was either read cleanly or absent. With no subcommand the built-in
//! demo session runs.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

use stockroom_core::Severity;
use stockroom_inventory::{InventoryStore, LoadOutcome, LogRecord, StockLog};

pub mod config;

pub use config::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Track item quantities in a JSON file")]
pub struct Cli {
    /// Inventory file (overrides STOCKROOM_FILE; default inventory.json).
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add stock (negative amounts are accepted).
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Take stock out; items reaching zero are dropped.
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Print the quantity of one item (0 if absent).
    Get { item: String },
    /// List items strictly below the threshold.
    Low {
        #[arg(long, short, allow_hyphen_values = true)]
        threshold: Option<String>,
    },
    /// Print every item and its quantity.
    Report,
    /// Run the sample session against the inventory file.
    Demo,
}

/// Interpret a command-line argument the way a loosely-typed caller would:
/// numeric text becomes a JSON number, anything else stays a string.
pub fn arg_value(text: &str) -> JsonValue {
    serde_json::from_str::<JsonValue>(text.trim())
        .ok()
        .filter(JsonValue::is_number)
        .unwrap_or_else(|| JsonValue::String(text.to_string()))
}

/// Execute one command, writing user-facing output to `out`.
pub fn run<L, W>(command: Command, config: &StoreConfig, log: L, out: &mut W) -> anyhow::Result<()>
where
    L: StockLog,
    W: Write,
{
    let mut store = InventoryStore::with_log(log);
    let loaded = store.load(&config.path);

    match command {
        Command::Add { item, quantity } => {
            let changed = store.add_value(&JsonValue::String(item), &arg_value(&quantity), None);
            persist(&store, config, loaded, changed);
        }
        Command::Remove { item, quantity } => {
            let changed = store.remove_value(&JsonValue::String(item), &arg_value(&quantity));
            persist(&store, config, loaded, changed);
        }
        Command::Get { item } => {
            writeln!(out, "{}", store.quantity(&item)).context("writing quantity")?;
        }
        Command::Low { threshold } => {
            let low = match threshold {
                Some(raw) => store.low_stock_value(&arg_value(&raw)),
                None => store.low_stock(config.low_stock_threshold),
            };
            for item in low {
                writeln!(out, "{item}").context("writing low-stock list")?;
            }
        }
        Command::Report => store.write_report(out).context("writing report")?,
        Command::Demo => demo(&mut store, config, loaded, out)?,
    }

    Ok(())
}

/// Save after a mutation, unless nothing changed or the file on disk holds
/// data this run never managed to read.
fn persist<L: StockLog>(store: &InventoryStore<L>, config: &StoreConfig, loaded: LoadOutcome, changed: bool) {
    if !changed {
        return;
    }
    if !loaded.safe_to_overwrite() {
        store.log().record(LogRecord {
            severity: Severity::Warning,
            kind: None,
            message: format!(
                "not saving to {}: existing file could not be read",
                config.path.display()
            ),
        });
        return;
    }
    store.save(&config.path);
}

fn demo<L, W>(
    store: &mut InventoryStore<L>,
    config: &StoreConfig,
    loaded: LoadOutcome,
    out: &mut W,
) -> anyhow::Result<()>
where
    L: StockLog,
    W: Write,
{
    let mut audit = Vec::new();
    store.add("apple", 10, Some(&mut audit));
    store.add("banana", -2, Some(&mut audit));
    store.add_value(&JsonValue::from(123), &JsonValue::from("ten"), Some(&mut audit));
    store.remove("apple", 3);
    store.remove("orange", 1);

    writeln!(out, "Apple stock: {}", store.quantity("apple"))?;
    writeln!(out, "Low items: {:?}", store.low_stock(config.low_stock_threshold))?;
    persist(store, config, loaded, true);
    store.write_report(out).context("writing report")?;

    for line in &audit {
        tracing::debug!("{line}");
    }
    Ok(())
}
