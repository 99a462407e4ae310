use std::fs;

use serde::Serialize;
use tracing::info;
use tradeq_core::{CoreError, Trade};

use crate::cli::IngestArgs;
use crate::config::CliConfig;
use crate::error::CliError;

use super::{load_store, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IngestResponseData {
    ingested: usize,
    total: usize,
    created: bool,
    trade_ids: Vec<String>,
}

pub fn run(args: &IngestArgs, config: &CliConfig) -> Result<CommandResult, CliError> {
    let raw = fs::read_to_string(&args.file)?;
    let incoming: Vec<Trade> =
        serde_json::from_str(&raw).map_err(|error| CliError::Load {
            path: args.file.display().to_string(),
            source: CoreError::from(error),
        })?;

    // A missing data file is the normal first run, not a warning.
    let existing = load_store(&config.data_path)?;
    let created = existing.is_none();
    let store = existing.unwrap_or_default();

    let trade_ids = store.ingest_all(incoming)?;
    store.save_json(&config.data_path)?;
    info!(
        ingested = trade_ids.len(),
        created,
        path = %config.data_path.display(),
        "ingested trades"
    );

    let data = serde_json::to_value(IngestResponseData {
        ingested: trade_ids.len(),
        total: store.len(),
        created,
        trade_ids,
    })?;

    Ok(CommandResult::ok(data))
}
