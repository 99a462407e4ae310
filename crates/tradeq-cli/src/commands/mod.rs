mod ingest;
mod sort_fields;
mod trades;

use std::path::Path;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};
use tradeq_core::{Envelope, EnvelopeMeta, TradeStore, SCHEMA_VERSION};
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::error::CliError;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli, config: &CliConfig) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let CommandResult { data, warnings } = match &cli.command {
        Command::Trades(args) => trades::run(args, config)?,
        Command::Ingest(args) => ingest::run(args, config)?,
        Command::SortFields => sort_fields::run()?,
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), SCHEMA_VERSION, latency_ms)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    debug!(request_id = %meta.request_id, latency_ms, "command complete");
    Ok(Envelope::success(meta, data))
}

/// Opens the data file for reading, or an empty store with a warning when it
/// is absent.
fn open_store(path: &Path) -> Result<(TradeStore, Vec<String>), CliError> {
    match load_store(path)? {
        Some(store) => Ok((store, Vec::new())),
        None => {
            warn!(path = %path.display(), "trade data file not found");
            let warning = format!(
                "trade data file {} does not exist; treating it as empty",
                path.display()
            );
            Ok((TradeStore::new(), vec![warning]))
        }
    }
}

/// Loads the data file, `None` when it does not exist yet.
fn load_store(path: &Path) -> Result<Option<TradeStore>, CliError> {
    if !path.exists() {
        return Ok(None);
    }

    TradeStore::load_json(path)
        .map(Some)
        .map_err(|source| CliError::Load {
            path: path.display().to_string(),
            source,
        })
}
