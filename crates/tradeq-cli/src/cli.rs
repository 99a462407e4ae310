//! CLI argument definitions for tradeq.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `trades` | List trades with filters, sort and pagination |
//! | `ingest` | Add trades from a JSON file to the data file, creating it if needed |
//! | `sort-fields` | List accepted `--sort` field names |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--data` | `$TRADEQ_DATA` | Trade data file |
//!
//! # Examples
//!
//! ```bash
//! tradeq trades --asset-class Equity --sort -tradeDateTime --limit 25
//! tradeq trades --min-price 0 --trade-type SELL --page 2 --format table
//! tradeq ingest incoming.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tradeq_core::{BuySellIndicator, Pagination, UtcDateTime};

/// Filterable, sortable, paginated trade listing.
#[derive(Debug, Parser)]
#[command(name = "tradeq", author, version, about = "Filterable, paginated trade listing")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Trade data file; overrides TRADEQ_DATA.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one trade per line).
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List trades matching the given filters.
    ///
    /// Filters combine with AND and run in a fixed order: search, asset
    /// class, start, end, min price, max price, trade type.
    ///
    ///   tradeq trades --search tesla
    ///   tradeq trades --start 2024-01-01T00:00:00Z --sort=-price
    Trades(TradesArgs),

    /// Add trades from a JSON array file to the data file.
    ///
    /// Trades without a tradeId are assigned a UUID. The data file is
    /// created when it does not exist yet; the response reports this as
    /// `created: true`.
    Ingest(IngestArgs),

    /// List accepted names for `trades --sort`.
    SortFields,
}

#[derive(Debug, Args)]
pub struct TradesArgs {
    /// Case-insensitive substring matched against every field.
    #[arg(long)]
    pub search: Option<String>,

    /// Exact asset class, e.g. Bond or Equity.
    #[arg(long)]
    pub asset_class: Option<String>,

    /// Earliest tradeDateTime (RFC3339, inclusive).
    #[arg(long)]
    pub start: Option<UtcDateTime>,

    /// Latest tradeDateTime (RFC3339, inclusive).
    #[arg(long)]
    pub end: Option<UtcDateTime>,

    /// Minimum price (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    pub min_price: Option<f64>,

    /// Maximum price (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    pub max_price: Option<f64>,

    /// BUY or SELL.
    #[arg(long, value_name = "BUY|SELL")]
    pub trade_type: Option<BuySellIndicator>,

    /// Field to sort by; prefix with '-' for descending.
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Page number, starting at 1.
    #[arg(long, default_value_t = Pagination::DEFAULT_PAGE)]
    pub page: u64,

    /// Trades per page, 1 to 100.
    #[arg(long, default_value_t = Pagination::DEFAULT_LIMIT)]
    pub limit: u64,
}

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// JSON file holding an array of trades.
    pub file: PathBuf,
}
