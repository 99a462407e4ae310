//! # Tradeq Core
//!
//! Domain types and the query evaluator behind the `tradeq` trade listing.
//!
//! ## Overview
//!
//! - **Domain models** for trades, validated on construction and on load
//! - **Query evaluator** applying filters, a stable sort and pagination
//! - **Trade store** owning the collection and publishing read snapshots
//! - **Response envelope** with request metadata and warnings
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | `Trade`, `TradeDetails`, `BuySellIndicator`, `UtcDateTime` |
//! | [`query`] | `TradeQuery`, `Pagination`, `SortSpec`, `TradePage` |
//! | [`store`] | `TradeStore` ingestion and snapshots |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradeq_core::{Pagination, TradeQuery, TradeStore};
//!
//! let store = TradeStore::load_json("trades.json".as_ref())?;
//! let query = TradeQuery::new()
//!     .with_asset_class("Equity")
//!     .with_sort("-tradeDateTime")?
//!     .with_pagination(Pagination::new(1, 25)?);
//!
//! let snapshot = store.snapshot();
//! let page = query.execute(&snapshot)?;
//! println!("{} of {} trades", page.trades.len(), page.total_matches);
//! ```

pub mod domain;
pub mod envelope;
pub mod error;
pub mod query;
pub mod store;

pub use domain::{BuySellIndicator, Trade, TradeDetails, UtcDateTime};
pub use envelope::{Envelope, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, QueryError, ValidationError};
pub use query::{
    query, OwnedTradePage, Pagination, SortDirection, SortField, SortSpec, TradePage, TradeQuery,
};
pub use store::TradeStore;
