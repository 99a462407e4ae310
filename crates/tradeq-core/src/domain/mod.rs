//! # Domain Models
//!
//! Canonical trade record types.
//!
//! All models validate their invariants at construction time and again on
//! deserialization, so a [`Trade`] loaded from JSON is as trustworthy as one
//! built in code.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Trade`] | A single executed trade |
//! | [`TradeDetails`] | Direction, price and quantity |
//! | [`BuySellIndicator`] | `BUY` or `SELL` |
//! | [`UtcDateTime`] | RFC3339 instant normalized to UTC |
//!
//! ```rust,ignore
//! use tradeq_core::{BuySellIndicator, Trade, TradeDetails, UtcDateTime};
//!
//! let ts = UtcDateTime::parse("2024-01-01T00:00:00Z")?;
//! let details = TradeDetails::new(BuySellIndicator::Buy, 101.25, 10)?;
//! let trade = Trade::new("AAPL", "Apple Inc.", ts, details, "Ann")?
//!     .with_asset_class("Equity");
//! ```

mod timestamp;
mod trade;

pub use timestamp::UtcDateTime;
pub use trade::{BuySellIndicator, Trade, TradeDetails};
