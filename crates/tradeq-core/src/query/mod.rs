//! # Trade Query Evaluator
//!
//! Filters, orders and paginates a borrowed slice of [`Trade`] records.
//!
//! Filters run in a fixed order, each narrowing the previous result:
//!
//! 1. `search` (case-insensitive substring of the trade's text form)
//! 2. `asset_class` (exact)
//! 3. `start` (inclusive lower bound on `tradeDateTime`)
//! 4. `end` (inclusive upper bound on `tradeDateTime`)
//! 5. `min_price` (inclusive)
//! 6. `max_price` (inclusive)
//! 7. `trade_type` (exact)
//!
//! A stable sort follows when a [`SortSpec`] is present, then the page slice.
//! Every filter is an `Option`: `Some(0.0)` is an active bound.
//!
//! ```rust,ignore
//! use tradeq_core::{Pagination, TradeQuery};
//!
//! let query = TradeQuery::new()
//!     .with_min_price(20.0)
//!     .with_sort("-tradeDateTime")?
//!     .with_pagination(Pagination::new(2, 1)?);
//! let page = query.execute(&trades)?;
//! ```

mod sort;

use serde::Serialize;
use tracing::debug;

use crate::{BuySellIndicator, QueryError, Trade, UtcDateTime, ValidationError};

pub use sort::{SortDirection, SortField, SortSpec};

/// Validated page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MIN_LIMIT: u64 = 1;
    pub const MAX_LIMIT: u64 = 100;

    pub fn new(page: u64, limit: u64) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::InvalidPage { value: page });
        }
        if !(Self::MIN_LIMIT..=Self::MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::InvalidLimit {
                value: limit,
                min: Self::MIN_LIMIT,
                max: Self::MAX_LIMIT,
            });
        }
        Ok(Self { page, limit })
    }

    pub const fn page(self) -> u64 {
        self.page
    }

    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Half-open `[start, end)` window, clipped to `len`.
    pub fn window(self, len: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.limit);
        let end = start.saturating_add(self.limit);
        let clip = |index: u64| usize::try_from(index).map_or(len, |index| index.min(len));
        (clip(start), clip(end))
    }

    /// Number of pages needed for `total` records; zero when empty.
    pub fn page_count(self, total: usize) -> u64 {
        (total as u64).div_ceil(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Optional filters, sort and pagination for one listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeQuery {
    pub search: Option<String>,
    pub asset_class: Option<String>,
    pub start: Option<UtcDateTime>,
    pub end: Option<UtcDateTime>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub trade_type: Option<BuySellIndicator>,
    pub sort: Option<SortSpec>,
    pub pagination: Pagination,
}

impl TradeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn with_start(mut self, start: UtcDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: UtcDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_trade_type(mut self, trade_type: BuySellIndicator) -> Self {
        self.trade_type = Some(trade_type);
        self
    }

    /// Parses a `sort` parameter such as `price` or `-tradeDateTime`.
    pub fn with_sort(mut self, sort: &str) -> Result<Self, QueryError> {
        self.sort = Some(SortSpec::parse(sort)?);
        Ok(self)
    }

    pub fn with_sort_spec(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Rejects inverted bounds and non-finite price bounds.
    pub fn validate(&self) -> Result<(), QueryError> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(QueryError::InvalidRange {
                    bound: "tradeDateTime",
                    lower: start.to_string(),
                    upper: end.to_string(),
                });
            }
        }

        for (name, value) in [("minPrice", self.min_price), ("maxPrice", self.max_price)] {
            if value.is_some_and(|value| value.is_nan()) {
                return Err(QueryError::InvalidRange {
                    bound: name,
                    lower: String::from("NaN"),
                    upper: String::from("NaN"),
                });
            }
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(QueryError::InvalidRange {
                    bound: "price",
                    lower: min.to_string(),
                    upper: max.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Names of the filters that are present, in evaluation order.
    pub fn active_filters(&self) -> Vec<&'static str> {
        [
            ("search", self.search.is_some()),
            ("assetClass", self.asset_class.is_some()),
            ("start", self.start.is_some()),
            ("end", self.end.is_some()),
            ("minPrice", self.min_price.is_some()),
            ("maxPrice", self.max_price.is_some()),
            ("tradeType", self.trade_type.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, active)| active.then_some(name))
        .collect()
    }

    /// Runs the full pipeline over `records` without copying them.
    pub fn execute<'a>(&self, records: &'a [Trade]) -> Result<TradePage<'a>, QueryError> {
        self.validate()?;

        let mut matched: Vec<&'a Trade> = records.iter().collect();
        debug!(records = matched.len(), "evaluating trade query");

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            matched.retain(|trade| trade.to_string().to_lowercase().contains(&needle));
            debug!(remaining = matched.len(), "applied search filter");
        }

        if let Some(asset_class) = &self.asset_class {
            matched.retain(|trade| trade.asset_class.as_deref() == Some(asset_class.as_str()));
            debug!(remaining = matched.len(), "applied asset class filter");
        }

        if let Some(start) = self.start {
            matched.retain(|trade| trade.trade_date_time >= start);
            debug!(remaining = matched.len(), "applied start filter");
        }

        if let Some(end) = self.end {
            matched.retain(|trade| trade.trade_date_time <= end);
            debug!(remaining = matched.len(), "applied end filter");
        }

        if let Some(min_price) = self.min_price {
            matched.retain(|trade| trade.trade_details.price >= min_price);
            debug!(remaining = matched.len(), "applied min price filter");
        }

        if let Some(max_price) = self.max_price {
            matched.retain(|trade| trade.trade_details.price <= max_price);
            debug!(remaining = matched.len(), "applied max price filter");
        }

        if let Some(trade_type) = self.trade_type {
            matched.retain(|trade| trade.trade_details.buy_sell_indicator == trade_type);
            debug!(remaining = matched.len(), "applied trade type filter");
        }

        if let Some(sort) = self.sort {
            sort.apply(&mut matched);
            debug!(sort = %sort, "sorted matches");
        }

        let total_matches = matched.len();
        let (start, end) = self.pagination.window(total_matches);
        let trades = matched.drain(start..end).collect::<Vec<_>>();
        debug!(
            page = self.pagination.page(),
            limit = self.pagination.limit(),
            total_matches,
            returned = trades.len(),
            "paginated matches"
        );

        Ok(TradePage {
            page: self.pagination.page(),
            limit: self.pagination.limit(),
            total_matches,
            trades,
        })
    }
}

/// One page of a listing, borrowing from the evaluated collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePage<'a> {
    pub page: u64,
    pub limit: u64,
    pub total_matches: usize,
    pub trades: Vec<&'a Trade>,
}

impl TradePage<'_> {
    pub fn page_count(&self) -> u64 {
        (self.total_matches as u64).div_ceil(self.limit.max(1))
    }

    /// True when matches exist but this page starts past them.
    pub fn is_beyond_last_page(&self) -> bool {
        self.total_matches > 0 && self.trades.is_empty()
    }

    pub fn into_owned(self) -> OwnedTradePage {
        OwnedTradePage {
            page: self.page,
            limit: self.limit,
            total_matches: self.total_matches,
            trades: self.trades.into_iter().cloned().collect(),
        }
    }
}

/// Detached copy of a [`TradePage`], for callers that outlive the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedTradePage {
    pub page: u64,
    pub limit: u64,
    pub total_matches: usize,
    pub trades: Vec<Trade>,
}

/// Evaluates `query` and returns only the page contents.
pub fn query<'a>(records: &'a [Trade], query: &TradeQuery) -> Result<Vec<&'a Trade>, QueryError> {
    query.execute(records).map(|page| page.trades)
}
