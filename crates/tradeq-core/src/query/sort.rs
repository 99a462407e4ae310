use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::{QueryError, Trade};

/// Fields a trade listing can be ordered by.
///
/// Each variant owns a typed comparator; there is no lookup by name at
/// evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    AssetClass,
    Counterparty,
    InstrumentId,
    InstrumentName,
    TradeDateTime,
    TradeId,
    Trader,
    BuySellIndicator,
    Price,
    Quantity,
}

impl SortField {
    pub const ALL: [Self; 10] = [
        Self::AssetClass,
        Self::Counterparty,
        Self::InstrumentId,
        Self::InstrumentName,
        Self::TradeDateTime,
        Self::TradeId,
        Self::Trader,
        Self::BuySellIndicator,
        Self::Price,
        Self::Quantity,
    ];

    /// Canonical wire name, first entry of [`SortField::accepted_names`].
    pub fn as_str(self) -> &'static str {
        self.accepted_names()[0]
    }

    /// Every spelling accepted by [`SortField::parse`].
    pub const fn accepted_names(self) -> &'static [&'static str] {
        match self {
            Self::AssetClass => &["assetClass", "asset_class"],
            Self::Counterparty => &["counterparty"],
            Self::InstrumentId => &["instrumentId", "instrument_id"],
            Self::InstrumentName => &["instrumentName", "instrument_name"],
            Self::TradeDateTime => &["tradeDateTime", "trade_date_time"],
            Self::TradeId => &["tradeId", "trade_id"],
            Self::Trader => &["trader"],
            Self::BuySellIndicator => &["tradeDetails.buySellIndicator", "buySellIndicator"],
            Self::Price => &["tradeDetails.price", "price"],
            Self::Quantity => &["tradeDetails.quantity", "quantity"],
        }
    }

    pub fn parse(input: &str) -> Result<Self, QueryError> {
        Self::ALL
            .into_iter()
            .find(|field| field.accepted_names().contains(&input))
            .ok_or_else(|| QueryError::InvalidSortField {
                field: input.to_owned(),
            })
    }

    /// Ascending comparison; absent optional values order first.
    pub fn compare(self, left: &Trade, right: &Trade) -> Ordering {
        match self {
            Self::AssetClass => left.asset_class.cmp(&right.asset_class),
            Self::Counterparty => left.counterparty.cmp(&right.counterparty),
            Self::InstrumentId => left.instrument_id.cmp(&right.instrument_id),
            Self::InstrumentName => left.instrument_name.cmp(&right.instrument_name),
            Self::TradeDateTime => left.trade_date_time.cmp(&right.trade_date_time),
            Self::TradeId => left.trade_id.cmp(&right.trade_id),
            Self::Trader => left.trader.cmp(&right.trader),
            Self::BuySellIndicator => left
                .trade_details
                .buy_sell_indicator
                .cmp(&right.trade_details.buy_sell_indicator),
            Self::Price => left
                .trade_details
                .price
                .total_cmp(&right.trade_details.price),
            Self::Quantity => left
                .trade_details
                .quantity
                .cmp(&right.trade_details.quantity),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Parsed `sort` parameter: a field with an optional leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    pub fn parse(input: &str) -> Result<Self, QueryError> {
        match input.strip_prefix('-') {
            Some(name) => SortField::parse(name).map(Self::descending),
            None => SortField::parse(input).map(Self::ascending),
        }
    }

    /// Stable in both directions: ties keep their input order.
    pub fn apply(self, trades: &mut [&Trade]) {
        match self.direction {
            SortDirection::Ascending => {
                trades.sort_by(|left, right| self.field.compare(left, right));
            }
            SortDirection::Descending => {
                trades.sort_by(|left, right| self.field.compare(right, left));
            }
        }
    }
}

impl FromStr for SortSpec {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for SortSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field),
            SortDirection::Descending => write!(f, "-{}", self.field),
        }
    }
}
