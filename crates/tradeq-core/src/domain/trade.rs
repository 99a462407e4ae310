use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuySellIndicator {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl BuySellIndicator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl Display for BuySellIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuySellIndicator {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(ValidationError::InvalidTradeType {
                value: other.to_owned(),
            }),
        }
    }
}

/// Price, quantity and direction of a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTradeDetails")]
pub struct TradeDetails {
    pub buy_sell_indicator: BuySellIndicator,
    pub price: f64,
    pub quantity: u64,
}

impl TradeDetails {
    pub fn new(
        buy_sell_indicator: BuySellIndicator,
        price: f64,
        quantity: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;

        Ok(Self {
            buy_sell_indicator,
            price,
            quantity,
        })
    }
}

impl Display for TradeDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(buySellIndicator={} price={} quantity={})",
            self.buy_sell_indicator, self.price, self.quantity
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTradeDetails {
    buy_sell_indicator: BuySellIndicator,
    price: f64,
    quantity: u64,
}

impl TryFrom<RawTradeDetails> for TradeDetails {
    type Error = ValidationError;

    fn try_from(raw: RawTradeDetails) -> Result<Self, Self::Error> {
        Self::new(raw.buy_sell_indicator, raw.price, raw.quantity)
    }
}

/// A single executed trade as listed by the query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTrade")]
pub struct Trade {
    pub asset_class: Option<String>,
    pub counterparty: Option<String>,
    pub instrument_id: String,
    pub instrument_name: String,
    pub trade_date_time: UtcDateTime,
    pub trade_details: TradeDetails,
    pub trade_id: Option<String>,
    pub trader: String,
}

impl Trade {
    pub fn new(
        instrument_id: impl Into<String>,
        instrument_name: impl Into<String>,
        trade_date_time: UtcDateTime,
        trade_details: TradeDetails,
        trader: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let trade = Self {
            asset_class: None,
            counterparty: None,
            instrument_id: instrument_id.into(),
            instrument_name: instrument_name.into(),
            trade_date_time,
            trade_details,
            trade_id: None,
            trader: trader.into(),
        };
        trade.validate()?;
        Ok(trade)
    }

    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    pub fn with_trade_id(mut self, trade_id: impl Into<String>) -> Self {
        self.trade_id = Some(trade_id.into());
        self
    }

    /// Re-checks invariants; fields are public so callers may have edited them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("instrumentId", &self.instrument_id)?;
        validate_required("instrumentName", &self.instrument_name)?;
        validate_required("trader", &self.trader)?;
        if let Some(trade_id) = &self.trade_id {
            validate_required("tradeId", trade_id)?;
        }
        validate_non_negative("price", self.trade_details.price)
    }
}

/// Full textual form used by the substring search filter.
impl Display for Trade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "assetClass={} counterparty={} instrumentId={} instrumentName={} \
             tradeDateTime={} tradeDetails={} tradeId={} trader={}",
            display_optional(self.asset_class.as_deref()),
            display_optional(self.counterparty.as_deref()),
            self.instrument_id,
            self.instrument_name,
            self.trade_date_time,
            self.trade_details,
            display_optional(self.trade_id.as_deref()),
            self.trader,
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrade {
    #[serde(default)]
    asset_class: Option<String>,
    #[serde(default)]
    counterparty: Option<String>,
    instrument_id: String,
    instrument_name: String,
    trade_date_time: UtcDateTime,
    trade_details: TradeDetails,
    #[serde(default)]
    trade_id: Option<String>,
    trader: String,
}

impl TryFrom<RawTrade> for Trade {
    type Error = ValidationError;

    fn try_from(raw: RawTrade) -> Result<Self, Self::Error> {
        let trade = Self {
            asset_class: raw.asset_class,
            counterparty: raw.counterparty,
            instrument_id: raw.instrument_id,
            instrument_name: raw.instrument_name,
            trade_date_time: raw.trade_date_time,
            trade_details: raw.trade_details,
            trade_id: raw.trade_id,
            trader: raw.trader,
        };
        trade.validate()?;
        Ok(trade)
    }
}

fn display_optional(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
