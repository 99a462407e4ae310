// Shared fixtures for the integration suites; not every suite uses every helper.
#![allow(dead_code)]

use tradeq_core::{BuySellIndicator, Trade, TradeDetails, UtcDateTime};

pub fn ts(value: &str) -> UtcDateTime {
    UtcDateTime::parse(value).expect("valid timestamp")
}

pub fn trade(
    trade_id: &str,
    asset_class: Option<&str>,
    when: &str,
    side: BuySellIndicator,
    price: f64,
) -> Trade {
    let details = TradeDetails::new(side, price, 100).expect("valid details");
    let trade = Trade::new(
        format!("ISIN-{trade_id}"),
        format!("Instrument {trade_id}"),
        ts(when),
        details,
        "Ann Trader",
    )
    .expect("valid trade")
    .with_trade_id(trade_id);

    match asset_class {
        Some(asset_class) => trade.with_asset_class(asset_class),
        None => trade,
    }
}

/// Small book used by the behaviour suites.
pub fn book() -> Vec<Trade> {
    vec![
        trade("t1", Some("Equity"), "2024-01-01T09:00:00Z", BuySellIndicator::Buy, 10.0),
        trade("t2", Some("Bond"), "2024-01-02T09:00:00Z", BuySellIndicator::Sell, 20.0),
        trade("t3", Some("Equity"), "2024-01-03T09:00:00Z", BuySellIndicator::Sell, 30.0),
        trade("t4", None, "2024-01-04T09:00:00Z", BuySellIndicator::Buy, 20.0)
            .with_counterparty("Acme Bank"),
        trade("t5", Some("FX"), "2024-01-05T09:00:00Z", BuySellIndicator::Buy, 0.0),
    ]
}

pub fn ids(trades: &[&Trade]) -> Vec<String> {
    trades
        .iter()
        .map(|trade| trade.trade_id.clone().unwrap_or_default())
        .collect()
}
