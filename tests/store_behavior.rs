//! Behavior-driven tests for the trade store that feeds the listing.

mod common;

use std::sync::Arc;
use std::thread;

use common::{book, trade};
use tempfile::tempdir;
use tradeq_core::{BuySellIndicator, TradeQuery, TradeStore, ValidationError};

#[test]
fn ingested_trades_become_listable_with_assigned_ids() {
    // Given: an empty store
    let store = TradeStore::new();

    // When: trades without ids are ingested
    let mut incoming = book();
    for trade in &mut incoming {
        trade.trade_id = None;
    }
    let assigned = store.ingest_all(incoming).expect("ingest");

    // Then: every trade is listed with its assigned id, in ingestion order
    let page = store.query(&TradeQuery::new()).expect("query");
    let listed = page
        .trades
        .iter()
        .map(|trade| trade.trade_id.clone().expect("assigned id"))
        .collect::<Vec<_>>();
    assert_eq!(listed, assigned);
}

#[test]
fn readers_see_whole_batches_while_writers_publish() {
    // Given: a shared store with one batch
    let store = Arc::new(TradeStore::from_trades(book()).expect("store"));
    let batch_size = book().len();

    // When: a writer publishes more batches while readers query
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for round in 0..20 {
                let batch = (0..batch_size)
                    .map(|index| {
                        trade(
                            &format!("r{round}-{index}"),
                            Some("Equity"),
                            "2024-02-01T00:00:00Z",
                            BuySellIndicator::Buy,
                            1.0,
                        )
                    })
                    .collect();
                store.ingest_all(batch).expect("ingest");
            }
        })
    };

    let readers = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    let snapshot = store.snapshot();
                    // Then: every snapshot holds a whole number of batches
                    assert_eq!(snapshot.len() % batch_size, 0);
                    let page = TradeQuery::new().execute(&snapshot).expect("query");
                    assert_eq!(page.total_matches, snapshot.len());
                }
            })
        })
        .collect::<Vec<_>>();

    writer.join().expect("writer");
    for reader in readers {
        reader.join().expect("reader");
    }
    assert_eq!(store.len(), batch_size * 21);
}

#[test]
fn duplicate_trade_ids_are_rejected() {
    let store = TradeStore::from_trades(book()).expect("store");
    let err = store
        .ingest(trade("t1", None, "2024-01-01T00:00:00Z", BuySellIndicator::Buy, 1.0))
        .expect_err("duplicate");
    assert_eq!(
        err,
        ValidationError::DuplicateTradeId {
            trade_id: String::from("t1")
        }
    );
}

#[test]
fn saved_file_round_trips_through_a_new_store() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("trades.json");

    let store = TradeStore::from_trades(book()).expect("store");
    store.save_json(&path).expect("save");
    store.save_json(&path).expect("overwrite");

    let reloaded = TradeStore::load_json(&path).expect("load");
    let query = TradeQuery::new().with_sort("-price").expect("valid sort");
    assert_eq!(
        reloaded.query(&query).expect("query"),
        store.query(&query).expect("query")
    );
}

#[test]
fn listing_a_file_without_ids_is_repeatable() {
    // Given: a data file whose trades carry no tradeId
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("trades.json");
    let mut stored = book();
    for trade in &mut stored {
        trade.trade_id = None;
    }
    std::fs::write(&path, serde_json::to_string(&stored).expect("json")).expect("write");

    // When: the same file is loaded and listed twice, sorted by tradeId
    let query = TradeQuery::new().with_sort("tradeId").expect("valid sort");
    let first = TradeStore::load_json(&path)
        .expect("load")
        .query(&query)
        .expect("query");
    let second = TradeStore::load_json(&path)
        .expect("load")
        .query(&query)
        .expect("query");

    // Then: both listings are identical and no ids were invented
    assert_eq!(first, second);
    assert!(first.trades.iter().all(|trade| trade.trade_id.is_none()));
    assert_eq!(first.trades, stored);
}
