//! In-memory trade collection with snapshot reads.
//!
//! Writers build a new snapshot and swap it in under a short write lock, so a
//! query never observes a half-ingested batch and never blocks ingestion.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{CoreError, OwnedTradePage, QueryError, Trade, TradeQuery, ValidationError};

#[derive(Debug, Default)]
pub struct TradeStore {
    snapshot: RwLock<Arc<[Trade]>>,
}

impl TradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from trades, assigning ids where missing.
    pub fn from_trades(trades: Vec<Trade>) -> Result<Self, ValidationError> {
        let store = Self::new();
        store.ingest_all(trades)?;
        Ok(store)
    }

    /// Publishes trades exactly as stored; missing ids stay missing.
    pub fn from_stored(trades: Vec<Trade>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for trade in &trades {
            trade.validate()?;
            if let Some(trade_id) = &trade.trade_id {
                if !seen.insert(trade_id.as_str()) {
                    return Err(ValidationError::DuplicateTradeId {
                        trade_id: trade_id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            snapshot: RwLock::new(Arc::from(trades)),
        })
    }

    /// Reads a JSON array of trades from `path` into a new store.
    ///
    /// Loading never assigns ids, so the same file always lists the same way.
    pub fn load_json(path: &Path) -> Result<Self, CoreError> {
        let raw = fs::read_to_string(path)?;
        let trades: Vec<Trade> = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), count = trades.len(), "loaded trade file");
        Ok(Self::from_stored(trades)?)
    }

    /// Writes the current snapshot to `path`, replacing it atomically.
    pub fn save_json(&self, path: &Path) -> Result<(), CoreError> {
        let snapshot = self.snapshot();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, &*snapshot)?;
        file.write_all(b"\n")?;
        file.persist(path).map_err(|error| CoreError::Io(error.error))?;
        info!(path = %path.display(), count = snapshot.len(), "saved trade file");
        Ok(())
    }

    /// Current immutable view of the collection.
    pub fn snapshot(&self) -> Arc<[Trade]> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates and appends one trade, returning its id.
    pub fn ingest(&self, trade: Trade) -> Result<String, ValidationError> {
        let mut ids = self.ingest_all(vec![trade])?;
        Ok(ids.remove(0))
    }

    /// Appends a batch; either every trade is published or none is.
    pub fn ingest_all(&self, trades: Vec<Trade>) -> Result<Vec<String>, ValidationError> {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);

        let mut seen = guard
            .iter()
            .filter_map(|trade| trade.trade_id.clone())
            .collect::<HashSet<_>>();
        let mut next = Vec::with_capacity(guard.len() + trades.len());
        next.extend(guard.iter().cloned());

        let mut assigned = Vec::with_capacity(trades.len());
        for mut trade in trades {
            trade.validate()?;
            let trade_id = trade
                .trade_id
                .get_or_insert_with(|| Uuid::new_v4().to_string())
                .clone();
            if !seen.insert(trade_id.clone()) {
                return Err(ValidationError::DuplicateTradeId { trade_id });
            }
            assigned.push(trade_id);
            next.push(trade);
        }

        *guard = Arc::from(next);
        info!(
            ingested = assigned.len(),
            total = guard.len(),
            "published trade snapshot"
        );
        Ok(assigned)
    }

    /// Evaluates `query` against the current snapshot.
    pub fn query(&self, query: &TradeQuery) -> Result<OwnedTradePage, QueryError> {
        let snapshot = self.snapshot();
        query.execute(&snapshot).map(|page| page.into_owned())
    }
}
