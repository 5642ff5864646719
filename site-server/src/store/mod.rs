//! redb-based storage for the reservation log
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `reservations` | fixed key `"all"` | JSON array of `Reservation` | Append-only booking log |
//!
//! The whole log lives under one fixed key as a JSON-encoded array. Absent
//! or unparseable values are discarded and treated as an empty list.
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a crash mid-append never leaves the list in
//! a half-written state.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

use shared::models::Reservation;

/// Table holding the booking log: key = fixed list key, value = JSON array
const RESERVATIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("reservations");

/// Fixed key owning the whole list
const LIST_KEY: &str = "all";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Reservation store backed by redb
#[derive(Clone)]
pub struct ReservationStore {
    db: Arc<Database>,
}

impl ReservationStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        // Initialize the table so first load() finds it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RESERVATIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RESERVATIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load the full reservation list.
    ///
    /// Absent or unparseable values are treated as an empty list; corruption
    /// is warn-logged and masked (the log is a local demo artifact, losing
    /// it is cosmetic).
    pub fn load(&self) -> StoreResult<Vec<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;

        let Some(value) = table.get(LIST_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(value.value()) {
            Ok(list) => Ok(list),
            Err(e) => {
                tracing::warn!(error = %e, "Stored reservation list unparseable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append one reservation to the stored list.
    ///
    /// The read-modify-write runs inside a single write transaction, so
    /// concurrent submitters serialize on the store instead of losing
    /// records. An unparseable existing value starts a fresh list.
    pub fn append(&self, reservation: &Reservation) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(RESERVATIONS_TABLE)?;

            let mut list: Vec<Reservation> = match table.get(LIST_KEY)? {
                Some(value) => serde_json::from_slice(value.value()).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Stored reservation list unparseable, starting fresh");
                    Vec::new()
                }),
                None => Vec::new(),
            };
            list.push(reservation.clone());

            let value = serde_json::to_vec(&list)?;
            table.insert(LIST_KEY, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Number of stored reservations
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.load()?.len())
    }
}
