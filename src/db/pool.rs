//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing database file; a missing file is a connection error.
    pub fn new(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::Connection {
                path: path.to_string(),
                reason: "file does not exist".to_string(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::Connection {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { conn })
    }

    /// Open or create the database file (used by `init`).
    pub fn create(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path).map_err(|e| AppError::Connection {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { conn })
    }

    /// In-memory database, used by unit tests.
    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Run `func` inside a transaction; commit on `Ok`, roll back on `Err`.
    pub fn with_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
