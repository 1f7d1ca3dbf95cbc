//! # taskboard-store
//!
//! libSQL persistence layer for Taskboard.
//!
//! [`TaskDb`] owns the database handle and runs migrations on open. The
//! [`contract`] module defines the `TaskStore`/`UserStore` capability traits
//! the service layer consumes; the [`stores`] module provides their libSQL
//! adapters. Uses the `libsql` crate (embedded `SQLite` fork) with local
//! files or `":memory:"` databases.

pub mod contract;
pub mod error;
pub mod helpers;
mod migrations;
pub mod stores;

use error::StoreError;
use libsql::Builder;
use taskboard_config::StoreConfig;

/// Database handle shared by the store adapters.
pub struct TaskDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TaskDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Foreign keys must be enabled per-connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let task_db = Self { db, conn };
        task_db.run_migrations().await?;
        tracing::debug!(path, "task database opened, migrations applied");
        Ok(task_db)
    }

    /// Open the database described by the store configuration section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::open_local(&config.path).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
