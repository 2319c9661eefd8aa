// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

mod folders;
mod session;
mod tasks;

use std::error::Error;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub(crate) use crate::localdb::folders::FolderRecord;
use crate::localdb::folders::Folders;
use crate::localdb::session::Session;
pub(crate) use crate::localdb::tasks::TaskRecord;
use crate::localdb::tasks::Tasks;

#[derive(Debug, Clone)]
pub(crate) struct LocalDb {
    pool: SqlitePool,

    pub folders: Folders,
    pub tasks: Tasks,
    pub session: Session,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(file = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename.to_str().ok_or("Invalid path encoding")?)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new())
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // Each connection gets its own private :memory: database, so the
            // pool must hold a single connection and never recycle it.
            let options = SqliteConnectOptions::new().in_memory(true);
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| format!("Failed to connect to SQLite database: {e}"))?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await
            .map_err(|e| format!("Failed to run migrations: {e}"))?;

        let folders = Folders::new(pool.clone());
        let tasks = Tasks::new(pool.clone());
        let session = Session::new(pool.clone());
        Ok(LocalDb {
            pool,
            folders,
            tasks,
            session,
        })
    }

    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) async fn open_test_db() -> LocalDb {
    LocalDb::open(None)
        .await
        .expect("Failed to create test database")
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::Folder;

    #[tokio::test]
    async fn in_memory_database_keeps_its_schema_across_acquires() {
        let db = open_test_db().await;
        let folder = Folder {
            uid: "f-1".to_string(),
            name: "Work".to_string(),
            created: date(2024, 1, 5),
        };

        db.folders
            .insert(&FolderRecord::from_folder(&folder))
            .await
            .expect("Schema not visible to the insert connection");

        for _ in 0..10 {
            let found = db
                .folders
                .get("f-1")
                .await
                .expect("Schema not visible to a later acquire");
            assert!(found.is_some());
        }

        db.close().await.unwrap();
    }
}
