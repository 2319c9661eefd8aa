// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::Date;
use sqlx::SqlitePool;

use crate::{Pager, SortOrder, Task, TaskScope};

#[derive(Debug, Clone)]
pub(crate) struct Tasks {
    pool: SqlitePool,
}

const COLUMNS: &str = "uid, folder_uid, serial, summary, notes, created, end_date, active_date, schedule";

impl Tasks {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, task: &TaskRecord) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO tasks (uid, folder_uid, serial, summary, notes, created, end_date, active_date, schedule)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(uid) DO UPDATE SET
    folder_uid  = excluded.folder_uid,
    serial      = excluded.serial,
    summary     = excluded.summary,
    notes       = excluded.notes,
    created     = excluded.created,
    end_date    = excluded.end_date,
    active_date = excluded.active_date,
    schedule    = excluded.schedule;
";

        sqlx::query(SQL)
            .bind(&task.uid)
            .bind(&task.folder_uid)
            .bind(task.serial)
            .bind(&task.summary)
            .bind(&task.notes)
            .bind(&task.created)
            .bind(&task.end_date)
            .bind(&task.active_date)
            .bind(&task.schedule)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, uid: &str) -> Result<Option<TaskRecord>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM tasks WHERE uid = ?;");

        sqlx::query_as(&sql)
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_by_serial(
        &self,
        scope: &TaskScope,
        serial: i64,
    ) -> Result<Option<TaskRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM tasks{} serial = ?;",
            match scope {
                TaskScope::All => " WHERE",
                TaskScope::Main => " WHERE folder_uid IS NULL AND",
                TaskScope::Folder(_) => " WHERE folder_uid = ? AND",
            }
        );

        let mut query = sqlx::query_as(&sql);
        if let TaskScope::Folder(folder_uid) = scope {
            query = query.bind(folder_uid);
        }
        query.bind(serial).fetch_optional(&self.pool).await
    }

    /// Lists tasks in the given scope, ordered by serial number.
    pub async fn list(
        &self,
        scope: &TaskScope,
        order: SortOrder,
        pager: &Pager,
    ) -> Result<Vec<TaskRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM tasks{} ORDER BY serial {} LIMIT ? OFFSET ?;",
            Self::scope_clause(scope),
            order.sql_keyword(),
        );

        let mut query = sqlx::query_as(&sql);
        if let TaskScope::Folder(folder_uid) = scope {
            query = query.bind(folder_uid);
        }
        query
            .bind(pager.limit)
            .bind(pager.offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Every task in the store, main list first, then folder by folder.
    pub async fn all(&self) -> Result<Vec<TaskRecord>, sqlx::Error> {
        let sql =
            format!("SELECT {COLUMNS} FROM tasks ORDER BY folder_uid IS NOT NULL, folder_uid, serial;");

        sqlx::query_as(&sql).fetch_all(&self.pool).await
    }

    /// Tasks whose current pointer sits on the given date.
    pub async fn due_on(&self, date: Date) -> Result<Vec<TaskRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM tasks WHERE active_date = ? \
             ORDER BY folder_uid IS NOT NULL, folder_uid, serial;"
        );

        sqlx::query_as(&sql)
            .bind(date.to_string())
            .fetch_all(&self.pool)
            .await
    }

    /// The highest serial number in the scope, or 0 when it has no tasks.
    pub async fn max_serial(&self, scope: &TaskScope) -> Result<i64, sqlx::Error> {
        let sql = format!(
            "SELECT COALESCE(MAX(serial), 0) FROM tasks{};",
            Self::scope_clause(scope)
        );

        let mut query = sqlx::query_as(&sql);
        if let TaskScope::Folder(folder_uid) = scope {
            query = query.bind(folder_uid);
        }
        let row: (i64,) = query.fetch_one(&self.pool).await?;
        Ok(row.0)
    }

    pub async fn set_current(&self, uid: &str, current: Date) -> Result<(), sqlx::Error> {
        const SQL: &str = "UPDATE tasks SET active_date = ? WHERE uid = ?;";

        sqlx::query(SQL)
            .bind(current.to_string())
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, uid: &str) -> Result<bool, sqlx::Error> {
        const SQL: &str = "DELETE FROM tasks WHERE uid = ?;";

        let result = sqlx::query(SQL).bind(uid).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Removes every task in the folder, returning how many were deleted.
    pub async fn delete_by_folder(&self, folder_uid: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM tasks WHERE folder_uid = ?;";

        let result = sqlx::query(SQL)
            .bind(folder_uid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    fn scope_clause(scope: &TaskScope) -> &'static str {
        match scope {
            TaskScope::All => "",
            TaskScope::Main => " WHERE folder_uid IS NULL",
            TaskScope::Folder(_) => " WHERE folder_uid = ?",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct TaskRecord {
    uid: String,
    folder_uid: Option<String>,
    serial: i64,
    summary: String,
    notes: Option<String>,
    created: String,
    end_date: String,
    active_date: String,
    schedule: String,
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Result<Self, Box<dyn Error>> {
        let schedule = serde_json::to_string(&task.schedule)
            .map_err(|e| format!("Failed to serialize schedule: {e}"))?;
        Ok(Self {
            uid: task.uid.clone(),
            folder_uid: task.folder_uid.clone(),
            serial: task.serial,
            summary: task.summary.clone(),
            notes: task.notes.clone(),
            created: task.created.to_string(),
            end_date: task.end.to_string(),
            active_date: task.current.to_string(),
            schedule,
        })
    }

    pub fn into_task(self) -> Result<Task, Box<dyn Error>> {
        let created = self
            .created
            .parse()
            .map_err(|e| format!("Invalid created date in task record: {e}"))?;
        let end = self
            .end_date
            .parse()
            .map_err(|e| format!("Invalid end date in task record: {e}"))?;
        let current = self
            .active_date
            .parse()
            .map_err(|e| format!("Invalid active date in task record: {e}"))?;
        let schedule = serde_json::from_str(&self.schedule)
            .map_err(|e| format!("Invalid schedule in task record: {e}"))?;
        Ok(Task {
            uid: self.uid,
            folder_uid: self.folder_uid,
            serial: self.serial,
            summary: self.summary,
            notes: self.notes,
            created,
            end,
            current,
            schedule,
        })
    }

    #[cfg(test)]
    pub fn uid(&self) -> &str {
        &self.uid
    }
}
