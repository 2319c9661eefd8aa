// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::Date;
use sqlx::SqlitePool;

/// Single-row session state: the user-supplied reference date and the
/// reference date of the last completed reconciliation pass.
///
/// The application never reads the system clock; "today" exists only while
/// this row holds a date, and clearing it ends the session.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pool: SqlitePool,
}

impl Session {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn reference_date(&self) -> Result<Option<Date>, Box<dyn Error>> {
        self.date_column("reference_date").await
    }

    /// Sets the reference date. Any previous reconciliation marker is
    /// dropped so the next pass re-evaluates every task.
    pub async fn set_reference_date(&self, date: Date) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO session (id, reference_date, reconciled_date)
VALUES (1, ?, NULL)
ON CONFLICT(id) DO UPDATE SET
    reference_date  = excluded.reference_date,
    reconciled_date = NULL;
";

        sqlx::query(SQL)
            .bind(date.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        const SQL: &str =
            "UPDATE session SET reference_date = NULL, reconciled_date = NULL WHERE id = 1;";

        sqlx::query(SQL).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn reconciled_date(&self) -> Result<Option<Date>, Box<dyn Error>> {
        self.date_column("reconciled_date").await
    }

    pub async fn set_reconciled_date(&self, date: Date) -> Result<(), sqlx::Error> {
        const SQL: &str = "UPDATE session SET reconciled_date = ? WHERE id = 1;";

        sqlx::query(SQL)
            .bind(date.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn date_column(&self, column: &str) -> Result<Option<Date>, Box<dyn Error>> {
        let sql = format!("SELECT {column} FROM session WHERE id = 1;");

        let row: Option<(Option<String>,)> = sqlx::query_as(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to read session state: {e}"))?;

        match row.and_then(|(value,)| value) {
            Some(value) => {
                let date = value
                    .parse()
                    .map_err(|e| format!("Invalid date in session state: {e}"))?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::localdb::open_test_db;

    #[tokio::test]
    async fn session_starts_unset() {
        let db = open_test_db().await;
        assert_eq!(db.session.reference_date().await.unwrap(), None);
        assert_eq!(db.session.reconciled_date().await.unwrap(), None);
    }

    #[tokio::test]
    async fn session_set_and_get_reference_date() {
        let db = open_test_db().await;
        db.session
            .set_reference_date(date(2024, 1, 4))
            .await
            .unwrap();
        assert_eq!(
            db.session.reference_date().await.unwrap(),
            Some(date(2024, 1, 4))
        );
    }

    #[tokio::test]
    async fn session_setting_reference_date_drops_reconciled_marker() {
        let db = open_test_db().await;
        db.session
            .set_reference_date(date(2024, 1, 4))
            .await
            .unwrap();
        db.session
            .set_reconciled_date(date(2024, 1, 4))
            .await
            .unwrap();
        assert_eq!(
            db.session.reconciled_date().await.unwrap(),
            Some(date(2024, 1, 4))
        );

        db.session
            .set_reference_date(date(2024, 1, 7))
            .await
            .unwrap();
        assert_eq!(db.session.reconciled_date().await.unwrap(), None);
    }

    #[tokio::test]
    async fn session_clear_unsets_everything() {
        let db = open_test_db().await;
        db.session
            .set_reference_date(date(2024, 1, 4))
            .await
            .unwrap();
        db.session
            .set_reconciled_date(date(2024, 1, 4))
            .await
            .unwrap();

        db.session.clear().await.unwrap();
        assert_eq!(db.session.reference_date().await.unwrap(), None);
        assert_eq!(db.session.reconciled_date().await.unwrap(), None);
    }
}
