// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use sqlx::SqlitePool;

use crate::Folder;

#[derive(Debug, Clone)]
pub(crate) struct Folders {
    pool: SqlitePool,
}

impl Folders {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, folder: &FolderRecord) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO folders (uid, name, created)
VALUES (?, ?, ?);
";

        sqlx::query(SQL)
            .bind(&folder.uid)
            .bind(&folder.name)
            .bind(&folder.created)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, uid: &str) -> Result<Option<FolderRecord>, sqlx::Error> {
        const SQL: &str = "SELECT uid, name, created FROM folders WHERE uid = ?;";

        sqlx::query_as(SQL)
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<FolderRecord>, sqlx::Error> {
        const SQL: &str = "SELECT uid, name, created FROM folders WHERE name = ?;";

        sqlx::query_as(SQL)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    /// Lists folders in creation order.
    pub async fn list(&self) -> Result<Vec<FolderRecord>, sqlx::Error> {
        const SQL: &str = "SELECT uid, name, created FROM folders ORDER BY created, name;";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    pub async fn delete(&self, uid: &str) -> Result<bool, sqlx::Error> {
        const SQL: &str = "DELETE FROM folders WHERE uid = ?;";

        let result = sqlx::query(SQL).bind(uid).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct FolderRecord {
    uid: String,
    name: String,
    created: String,
}

impl FolderRecord {
    pub fn from_folder(folder: &Folder) -> Self {
        Self {
            uid: folder.uid.clone(),
            name: folder.name.clone(),
            created: folder.created.to_string(),
        }
    }

    pub fn into_folder(self) -> Result<Folder, Box<dyn Error>> {
        let created = self
            .created
            .parse()
            .map_err(|e| format!("Invalid created date in folder record: {e}"))?;
        Ok(Folder {
            uid: self.uid,
            name: self.name,
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::localdb::open_test_db;

    fn test_folder(uid: &str, name: &str, day: i8) -> Folder {
        Folder {
            uid: uid.to_string(),
            name: name.to_string(),
            created: date(2024, 1, day),
        }
    }

    #[tokio::test]
    async fn folders_insert_and_get_round_trip() {
        let db = open_test_db().await;
        let folder = test_folder("f-1", "Work", 5);

        db.folders
            .insert(&FolderRecord::from_folder(&folder))
            .await
            .expect("Failed to insert folder");

        let retrieved = db
            .folders
            .get("f-1")
            .await
            .expect("Failed to get folder")
            .expect("Folder not found")
            .into_folder()
            .unwrap();
        assert_eq!(retrieved.name, "Work");
        assert_eq!(retrieved.created, date(2024, 1, 5));
    }

    #[tokio::test]
    async fn folders_get_by_name_matches_exactly() {
        let db = open_test_db().await;
        let folder = test_folder("f-1", "Work", 5);
        db.folders
            .insert(&FolderRecord::from_folder(&folder))
            .await
            .unwrap();

        let found = db.folders.get_by_name("Work").await.unwrap();
        assert!(found.is_some());

        let missing = db.folders.get_by_name("work").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn folders_list_orders_by_creation_date() {
        let db = open_test_db().await;
        for folder in [
            test_folder("f-1", "Later", 20),
            test_folder("f-2", "Earlier", 3),
            test_folder("f-3", "Middle", 10),
        ] {
            db.folders
                .insert(&FolderRecord::from_folder(&folder))
                .await
                .unwrap();
        }

        let names: Vec<String> = db
            .folders
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.into_folder().unwrap().name)
            .collect();
        assert_eq!(names, ["Earlier", "Middle", "Later"]);
    }

    #[tokio::test]
    async fn folders_delete_reports_whether_removed() {
        let db = open_test_db().await;
        let folder = test_folder("f-1", "Work", 5);
        db.folders
            .insert(&FolderRecord::from_folder(&folder))
            .await
            .unwrap();

        assert!(db.folders.delete("f-1").await.unwrap());
        assert!(!db.folders.delete("f-1").await.unwrap());
        assert!(db.folders.get("f-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn folders_reject_duplicate_names() {
        let db = open_test_db().await;
        db.folders
            .insert(&FolderRecord::from_folder(&test_folder("f-1", "Work", 5)))
            .await
            .unwrap();

        let result = db
            .folders
            .insert(&FolderRecord::from_folder(&test_folder("f-2", "Work", 6)))
            .await;
        assert!(result.is_err());
    }
}
