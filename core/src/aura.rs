// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use jiff::civil::Date;
use tokio::fs;
use uuid::Uuid;

use crate::localdb::{FolderRecord, LocalDb, TaskRecord};
use crate::{
    AuraSchedule, Config, Folder, FolderDraft, Pager, SortOrder, Task, TaskDraft, TaskPatch,
    TaskScope, find_active_date, needs_update,
};

const DB_NAME: &str = "aura.db";

/// Aura application core.
///
/// Owns the local store and coordinates schedule generation and
/// reconciliation. "Today" is always the session's user-supplied reference
/// date; the system clock is never consulted.
#[derive(Debug, Clone)]
pub struct Aura {
    config: Config,
    db: LocalDb,
}

impl Aura {
    /// Creates a new Aura instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        prepare(&config).await?;

        let db_file = config.state_dir.as_ref().map(|dir| dir.join(DB_NAME));
        let db = LocalDb::open(db_file.as_deref())
            .await
            .map_err(|e| format!("Failed to initialize db: {e}"))?;

        Ok(Self { config, db })
    }

    /// The directory holding the task database, if any.
    pub fn state_dir(&self) -> Option<&Path> {
        self.config.state_dir.as_deref()
    }

    /// The session's reference date, if one has been set.
    pub async fn reference_date(&self) -> Result<Option<Date>, Box<dyn Error>> {
        self.db.session.reference_date().await
    }

    /// Sets the session's reference date.
    pub async fn set_reference_date(&self, date: Date) -> Result<(), Box<dyn Error>> {
        tracing::debug!(%date, "setting reference date");
        self.db
            .session
            .set_reference_date(date)
            .await
            .map_err(|e| format!("Failed to set reference date: {e}").into())
    }

    /// Clears the session's reference date, ending the session.
    pub async fn clear_reference_date(&self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("clearing reference date");
        self.db
            .session
            .clear()
            .await
            .map_err(|e| format!("Failed to clear reference date: {e}").into())
    }

    /// Add a new folder from the given draft.
    pub async fn new_folder(&self, draft: FolderDraft) -> Result<Folder, Box<dyn Error>> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err("Folder name must not be empty".into());
        }
        if self.db.folders.get_by_name(&name).await?.is_some() {
            return Err(format!("Folder '{name}' already exists").into());
        }

        let created = self.require_reference_date().await?;
        let folder = Folder {
            uid: Uuid::new_v4().to_string(),
            name,
            created,
        };
        self.db
            .folders
            .insert(&FolderRecord::from_folder(&folder))
            .await
            .map_err(|e| format!("Failed to create folder: {e}"))?;

        Ok(folder)
    }

    /// Lists folders in creation order.
    pub async fn list_folders(&self) -> Result<Vec<Folder>, Box<dyn Error>> {
        let records = self.db.folders.list().await?;
        records
            .into_iter()
            .map(FolderRecord::into_folder)
            .collect()
    }

    /// Looks up a folder by its exact name.
    pub async fn folder_by_name(&self, name: &str) -> Result<Option<Folder>, Box<dyn Error>> {
        match self.db.folders.get_by_name(name).await? {
            Some(record) => Ok(Some(record.into_folder()?)),
            None => Ok(None),
        }
    }

    /// Deletes a folder and every task in it, returning how many tasks were
    /// removed.
    pub async fn delete_folder(&self, uid: &str) -> Result<u64, Box<dyn Error>> {
        if !self.db.folders.delete(uid).await? {
            return Err("Folder not found".into());
        }
        let removed = self.db.tasks.delete_by_folder(uid).await?;
        tracing::debug!(uid, removed, "deleted folder");
        Ok(removed)
    }

    /// Add a new task from the given draft.
    ///
    /// The check-in schedule is generated here, once; later sessions only
    /// reconcile against it.
    pub async fn new_task(&self, draft: TaskDraft) -> Result<Task, Box<dyn Error>> {
        let summary = draft.summary.trim().to_string();
        if summary.is_empty() {
            return Err("Task summary must not be empty".into());
        }

        let reference = self.require_reference_date().await?;
        if let Some(folder_uid) = &draft.folder_uid
            && self.db.folders.get(folder_uid).await?.is_none()
        {
            return Err("Folder not found".into());
        }

        let start = draft.start.unwrap_or(reference);
        let schedule = AuraSchedule::generate(start, draft.end);
        let current = find_active_date(reference, &schedule);

        let scope = match &draft.folder_uid {
            Some(uid) => TaskScope::Folder(uid.clone()),
            None => TaskScope::Main,
        };
        let serial = self.db.tasks.max_serial(&scope).await? + 1;

        let task = Task {
            uid: Uuid::new_v4().to_string(),
            folder_uid: draft.folder_uid,
            serial,
            summary,
            notes: draft.notes,
            created: start,
            end: draft.end,
            current,
            schedule,
        };
        self.db
            .tasks
            .upsert(&TaskRecord::from_task(&task)?)
            .await
            .map_err(|e| format!("Failed to create task: {e}"))?;

        Ok(task)
    }

    /// Resolves a task by `#N` / bare serial number within the scope, or by
    /// its uid.
    pub async fn get_task(&self, scope: &TaskScope, id: &str) -> Result<Task, Box<dyn Error>> {
        let serial = id.strip_prefix('#').unwrap_or(id).parse::<i64>();
        let record = match serial {
            Ok(serial) => self.db.tasks.get_by_serial(scope, serial).await?,
            Err(_) => self.db.tasks.get(id).await?,
        };
        match record {
            Some(record) => record.into_task(),
            None => Err(format!("Task '{id}' not found").into()),
        }
    }

    /// Applies a patch to a task resolved within the scope.
    pub async fn edit_task(
        &self,
        scope: &TaskScope,
        id: &str,
        patch: TaskPatch,
    ) -> Result<Task, Box<dyn Error>> {
        let mut task = self.get_task(scope, id).await?;
        if patch.is_empty() {
            return Ok(task);
        }

        if let Some(summary) = patch.summary {
            task.summary = summary;
        }
        if let Some(notes) = patch.notes {
            task.notes = notes;
        }
        if let Some(end) = patch.end {
            task.end = end;
            task.schedule = AuraSchedule::generate(task.created, end);
            let reference = self.require_reference_date().await?;
            task.current = find_active_date(reference, &task.schedule);
        }

        self.db
            .tasks
            .upsert(&TaskRecord::from_task(&task)?)
            .await
            .map_err(|e| format!("Failed to update task: {e}"))?;

        Ok(task)
    }

    /// Deletes a task resolved within the scope.
    pub async fn delete_task(&self, scope: &TaskScope, id: &str) -> Result<Task, Box<dyn Error>> {
        let task = self.get_task(scope, id).await?;
        self.db.tasks.delete(&task.uid).await?;
        Ok(task)
    }

    /// Lists tasks in the scope, ordered by serial number.
    pub async fn list_tasks(
        &self,
        scope: &TaskScope,
        order: SortOrder,
        pager: &Pager,
    ) -> Result<Vec<Task>, Box<dyn Error>> {
        let records = self.db.tasks.list(scope, order, pager).await?;
        records.into_iter().map(TaskRecord::into_task).collect()
    }

    /// Moves every stale current-date pointer to the entry the reference
    /// date reconciles to, returning how many tasks were updated.
    ///
    /// The pass is skipped when the reference date has not advanced since
    /// the last one: active dates only move when the reference date does.
    pub async fn reconcile(&self) -> Result<usize, Box<dyn Error>> {
        let reference = self.require_reference_date().await?;
        if self.db.session.reconciled_date().await? == Some(reference) {
            tracing::debug!(%reference, "reference date unchanged, skipping reconciliation");
            return Ok(0);
        }

        let mut updated = 0;
        for record in self.db.tasks.all().await? {
            let task = record.into_task()?;
            if needs_update(task.current, reference, &task.schedule) {
                let active = find_active_date(reference, &task.schedule);
                self.db.tasks.set_current(&task.uid, active).await?;
                updated += 1;
            }
        }

        self.db.session.set_reconciled_date(reference).await?;
        tracing::debug!(%reference, updated, "reconciled tasks");
        Ok(updated)
    }

    /// Tasks whose active date falls on the reference date, reconciled
    /// first so the answer is current.
    pub async fn due_today(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        self.reconcile().await?;
        let reference = self.require_reference_date().await?;
        let records = self.db.tasks.due_on(reference).await?;
        records.into_iter().map(TaskRecord::into_task).collect()
    }

    /// Searches every task by serial number (`#3` or `3`) or by
    /// case-insensitive substring of the summary and notes.
    pub async fn search(&self, query: &str) -> Result<Vec<Task>, Box<dyn Error>> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let serial = term.strip_prefix('#').unwrap_or(&term).parse::<i64>().ok();

        let mut matches = Vec::new();
        for record in self.db.tasks.all().await? {
            let task = record.into_task()?;
            let matched = serial == Some(task.serial)
                || task.summary.to_lowercase().contains(&term)
                || task
                    .notes
                    .as_ref()
                    .is_some_and(|notes| notes.to_lowercase().contains(&term));
            if matched {
                matches.push(task);
            }
        }
        Ok(matches)
    }

    /// Closes the underlying database connection.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.db.close().await
    }

    async fn require_reference_date(&self) -> Result<Date, Box<dyn Error>> {
        self.db
            .session
            .reference_date()
            .await?
            .ok_or_else(|| "Reference date is not set for this session".into())
    }
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = &config.state_dir {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| format!("Failed to create state directory: {e}"))?;
    }
    Ok(())
}
