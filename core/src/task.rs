// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::AuraSchedule;

/// A task with its check-in schedule.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Task {
    /// The unique identifier for the task.
    pub uid: String,

    /// The folder the task belongs to, or `None` for the main list.
    pub folder_uid: Option<String>,

    /// The per-list serial number, assigned at creation and shown as `#N`.
    pub serial: i64,

    /// One-line summary of the task.
    pub summary: String,

    /// Free-form notes, if any.
    pub notes: Option<String>,

    /// The date the task was created, which is also the schedule start.
    pub created: Date,

    /// The target end date of the task.
    pub end: Date,

    /// The schedule entry currently considered active. A one-directional
    /// pointer into the schedule, moved only by reconciliation.
    pub current: Date,

    /// The check-in schedule, generated once at creation.
    pub schedule: AuraSchedule,
}

impl Task {
    /// The schedule entry after the current pointer, if the task still has
    /// check-ins ahead of it.
    pub fn next_check_in(&self) -> Option<Date> {
        self.schedule.next_after(self.current)
    }

    /// The task's display identifier, e.g. `#3`.
    pub fn display_id(&self) -> String {
        format!("#{}", self.serial)
    }
}

/// Which tasks a listing should cover.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum TaskScope {
    /// Every task in the store, main list and folders alike.
    All,

    /// Tasks on the main list only.
    #[default]
    Main,

    /// Tasks in the folder with the given uid.
    Folder(String),
}

/// Draft for a new task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    /// The folder to create the task in, or `None` for the main list.
    pub folder_uid: Option<String>,

    /// One-line summary of the task.
    pub summary: String,

    /// Free-form notes, if any.
    pub notes: Option<String>,

    /// The schedule start date. Defaults to the session's reference date.
    pub start: Option<Date>,

    /// The target end date.
    pub end: Date,
}

/// Patch for a task, allowing partial updates.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    /// A new summary, if set.
    pub summary: Option<String>,

    /// New notes; `Some(None)` clears them.
    pub notes: Option<Option<String>>,

    /// A new end date, if set. Regenerates the schedule from the task's
    /// creation date.
    pub end: Option<Date>,
}

impl TaskPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.notes.is_none() && self.end.is_none()
    }
}
