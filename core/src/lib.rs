// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

mod aura;
mod config;
mod folder;
mod localdb;
mod reconcile;
mod schedule;
mod task;
mod types;

pub use crate::aura::Aura;
pub use crate::config::{APP_NAME, Config};
pub use crate::folder::{Folder, FolderDraft};
pub use crate::reconcile::{find_active_date, is_due_today, needs_update};
pub use crate::schedule::AuraSchedule;
pub use crate::task::{Task, TaskDraft, TaskPatch, TaskScope};
pub use crate::types::{Pager, SortOrder};
