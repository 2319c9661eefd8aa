// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

/// A folder grouping tasks into a project.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Folder {
    /// The unique identifier for the folder.
    pub uid: String,

    /// Human-readable folder name, unique among folders.
    pub name: String,

    /// The session date the folder was created on. Folders list in
    /// creation order.
    pub created: Date,
}

/// Draft for a new folder.
#[derive(Debug, Clone)]
pub struct FolderDraft {
    /// Human-readable folder name.
    pub name: String,
}
