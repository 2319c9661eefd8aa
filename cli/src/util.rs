// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use aura_core::{Aura, TaskScope};
use clap::{Arg, ArgMatches, arg};
use jiff::civil::{Date, DateTime};

/// Parse a calendar date, accepting a bare date or a date with a time of
/// day. Any time component is dropped; scheduling works in whole days.
pub fn parse_date(s: &str) -> Result<Date, &'static str> {
    if let Ok(date) = s.parse() {
        Ok(date)
    } else if let Ok(dt) = DateTime::strptime("%Y-%m-%d %H:%M", s) {
        Ok(dt.date())
    } else {
        Err("Invalid date format. Expected format: YYYY-MM-DD or YYYY-MM-DD HH:MM")
    }
}

pub fn arg_folder() -> Arg {
    arg!(folder: -f --folder <FOLDER> "The folder to operate in (defaults to the main list)")
}

pub fn get_folder(matches: &ArgMatches) -> Option<String> {
    matches.get_one("folder").cloned()
}

/// The session's reference date, with a hint on how to start a session.
pub async fn require_reference_date(aura: &Aura) -> Result<Date, Box<dyn Error>> {
    aura.reference_date().await?.ok_or_else(|| {
        "Reference date is not set for this session. Run `aura date set <DATE>` first".into()
    })
}

/// Resolve a folder name to a task scope. No name means the main list.
pub async fn resolve_scope(
    aura: &Aura,
    folder: Option<&str>,
) -> Result<TaskScope, Box<dyn Error>> {
    match folder {
        None => Ok(TaskScope::Main),
        Some(name) => match aura.folder_by_name(name).await? {
            Some(folder) => Ok(TaskScope::Folder(folder.uid)),
            None => Err(format!("Folder '{name}' not found").into()),
        },
    }
}
