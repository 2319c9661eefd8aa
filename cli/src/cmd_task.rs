// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use aura_core::{Aura, SortOrder, TaskDraft, TaskPatch, TaskScope};
use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::Date;

use crate::task_formatter::TaskFormatter;
use crate::util::{arg_folder, get_folder, parse_date, require_reference_date, resolve_scope};

#[derive(Debug, Clone)]
pub struct CmdTaskNew {
    pub summary: String,
    pub end: Date,
    pub start: Option<Date>,
    pub notes: Option<String>,
    pub folder: Option<String>,
}

impl CmdTaskNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new task with a generated check-in schedule")
            .arg(arg!(summary: <SUMMARY> "Summary of the task"))
            .arg(arg!(end: -e --end <END> "End date of the task (YYYY-MM-DD)").required(true))
            .arg(arg!(start: --start <START> "Start date (defaults to the reference date)"))
            .arg(arg_notes())
            .arg(arg_folder())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let summary = matches
            .get_one::<String>("summary")
            .ok_or("summary is required")?
            .clone();
        let end = matches.get_one::<String>("end").ok_or("end is required")?;
        let start = matches.get_one::<String>("start");

        Ok(Self {
            summary,
            end: parse_date(end)?,
            start: start.map(|s| parse_date(s)).transpose()?,
            notes: get_notes(matches),
            folder: get_folder(matches),
        })
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new task...");
        let scope = resolve_scope(aura, self.folder.as_deref()).await?;
        let folder_uid = match &scope {
            TaskScope::Folder(uid) => Some(uid.clone()),
            _ => None,
        };

        let task = aura
            .new_task(TaskDraft {
                folder_uid,
                summary: self.summary,
                notes: self.notes,
                start: self.start,
                end: self.end,
            })
            .await?;

        println!(
            "Created task {} with {} check-in(s)",
            task.display_id().bold(),
            task.schedule.len()
        );
        let reference = require_reference_date(aura).await?;
        TaskFormatter::new(reference).write(&mut io::stdout(), &vec![task])?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskList {
    pub folder: Option<String>,
}

impl CmdTaskList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List tasks on the main list or in a folder")
            .arg(arg_folder())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            folder: get_folder(matches),
        }
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing tasks...");
        aura.reconcile().await?;

        let scope = resolve_scope(aura, self.folder.as_deref()).await?;
        Self::list(aura, &scope).await
    }

    pub async fn list(aura: &Aura, scope: &TaskScope) -> Result<(), Box<dyn Error>> {
        const MAX: i64 = 100;

        let pager = (MAX, 0).into();
        let tasks = aura.list_tasks(scope, SortOrder::Asc, &pager).await?;
        if tasks.is_empty() {
            println!("{}", "No tasks found".italic());
            return Ok(());
        }

        let reference = require_reference_date(aura).await?;
        TaskFormatter::new(reference).write(&mut io::stdout(), &tasks)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskEdit {
    pub id: String,
    pub summary: Option<String>,
    pub notes: Option<String>,
    pub end: Option<Date>,
    pub folder: Option<String>,
}

impl CmdTaskEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a task; changing the end date regenerates its schedule")
            .arg(arg_id())
            .arg(arg!(summary: -s --summary <SUMMARY> "Summary of the task"))
            .arg(arg_notes())
            .arg(arg!(end: -e --end <END> "End date of the task (YYYY-MM-DD)"))
            .arg(arg_folder())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let end = matches.get_one::<String>("end");

        Ok(Self {
            id: get_id(matches),
            summary: matches.get_one("summary").cloned(),
            notes: get_notes(matches),
            end: end.map(|s| parse_date(s)).transpose()?,
            folder: get_folder(matches),
        })
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing task...");
        let scope = resolve_scope(aura, self.folder.as_deref()).await?;

        // an empty --notes clears the notes
        let patch = TaskPatch {
            summary: self.summary,
            notes: self.notes.map(|n| (!n.is_empty()).then_some(n)),
            end: self.end,
        };
        let task = aura.edit_task(&scope, &self.id, patch).await?;

        let reference = require_reference_date(aura).await?;
        TaskFormatter::new(reference).write(&mut io::stdout(), &vec![task])?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskDelete {
    pub ids: Vec<String>,
    pub folder: Option<String>,
}

impl CmdTaskDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete tasks")
            .arg(arg_ids())
            .arg(arg_folder())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            folder: get_folder(matches),
        }
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        let scope = resolve_scope(aura, self.folder.as_deref()).await?;
        for id in self.ids {
            tracing::debug!(id, "deleting task...");
            let task = aura.delete_task(&scope, &id).await?;
            println!("Deleted task {}: {}", task.display_id().bold(), task.summary);
        }
        Ok(())
    }
}

fn arg_id() -> Arg {
    arg!(id: <ID> "The serial number (#3 or 3) or uid of the task")
}

fn get_id(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_default()
}

fn arg_ids() -> Arg {
    arg!(id: <ID> "The serial number (#3 or 3) or uid of the task").num_args(1..)
}

fn get_ids(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("id")
        .map(|ids| ids.cloned().collect())
        .unwrap_or_default()
}

fn arg_notes() -> Arg {
    arg!(notes: -n --notes <NOTES> "Notes for the task")
}

fn get_notes(matches: &ArgMatches) -> Option<String> {
    matches.get_one("notes").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn parse_task_new() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdTaskNew::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "new",
                "Write report",
                "--end",
                "2024-01-11",
                "--start",
                "2024-01-01",
                "--notes",
                "weekly status",
                "--folder",
                "Work",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        let parsed = CmdTaskNew::from(sub_matches).unwrap();
        assert_eq!(parsed.summary, "Write report");
        assert_eq!(parsed.end, date(2024, 1, 11));
        assert_eq!(parsed.start, Some(date(2024, 1, 1)));
        assert_eq!(parsed.notes, Some("weekly status".to_string()));
        assert_eq!(parsed.folder, Some("Work".to_string()));
    }

    #[test]
    fn parse_task_new_requires_end() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdTaskNew::command());

        let result = cmd.try_get_matches_from(["test", "new", "Write report"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_task_new_invalid_end() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdTaskNew::command());

        let matches = cmd
            .try_get_matches_from(["test", "new", "Write report", "--end", "soon"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        assert!(CmdTaskNew::from(sub_matches).is_err());
    }

    #[test]
    fn parse_task_edit() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdTaskEdit::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "edit",
                "#3",
                "-s",
                "Another summary",
                "--notes",
                "",
                "--end",
                "2024-02-01",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        let parsed = CmdTaskEdit::from(sub_matches).unwrap();
        assert_eq!(parsed.id, "#3");
        assert_eq!(parsed.summary, Some("Another summary".to_string()));
        assert_eq!(parsed.notes, Some("".to_string()));
        assert_eq!(parsed.end, Some(date(2024, 2, 1)));
    }

    #[test]
    fn parse_task_delete_multi() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdTaskDelete::command());

        let matches = cmd
            .try_get_matches_from(["test", "delete", "#1", "#2", "-f", "Work"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("delete").unwrap();
        let parsed = CmdTaskDelete::from(sub_matches);
        assert_eq!(parsed.ids, vec!["#1".to_string(), "#2".to_string()]);
        assert_eq!(parsed.folder, Some("Work".to_string()));
    }
}
