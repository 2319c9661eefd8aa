// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use aura_core::Aura;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::task_formatter::TaskFormatter;
use crate::util::require_reference_date;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "today";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the tasks due on the reference date")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the due tasks, the main list first and then each folder.
    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!("generating dashboard...");

        let reference = require_reference_date(aura).await?;
        let due = aura.due_today().await?;

        println!("📅 {}", format!("Due on {reference}").bold());
        if due.is_empty() {
            println!("{}", "Nothing due today".italic());
            return Ok(());
        }

        let formatter = TaskFormatter::new(reference);

        let main: Vec<_> = due
            .iter()
            .filter(|task| task.folder_uid.is_none())
            .cloned()
            .collect();
        let mut first = true;
        if !main.is_empty() {
            println!(" {} {}", "►".green(), "Main list".italic());
            formatter.write(&mut io::stdout(), &main)?;
            first = false;
        }

        for folder in aura.list_folders().await? {
            let tasks: Vec<_> = due
                .iter()
                .filter(|task| task.folder_uid.as_deref() == Some(folder.uid.as_str()))
                .cloned()
                .collect();
            if !tasks.is_empty() {
                if !first {
                    println!();
                }
                println!(" {} {}", "►".green(), folder.name.italic());
                formatter.write(&mut io::stdout(), &tasks)?;
                first = false;
            }
        }

        Ok(())
    }
}
