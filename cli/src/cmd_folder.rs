// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use aura_core::{Aura, FolderDraft};
use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct CmdFolderNew {
    pub name: String,
}

impl CmdFolderNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new folder")
            .arg(arg_name())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: get_name(matches),
        }
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new folder...");
        let folder = aura.new_folder(FolderDraft { name: self.name }).await?;
        println!("Created folder {}", folder.name.bold());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdFolderList;

impl CmdFolderList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("List folders")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdFolderList
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing folders...");
        let folders = aura.list_folders().await?;
        if folders.is_empty() {
            println!("{}", "No folders found".italic());
            return Ok(());
        }

        for folder in folders {
            println!("{}  (created {})", folder.name, folder.created);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdFolderDelete {
    pub name: String,
}

impl CmdFolderDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a folder and every task in it")
            .arg(arg_name())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: get_name(matches),
        }
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting folder...");
        let folder = aura
            .folder_by_name(&self.name)
            .await?
            .ok_or_else(|| format!("Folder '{}' not found", self.name))?;

        let removed = aura.delete_folder(&folder.uid).await?;
        println!(
            "Deleted folder {} and {removed} task(s)",
            folder.name.bold()
        );
        Ok(())
    }
}

fn arg_name() -> Arg {
    arg!(name: <NAME> "The name of the folder")
}

fn get_name(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("name")
        .cloned()
        .unwrap_or_default()
}
