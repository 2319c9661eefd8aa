// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use aura_core::{APP_NAME, Aura};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_date::{CmdDateClear, CmdDateSet, CmdDateShow};
use crate::cmd_folder::{CmdFolderDelete, CmdFolderList, CmdFolderNew};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_search::CmdSearch;
use crate::cmd_task::{CmdTaskDelete, CmdTaskEdit, CmdTaskList, CmdTaskNew};
use crate::config::parse_config;

/// Run the Aura command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {e}", "Error:".red());
            }
        }
        Err(e) => println!("{} {e}", "Error:".red()),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Recurring check-in schedules for long-running tasks.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/aura/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/aura/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(
                Command::new("date")
                    .alias("d")
                    .about("Manage the session reference date")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdDateSet::command())
                    .subcommand(CmdDateShow::command())
                    .subcommand(CmdDateClear::command()),
            )
            .subcommand(
                Command::new("task")
                    .alias("t")
                    .about("Manage your task list")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTaskNew::command())
                    .subcommand(CmdTaskList::command())
                    .subcommand(CmdTaskEdit::command())
                    .subcommand(CmdTaskDelete::command()),
            )
            .subcommand(
                Command::new("folder")
                    .alias("f")
                    .about("Manage your folders")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdFolderNew::command())
                    .subcommand(CmdFolderList::command())
                    .subcommand(CmdFolderDelete::command()),
            )
            .subcommand(CmdSearch::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some(("date", matches)) => match matches.subcommand() {
                Some((CmdDateSet::NAME, matches)) => DateSet(CmdDateSet::from(matches)?),
                Some((CmdDateShow::NAME, matches)) => DateShow(CmdDateShow::from(matches)),
                Some((CmdDateClear::NAME, matches)) => DateClear(CmdDateClear::from(matches)),
                _ => unreachable!(),
            },
            Some(("task", matches)) => match matches.subcommand() {
                Some((CmdTaskNew::NAME, matches)) => TaskNew(CmdTaskNew::from(matches)?),
                Some((CmdTaskList::NAME, matches)) => TaskList(CmdTaskList::from(matches)),
                Some((CmdTaskEdit::NAME, matches)) => TaskEdit(CmdTaskEdit::from(matches)?),
                Some((CmdTaskDelete::NAME, matches)) => TaskDelete(CmdTaskDelete::from(matches)),
                _ => unreachable!(),
            },
            Some(("folder", matches)) => match matches.subcommand() {
                Some((CmdFolderNew::NAME, matches)) => FolderNew(CmdFolderNew::from(matches)),
                Some((CmdFolderList::NAME, matches)) => FolderList(CmdFolderList::from(matches)),
                Some((CmdFolderDelete::NAME, matches)) => {
                    FolderDelete(CmdFolderDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdSearch::NAME, matches)) => Search(CmdSearch::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// Set the session reference date
    DateSet(CmdDateSet),

    /// Show the session reference date
    DateShow(CmdDateShow),

    /// Clear the session reference date
    DateClear(CmdDateClear),

    /// Add a new task
    TaskNew(CmdTaskNew),

    /// List tasks
    TaskList(CmdTaskList),

    /// Edit a task
    TaskEdit(CmdTaskEdit),

    /// Delete tasks
    TaskDelete(CmdTaskDelete),

    /// Add a new folder
    FolderNew(CmdFolderNew),

    /// List folders
    FolderList(CmdFolderList),

    /// Delete a folder
    FolderDelete(CmdFolderDelete),

    /// Search tasks
    Search(CmdSearch),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;

        if let GenerateCompletion(a) = &self {
            return a.run();
        }

        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let aura = Aura::new(core_config).await?;

        let result = match self {
            Dashboard(a) => a.run(&aura).await,
            DateSet(a) => a.run(&aura).await,
            DateShow(a) => a.run(&aura).await,
            DateClear(a) => a.run(&aura).await,
            TaskNew(a) => a.run(&aura).await,
            TaskList(a) => a.run(&aura).await,
            TaskEdit(a) => a.run(&aura).await,
            TaskDelete(a) => a.run(&aura).await,
            FolderNew(a) => a.run(&aura).await,
            FolderList(a) => a.run(&aura).await,
            FolderDelete(a) => a.run(&aura).await,
            Search(a) => a.run(&aura).await,
            GenerateCompletion(_) => unreachable!(),
        };

        aura.close().await?;
        result
    }
}
