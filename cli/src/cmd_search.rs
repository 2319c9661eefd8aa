// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use aura_core::Aura;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::task_formatter::TaskFormatter;
use crate::util::require_reference_date;

#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub query: String,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Search every task by serial number or text")
            .arg(arg!(query: <QUERY> "A serial number (#3 or 3) or a text fragment"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            query: matches
                .get_one::<String>("query")
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching tasks...");

        let matches = aura.search(&self.query).await?;
        if matches.is_empty() {
            println!("{}", "No tasks found".italic());
            return Ok(());
        }

        let reference = require_reference_date(aura).await?;
        TaskFormatter::new(reference).write(&mut io::stdout(), &matches)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_search() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdSearch::command());

        let matches = cmd.try_get_matches_from(["test", "search", "#3"]).unwrap();
        let sub_matches = matches.subcommand_matches("search").unwrap();
        let parsed = CmdSearch::from(sub_matches);
        assert_eq!(parsed.query, "#3");
    }
}
