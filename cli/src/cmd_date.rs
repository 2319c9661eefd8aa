// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use aura_core::Aura;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::Date;

use crate::util::parse_date;

#[derive(Debug, Clone, Copy)]
pub struct CmdDateSet {
    pub date: Date,
}

impl CmdDateSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set the reference date used as \"today\" by every other command")
            .arg(arg!(date: <DATE> "The date to treat as today (YYYY-MM-DD)"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let date = matches
            .get_one::<String>("date")
            .ok_or("date is required")?;

        Ok(Self {
            date: parse_date(date)?,
        })
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting reference date...");
        aura.set_reference_date(self.date).await?;

        let updated = aura.reconcile().await?;
        println!("Reference date set to {}", self.date.to_string().bold());
        if updated > 0 {
            println!("{updated} task(s) moved to a new check-in date");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDateShow;

impl CmdDateShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the current reference date")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDateShow
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        match aura.reference_date().await? {
            Some(date) => println!("{date}"),
            None => println!("{}", "No reference date set".italic()),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDateClear;

impl CmdDateClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Clear the reference date, ending the session")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDateClear
    }

    pub async fn run(self, aura: &Aura) -> Result<(), Box<dyn Error>> {
        tracing::debug!("clearing reference date...");
        aura.clear_reference_date().await?;
        println!("Reference date cleared");
        Ok(())
    }
}
