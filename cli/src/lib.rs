// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for Aura.

mod cli;
mod cmd_dashboard;
mod cmd_date;
mod cmd_folder;
mod cmd_generate_completion;
mod cmd_search;
mod cmd_task;
mod config;
mod table;
mod task_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
