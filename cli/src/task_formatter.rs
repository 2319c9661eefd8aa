// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use aura_core::Task;
use colored::Color;
use jiff::civil::Date;

use crate::table::{Column, PaddingDirection, Table};

/// Renders tasks as an aligned table.
///
/// The current check-in date is highlighted when it falls on the reference
/// date, and the end date turns red once the reference date has passed it.
#[derive(Debug)]
pub struct TaskFormatter {
    pub columns: Vec<TaskColumn>,
    pub reference: Date,
}

impl TaskFormatter {
    pub fn new(reference: Date) -> Self {
        Self {
            columns: vec![
                TaskColumn::Serial(TaskColumnSerial),
                TaskColumn::Current(TaskColumnCurrent),
                TaskColumn::Next(TaskColumnNext),
                TaskColumn::End(TaskColumnEnd),
                TaskColumn::Summary(TaskColumnSummary),
            ],
            reference,
        }
    }

    pub fn write(
        &self,
        w: &mut impl io::Write,
        tasks: &Vec<Task>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Table {
            columns: self.columns.clone(),
            separator: "  ".to_string(),
            padding: true,
            reference: self.reference,
            data: tasks,
        }
        .write_to(w)
    }
}

#[derive(Debug, Clone)]
pub enum TaskColumn {
    Serial(TaskColumnSerial),
    Current(TaskColumnCurrent),
    Next(TaskColumnNext),
    End(TaskColumnEnd),
    Summary(TaskColumnSummary),
}

impl Column<Task> for TaskColumn {
    fn format(&self, data: &Task) -> String {
        match self {
            TaskColumn::Serial(a) => a.format(data),
            TaskColumn::Current(a) => a.format(data),
            TaskColumn::Next(a) => a.format(data),
            TaskColumn::End(a) => a.format(data),
            TaskColumn::Summary(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TaskColumn::Serial(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, reference: Date, data: &Task) -> Option<Color> {
        match self {
            TaskColumn::Current(a) => a.get_color(reference, data),
            TaskColumn::End(a) => a.get_color(reference, data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnSerial;

impl TaskColumnSerial {
    fn format(&self, task: &Task) -> String {
        task.display_id()
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnCurrent;

impl TaskColumnCurrent {
    fn format(&self, task: &Task) -> String {
        task.current.to_string()
    }

    fn get_color(&self, reference: Date, task: &Task) -> Option<Color> {
        (task.current == reference).then_some(Color::Yellow)
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnNext;

impl TaskColumnNext {
    fn format(&self, task: &Task) -> String {
        task.next_check_in().map_or(String::new(), |d| d.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnEnd;

impl TaskColumnEnd {
    fn format(&self, task: &Task) -> String {
        task.end.to_string()
    }

    fn get_color(&self, reference: Date, task: &Task) -> Option<Color> {
        (task.end < reference).then_some(Color::Red)
    }
}

#[derive(Debug, Clone)]
pub struct TaskColumnSummary;

impl TaskColumnSummary {
    fn format(&self, task: &Task) -> String {
        task.summary.clone()
    }
}
