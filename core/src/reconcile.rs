// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Determines which scheduled check-in date is "active" for a task, given
//! the reference date the user supplied for the session.
//!
//! These are pure functions: the reference date is always an explicit
//! parameter, never read from the system clock or a process-wide holder.

use jiff::civil::Date;

use crate::AuraSchedule;

/// Finds the schedule entry that is active relative to the reference date.
///
/// An entry equal to the reference date wins immediately. Otherwise the
/// latest entry at or before the reference date is active. A reference date
/// earlier than the whole schedule yields the first entry (the task has not
/// logically begun); a reference date at or past the last entry yields the
/// last (the task's span has fully elapsed).
pub fn find_active_date(reference: Date, schedule: &AuraSchedule) -> Date {
    let mut candidate = None;
    for entry in schedule.iter() {
        if entry == reference {
            return entry;
        }
        if entry < reference {
            candidate = Some(entry);
        } else {
            return candidate.unwrap_or(entry);
        }
    }
    schedule.last()
}

/// Whether the task's active date falls on the reference date.
pub fn is_due_today(active: Date, reference: Date) -> bool {
    active == reference
}

/// Whether the stored current-date pointer disagrees with the reconciled
/// active date and must be persisted anew.
pub fn needs_update(stored: Date, reference: Date, schedule: &AuraSchedule) -> bool {
    find_active_date(reference, schedule) != stored
}
