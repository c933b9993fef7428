/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the greedy slot scheduler.
//!
//! Input-integrity failures (dangling references, duplicates) are caught
//! before scheduling by [`ValidationError`](crate::dataset::ValidationError);
//! the variants here cover what can still go wrong during a run. Every
//! variant carries the meeting and team names involved so the caller can log
//! a diagnosable message without re-deriving context. Nothing is retried:
//! one scheduling run is a one-shot batch computation.

use thiserror::Error;

/// Top-level error type returned by
/// [`SlotScheduler::schedule()`](super::SlotScheduler::schedule).
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A full slot pass committed nothing while meetings remained and every
    /// team was already idle. No future slot can differ from this one, so
    /// the input is unsatisfiable: a dependency cycle, or a constraint set
    /// that starves some meeting forever.
    ///
    /// `remaining` lists the still-unscheduled meeting names, sorted.
    #[error("no meeting could be placed at slot {slot} with all teams idle; remaining: {remaining:?}")]
    Stalled { slot: usize, remaining: Vec<String> },

    /// The caller-provided safety cap on slot count was reached before the
    /// to-do set emptied.
    #[error("schedule exceeded the configured maximum of {limit} timeslot(s)")]
    SlotLimitExceeded { limit: usize },

    /// A meeting has no entry in the rank table, so no attempt order can be
    /// fixed. The table and the meeting set must come from the same input.
    #[error("meeting '{meeting}' has no entry in the rank table")]
    MissingRank { meeting: String },

    /// A meeting requires a team the roster does not contain. Pre-flight
    /// validation reports this earlier as
    /// [`ValidationError::UnknownTeam`](crate::dataset::ValidationError::UnknownTeam);
    /// this variant is the guard for callers that skipped it.
    #[error("meeting '{meeting}' requires team '{team}' which is not in the roster")]
    UnknownTeam { meeting: String, team: String },
}
