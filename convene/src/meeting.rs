/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core meeting data structures for the Convene scheduler.
//!
//! Two distinct types model the two sides of the scheduling pipeline:
//!
//! ```text
//! dataset  ──(load)──►  Meeting  ──(scheduler)──►  MeetingStart / Schedule
//!                        ↑ input                    ↑ output
//!                        immutable after load       one record per placement
//! ```
//!
//! # Ownership model
//! `Meeting`s are owned by the [`Dataset`](crate::dataset::Dataset) and only
//! ever borrowed by the ranker and the scheduler. Per-run mutable state (team
//! busy counters, the to-do set) lives inside `SlotScheduler::schedule()`, so
//! a `Meeting` is never written to after construction.

use std::collections::BTreeSet;

use serde::Serialize;

// ── Meeting (input) ───────────────────────────────────────────────────────────

/// A unit of work to be placed into a timeslot.
///
/// Team and dependency sets are `BTreeSet` so every iteration over them is
/// lexicographic, which keeps the whole pipeline deterministic for a fixed
/// input (the ranker's traversal order and the scheduler's log output both
/// depend on it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    /// Unique meeting name within a dataset.
    pub name: String,

    /// Number of consecutive timeslots the meeting occupies. Must be ≥ 1;
    /// enforced by [`Dataset::validate`](crate::dataset::Dataset::validate).
    pub duration: u32,

    /// Teams that must all be free for the meeting to start. May be empty
    /// (an unstaffed meeting is placeable in any slot its dependencies allow).
    pub required_teams: BTreeSet<String>,

    /// Names of meetings that must have left the to-do set before this one
    /// may start.
    pub dependencies: BTreeSet<String>,
}

impl Meeting {
    /// Creates a meeting with no teams and no dependencies.
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
            required_teams: BTreeSet::new(),
            dependencies: BTreeSet::new(),
        }
    }

    /// Sets the required team set.
    pub fn with_teams<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_teams = teams.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the dependency set.
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

// ── MeetingStart (output) ─────────────────────────────────────────────────────

/// One placement record: a meeting that started in a given timeslot.
///
/// Carries the team names as a sorted `Vec` (copied out of the meeting's
/// `BTreeSet`) so the record is self-contained for the output sink; the sink
/// never needs the `Meeting` it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingStart {
    /// Name of the meeting that started.
    pub meeting: String,

    /// Teams attending, sorted.
    pub teams: Vec<String>,
}

impl MeetingStart {
    /// Builds the placement record for `meeting`.
    pub fn from_meeting(meeting: &Meeting) -> Self {
        Self {
            meeting: meeting.name.clone(),
            teams: meeting.required_teams.iter().cloned().collect(),
        }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// All meetings that started in one discrete time unit. Often empty: slots
/// where every pending meeting is blocked still appear in the schedule so
/// slot indices equal elapsed time.
pub type Timeslot = Vec<MeetingStart>;

/// Final scheduling result: one [`Timeslot`] per discrete time unit, in order.
pub type Schedule = Vec<Timeslot>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_meeting_has_no_teams_or_dependencies() {
        let m = Meeting::new("kickoff", 2);
        assert_eq!(m.name, "kickoff");
        assert_eq!(m.duration, 2);
        assert!(m.required_teams.is_empty());
        assert!(m.dependencies.is_empty());
    }

    #[test]
    fn with_teams_deduplicates_and_sorts() {
        let m = Meeting::new("m", 1).with_teams(["qa", "design", "qa"]);
        let teams: Vec<&str> = m.required_teams.iter().map(String::as_str).collect();
        assert_eq!(teams, vec!["design", "qa"]);
    }

    #[test]
    fn with_dependencies_deduplicates_and_sorts() {
        let m = Meeting::new("m", 1).with_dependencies(["b", "a", "b"]);
        let deps: Vec<&str> = m.dependencies.iter().map(String::as_str).collect();
        assert_eq!(deps, vec!["a", "b"]);
    }

    #[test]
    fn meeting_start_copies_teams_sorted() {
        let m = Meeting::new("planning", 3).with_teams(["platform", "design"]);
        let start = MeetingStart::from_meeting(&m);
        assert_eq!(start.meeting, "planning");
        assert_eq!(start.teams, vec!["design", "platform"]);
    }

    #[test]
    fn meeting_start_of_unstaffed_meeting_has_empty_team_list() {
        let m = Meeting::new("solo", 1);
        assert!(MeetingStart::from_meeting(&m).teams.is_empty());
    }

    #[test]
    fn schedule_serializes_to_yaml() {
        let schedule: Schedule = vec![
            vec![MeetingStart {
                meeting: "kickoff".into(),
                teams: vec!["platform".into()],
            }],
            vec![],
        ];
        let yaml = serde_yaml::to_string(&schedule).unwrap();
        assert!(yaml.contains("kickoff"));
        assert!(yaml.contains("platform"));
    }
}
