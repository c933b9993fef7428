/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Greedy timeslot assignment.
//!
//! [`SlotScheduler`] walks discrete timeslots forward and, in every slot,
//! tries to place each still-pending meeting in a fixed attempt order (the
//! ascending [`RankTable`] order from the [`rank`](crate::rank) pass). A
//! meeting commits to the current slot when every team it requires is free
//! and none of its dependencies is still in the to-do set. Meetings skipped
//! in one slot are simply retried in the next; there is no backtracking or
//! lookahead, and no attempt to minimise schedule length.
//!
//! # State model
//!
//! All per-run state is local to [`schedule()`](SlotScheduler::schedule):
//! the to-do set, the slot counter, and the team busy counters. The
//! scheduler struct itself holds only the optional slot cap, so one instance
//! can run any number of inputs and repeated runs over the same input yield
//! identical schedules (`BTreeMap`/`BTreeSet` keep every iteration order
//! deterministic).
//!
//! Time passes at the top of each slot: every busy counter is decremented
//! (floored at zero) before placement, so a team occupied by a duration-1
//! meeting frees up in the very next slot. Commits inside a slot are visible
//! to the placements attempted after them, which is what keeps two meetings
//! that share a team out of the same slot.

pub mod error;

pub use error::ScheduleError;

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::meeting::{Meeting, MeetingStart, Schedule, Timeslot};
use crate::rank::RankTable;

/// Per-run team availability: team name → timesteps still busy.
///
/// Owned by `schedule()` for the duration of one run; zero means free.
type TeamState = BTreeMap<String, u32>;

// ── SlotScheduler ─────────────────────────────────────────────────────────────

/// The greedy slot-by-slot scheduler.
#[derive(Debug, Clone, Default)]
pub struct SlotScheduler {
    /// Abort threshold on the slot counter. `None` means unbounded, which is
    /// safe for validated input: every slot either commits a meeting or
    /// drains a busy counter, and the stall check catches the case where
    /// neither can ever happen again.
    max_slots: Option<usize>,
}

impl SlotScheduler {
    /// Creates a scheduler with no slot cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a safety cap on the number of timeslots.
    pub fn with_max_slots(mut self, limit: usize) -> Self {
        self.max_slots = Some(limit);
        self
    }

    // ── Public entry point ────────────────────────────────────────────────────

    /// Assigns every meeting to a timeslot and returns the resulting
    /// [`Schedule`].
    ///
    /// `ranks` must cover the full meeting set (use
    /// [`rank_meetings`](crate::rank::rank_meetings) on the same slice).
    /// `teams` is the roster; busy state starts at zero for every entry.
    ///
    /// # Errors
    /// [`ScheduleError::Stalled`] on unsatisfiable input (e.g. a dependency
    /// cycle), [`ScheduleError::SlotLimitExceeded`] when the cap set via
    /// [`with_max_slots`](Self::with_max_slots) is hit, and
    /// [`ScheduleError::MissingRank`] / [`ScheduleError::UnknownTeam`] on
    /// inputs that skipped pre-flight validation.
    pub fn schedule(
        &self,
        meetings: &[Meeting],
        teams: &[String],
        ranks: &RankTable,
    ) -> Result<Schedule, ScheduleError> {
        // Fixed attempt order: ascending rank, resolved once up front.
        let mut order: Vec<(usize, &Meeting)> = Vec::with_capacity(meetings.len());
        for meeting in meetings {
            match ranks.get(&meeting.name) {
                Some(&rank) => order.push((rank, meeting)),
                None => {
                    return Err(ScheduleError::MissingRank {
                        meeting: meeting.name.clone(),
                    })
                }
            }
        }
        order.sort_unstable_by_key(|&(rank, _)| rank);

        let mut busy: TeamState = teams.iter().map(|t| (t.clone(), 0)).collect();
        let mut to_do: BTreeSet<&str> = meetings.iter().map(|m| m.name.as_str()).collect();
        let mut schedule = Schedule::new();
        let mut timeslot = 0usize;

        info!(
            meeting_count = meetings.len(),
            team_count = teams.len(),
            max_slots = ?self.max_slots,
            "=== SlotScheduler::schedule() ==="
        );

        while !to_do.is_empty() {
            if let Some(limit) = self.max_slots {
                if timeslot >= limit {
                    return Err(ScheduleError::SlotLimitExceeded { limit });
                }
            }

            // Time passes before any new assignment in this slot.
            for counter in busy.values_mut() {
                *counter = counter.saturating_sub(1);
            }

            let mut slot = Timeslot::new();
            for &(_, meeting) in &order {
                if !to_do.contains(meeting.name.as_str()) {
                    continue;
                }
                if !Self::teams_available(meeting, &busy)? {
                    debug!(meeting = %meeting.name, slot = timeslot, "teams busy, retrying next slot");
                    continue;
                }
                if !Self::prereqs_done(meeting, &to_do) {
                    debug!(meeting = %meeting.name, slot = timeslot, "dependencies pending");
                    continue;
                }

                Self::commit(meeting, &mut slot, &mut busy);
                to_do.remove(meeting.name.as_str());
                info!(
                    meeting = %meeting.name,
                    slot = timeslot,
                    duration = meeting.duration,
                    teams = ?meeting.required_teams,
                    "✓ scheduled"
                );
            }

            // Zero commits with every counter idle: nothing can change in any
            // later slot, so looping on would never terminate.
            if slot.is_empty() && busy.values().all(|&b| b == 0) {
                let remaining: Vec<String> = to_do.iter().map(|n| n.to_string()).collect();
                return Err(ScheduleError::Stalled {
                    slot: timeslot,
                    remaining,
                });
            }

            schedule.push(slot);
            timeslot += 1;
        }

        info!(
            slot_count = schedule.len(),
            total_meetings = schedule.iter().map(Vec::len).sum::<usize>(),
            "=== Scheduling complete ==="
        );

        Ok(schedule)
    }

    // ── Placement checks ──────────────────────────────────────────────────────

    /// Availability: every required team currently has a zero busy counter.
    fn teams_available(meeting: &Meeting, busy: &TeamState) -> Result<bool, ScheduleError> {
        for team in &meeting.required_teams {
            match busy.get(team) {
                Some(&0) => {}
                Some(_) => return Ok(false),
                None => {
                    return Err(ScheduleError::UnknownTeam {
                        meeting: meeting.name.clone(),
                        team: team.clone(),
                    })
                }
            }
        }
        Ok(true)
    }

    /// Readiness: no dependency name is still in the to-do set.
    fn prereqs_done(meeting: &Meeting, to_do: &BTreeSet<&str>) -> bool {
        meeting
            .dependencies
            .iter()
            .all(|dependency| !to_do.contains(dependency.as_str()))
    }

    /// Commits `meeting` to the current slot and marks its teams busy for
    /// the meeting's duration.
    fn commit(meeting: &Meeting, slot: &mut Timeslot, busy: &mut TeamState) {
        slot.push(MeetingStart::from_meeting(meeting));
        for team in &meeting.required_teams {
            if let Some(counter) = busy.get_mut(team) {
                *counter = meeting.duration;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
