/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Dependency fan-in ranking pass.
//!
//! Produces a total order over meeting names used as the scheduler's fixed
//! attempt order: lower rank means "try to place earlier in every timeslot".
//! The rank is a heuristic hint, not a correctness-critical output; the
//! scheduler's availability and readiness checks are what enforce the actual
//! constraints.
//!
//! # Algorithm
//!
//! 1. Count fan-in for every meeting (how many other meetings list it as a
//!    dependency). High fan-in meetings unblock the most downstream work.
//! 2. Repeatedly pick the unranked meeting with the highest fan-in (the
//!    "anchor"), walk its transitive dependencies breadth-first, and deposit
//!    every visited node on a stack as it is removed from the unranked pool.
//! 3. Unwind the stack, handing out strictly increasing ranks. Popping
//!    reverses discovery order, so an anchor's transitive dependencies always
//!    rank below (earlier than) the anchor itself, and the deepest dependency
//!    discovered last gets the lowest rank of the batch.
//!
//! Each meeting is visited exactly once across all anchors, so the whole
//! pass is O(V+E). Nodes already visited are skipped on re-discovery; this
//! is also what guarantees termination when cyclic input reaches the ranker
//! (the cycle itself is reported later, by the scheduler's stall check).
//!
//! # Determinism
//!
//! Two tie-breaks are unspecified by the ordering requirements and fixed
//! here so that identical inputs always produce identical tables:
//! * anchor selection prefers the lexicographically smallest name among the
//!   meetings sharing the maximum fan-in;
//! * a meeting's dependencies are expanded in lexicographic order
//!   (`BTreeSet` iteration order).

use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use crate::meeting::Meeting;

/// Complete ranking result: meeting name → rank, 0-indexed, one unique rank
/// per meeting.
pub type RankTable = BTreeMap<String, usize>;

/// Ranks `meetings` by dependency fan-in and depth.
///
/// Pure function of the dependency graph; team availability plays no part.
/// Dependency names that resolve to no meeting are ignored here (the
/// pre-flight [`Dataset::validate`](crate::dataset::Dataset::validate)
/// rejects them before a well-formed run gets this far).
///
/// # Example
/// ```rust
/// use convene::meeting::Meeting;
/// use convene::rank::rank_meetings;
///
/// let meetings = vec![
///     Meeting::new("review", 1).with_dependencies(["draft"]),
///     Meeting::new("draft", 2),
/// ];
/// let ranks = rank_meetings(&meetings);
/// assert!(ranks["draft"] < ranks["review"]);
/// ```
pub fn rank_meetings(meetings: &[Meeting]) -> RankTable {
    let by_name: BTreeMap<&str, &Meeting> =
        meetings.iter().map(|m| (m.name.as_str(), m)).collect();

    // Fan-in counts; doubles as the unranked pool (entries leave as visited).
    let mut pool: BTreeMap<&str, usize> =
        meetings.iter().map(|m| (m.name.as_str(), 0)).collect();
    for meeting in meetings {
        for dependency in &meeting.dependencies {
            if let Some(count) = pool.get_mut(dependency.as_str()) {
                *count += 1;
            }
        }
    }

    let mut ranks = RankTable::new();
    let mut next_rank = 0usize;

    while let Some(anchor) = select_anchor(&pool) {
        // Breadth-first over dependency edges, depositing visited nodes on a
        // stack instead of ranking them immediately.
        let mut queue: VecDeque<&str> = VecDeque::from([anchor]);
        let mut stack: Vec<&str> = Vec::new();

        while let Some(name) = queue.pop_front() {
            if pool.remove(name).is_none() {
                // Already visited, possibly via an earlier anchor or a cycle.
                continue;
            }
            stack.push(name);
            if let Some(meeting) = by_name.get(name) {
                for dependency in &meeting.dependencies {
                    queue.push_back(dependency.as_str());
                }
            }
        }

        debug!(
            anchor = %anchor,
            batch = stack.len(),
            first_rank = next_rank,
            "ranked dependency batch"
        );

        // LIFO unwind: deepest dependencies surface first and take the
        // lowest ranks of the batch; the anchor takes the highest.
        while let Some(name) = stack.pop() {
            ranks.insert(name.to_string(), next_rank);
            next_rank += 1;
        }
    }

    ranks
}

/// The unranked meeting with the maximum fan-in; ties go to the
/// lexicographically smallest name. `None` once the pool is empty.
fn select_anchor<'a>(pool: &BTreeMap<&'a str, usize>) -> Option<&'a str> {
    pool.iter()
        .max_by_key(|&(name, count)| (*count, Reverse(*name)))
        .map(|(name, _)| *name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
