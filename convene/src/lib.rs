/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Convene – dependency-aware meeting scheduler.
//!
//! Assigns a set of interdependent meetings to discrete timeslots: a team can
//! attend at most one meeting at a time, and a meeting cannot start while any
//! meeting it depends on is still unscheduled.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── meeting.rs      – domain model: Meeting, MeetingStart, Timeslot, Schedule
//! ├── dataset/        – YAML dataset loading + pre-flight validation
//! ├── rank/           – dependency fan-in ranking pass
//! └── scheduler/      – greedy timeslot assignment
//! ```

pub mod dataset;
pub mod meeting;
pub mod rank;
pub mod scheduler;
