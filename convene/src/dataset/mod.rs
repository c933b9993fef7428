/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Meetings dataset loading and pre-flight validation.
//!
//! The expected YAML structure is:
//! ```yaml
//! teams: [design, platform, qa]
//!
//! meetings:
//!   kickoff:
//!     duration: 2
//!     teams: [platform]
//!   planning:
//!     duration: 3
//!     teams: [design, platform, qa]
//!     depends_on: [kickoff]
//! ```
//!
//! `duration` is required; `teams` and `depends_on` default to empty.
//!
//! The scheduler assumes every name a meeting references resolves, so
//! [`Dataset::validate`] is the gate that makes that assumption safe: it
//! rejects duplicate names, zero durations, and dangling team or dependency
//! references before any scheduling is attempted.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::meeting::Meeting;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
///
/// This is kept private – callers work with [`Dataset`] instead.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    teams: Vec<String>,
    #[serde(default)]
    meetings: HashMap<String, MeetingEntry>,
}

/// Per-meeting fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
struct MeetingEntry {
    /// Number of timeslots the meeting occupies.
    duration: u32,
    #[serde(default)]
    teams: Vec<String>,
    #[serde(default)]
    depends_on: Vec<String>,
}

// ── Validation errors ─────────────────────────────────────────────────────────

/// Input-integrity failure detected by [`Dataset::validate`].
///
/// Every variant names the offending meeting or team so the failure can be
/// diagnosed without re-reading the dataset file. All of these are fatal:
/// no scheduling is attempted on an invalid dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two meetings share a name. Meeting identity is the name, so the
    /// dataset would be ambiguous.
    #[error("duplicate meeting name '{meeting}'")]
    DuplicateMeeting { meeting: String },

    /// The team roster lists the same name twice.
    #[error("duplicate team name '{team}'")]
    DuplicateTeam { team: String },

    /// A meeting with `duration: 0` would occupy no timeslot and never mark
    /// its teams busy.
    #[error("meeting '{meeting}' has duration 0, it must occupy at least one timeslot")]
    ZeroDuration { meeting: String },

    /// A `depends_on` entry names a meeting that does not exist. Left
    /// unchecked, the scheduler would treat the dependency as already
    /// satisfied (the name is never in the to-do set).
    #[error("meeting '{meeting}' depends on unknown meeting '{dependency}'")]
    UnknownDependency { meeting: String, dependency: String },

    /// A `teams` entry names a team that is not in the roster.
    #[error("meeting '{meeting}' requires unknown team '{team}'")]
    UnknownTeam { meeting: String, team: String },
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// An input dataset: the team roster plus the full meeting set.
///
/// Meetings are held sorted by name so that every downstream pass sees them
/// in a deterministic order regardless of YAML map ordering.
#[derive(Debug, Default)]
pub struct Dataset {
    meetings: Vec<Meeting>,
    teams: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from already-constructed parts.
    ///
    /// Used by embedders and tests that do not go through a YAML file. The
    /// parts are sorted but not validated; call [`validate`](Self::validate)
    /// before scheduling.
    pub fn from_parts(mut meetings: Vec<Meeting>, mut teams: Vec<String>) -> Self {
        meetings.sort_by(|a, b| a.name.cmp(&b.name));
        teams.sort();
        Self { meetings, teams }
    }

    /// Parses `path` into a [`Dataset`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid. Referential integrity is not checked here;
    /// that is [`validate`](Self::validate)'s job.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading meetings dataset from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open dataset file: {}", path.display()))?;

        let file: DatasetFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let meetings: Vec<Meeting> = file
            .meetings
            .into_iter()
            .map(|(name, entry)| {
                Meeting::new(name, entry.duration)
                    .with_teams(entry.teams)
                    .with_dependencies(entry.depends_on)
            })
            .collect();

        let dataset = Self::from_parts(meetings, file.teams);

        for meeting in &dataset.meetings {
            debug!(
                "  Meeting: {} | duration: {} | teams: {:?} | depends_on: {:?}",
                meeting.name, meeting.duration, meeting.required_teams, meeting.dependencies,
            );
            if meeting.required_teams.is_empty() {
                warn!(
                    meeting = %meeting.name,
                    "meeting requires no teams, it will be placed as soon as its dependencies clear"
                );
            }
        }

        info!(
            "Loaded {} meeting(s) across {} team(s)",
            dataset.meetings.len(),
            dataset.teams.len(),
        );

        Ok(dataset)
    }

    /// Checks referential integrity of the dataset.
    ///
    /// Returns the first problem found, in a fixed order (duplicates, then
    /// durations, then dangling references), so repeated runs over the same
    /// bad input report the same error.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut meeting_names: BTreeSet<&str> = BTreeSet::new();
        for meeting in &self.meetings {
            if !meeting_names.insert(&meeting.name) {
                return Err(ValidationError::DuplicateMeeting {
                    meeting: meeting.name.clone(),
                });
            }
        }

        let mut team_names: BTreeSet<&str> = BTreeSet::new();
        for team in &self.teams {
            if !team_names.insert(team) {
                return Err(ValidationError::DuplicateTeam { team: team.clone() });
            }
        }

        for meeting in &self.meetings {
            if meeting.duration == 0 {
                return Err(ValidationError::ZeroDuration {
                    meeting: meeting.name.clone(),
                });
            }
        }

        for meeting in &self.meetings {
            for dependency in &meeting.dependencies {
                if !meeting_names.contains(dependency.as_str()) {
                    return Err(ValidationError::UnknownDependency {
                        meeting: meeting.name.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
            for team in &meeting.required_teams {
                if !team_names.contains(team.as_str()) {
                    return Err(ValidationError::UnknownTeam {
                        meeting: meeting.name.clone(),
                        team: team.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The meeting set, sorted by name.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// The team roster, sorted.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    // ── load_from_file ────────────────────────────────────────────────────────

    #[test]
    fn load_example_yaml() {
        // Matches the layout of demo/meetings.yaml
        let yaml = r#"
teams: [design, platform, qa]

meetings:
  kickoff:
    duration: 2
    teams: [platform]
  planning:
    duration: 3
    teams: [design, platform, qa]
    depends_on: [kickoff]
"#;
        let f = yaml_tempfile(yaml);
        let dataset = Dataset::load_from_file(f.path()).unwrap();

        let teams: Vec<&str> = dataset.teams().iter().map(String::as_str).collect();
        assert_eq!(teams, ["design", "platform", "qa"]);
        assert_eq!(dataset.meetings().len(), 2);

        // Meetings come out sorted by name
        let kickoff = &dataset.meetings()[0];
        assert_eq!(kickoff.name, "kickoff");
        assert_eq!(kickoff.duration, 2);
        assert!(kickoff.dependencies.is_empty());

        let planning = &dataset.meetings()[1];
        assert_eq!(planning.name, "planning");
        assert_eq!(planning.required_teams.len(), 3);
        assert!(planning.dependencies.contains("kickoff"));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let yaml = r#"
teams: [solo]
meetings:
  minimal:
    duration: 1
"#;
        let f = yaml_tempfile(yaml);
        let dataset = Dataset::load_from_file(f.path()).unwrap();

        let m = &dataset.meetings()[0];
        assert!(m.required_teams.is_empty());
        assert!(m.dependencies.is_empty());
    }

    #[test]
    fn empty_file_sections_load_as_empty_dataset() {
        let f = yaml_tempfile("teams: []\nmeetings: {}\n");
        let dataset = Dataset::load_from_file(f.path()).unwrap();
        assert!(dataset.meetings().is_empty());
        assert!(dataset.teams().is_empty());
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn missing_file_returns_error() {
        let result = Dataset::load_from_file(Path::new("/nonexistent/path/meetings.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        assert!(Dataset::load_from_file(f.path()).is_err());
    }

    #[test]
    fn missing_duration_returns_error() {
        let yaml = r#"
teams: [a]
meetings:
  no_duration:
    teams: [a]
"#;
        let f = yaml_tempfile(yaml);
        assert!(Dataset::load_from_file(f.path()).is_err());
    }

    // ── validate ──────────────────────────────────────────────────────────────

    fn valid_parts() -> (Vec<Meeting>, Vec<String>) {
        let meetings = vec![
            Meeting::new("kickoff", 2).with_teams(["platform"]),
            Meeting::new("planning", 3)
                .with_teams(["design", "platform"])
                .with_dependencies(["kickoff"]),
        ];
        let teams = vec!["design".to_string(), "platform".to_string()];
        (meetings, teams)
    }

    #[test]
    fn valid_dataset_passes() {
        let (meetings, teams) = valid_parts();
        assert!(Dataset::from_parts(meetings, teams).validate().is_ok());
    }

    #[test]
    fn duplicate_meeting_is_rejected() {
        let (mut meetings, teams) = valid_parts();
        meetings.push(Meeting::new("kickoff", 1));
        let err = Dataset::from_parts(meetings, teams).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateMeeting {
                meeting: "kickoff".into()
            }
        );
    }

    #[test]
    fn duplicate_team_is_rejected() {
        let (meetings, mut teams) = valid_parts();
        teams.push("platform".to_string());
        let err = Dataset::from_parts(meetings, teams).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateTeam {
                team: "platform".into()
            }
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        let (mut meetings, teams) = valid_parts();
        meetings.push(Meeting::new("instant", 0));
        let err = Dataset::from_parts(meetings, teams).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::ZeroDuration {
                meeting: "instant".into()
            }
        );
    }

    #[test]
    fn dangling_dependency_is_rejected() {
        let (mut meetings, teams) = valid_parts();
        meetings.push(Meeting::new("retro", 1).with_dependencies(["ghost"]));
        let err = Dataset::from_parts(meetings, teams).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownDependency {
                meeting: "retro".into(),
                dependency: "ghost".into()
            }
        );
    }

    #[test]
    fn unknown_team_is_rejected() {
        let (mut meetings, teams) = valid_parts();
        meetings.push(Meeting::new("retro", 1).with_teams(["marketing"]));
        let err = Dataset::from_parts(meetings, teams).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownTeam {
                meeting: "retro".into(),
                team: "marketing".into()
            }
        );
    }

    #[test]
    fn validation_error_messages_name_the_offender() {
        let err = ValidationError::UnknownDependency {
            meeting: "retro".into(),
            dependency: "ghost".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("retro"));
        assert!(msg.contains("ghost"));
    }
}
