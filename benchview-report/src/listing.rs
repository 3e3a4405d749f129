//! Run Status, Pull Request and Release Listings

use crate::links::{commit_url, pull_request_url};
use benchview_core::{PullRequest, ReleaseRef, StatusEntry};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for values that cannot be shown (unfinished runs, bad timestamps)
pub const MISSING: &str = "-";

/// Parse an API timestamp: RFC 3339, or `YYYY-MM-DD HH:MM:SS` taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Format an elapsed time as `1h 02m 03s`, `4m 05s` or `6s`.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// One row of the run status table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLine {
    /// Run identifier
    pub uuid: String,
    /// Git ref under test
    pub git_ref: String,
    /// Trigger source
    pub source: String,
    /// Benchmark kind
    pub kind: String,
    /// Pull request number, for PR-triggered runs
    pub pull_request: Option<u64>,
    /// Go toolchain version
    pub golang_version: String,
    /// Run status
    pub status: String,
    /// Start timestamp as sent by the API
    pub started_at: String,
    /// Run duration, or [`MISSING`] when unfinished or unparsable
    pub duration: String,
}

impl StatusLine {
    /// Build a status row from an API entry
    pub fn from_entry(entry: &StatusEntry) -> Self {
        let duration = run_duration(entry)
            .map(format_elapsed)
            .unwrap_or_else(|| MISSING.to_string());

        Self {
            uuid: entry.uuid.clone(),
            git_ref: entry.git_ref.clone(),
            source: entry.source.clone(),
            kind: entry.type_of.clone(),
            pull_request: entry.pull_nb,
            golang_version: entry.golang_version.clone(),
            status: entry.status.clone(),
            started_at: entry.started_at.clone(),
            duration,
        }
    }
}

fn run_duration(entry: &StatusEntry) -> Option<TimeDelta> {
    let started = parse_timestamp(&entry.started_at)?;
    let finished = parse_timestamp(entry.finished_at.as_deref()?)?;
    let elapsed = finished - started;
    (elapsed >= TimeDelta::zero()).then_some(elapsed)
}

/// One row of the pull request list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestLine {
    /// Pull request number
    pub number: u64,
    /// Title
    pub title: String,
    /// Author login
    pub author: String,
    /// Creation timestamp as sent by the API
    pub created_at: String,
    /// Base commit
    pub base: String,
    /// Head commit
    pub head: String,
    /// Link to the pull request
    pub url: String,
    /// Error reported by the API
    pub error: Option<String>,
}

impl PullRequestLine {
    /// Build a PR row from an API entry
    pub fn from_pr(pr: &PullRequest, repository_url: &str) -> Self {
        Self {
            number: pr.id,
            title: pr.title.clone(),
            author: pr.author.clone(),
            created_at: pr.created_at.clone(),
            base: pr.base.clone(),
            head: pr.head.clone(),
            url: pull_request_url(repository_url, pr.id),
            error: pr.error.clone(),
        }
    }
}

/// One row of the release list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseLine {
    /// Release name
    pub name: String,
    /// Version, e.g. `v17.0.0`
    pub version: String,
    /// Release candidate number, if this is a release candidate
    pub release_candidate: Option<u32>,
    /// Commit the release points at
    pub commit: String,
    /// Link to the commit
    pub commit_url: String,
}

impl ReleaseLine {
    /// Build a release row from an API entry
    pub fn from_ref(release: &ReleaseRef, repository_url: &str) -> Self {
        Self {
            name: release.name.clone(),
            version: release.version.to_string(),
            release_candidate: release
                .is_release_candidate()
                .then_some(release.rc_number),
            commit: release.commit_hash.clone(),
            commit_url: commit_url(repository_url, &release.commit_hash),
        }
    }
}
