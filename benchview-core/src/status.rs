//! Run Status, Pull Requests and Releases

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One benchmark run as listed on the status page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Run identifier
    pub uuid: String,
    /// Git ref under test
    pub git_ref: String,
    /// What triggered the run (e.g. `cron`, `cron_pr`)
    pub source: String,
    /// Start timestamp as sent by the API
    pub started_at: String,
    /// Finish timestamp; absent or empty while the run is in progress
    #[serde(default)]
    pub finished_at: Option<String>,
    /// Benchmark kind (e.g. `oltp`, `micro`)
    pub type_of: String,
    /// Pull request number for PR-triggered runs
    #[serde(default)]
    pub pull_nb: Option<u64>,
    /// Go toolchain version used by the run
    pub golang_version: String,
    /// Run status (e.g. `finished`, `started`, `failed`)
    pub status: String,
}

/// A pull request tracked by the benchmark service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PullRequest {
    /// Pull request number
    #[serde(rename = "ID")]
    pub id: u64,
    /// Author login
    pub author: String,
    /// Title
    pub title: String,
    /// Creation timestamp as sent by the API
    pub created_at: String,
    /// Base commit
    pub base: String,
    /// Head commit
    pub head: String,
    /// Error reported by the API for this PR
    ///
    /// The API sends arbitrary JSON here; non-string values are kept as
    /// their JSON text.
    #[serde(
        default,
        deserialize_with = "any_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

fn any_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Semantic version of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    /// Major
    pub major: u32,
    /// Minor
    pub minor: u32,
    /// Patch
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A release (or release candidate) reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRef {
    /// Commit the release points at
    #[serde(rename = "CommitHash")]
    pub commit_hash: String,
    /// Release name
    #[serde(rename = "Name")]
    pub name: String,
    /// Release candidate number, 0 for final releases
    #[serde(rename = "RCnumber", default)]
    pub rc_number: u32,
    /// Version
    #[serde(rename = "Version")]
    pub version: Version,
}

impl ReleaseRef {
    /// Whether this ref is a release candidate
    pub fn is_release_candidate(&self) -> bool {
        self.rc_number > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_status_in_progress() {
        let json = r#"{"uuid": "a1", "git_ref": "deadbeef", "source": "cron",
                       "started_at": "2023-05-10T12:00:00Z", "type_of": "oltp",
                       "golang_version": "1.20", "status": "started"}"#;
        let entry: StatusEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.finished_at, None);
        assert_eq!(entry.pull_nb, None);
        assert_eq!(entry.status, "started");
    }

    #[test]
    fn test_deserialize_pull_request() {
        let json = r#"{"ID": 12345, "Author": "dev", "Title": "Speed up planner",
                       "CreatedAt": "2023-05-10T12:00:00Z", "Base": "abc", "Head": "def"}"#;
        let pr: PullRequest = serde_json::from_str(json).unwrap();

        assert_eq!(pr.id, 12345);
        assert_eq!(pr.author, "dev");
        assert!(pr.error.is_none());
    }

    #[test]
    fn test_pull_request_error_accepts_any_json() {
        let json = r#"[
            {"ID": 1, "Author": "a", "Title": "t", "CreatedAt": "", "Base": "b", "Head": "h",
             "error": "no base commit"},
            {"ID": 2, "Author": "a", "Title": "t", "CreatedAt": "", "Base": "b", "Head": "h",
             "error": {"code": 404}},
            {"ID": 3, "Author": "a", "Title": "t", "CreatedAt": "", "Base": "b", "Head": "h",
             "error": null}
        ]"#;
        let prs: Vec<PullRequest> = serde_json::from_str(json).unwrap();

        assert_eq!(prs[0].error.as_deref(), Some("no base commit"));
        assert_eq!(prs[1].error.as_deref(), Some(r#"{"code":404}"#));
        assert_eq!(prs[2].error, None);
    }

    #[test]
    fn test_deserialize_release_ref() {
        let json = r#"{"CommitHash": "abc123", "Name": "v17.0.0-rc1", "RCnumber": 1,
                       "Version": {"Major": 17, "Minor": 0, "Patch": 0}}"#;
        let release: ReleaseRef = serde_json::from_str(json).unwrap();

        assert!(release.is_release_candidate());
        assert_eq!(release.version.to_string(), "v17.0.0");
    }

    #[test]
    fn test_version_ordering() {
        let a = Version { major: 16, minor: 0, patch: 3 };
        let b = Version { major: 17, minor: 0, patch: 0 };
        assert!(a < b);
    }
}
