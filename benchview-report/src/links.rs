//! Source control links

/// URL of a commit in the repository (`{repo}/commit/{git_ref}`)
pub fn commit_url(repository_url: &str, git_ref: &str) -> String {
    format!("{}/commit/{}", repository_url.trim_end_matches('/'), git_ref)
}

/// URL of a pull request in the repository (`{repo}/pull/{number}`)
pub fn pull_request_url(repository_url: &str, number: u64) -> String {
    format!("{}/pull/{}", repository_url.trim_end_matches('/'), number)
}

/// Shorten a commit hash for display; refs that are not hex hashes are kept.
pub fn short_ref(git_ref: &str) -> &str {
    const SHORT_LEN: usize = 7;
    if git_ref.len() > SHORT_LEN && git_ref.chars().all(|c| c.is_ascii_hexdigit()) {
        &git_ref[..SHORT_LEN]
    } else {
        git_ref
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_url() {
        assert_eq!(
            commit_url("https://github.com/vitessio/vitess/", "abc123"),
            "https://github.com/vitessio/vitess/commit/abc123"
        );
    }

    #[test]
    fn test_pull_request_url() {
        assert_eq!(
            pull_request_url("https://github.com/vitessio/vitess", 42),
            "https://github.com/vitessio/vitess/pull/42"
        );
    }

    #[test]
    fn test_short_ref() {
        assert_eq!(short_ref("0123456789abcdef"), "0123456");
        assert_eq!(short_ref("release-17.0"), "release-17.0");
        assert_eq!(short_ref("abc"), "abc");
    }
}
