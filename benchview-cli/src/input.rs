//! Input Loading
//!
//! Result documents are read from a file, or from stdin when the path is `-`.

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Path that selects stdin
pub const STDIN_PATH: &str = "-";

/// Human-readable name of an input, used in report metadata and errors
pub fn source_label(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read and deserialize a JSON document
pub fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let label = source_label(path);
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", label))?
    };

    tracing::debug!(source = %label, bytes = content.len(), "loaded input");
    parse_json(&content).with_context(|| format!("invalid result data in {}", label))
}

fn parse_json<T: DeserializeOwned>(content: &str) -> anyhow::Result<T> {
    Ok(serde_json::from_str(content)?)
}
