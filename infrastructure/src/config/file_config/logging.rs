//! Logging configuration from TOML (`[logging]` section)
//!
//! ```toml
//! [logging]
//! evaluation_log = "~/.local/state/grb-vote/evaluations.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per evaluation; disabled when unset
    pub evaluation_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Evaluation log path with a leading `~` expanded to the home directory
    pub fn evaluation_log_path(&self) -> Option<PathBuf> {
        let path = self.evaluation_log.as_ref()?;
        match path.strip_prefix("~") {
            Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
            Err(_) => Some(path.clone()),
        }
    }
}
