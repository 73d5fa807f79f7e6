//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

mod logging;
mod output;
mod voting;

pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use voting::FileVotingConfig;

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Voting evaluation settings
    pub voting: FileVotingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Structured evaluation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.voting.to_voting_config().1);

        if let Some(path) = &self.logging.evaluation_log
            && path.as_os_str().is_empty()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidPath {
                    field: "logging.evaluation_log".to_string(),
                    value: String::new(),
                },
                "logging.evaluation_log is empty, evaluation logging disabled",
            ));
        }

        if let Some(path) = self.logging.evaluation_log_path()
            && path.is_dir()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidPath {
                    field: "logging.evaluation_log".to_string(),
                    value: path.display().to_string(),
                },
                format!(
                    "logging.evaluation_log points to a directory: {}",
                    path.display()
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[voting]
quorum_threshold = 7

[output]
format = "text"
color = false

[logging]
evaluation_log = "/tmp/grb.jsonl"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.voting.quorum_threshold, 7);
        assert_eq!(config.output.format, Some(FileOutputFormat::Text));
        assert!(!config.output.color);
        assert!(config.logging.evaluation_log.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.voting.quorum_threshold, 5);
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let toml_str = r#"
[voting]
quorum_threshold = 0

[logging]
evaluation_log = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));
    }

    #[test]
    fn test_validate_rejects_directory_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            logging: FileLoggingConfig {
                evaluation_log: Some(dir.path().to_path_buf()),
            },
            ..FileConfig::default()
        };

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidPath { ref field, .. } if field == "logging.evaluation_log"
        ));
    }

    #[test]
    fn test_validate_accepts_missing_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            logging: FileLoggingConfig {
                evaluation_log: Some(dir.path().join("evaluations.jsonl")),
            },
            ..FileConfig::default()
        };
        assert!(config.validate().is_empty());
    }
}
