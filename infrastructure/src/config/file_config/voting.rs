//! Voting configuration from TOML (`[voting]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [voting]
//! quorum_threshold = 5   # eligible votes required before a review can conclude
//! ```

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use grb_application::VotingConfig;
use grb_domain::QuorumThreshold;
use serde::{Deserialize, Serialize};

/// Raw voting configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVotingConfig {
    /// Minimum number of eligible votes for quorum
    pub quorum_threshold: usize,
}

impl Default for FileVotingConfig {
    fn default() -> Self {
        Self {
            quorum_threshold: QuorumThreshold::DEFAULT,
        }
    }
}

impl FileVotingConfig {
    /// Convert into the application config.
    ///
    /// An out-of-range threshold falls back to the default and is reported
    /// as a warning.
    pub fn to_voting_config(&self) -> (VotingConfig, Vec<ConfigIssue>) {
        match QuorumThreshold::new(self.quorum_threshold) {
            Ok(threshold) => (
                VotingConfig::default().with_quorum_threshold(threshold),
                vec![],
            ),
            Err(e) => (
                VotingConfig::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::OutOfRange {
                        field: "voting.quorum_threshold".to_string(),
                        value: self.quorum_threshold.to_string(),
                    },
                    format!(
                        "voting.quorum_threshold: {}, falling back to {}",
                        e,
                        QuorumThreshold::DEFAULT
                    ),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voting_config_default() {
        let config = FileVotingConfig::default();
        assert_eq!(config.quorum_threshold, 5);
        let (voting, issues) = config.to_voting_config();
        assert!(issues.is_empty());
        assert_eq!(voting.quorum_threshold.get(), 5);
    }

    #[test]
    fn test_voting_config_deserialize() {
        let toml_str = r#"
[voting]
quorum_threshold = 3
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.voting.quorum_threshold, 3);
        assert_eq!(config.voting.to_voting_config().0.quorum_threshold.get(), 3);
    }

    #[test]
    fn test_zero_threshold_falls_back_with_warning() {
        let config = FileVotingConfig {
            quorum_threshold: 0,
        };
        let (voting, issues) = config.to_voting_config();
        assert_eq!(voting.quorum_threshold.get(), 5);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::OutOfRange { ref field, .. } if field == "voting.quorum_threshold"
        ));
    }
}
