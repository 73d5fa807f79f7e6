//! Configuration file loading for grb-vote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GRB_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./grb.toml` or `./.grb.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/grb-vote/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileVotingConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
