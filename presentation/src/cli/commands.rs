//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI arguments for grb-vote
#[derive(Parser, Debug)]
#[command(name = "grb-vote")]
#[command(author, version, about = "Asynchronous voting status for GRB review requests")]
#[command(long_about = r#"
grb-vote evaluates the asynchronous review of a GRB intake request.

A review runs inside a scheduled window. Voting members cast either
NO_OBJECTION or OBJECTION; non-voting members and alternates never count.
Once the window closes and quorum is met, the objection tally decides
the outcome: none approves, one is inconclusive, two or more reject.

Configuration files are loaded from (in priority order):
1. GRB_* environment variables
2. --config <path>     Explicit config file
3. ./grb.toml          Project-level config
4. ~/.config/grb-vote/config.toml   Global config

Example:
  grb-vote status intake-42 --snapshot reviews.json
  grb-vote status intake-42 --snapshot reviews.json --at 2024-11-20T09:00:00Z
  grb-vote -o json discussions intake-42 --snapshot reviews.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Override the quorum threshold
    #[arg(long, value_name = "N", global = true)]
    pub quorum: Option<usize>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip config file discovery (an explicit --config file is still read)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute the voting status of a review
    Status {
        /// Review identifier
        review_id: String,

        /// JSON snapshot holding the review records
        #[arg(short, long, value_name = "PATH")]
        snapshot: PathBuf,

        /// Evaluate at this instant instead of now (RFC 3339)
        #[arg(long, value_name = "RFC3339")]
        at: Option<String>,
    },

    /// List a review's discussion threads, newest first
    Discussions {
        /// Review identifier
        review_id: String,

        /// JSON snapshot holding the review records
        #[arg(short, long, value_name = "PATH")]
        snapshot: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_status_with_globals() {
        let cli = Cli::try_parse_from([
            "grb-vote",
            "-vv",
            "--quorum",
            "3",
            "status",
            "intake-42",
            "--snapshot",
            "reviews.json",
            "--at",
            "2024-11-20T09:00:00Z",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.quorum, Some(3));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(
            cli.command,
            Some(Command::Status {
                review_id: "intake-42".to_string(),
                snapshot: PathBuf::from("reviews.json"),
                at: Some("2024-11-20T09:00:00Z".to_string()),
            })
        );
    }

    #[test]
    fn test_discussions_requires_snapshot() {
        assert!(Cli::try_parse_from(["grb-vote", "discussions", "intake-42"]).is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["grb-vote", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }
}
