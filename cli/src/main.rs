//! CLI entrypoint for grb-vote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::Parser;
use grb_application::{
    EvaluationLogger, GetVotingStatusUseCase, ListDiscussionsUseCase, NoEvaluationLogger,
    VotingConfig,
};
use grb_domain::{Clock, FixedClock, QuorumThreshold, ReviewId};
use grb_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, JsonSnapshotRepository, JsonlEvaluationLogger,
    SystemClock,
};
use grb_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!(
            "{}",
            ConfigLoader::describe_config_sources(cli.config.as_ref())
        );
        return Ok(());
    }

    let config = load_config(cli.no_config, cli.config.as_ref())?;
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let voting = voting_config(&config, cli.quorum)?;
    let format = cli.output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    });

    // === Dependency Injection ===
    let logger: Arc<dyn EvaluationLogger> = match config
        .logging
        .evaluation_log_path()
        .and_then(JsonlEvaluationLogger::new)
    {
        Some(logger) => {
            info!("Evaluation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoEvaluationLogger),
    };

    let Some(command) = cli.command else {
        bail!("No command given. Run `grb-vote --help` for usage.");
    };

    let output = match command {
        Command::Status {
            review_id,
            snapshot,
            at,
        } => {
            let repository = open_snapshot(&snapshot).await?;
            let clock: Arc<dyn Clock> = match at {
                Some(at) => Arc::new(FixedClock::new(parse_instant(&at)?)),
                None => Arc::new(SystemClock),
            };

            let use_case =
                GetVotingStatusUseCase::new(repository, clock, voting).with_logger(logger);
            let result = use_case.execute(&ReviewId::new(review_id)).await?;

            match format {
                OutputFormat::Text => ConsoleFormatter::format_status(&result),
                OutputFormat::Json => ConsoleFormatter::format_status_json(&result),
            }
        }
        Command::Discussions {
            review_id,
            snapshot,
        } => {
            let repository = open_snapshot(&snapshot).await?;
            let use_case = ListDiscussionsUseCase::new(repository).with_logger(logger);
            let review_id = ReviewId::new(review_id);
            let discussions = use_case.execute(&review_id).await?;

            match format {
                OutputFormat::Text => {
                    ConsoleFormatter::format_discussions(review_id.as_str(), &discussions)
                }
                OutputFormat::Json => ConsoleFormatter::format_discussions_json(&discussions),
            }
        }
    };

    println!("{}", output);

    Ok(())
}

/// Load configuration; `--no-config` skips discovery but still honors `--config`
fn load_config(no_config: bool, config_path: Option<&PathBuf>) -> Result<FileConfig> {
    let loaded = match (no_config, config_path) {
        (true, None) => return Ok(ConfigLoader::load_defaults()),
        (true, Some(path)) => ConfigLoader::load_file(path),
        (false, path) => ConfigLoader::load(path),
    };
    loaded.map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Report every config issue, failing if any is an error
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Configuration is invalid; fix the errors above");
    }
    Ok(())
}

/// Merge the `--quorum` flag over the file configuration
fn voting_config(config: &FileConfig, quorum: Option<usize>) -> Result<VotingConfig> {
    let (voting, _) = config.voting.to_voting_config();
    match quorum {
        Some(n) => Ok(voting.with_quorum_threshold(
            QuorumThreshold::new(n).context("Invalid --quorum value")?,
        )),
        None => Ok(voting),
    }
}

async fn open_snapshot(path: &Path) -> Result<Arc<JsonSnapshotRepository>> {
    let repository = JsonSnapshotRepository::open(path).await?;
    Ok(Arc::new(repository))
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let instant = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid --at timestamp '{}', expected RFC 3339", value))?;
    Ok(instant.with_timezone(&Utc))
}
