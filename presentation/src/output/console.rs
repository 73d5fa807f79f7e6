//! Console output formatter for voting status and discussions

use colored::{ColoredString, Colorize};
use grb_application::VotingStatusOutput;
use grb_domain::{DecisionRule, Discussion, DiscussionPost, VotingStatus};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Formats use case results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a status evaluation
    pub fn format_status(result: &VotingStatusOutput) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("GRB Voting Status"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Review:".cyan().bold(),
            result.review_id
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            Self::status_label(result.status)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Reason:".cyan().bold(),
            Self::describe_rule(result.rule)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Evaluated:".cyan().bold(),
            result.evaluated_at.format(TIME_FORMAT)
        ));

        output.push_str(&Self::section_header("Votes"));
        if result.tally.eligible() > 0 {
            output.push_str(&format!("  {}\n", result.tally.summary()));
        }
        output.push_str(&format!(
            "  No objection: {}\n",
            result.tally.no_objection.to_string().green()
        ));
        output.push_str(&format!(
            "  Objection:    {}\n",
            result.tally.objection.to_string().red()
        ));
        output.push_str(&format!("  Not voted:    {}\n", result.tally.not_voted));

        let quorum = if result.quorum_reached {
            format!(
                "met ({} of {})",
                result.tally.voted(),
                result.quorum_threshold
            )
            .green()
        } else {
            format!(
                "not met ({} of {}, {} remaining)",
                result.tally.voted(),
                result.quorum_threshold,
                result.votes_remaining()
            )
            .yellow()
        };
        output.push_str(&format!("  Quorum:       {}\n", quorum));

        output.push_str(&Self::footer());
        output
    }

    /// Format discussion threads, newest first
    pub fn format_discussions(review_id: &str, discussions: &[Discussion]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} ({})\n",
            "Discussions for".cyan().bold(),
            review_id.bold(),
            Self::plural(discussions.len(), "thread")
        ));

        if discussions.is_empty() {
            output.push_str(&format!("\n{}\n", "No discussions yet.".dimmed()));
            return output;
        }

        for discussion in discussions {
            output.push('\n');
            output.push_str(&format!(
                "{}\n",
                format!("── {} ──", Self::byline(&discussion.initial_post))
                    .yellow()
                    .bold()
            ));
            if !discussion.initial_post.content.is_empty() {
                output.push_str(&Self::indent(&discussion.initial_post.content, "  "));
                output.push('\n');
            }

            for reply in &discussion.replies {
                output.push_str(&format!("    {} {}\n", "↳".dimmed(), Self::byline(reply)));
                if !reply.content.is_empty() {
                    output.push_str(&Self::indent(&reply.content, "      "));
                    output.push('\n');
                }
            }
        }

        output
    }

    /// Format a status evaluation as JSON
    pub fn format_status_json(result: &VotingStatusOutput) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format discussion threads as a JSON array
    pub fn format_discussions_json(discussions: &[Discussion]) -> String {
        serde_json::to_string_pretty(discussions).unwrap_or_else(|_| "[]".to_string())
    }

    /// Human-readable explanation of the rule that decided a status
    pub fn describe_rule(rule: DecisionRule) -> &'static str {
        match rule {
            DecisionRule::MissingData => "scheduling or reviewer data is missing",
            DecisionRule::ManualEndWithoutQuorum => "ended manually before quorum",
            DecisionRule::WithinWindow => "voting window is open",
            DecisionRule::AwaitingQuorum => "window closed, waiting for quorum",
            DecisionRule::ObjectionTally => "decided by objection count",
            DecisionRule::Fallback => "voting has not opened",
        }
    }

    fn status_label(status: VotingStatus) -> ColoredString {
        let label = status.as_str();
        match status {
            VotingStatus::Approved => label.green().bold(),
            VotingStatus::NotApproved => label.red().bold(),
            VotingStatus::Inconclusive => label.yellow().bold(),
            VotingStatus::InProgress => label.cyan(),
            VotingStatus::NotStarted => label.dimmed(),
        }
    }

    fn byline(post: &DiscussionPost) -> String {
        let author = post.author.as_deref().unwrap_or("anonymous");
        format!(
            "{} · {} · {}",
            post.id,
            author,
            post.created_at.format(TIME_FORMAT)
        )
    }

    fn plural(count: usize, noun: &str) -> String {
        if count == 1 {
            format!("1 {}", noun)
        } else {
            format!("{} {}s", count, noun)
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use grb_domain::{QuorumThreshold, ReviewId, VoteTally};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 18, hour, 0, 0).unwrap()
    }

    fn status_output(status: VotingStatus, quorum_reached: bool) -> VotingStatusOutput {
        VotingStatusOutput {
            review_id: ReviewId::new("intake-42"),
            status,
            rule: DecisionRule::ObjectionTally,
            tally: VoteTally {
                no_objection: 3,
                objection: 1,
                not_voted: 1,
            },
            quorum_reached,
            quorum_threshold: QuorumThreshold::default(),
            evaluated_at: at(12),
        }
    }

    #[test]
    fn test_format_status_text() {
        colored::control::set_override(false);
        let output = status_output(VotingStatus::Inconclusive, false);
        let text = ConsoleFormatter::format_status(&output);

        assert!(text.contains("GRB Voting Status"));
        assert!(text.contains("Review: intake-42"));
        assert!(text.contains("Status: INCONCLUSIVE"));
        assert!(text.contains("decided by objection count"));
        assert!(text.contains("Evaluated: 2024-11-18 12:00 UTC"));
        assert!(text.contains("not met (4 of 5 votes, 1 remaining)"));
    }

    #[test]
    fn test_format_status_json() {
        let output = status_output(VotingStatus::Approved, true);
        let json = ConsoleFormatter::format_status_json(&output);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "APPROVED");
        assert_eq!(value["rule"], "objection_tally");
        assert_eq!(value["tally"]["noObjection"], 3);
        assert_eq!(value["quorumThreshold"], 5);
    }

    #[test]
    fn test_format_discussions_text() {
        colored::control::set_override(false);
        let discussions = vec![Discussion {
            initial_post: DiscussionPost::initial("p1", at(9))
                .with_author("Ada")
                .with_content("Is the cost estimate final?"),
            replies: vec![DiscussionPost::reply("p2", "p1", at(10)).with_content("Not yet.")],
        }];

        let text = ConsoleFormatter::format_discussions("intake-42", &discussions);
        assert!(text.contains("(1 thread)"));
        assert!(text.contains("p1 · Ada · 2024-11-18 09:00 UTC"));
        assert!(text.contains("  Is the cost estimate final?"));
        assert!(text.contains("p2 · anonymous"));
        assert!(text.contains("      Not yet."));
    }

    #[test]
    fn test_format_empty_discussions() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_discussions("intake-42", &[]);
        assert!(text.contains("(0 threads)"));
        assert!(text.contains("No discussions yet."));
        assert_eq!(ConsoleFormatter::format_discussions_json(&[]), "[]");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
