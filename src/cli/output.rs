//! Output helpers shared by the command handlers.

use colored::Colorize;
use serde::Serialize;
use serde_json::json;

use crate::catalog::Language;
use crate::error::{Result, TelarError};
use crate::session::{CheckpointInfo, CompletionReport, Notice, SessionObserver};

/// Pretty-print a value as JSON to stdout.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(TelarError::Json)?;
    println!("{rendered}");
    Ok(())
}

/// Observer wired into every CLI session. Human mode renders notices and
/// checkpoints as colored lines; robot mode emits one JSON object per event
/// so scripted callers can stream them.
pub struct CliObserver {
    robot: bool,
    quiet: bool,
}

impl CliObserver {
    #[must_use]
    pub fn new(robot: bool, quiet: bool) -> Self {
        Self { robot, quiet }
    }
}

impl SessionObserver for CliObserver {
    fn on_notice(&mut self, notice: &Notice) {
        if self.quiet {
            return;
        }
        if self.robot {
            if let Ok(line) = serde_json::to_string(&json!({ "event": "notice", "notice": notice }))
            {
                println!("{line}");
            }
            return;
        }
        let text = match notice {
            Notice::CatalogMigrated {
                removed,
                remaining_questions,
            } => format!(
                "{} answer(s) referenced retired questions and were removed ({remaining_questions} questions remain)",
                removed.len()
            ),
            Notice::LegacyImported => "progress imported from an older version".to_string(),
            Notice::RemoteUnavailable => {
                "remote progress unavailable, continuing with local data".to_string()
            }
            Notice::RemoteSyncFailed { failed_flushes } => {
                format!("{failed_flushes} remote sync(s) failed, progress is safe locally")
            }
            Notice::ExtractionFailed { reason } => {
                format!("could not extract business info: {reason}")
            }
        };
        eprintln!("{} {text}", "warning:".yellow().bold());
    }

    fn on_checkpoint(&mut self, checkpoint: &CheckpointInfo) {
        if self.quiet {
            return;
        }
        if self.robot {
            if let Ok(line) =
                serde_json::to_string(&json!({ "event": "checkpoint", "checkpoint": checkpoint }))
            {
                println!("{line}");
            }
            return;
        }
        println!(
            "{} {}/{} questions answered ({}%)",
            "checkpoint:".cyan().bold(),
            checkpoint.answered,
            checkpoint.total,
            checkpoint.percent
        );
    }
}

/// Render a completion report. Robot mode prints the raw report JSON.
pub fn render_report(report: &CompletionReport, language: Language, robot: bool) -> Result<()> {
    if robot {
        return emit_json(report);
    }

    println!();
    println!(
        "{} {} (level {}/4)",
        "Maturity:".bold(),
        report.band.name(language).green().bold(),
        report.band.level()
    );
    println!("  {}", report.band.description(language).dimmed());

    if report.placeholder_scores {
        println!();
        println!(
            "  {}",
            "Fast onboarding complete. Take the full assessment for real scores.".dimmed()
        );
        return Ok(());
    }

    println!();
    println!("{}", "Scores".bold());
    print_score("idea validation", report.scores.idea_validation);
    print_score("user experience", report.scores.user_experience);
    print_score("market fit", report.scores.market_fit);
    print_score("monetization", report.scores.monetization);
    print_score("average", report.scores.average());

    if !report.tasks.is_empty() {
        println!();
        println!("{}", "Recommended next steps".bold());
        for task in &report.tasks {
            println!("  {} {}", "-".cyan(), task.title);
            println!("    {} ({})", task.description.dimmed(), task.estimated_time);
        }
    }
    Ok(())
}

fn print_score(label: &str, value: f64) {
    let colored_value = if value >= 80.0 {
        format!("{value:>5.1}").green()
    } else if value >= 40.0 {
        format!("{value:>5.1}").yellow()
    } else {
        format!("{value:>5.1}").red()
    };
    println!("  {colored_value}  {label}");
}
