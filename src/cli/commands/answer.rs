//! telar answer - Record an answer to a question

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{self, render_report, CliObserver};
use crate::error::Result;
use crate::profile::AnswerValue;

#[derive(Args, Debug)]
pub struct AnswerArgs {
    /// Question id (see `telar blocks --questions`)
    pub question_id: String,

    /// Answer value. Multiple values form a multiple-choice answer.
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &AnswerArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let mut session = ctx.open_session(observer)?;

    let value = if args.values.len() == 1 {
        AnswerValue::from(args.values[0].clone())
    } else {
        AnswerValue::from(args.values.clone())
    };

    let outcome = session.record_answer(&args.question_id, value)?;
    // One-shot process: the debounce window never elapses here.
    session.flush_checkpoint()?;
    session.poll_events()?;

    if ctx.robot_mode {
        output::emit_json(&json!({
            "questionId": args.question_id,
            "newlyAnswered": outcome.newly_answered,
            "answered": outcome.answered,
            "blockIndex": session.block_index(),
            "completed": outcome.completed.is_some(),
        }))?;
    } else {
        let verb = if outcome.newly_answered {
            "recorded"
        } else {
            "updated"
        };
        println!(
            "{} {} ({}/{} answered)",
            format!("{verb}:").green().bold(),
            args.question_id,
            outcome.answered,
            session.catalog().question_count()
        );
        if outcome.completed.is_none() {
            if let Some(question) = session.next_question() {
                println!("{} {}", "next:".bold(), question.prompt);
            }
        }
    }

    if let Some(report) = &outcome.completed {
        render_report(report, ctx.language, ctx.robot_mode)?;
    }
    Ok(())
}
