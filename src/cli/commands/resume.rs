//! telar resume - Resume from the last checkpoint

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{self, render_report, CliObserver};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ResumeArgs {}

pub fn run(ctx: &AppContext, _args: &ResumeArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let mut session = ctx.open_session(observer)?;

    let completed = session.continue_from_checkpoint()?;
    if let Some(report) = &completed {
        return render_report(report, ctx.language, ctx.robot_mode);
    }

    if ctx.robot_mode {
        return output::emit_json(&json!({
            "blockIndex": session.block_index(),
            "answered": session.answered_count(),
            "nextQuestion": session.next_question().map(|q| &q.id),
        }));
    }

    if let Some(block) = session.current_block() {
        println!(
            "{} block {} of {}: {} ({} answered)",
            "resuming at".green().bold(),
            session.block_index() + 1,
            session.catalog().block_count(),
            block.title,
            session.answered_count()
        );
    }
    if let Some(question) = session.next_question() {
        println!("{} {}", "next:".bold(), question.prompt);
    }
    Ok(())
}
