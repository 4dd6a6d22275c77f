//! telar next - Advance to the next block

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{self, render_report, CliObserver};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct NextArgs {}

pub fn run(ctx: &AppContext, _args: &NextArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let mut session = ctx.open_session(observer)?;

    let before = session.block_index();
    let completed = session.go_to_next_block()?;

    if let Some(report) = &completed {
        return render_report(report, ctx.language, ctx.robot_mode);
    }

    if ctx.robot_mode {
        return output::emit_json(&json!({
            "advanced": session.block_index() != before,
            "blockIndex": session.block_index(),
        }));
    }

    if session.block_index() == before {
        println!(
            "{} block {} still has unanswered questions",
            "staying:".yellow().bold(),
            before + 1
        );
        if let Some(question) = session.next_question() {
            println!("{} {}", "next:".bold(), question.prompt);
        }
    } else if let Some(block) = session.current_block() {
        println!(
            "{} block {} of {}: {}",
            "now on".green().bold(),
            session.block_index() + 1,
            session.catalog().block_count(),
            block.title
        );
        println!("  {}", block.agent_message.dimmed());
    }
    Ok(())
}
