//! telar blocks - List question blocks and per-block progress

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::catalog::is_visible;
use crate::cli::output::{self, CliObserver};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct BlocksArgs {
    /// Also list each block's questions
    #[arg(long)]
    pub questions: bool,
}

pub fn run(ctx: &AppContext, args: &BlocksArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let session = ctx.open_session(observer)?;
    let profile = session.profile().clone();

    if ctx.robot_mode {
        let blocks: Vec<_> = session
            .catalog()
            .blocks()
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let visible: Vec<_> = block
                    .questions
                    .iter()
                    .filter(|q| is_visible(q, &profile))
                    .collect();
                let answered = visible.iter().filter(|q| session.is_answered(&q.id)).count();
                let mut entry = json!({
                    "index": index,
                    "id": block.id,
                    "title": block.title,
                    "answered": answered,
                    "visible": visible.len(),
                    "current": index == session.block_index(),
                });
                if args.questions {
                    entry["questions"] = serde_json::to_value(&block.questions).unwrap_or_default();
                }
                entry
            })
            .collect();
        return output::emit_json(&blocks);
    }

    for (index, block) in session.catalog().blocks().iter().enumerate() {
        let current = index == session.block_index() && !session.is_completed();
        let marker = if current { ">" } else { " " };
        println!(
            "{marker} {} {}",
            format!("{}.", index + 1).bold(),
            block.title.bold()
        );
        println!("    {}", block.subtitle.dimmed());
        if args.questions {
            for question in &block.questions {
                let visible = is_visible(question, &profile);
                let status = if session.is_answered(&question.id) {
                    "answered".green()
                } else if visible {
                    "pending".yellow()
                } else {
                    "hidden".dimmed()
                };
                println!("      [{status}] {} - {}", question.id, question.prompt);
            }
        }
    }
    Ok(())
}
