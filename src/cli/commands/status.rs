//! telar status - Show assessment progress and score preview

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::catalog::{is_visible, TOTAL_QUESTIONS};
use crate::cli::output::{self, CliObserver};
use crate::error::Result;
use crate::scoring::MaturityBand;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Include the live per-category score preview
    #[arg(long)]
    pub scores: bool,
}

pub fn run(ctx: &AppContext, args: &StatusArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let session = ctx.open_session(observer)?;

    let total = session.catalog().question_count();
    let answered = session.answered_count();
    let percent = if total == 0 { 0 } else { answered * 100 / total };
    let preview = session.score_preview();
    let band = MaturityBand::for_average(preview.average());

    if ctx.robot_mode {
        let mut payload = json!({
            "user": ctx.user_id,
            "mode": ctx.mode,
            "answered": answered,
            "total": total,
            "percent": percent,
            "blockIndex": session.block_index(),
            "checkpointPending": session.checkpoint_pending(),
            "completed": session.is_completed(),
            "businessType": session.business_type(),
            "nextQuestion": session.next_question().map(|q| &q.id),
        });
        if args.scores {
            payload["scorePreview"] = serde_json::to_value(&preview)?;
            payload["band"] = serde_json::to_value(band)?;
        }
        return output::emit_json(&payload);
    }

    println!("{} {}", "User:".bold(), ctx.user_id);
    println!(
        "{} {answered}/{total} questions ({percent}%)",
        "Progress:".bold()
    );
    if session.is_completed() {
        println!("{} {}", "Status:".bold(), "completed".green());
    } else if let Some(block) = session.current_block() {
        println!(
            "{} block {} of {} ({})",
            "Status:".bold(),
            session.block_index() + 1,
            session.catalog().block_count(),
            block.title
        );
        if let Some(question) = session.next_question() {
            println!("{} {}", "Next:".bold(), question.prompt);
        }
        if session.checkpoint_pending() {
            println!(
                "{} checkpoint reached, run `telar resume` to continue",
                "Paused:".bold().yellow()
            );
        }
    }
    if let Some(business_type) = session.business_type() {
        println!(
            "{} {}",
            "Business type:".bold(),
            business_type.label(ctx.language)
        );
    }

    if args.scores {
        println!();
        println!(
            "{} {} ({:.1} avg, preview over {TOTAL_QUESTIONS} questions)",
            "Band:".bold(),
            band.name(ctx.language),
            preview.average()
        );
    }

    // Per-block progress line, visible questions only.
    let profile = session.profile().clone();
    for (index, block) in session.catalog().blocks().iter().enumerate() {
        let visible: Vec<_> = block
            .questions
            .iter()
            .filter(|q| is_visible(q, &profile))
            .collect();
        let done = visible.iter().filter(|q| session.is_answered(&q.id)).count();
        let marker = if index == session.block_index() && !session.is_completed() {
            ">".cyan().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("{marker} [{done}/{}] {}", visible.len(), block.title);
    }
    Ok(())
}
