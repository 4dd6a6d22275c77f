//! telar back - Step back one block for review

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{self, CliObserver};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct BackArgs {}

pub fn run(ctx: &AppContext, _args: &BackArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let mut session = ctx.open_session(observer)?;

    session.go_to_previous_block()?;

    if ctx.robot_mode {
        return output::emit_json(&json!({ "blockIndex": session.block_index() }));
    }

    if let Some(block) = session.current_block() {
        println!(
            "{} block {} of {}: {}",
            "now on".green().bold(),
            session.block_index() + 1,
            session.catalog().block_count(),
            block.title
        );
    }
    Ok(())
}
