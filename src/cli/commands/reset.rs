//! telar reset - Delete stored progress for the user

use clap::Args;
use colored::Colorize;
use serde_json::json;
use tracing::warn;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::{Result, TelarError};

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm deletion. Without this the command only reports what it
    /// would delete.
    #[arg(long)]
    pub force: bool,

    /// Also delete the remote copy
    #[arg(long)]
    pub remote: bool,
}

pub fn run(ctx: &AppContext, args: &ResetArgs) -> Result<()> {
    let local = ctx.local_progress()?;
    let has_local = local.has_any(&ctx.user_id)?;

    if !args.force {
        if ctx.robot_mode {
            return output::emit_json(&json!({
                "deleted": false,
                "hasLocal": has_local,
                "hint": "re-run with --force to delete",
            }));
        }
        if has_local {
            println!(
                "would delete local progress for {}; re-run with {} to confirm",
                ctx.user_id.bold(),
                "--force".bold()
            );
        } else {
            println!("no stored progress for {}", ctx.user_id.bold());
        }
        return Ok(());
    }

    local.clear(&ctx.user_id)?;

    let mut remote_deleted = false;
    if args.remote {
        let tier = ctx
            .remote_tier()?
            .ok_or_else(|| TelarError::Config("remote tier is not enabled".to_string()))?;
        match tier.remove(&ctx.user_id) {
            Ok(()) => remote_deleted = true,
            Err(e) => {
                // Local progress is already gone; report rather than fail.
                warn!(user = %ctx.user_id, error = %e, "remote delete failed");
                if !ctx.robot_mode {
                    eprintln!("{} remote delete failed: {e}", "warning:".yellow().bold());
                }
            }
        }
    }

    if ctx.robot_mode {
        return output::emit_json(&json!({
            "deleted": true,
            "hadLocal": has_local,
            "remoteDeleted": remote_deleted,
        }));
    }
    println!("{} progress for {}", "deleted:".green().bold(), ctx.user_id);
    Ok(())
}
