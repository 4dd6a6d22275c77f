//! Command-line interface definitions and handlers.
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Telar - conversational maturity assessment for artisan businesses
#[derive(Parser, Debug)]
#[command(name = "telar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true, hide = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// User the progress belongs to
    #[arg(short, long, global = true, env = "TELAR_USER", default_value = "default")]
    pub user: String,

    /// Assessment language (es, en)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Assessment mode (full, onboarding)
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Progress store directory (default: platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file path (default: ~/.config/telar/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show assessment progress and score preview
    Status(commands::status::StatusArgs),

    /// List question blocks and per-block progress
    Blocks(commands::blocks::BlocksArgs),

    /// Record an answer to a question
    Answer(commands::answer::AnswerArgs),

    /// Advance to the next block (completes the assessment on the last one)
    Next(commands::next::NextArgs),

    /// Step back one block for review
    Back(commands::back::BackArgs),

    /// Resume from the last checkpoint
    Resume(commands::resume::ResumeArgs),

    /// Complete the assessment and show results
    Complete(commands::complete::CompleteArgs),

    /// Delete stored progress for the user
    Reset(commands::reset::ResetArgs),
}
