//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod answer;
pub mod back;
pub mod blocks;
pub mod complete;
pub mod next;
pub mod reset;
pub mod resume;
pub mod status;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Status(args) => status::run(ctx, args),
        Commands::Blocks(args) => blocks::run(ctx, args),
        Commands::Answer(args) => answer::run(ctx, args),
        Commands::Next(args) => next::run(ctx, args),
        Commands::Back(args) => back::run(ctx, args),
        Commands::Resume(args) => resume::run(ctx, args),
        Commands::Complete(args) => complete::run(ctx, args),
        Commands::Reset(args) => reset::run(ctx, args),
    }
}
