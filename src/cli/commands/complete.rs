//! telar complete - Complete the assessment and show results

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{render_report, CliObserver};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CompleteArgs {}

pub fn run(ctx: &AppContext, _args: &CompleteArgs) -> Result<()> {
    let observer = CliObserver::new(ctx.robot_mode, ctx.quiet);
    let mut session = ctx.open_session(observer)?;

    let report = session.complete_assessment()?;
    render_report(&report, ctx.language, ctx.robot_mode)
}
