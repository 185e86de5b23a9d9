//! Fetch command implementation

use crate::cli::{CommandContext, FetchArgs, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::form::FollowerStatsForm;
use crate::output;
use crate::view::TerminalView;

/// Run the fetch command.
///
/// Submits the form once and prints the rendered results. Failures are left
/// to the caller, which reports the error's user message on stderr.
pub async fn run(opts: &GlobalOptions, args: &FetchArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, args.timeout)?;
    let input = ctx.form_input(args);
    let format = ctx.format;

    let view = TerminalView::new(format != OutputFormat::Json);
    let mut form = FollowerStatsForm::new(ctx.client, view);
    let outcome = form.submit(&input).await;

    let state = form.into_view().into_state();
    output::print(&state, format)?;

    outcome.map(|submission| {
        log::debug!(
            "Fetched {} followers for {}",
            submission.counts.total(),
            submission.organization
        );
    })
}
