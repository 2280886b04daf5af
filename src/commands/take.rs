use anyhow::{Context, Result};
use tracing::info;

use super::render::{emit_summary, emit_text, CommandContext};
use crate::cli::OutputArgs;
use crate::result::{parse_result_state, render_summary};
use crate::tui::FormTui;

pub fn take_assessment(print_query: bool, output: &OutputArgs, ctx: &CommandContext) -> Result<()> {
    let mut tui = FormTui::new().context("Failed to start the interactive form")?;
    let payload = tui.run();
    // Restore the terminal before printing anything
    drop(tui);

    let Some(payload) = payload? else {
        info!("assessment cancelled");
        return Ok(());
    };

    if print_query {
        emit_text(&payload.to_query_string(), output)
    } else {
        emit_summary(&render_summary(&parse_result_state(&payload)), output, ctx)
    }
}
