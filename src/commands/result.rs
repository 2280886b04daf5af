use anyhow::Result;

use super::render::{emit_summary, CommandContext};
use crate::cli::OutputArgs;
use crate::handoff::ResultPayload;
use crate::result::{parse_result_state, render_summary};

/// Render a result page from a handoff query string. Malformed input is
/// tolerated; see [`parse_result_state`].
pub fn show_result(query: &str, output: &OutputArgs, ctx: &CommandContext) -> Result<()> {
    let payload = ResultPayload::from_query_string(query);
    let state = parse_result_state(&payload);
    tracing::debug!(dominant = %state.dominant, "result parsed");
    emit_summary(&render_summary(&state), output, ctx)
}
