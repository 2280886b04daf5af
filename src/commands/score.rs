use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::render::{emit_summary, emit_text, CommandContext};
use crate::assessment::{Assessment, FormController};
use crate::cli::OutputArgs;
use crate::core::{CELLS_PER_ROW, ROW_COUNT};
use crate::handoff::ResultState;
use crate::io;
use crate::observability::{set_phase, SessionPhase};
use crate::result::render_summary;

pub struct ScoreConfig {
    pub rows: Vec<String>,
    pub file: Option<PathBuf>,
    pub query: bool,
    pub output: OutputArgs,
}

/// Answer file layout: `rows = [[4, 3, 2, 1], ...]`, one inner list per
/// row in D, I, S, C order. Values may be integers or strings.
#[derive(Debug, Deserialize)]
struct AnswerFile {
    rows: Vec<Vec<toml::Value>>,
}

pub fn score_answers(config: ScoreConfig, ctx: &CommandContext) -> Result<()> {
    set_phase(SessionPhase::Scoring);

    let rows = match &config.file {
        Some(path) => load_answer_file(path)?,
        None => parse_row_args(&config.rows)?,
    };
    let state = score_rows(&rows)?;

    if config.query {
        emit_text(&state.to_payload().to_query_string(), &config.output)
    } else {
        emit_summary(&render_summary(&state), &config.output, ctx)
    }
}

/// Run the rows through the form controller exactly as a submit would.
pub fn score_rows(rows: &[Vec<String>]) -> Result<ResultState> {
    let assessment = Assessment::from_raw_rows(rows)?;
    let mut controller = FormController::with_assessment(assessment);
    Ok(controller.submit()?)
}

/// Split `--row` arguments such as `4,3,2,1` into cells.
pub fn parse_row_args(args: &[String]) -> Result<Vec<Vec<String>>> {
    if args.len() != ROW_COUNT {
        bail!(
            "Expected {} --row arguments (or --file), got {}",
            ROW_COUNT,
            args.len()
        );
    }

    args.iter()
        .enumerate()
        .map(|(idx, arg)| {
            let cells: Vec<String> = arg.split(',').map(|c| c.trim().to_string()).collect();
            if cells.len() != CELLS_PER_ROW {
                bail!(
                    "Row {} must have {} comma-separated values, got '{}'",
                    idx + 1,
                    CELLS_PER_ROW,
                    arg
                );
            }
            Ok(cells)
        })
        .collect()
}

pub fn load_answer_file(path: &Path) -> Result<Vec<Vec<String>>> {
    let contents = io::read_file(path)
        .with_context(|| format!("Failed to read answer file {}", path.display()))?;
    let file: AnswerFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse answer file {}", path.display()))?;

    file.rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect::<Result<Vec<_>>>())
        .collect()
}

fn cell_text(value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        other => bail!("Unsupported answer value: {}", other),
    }
}
