//! Shared config resolution and result output for the commands.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::cli::OutputArgs;
use crate::config::{self, DiscConfig};
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, RenderOptions};
use crate::observability::{set_phase, SessionPhase};
use crate::result::ResultSummary;

/// Configuration resolved once per invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: DiscConfig,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    /// Load an explicit config file or discover one, then apply `--plain`
    /// and the color environment variables.
    pub fn load(config_path: Option<&Path>, plain: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => config::load_config(),
        };
        Ok(Self::new(config, plain))
    }

    pub fn new(config: DiscConfig, plain: bool) -> Self {
        let formatting = if plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env(config.display.color)
        };
        Self { config, formatting }
    }
}

/// Write a summary to stdout or the `--output` file in the chosen format.
pub fn emit_summary(
    summary: &ResultSummary,
    output: &OutputArgs,
    ctx: &CommandContext,
) -> Result<()> {
    set_phase(SessionPhase::Rendering);
    let format = output.format.unwrap_or(ctx.config.output.format);
    let options = RenderOptions::from_config(&ctx.config);

    match &output.output {
        Some(path) => {
            let mut buffer = Vec::new();
            create_writer(
                format,
                Box::new(&mut buffer),
                options,
                FormattingConfig::plain(),
            )
            .write_summary(summary)?;
            let text = String::from_utf8(buffer).context("Rendered output is not UTF-8")?;
            io::write_file(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "result written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(format, Box::new(stdout.lock()), options, ctx.formatting);
            writer.write_summary(summary)?;
        }
    }
    Ok(())
}

/// Write a single line of plain text, e.g. a handoff query string.
pub fn emit_text(text: &str, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => io::write_file(path, &format!("{}\n", text))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            Ok(())
        }
    }
}
