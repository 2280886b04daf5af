use crate::config::DiscConfig;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::result::{ResultSummary, TraitBar};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Bar geometry and optional sections shared by the text writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub bar_width: usize,
    pub fill_char: char,
    pub empty_char: char,
    pub show_exemplars: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&DiscConfig::default())
    }
}

impl RenderOptions {
    pub fn from_config(config: &DiscConfig) -> Self {
        Self {
            bar_width: config.output.bar_width,
            fill_char: config.display.fill_char.chars().next().unwrap_or('#'),
            empty_char: config.display.empty_char.chars().next().unwrap_or('-'),
            show_exemplars: config.display.show_exemplars,
        }
    }
}

/// Draw a percentage bar. Percentages above 100 render as a full bar.
pub fn render_bar(percent: u32, options: &RenderOptions) -> String {
    let clamped = percent.min(100) as usize;
    let filled = (clamped * options.bar_width + 50) / 100;
    let mut bar = String::with_capacity(options.bar_width * 3);
    bar.extend(std::iter::repeat_n(options.fill_char, filled));
    bar.extend(std::iter::repeat_n(options.empty_char, options.bar_width - filled));
    bar
}

pub trait ResultWriter {
    fn write_summary(&mut self, summary: &ResultSummary) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: RenderOptions,
    formatting: FormattingConfig,
) -> Box<dyn ResultWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            writer,
            options,
            formatter_for(formatting),
        )),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultWriter for JsonWriter<W> {
    fn write_summary(&mut self, summary: &ResultSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: RenderOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    fn write_header(&mut self, summary: &ResultSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "# DISC Profile: {}", summary.profile.title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** ({})",
            summary.profile.name, summary.profile.nickname
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", summary.profile.description)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_bars(&mut self, bars: &[TraitBar]) -> anyhow::Result<()> {
        writeln!(self.writer, "| Trait | Score | Percent | |")?;
        writeln!(self.writer, "|-------|-------|---------|---|")?;
        for bar in bars {
            writeln!(
                self.writer,
                "| {} | {} | {}% | `{}` |",
                bar.label,
                bar.score,
                bar.percent,
                render_bar(bar.percent, &self.options)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ResultWriter for MarkdownWriter<W> {
    fn write_summary(&mut self, summary: &ResultSummary) -> anyhow::Result<()> {
        self.write_header(summary)?;
        self.write_bars(&summary.bars)?;
        writeln!(
            self.writer,
            "Top trait: **{}** at {}%",
            summary.highlight.label, summary.highlight.percent
        )?;
        if self.options.show_exemplars {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Examples: {}",
                summary.profile.exemplars.join(", ")
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: RenderOptions,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: RenderOptions, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            writer,
            options,
            formatter,
        }
    }
}

impl<W: Write> ResultWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &ResultSummary) -> anyhow::Result<()> {
        let f = &self.formatter;
        let label_width = summary
            .bars
            .iter()
            .map(|b| b.label.len())
            .max()
            .unwrap_or(0);

        writeln!(self.writer, "{}", f.header("DISC Profile"))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}  {}",
            f.accent(&f.bold(summary.profile.name), summary.dominant),
            f.dim(summary.profile.nickname)
        )?;
        writeln!(self.writer, "{}", summary.profile.description)?;
        writeln!(self.writer)?;

        for bar in &summary.bars {
            writeln!(
                self.writer,
                "{:<width$}  {} {:>3}%",
                bar.label,
                f.accent(&render_bar(bar.percent, &self.options), bar.disc_trait),
                bar.percent,
                width = label_width
            )?;
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Top trait: {} {}%",
            f.bold(summary.highlight.label),
            summary.highlight.percent
        )?;
        if self.options.show_exemplars {
            writeln!(
                self.writer,
                "{} {}",
                f.dim("Examples:"),
                summary.profile.exemplars.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainFormatter;
    use crate::result::summary_from_query;

    fn narrow() -> RenderOptions {
        RenderOptions {
            bar_width: 10,
            fill_char: '#',
            empty_char: '.',
            show_exemplars: true,
        }
    }

    #[test]
    fn test_render_bar_widths() {
        let options = narrow();
        assert_eq!(render_bar(0, &options), "..........");
        assert_eq!(render_bar(25, &options), "###.......");
        assert_eq!(render_bar(100, &options), "##########");
        assert_eq!(render_bar(250, &options), "##########");
    }

    #[test]
    fn test_terminal_output_lists_all_traits_in_order() {
        let summary = summary_from_query("type=D&D=20&I=15&S=10&C=5");
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, narrow(), Box::new(PlainFormatter))
            .write_summary(&summary)
            .unwrap();
        let out = String::from_utf8(buf).unwrap();

        let positions: Vec<usize> = ["Dominance     ", "Influence", "Steadiness", "Conscientious"]
            .iter()
            .map(|label| out.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("Dominance (D)  The Winner"));
        assert!(out.contains("########## 100%"));
        assert!(out.contains("###.......  25%"));
        assert!(out.contains("Examples: Steve Jobs, Serena Williams"));
    }

    #[test]
    fn test_markdown_output_has_table() {
        let summary = summary_from_query("type=S&D=12&I=8&S=15&C=5");
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf, narrow())
            .write_summary(&summary)
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("# DISC Profile: Steadiness"));
        assert!(out.contains("| Steadiness | 15 | 75% |"));
    }

    #[test]
    fn test_json_output_round_trips_to_value() {
        let summary = summary_from_query("D=1&I=2&S=3&C=4");
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_summary(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["dominant"], "C");
        assert_eq!(value["bars"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_exemplars_can_be_hidden() {
        let summary = summary_from_query("type=I");
        let mut options = narrow();
        options.show_exemplars = false;
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, options, Box::new(PlainFormatter))
            .write_summary(&summary)
            .unwrap();
        assert!(!String::from_utf8(buf).unwrap().contains("Examples"));
    }
}
