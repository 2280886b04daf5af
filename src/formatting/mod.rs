use crate::core::DiscTrait;
use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `configured` and let the environment override it.
    pub fn from_env(configured: ColorMode) -> Self {
        let mut config = Self::new(configured);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    /// Paint text in the trait's accent color.
    fn accent(&self, text: &str, disc_trait: DiscTrait) -> String;
}

pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color.should_use_color() {
        Box::new(ColoredFormatter::new(config))
    } else {
        Box::new(PlainFormatter)
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        if config.color.should_use_color() {
            colored::control::set_override(true);
        } else {
            colored::control::set_override(false);
        }

        Self { config }
    }

    fn paint(&self, text: &str, f: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn accent(&self, text: &str, disc_trait: DiscTrait) -> String {
        self.paint(text, |t| match disc_trait {
            DiscTrait::D => t.truecolor(0xff, 0x6b, 0x6b),
            DiscTrait::I => t.truecolor(0xfe, 0xca, 0x57),
            DiscTrait::S => t.truecolor(0x1d, 0xd1, 0xa1),
            DiscTrait::C => t.truecolor(0x54, 0xa0, 0xff),
        })
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn accent(&self, text: &str, _disc_trait: DiscTrait) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_deserializes_lowercase() {
        let mode: ColorMode = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(mode, ColorMode::Always);
        assert!(serde_json::from_str::<ColorMode>("\"sometimes\"").is_err());
    }

    #[test]
    fn test_plain_formatter_is_identity() {
        let f = PlainFormatter;
        assert_eq!(f.header("Result"), "Result");
        assert_eq!(f.accent("D", DiscTrait::D), "D");
    }

    #[test]
    fn test_never_mode_selects_plain_output() {
        let f = formatter_for(FormattingConfig::plain());
        assert_eq!(f.bold("x"), "x");
    }
}
