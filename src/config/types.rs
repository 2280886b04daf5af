use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

/// Root configuration structure for discprofile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiscConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Display configuration for terminal rendering
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Width of percentage bars in terminal and markdown output
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            bar_width: default_bar_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Show the well-known exemplars for the dominant trait
    #[serde(default = "default_show_exemplars")]
    pub show_exemplars: bool,

    #[serde(default = "default_fill_char")]
    pub fill_char: String,

    #[serde(default = "default_empty_char")]
    pub empty_char: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            show_exemplars: default_show_exemplars(),
            fill_char: default_fill_char(),
            empty_char: default_empty_char(),
        }
    }
}

pub fn default_bar_width() -> usize {
    30
}

pub fn default_show_exemplars() -> bool {
    true
}

pub fn default_fill_char() -> String {
    "█".to_string()
}

pub fn default_empty_char() -> String {
    "░".to_string()
}
