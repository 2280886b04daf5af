//! Validation with error accumulation for configuration.
//!
//! Uses stillwater's `Validation` so a config file with several problems
//! reports all of them in one run.

use stillwater::{NonEmptyVec, Validation};

use super::types::{DiscConfig, DisplayConfig, OutputConfig};
use crate::errors::DiscError;

/// Accepted range for `output.bar_width`.
pub const BAR_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 10..=120;

/// Validation result for configuration checks.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

/// Validate the entire config, accumulating ALL errors.
pub fn validate_config(config: &DiscConfig) -> ConfigValidation<()> {
    let mut errors = validate_output(&config.output);
    errors.extend(validate_display(&config.display));

    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Validate config with a fail-fast `Result` API.
pub fn validate_config_result(config: &DiscConfig) -> Result<(), DiscError> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => {
            let messages: Vec<String> = errors.into_iter().collect();
            Err(DiscError::config(messages.join("; ")))
        }
    }
}

fn validate_output(output: &OutputConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if !BAR_WIDTH_RANGE.contains(&output.bar_width) {
        errors.push(format!(
            "output.bar_width out of range: {} (must be {}-{})",
            output.bar_width,
            BAR_WIDTH_RANGE.start(),
            BAR_WIDTH_RANGE.end()
        ));
    }
    errors
}

fn validate_display(display: &DisplayConfig) -> Vec<String> {
    [
        ("display.fill_char", &display.fill_char),
        ("display.empty_char", &display.empty_char),
    ]
    .into_iter()
    .filter(|(_, value)| value.chars().count() != 1)
    .map(|(field, value)| format!("{} must be a single character, got {:?}", field, value))
    .collect()
}
