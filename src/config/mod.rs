// Core configuration types
mod types;
mod loader;
pub mod validation;

pub use types::{
    default_bar_width, default_empty_char, default_fill_char, default_show_exemplars, DiscConfig,
    DisplayConfig, OutputConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    user_config_path, CONFIG_FILE_NAME,
};
