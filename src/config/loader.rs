use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::types::DiscConfig;
use super::validation::validate_config_result;

/// Config file name searched in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".discprofile.toml";

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<DiscConfig, String> {
    let config = toml::from_str::<DiscConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    validate_config_result(&config).map_err(|e| e.to_string())?;

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<DiscConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// User-level config location, e.g. `~/.config/discprofile/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("discprofile").join("config.toml"))
}

/// Load config from an explicit path; unlike discovery this reports errors.
pub fn load_config_from(path: &Path) -> crate::errors::Result<DiscConfig> {
    let contents = read_config_file(path).map_err(|e| {
        crate::errors::DiscError::config_with_path(
            format!("Failed to read {}: {}", path.display(), e),
            path,
        )
    })?;
    parse_and_validate_config(&contents)
        .map_err(|message| crate::errors::DiscError::config_with_path(message, path))
}

/// Discover configuration: cwd ancestors first, then the user config dir.
pub fn load_config() -> DiscConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let project_config = match std::env::current_dir() {
        Ok(dir) => directory_ancestors(dir, MAX_TRAVERSAL_DEPTH)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find_map(|path| try_load_config_from_path(&path)),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}", e);
            None
        }
    };

    project_config
        .or_else(|| user_config_path().and_then(|path| try_load_config_from_path(&path)))
        .unwrap_or_else(|| {
            tracing::debug!("No config found. Using default config.");
            DiscConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ColorMode;
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [output]
            format = "json"
            bar_width = 40

            [display]
            color = "never"
            show_exemplars = false
        "#})
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.bar_width, 40);
        assert_eq!(config.display.color, ColorMode::Never);
        assert!(!config.display.show_exemplars);
        assert_eq!(config.display.fill_char, "█");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, DiscConfig::default());
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let err = parse_and_validate_config("[output]\nformat = \"html\"\n").unwrap_err();
        assert!(err.contains("Failed to parse"));
    }

    #[test]
    fn test_out_of_range_bar_width_is_rejected() {
        let err = parse_and_validate_config("[output]\nbar_width = 500\n").unwrap_err();
        assert!(err.contains("bar_width"));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_try_load_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME)).is_none());
    }

    #[test]
    fn test_load_config_from_reports_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[display]\nfill_char = \"\"\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("fill_char"));
    }
}
