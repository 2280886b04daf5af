use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# discprofile configuration

[output]
# terminal, json or markdown
format = "terminal"
# width of the percentage bars (10-120)
bar_width = 30

[display]
# auto, always or never
color = "auto"
show_exemplars = true
fill_char = "█"
empty_char = "░"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(&std::env::current_dir()?, force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default config into `dir`, refusing to overwrite unless forced.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, DiscConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, DiscConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();
        assert!(init_config_in(temp.path(), false).is_err());
        assert!(init_config_in(temp.path(), true).is_ok());
    }
}
