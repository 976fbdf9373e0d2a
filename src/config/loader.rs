use std::path::Path;
use tracing::debug;

use super::GradebookConfig;
use crate::error::{GradebookError, Result};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "gradebook.toml";

/// Load configuration from `path` (or [`DEFAULT_CONFIG_FILE`] if it exists),
/// then apply environment overrides and validate.
///
/// An explicitly named file must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<GradebookConfig> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(GradebookError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            load_file(path)?
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_file(default_path)?
            } else {
                GradebookConfig::default()
            }
        }
    };

    config.merge_env_vars()?;
    config.validate()?;
    Ok(config)
}

fn load_file(path: &Path) -> Result<GradebookConfig> {
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    GradebookConfig::from_toml_str(&content).map_err(|e| {
        GradebookError::config(format!("failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, GradebookError::Config(_)));
    }

    #[test]
    fn test_loads_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gradebook.toml");
        fs::write(&path, "host = \"0.0.0.0\"\n\n[storage]\nmax_connections = 2\n").unwrap();

        let config = load_file(&path).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.storage.max_connections, 2);
    }

    #[test]
    fn test_malformed_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "port = \"not a number\"").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
