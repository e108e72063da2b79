//! Locating and reading `config.toml`.
//!
//! A `--config` path wins outright and must exist. Without one, the working
//! directory's `mindmap/config.toml` is tried, then the per-user config
//! directory. When neither exists the built-in defaults are used.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use mindmap::{MindMapError, config::AppConfig};

/// Relative location checked before the per-user config directory.
const LOCAL_CONFIG: &str = "mindmap/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for MindMapError {
    fn from(err: ConfigError) -> Self {
        MindMapError::Config(err.to_string())
    }
}

/// Where a configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Explicit(PathBuf),
    Local(PathBuf),
    User(PathBuf),
    Defaults,
}

/// Loads the application configuration.
///
/// # Errors
///
/// Fails when an explicit path does not exist, or when the chosen file cannot
/// be read or is not valid TOML for [`AppConfig`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MindMapError> {
    let explicit = explicit_path.map(|path| path.as_ref().to_path_buf());
    let source = locate(explicit, user_config_path());

    match source {
        Source::Explicit(path) => {
            info!(path = path.display().to_string(); "Loading configuration from explicit path");
            if !path.exists() {
                return Err(ConfigError::MissingFile(path).into());
            }
            read_file(&path)
        }
        Source::Local(path) | Source::User(path) => {
            info!(path = path.display().to_string(); "Loading configuration");
            read_file(&path)
        }
        Source::Defaults => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let path = ProjectDirs::from("com", "mindmap", "mindmap")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if path.is_none() {
        debug!("No per-user config directory on this platform");
    }
    path
}

fn locate(explicit: Option<PathBuf>, user: Option<PathBuf>) -> Source {
    if let Some(path) = explicit {
        return Source::Explicit(path);
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Source::Local(local);
    }

    match user {
        Some(path) if path.exists() => Source::User(path),
        Some(path) => {
            debug!(path = path.display().to_string(); "Per-user configuration file not found");
            Source::Defaults
        }
        None => Source::Defaults,
    }
}

fn read_file(path: &Path) -> Result<AppConfig, MindMapError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, tempdir};

    use super::*;

    #[test]
    fn test_explicit_file_is_parsed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[canvas]
width = 1024

[root]
text = "Plan"

[export]
xml_file = "plan.xml"
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.canvas().width(), 1024);
        assert_eq!(config.canvas().height(), 600);
        assert_eq!(config.root().build_node().unwrap().text(), "Plan");
        assert_eq!(config.export().xml_file(), &PathBuf::from("plan.xml"));
        assert_eq!(config.export().png_file(), &PathBuf::from("MindMap.png"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, MindMapError::Config(_)), "{err}");
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[canvas\nwidth = ").unwrap();
        let err = load_config(Some(file.path())).unwrap_err().to_string();
        assert!(err.contains("TOML"), "{err}");
        assert!(err.contains(&file.path().display().to_string()), "{err}");
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let dir = tempdir().unwrap();
        let user = dir.path().join("config.toml");
        fs::write(&user, "").unwrap();

        let explicit = PathBuf::from("elsewhere.toml");
        assert_eq!(
            locate(Some(explicit.clone()), Some(user)),
            Source::Explicit(explicit)
        );
    }

    #[test]
    fn test_locate_user_file_or_defaults() {
        let dir = tempdir().unwrap();
        let user = dir.path().join("config.toml");

        // The test runner's working directory has no mindmap/config.toml.
        assert_eq!(locate(None, Some(user.clone())), Source::Defaults);
        assert_eq!(locate(None, None), Source::Defaults);

        fs::write(&user, "").unwrap();
        assert_eq!(locate(None, Some(user.clone())), Source::User(user));
    }
}
