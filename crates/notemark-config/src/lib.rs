//! Settings for the `notemark` command: where notes live and how long their
//! identifiers and edit codes are.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

const DEFAULT_CODE_LENGTH: usize = 8;

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one file per note. `~` and `$VARS` are expanded.
    pub notes_path: PathBuf,
    #[serde(default = "default_code_length")]
    pub id_length: usize,
    #[serde(default = "default_code_length")]
    pub edit_code_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_path: expand(Path::new("~/.local/share/notemark/notes")),
            id_length: DEFAULT_CODE_LENGTH,
            edit_code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Config {
    /// `~/.config/notemark/config.toml`
    pub fn config_path() -> PathBuf {
        expand(Path::new("~/.config/notemark")).join("config.toml")
    }

    /// Loads the default config file. `Ok(None)` when there is none.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let notes_path = config.notes_path.clone();
        Ok(Some(config.with_notes_path(&notes_path)))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// Writes the config as TOML, creating missing parent directories.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Replaces `notes_path`, expanding `~` and environment variables.
    pub fn with_notes_path(mut self, notes_path: &Path) -> Self {
        self.notes_path = expand(notes_path);
        self
    }
}

/// Shell-style expansion; paths that fail to expand (an unset variable, say)
/// are returned unchanged.
fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn write(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn config_path_is_under_home() {
        let path = Config::config_path();

        assert!(!path.to_string_lossy().contains('~'));
        assert!(path.ends_with(".config/notemark/config.toml"));
    }

    #[test]
    fn default_notes_path_is_expanded() {
        let notes = Config::default().notes_path;

        assert!(!notes.to_string_lossy().contains('~'));
        assert!(notes.ends_with("notemark/notes"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();

        let loaded = Config::load_from_path(dir.path().join("absent.toml")).unwrap();

        assert_eq!(loaded, None);
    }

    #[test]
    fn lengths_fall_back_to_eight() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes_path = \"/srv/notes\"\n");

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config.notes_path, PathBuf::from("/srv/notes"));
        assert_eq!((config.id_length, config.edit_code_length), (8, 8));
    }

    #[test]
    fn lengths_are_read_when_present() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "notes_path = \"/srv/notes\"\nid_length = 10\nedit_code_length = 24\n",
        );

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!((config.id_length, config.edit_code_length), (10, 24));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes_path = [");

        let err = Config::load_from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();

        let err = Config::load_from_path(dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn notes_path_expands_variables_and_tilde() {
        unsafe {
            env::set_var("NOTEMARK_CONFIG_TEST_ROOT", "/data/shared");
        }
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes_path = \"$NOTEMARK_CONFIG_TEST_ROOT/notes\"\n");

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.notes_path, PathBuf::from("/data/shared/notes"));

        let home = Config::default().with_notes_path(Path::new("~/notes"));
        assert!(!home.notes_path.to_string_lossy().starts_with('~'));

        unsafe {
            env::remove_var("NOTEMARK_CONFIG_TEST_ROOT");
        }
    }

    #[test]
    fn unset_variable_leaves_path_alone() {
        let config =
            Config::default().with_notes_path(Path::new("$NOTEMARK_CONFIG_SURELY_UNSET/notes"));

        assert_eq!(
            config.notes_path,
            PathBuf::from("$NOTEMARK_CONFIG_SURELY_UNSET/notes")
        );
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/config.toml");
        let config = Config {
            notes_path: PathBuf::from("/var/lib/notemark"),
            id_length: 12,
            edit_code_length: 16,
        };

        config.save_to_path(&path).unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), Some(config));
    }
}
