// crates/zk-image-core/src/config.rs - Configuration System
//
// Resolves where the catalogue lives and how it is laid out on disk.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--notebook)
// 2. Environment variable (ZK_NOTEBOOK_DIR)
// 3. Notebook-specific config file (<notebook>/.zk-image.toml)
// 4. Built-in defaults
//
// Only the notebook root is mandatory. Everything in the config file is
// optional and falls back to the layout the tool has always used:
// <notebook>/images/db.sqlite and <notebook>/images/<id>.jpg.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the notebook root directory
pub const NOTEBOOK_ENV: &str = "ZK_NOTEBOOK_DIR";

/// Name of the optional per-notebook config file
pub const CONFIG_FILE_NAME: &str = ".zk-image.toml";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ZK_NOTEBOOK_DIR environment variable not set.")]
    MissingNotebookDir,

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration for one notebook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZkImageConfig {
    /// Notebook root; never read from the config file itself
    #[serde(skip)]
    pub notebook_dir: PathBuf,

    /// On-disk layout of the catalogue
    #[serde(default)]
    pub storage: StorageConfig,

    /// Plain-text table rendering for search results
    #[serde(default)]
    pub table: TableConfig,
}

/// Where images and the metadata database are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory under the notebook root holding images and the database
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// SQLite database file name inside `images_dir`
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Extension given to every stored image, whatever its real format
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Layout of the bordered search result table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Widest a cell may get before its value is truncated
    #[serde(default = "default_max_col_width")]
    pub max_col_width: usize,

    /// Spaces between a cell border and its content
    #[serde(default = "default_padding")]
    pub padding: usize,

    /// Spaces before the left table border
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl ZkImageConfig {
    /// Defaults for a notebook rooted at `notebook_dir`
    pub fn for_notebook(notebook_dir: impl Into<PathBuf>) -> Self {
        Self {
            notebook_dir: notebook_dir.into(),
            storage: StorageConfig::default(),
            table: TableConfig::default(),
        }
    }

    /// Directory holding image files and the database
    pub fn images_dir(&self) -> PathBuf {
        self.notebook_dir.join(&self.storage.images_dir)
    }

    /// Path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.images_dir().join(&self.storage.database_file)
    }
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration for the notebook named by `--notebook` or the environment
    ///
    /// Fails with [`ConfigError::MissingNotebookDir`] before touching the
    /// filesystem when neither source provides a notebook root.
    pub fn load(notebook_override: Option<PathBuf>) -> ConfigResult<ZkImageConfig> {
        let notebook_dir =
            Self::resolve_notebook_dir(notebook_override, std::env::var_os(NOTEBOOK_ENV))?;
        Self::load_from(notebook_dir)
    }

    /// Load configuration for a known notebook root
    pub fn load_from(notebook_dir: PathBuf) -> ConfigResult<ZkImageConfig> {
        let mut config = match Self::try_load_notebook_config(&notebook_dir)? {
            Some(file_config) => file_config,
            None => ZkImageConfig::for_notebook(&notebook_dir),
        };
        config.notebook_dir = notebook_dir;

        Self::validate_config(&config)?;

        tracing::debug!(
            notebook = %config.notebook_dir.display(),
            database = %config.database_path().display(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Pick the notebook root: CLI override first, then the environment value
    ///
    /// An empty environment value counts as unset.
    pub fn resolve_notebook_dir(
        notebook_override: Option<PathBuf>,
        env_value: Option<OsString>,
    ) -> ConfigResult<PathBuf> {
        notebook_override
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .ok_or(ConfigError::MissingNotebookDir)
    }

    /// Try to load `<notebook>/.zk-image.toml`
    fn try_load_notebook_config(notebook_dir: &Path) -> ConfigResult<Option<ZkImageConfig>> {
        let config_path = notebook_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        let config_content = std::fs::read_to_string(&config_path)?;

        let config: ZkImageConfig =
            toml::from_str(&config_content).map_err(|e| ConfigError::ParseError {
                file: config_path.display().to_string(),
                error: e.to_string(),
            })?;

        Ok(Some(config))
    }

    /// Validate the final configuration
    ///
    /// Names from the config file become path components, so they must stay
    /// single plain components.
    pub fn validate_config(config: &ZkImageConfig) -> ConfigResult<()> {
        validate_path_component("storage.images_dir", &config.storage.images_dir)?;
        validate_path_component("storage.database_file", &config.storage.database_file)?;

        let extension = &config.storage.extension;
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::ValidationError(format!(
                "storage.extension must be non-empty and alphanumeric, got '{}'",
                extension
            )));
        }

        // Room for at least one character plus the truncation marker
        if config.table.max_col_width < 2 {
            return Err(ConfigError::ValidationError(format!(
                "table.max_col_width must be at least 2, got {}",
                config.table.max_col_width
            )));
        }

        Ok(())
    }
}

fn validate_path_component(key: &str, value: &str) -> ConfigResult<()> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\']);

    if invalid {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a plain file or directory name, got '{}'",
            key, value
        )));
    }

    Ok(())
}

fn default_images_dir() -> String {
    "images".to_string()
}
fn default_database_file() -> String {
    "db.sqlite".to_string()
}
fn default_extension() -> String {
    "jpg".to_string()
}

fn default_max_col_width() -> usize {
    20
}
fn default_padding() -> usize {
    1
}
fn default_indent() -> usize {
    2
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            database_file: default_database_file(),
            extension: default_extension(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_col_width: default_max_col_width(),
            padding: default_padding(),
            indent: default_indent(),
        }
    }
}
