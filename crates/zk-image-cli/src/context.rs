use anyhow::{Context as AnyhowContext, Result};
use std::fs;
use zk_image_core::{ImageCatalog, SqliteStore, ZkImageConfig};

/// Application context that gets passed to command handlers
///
/// Built once per invocation from an already resolved configuration: makes
/// sure the images directory and table exist, and hands commands an open
/// catalogue.
pub struct Context {
    pub catalog: ImageCatalog<SqliteStore>,
    config: ZkImageConfig,
}

impl Context {
    /// Open the catalogue described by `config`
    pub fn new(config: ZkImageConfig) -> Result<Self> {
        let images_dir = config.images_dir();
        fs::create_dir_all(&images_dir).with_context(|| {
            format!("Failed to create images directory: {}", images_dir.display())
        })?;

        let store = SqliteStore::open(&config.database_path())?;
        let catalog = ImageCatalog::open(store, images_dir, &config.storage.extension)
            .context("Failed to prepare image database")?;

        Ok(Self { catalog, config })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &ZkImageConfig {
        &self.config
    }
}
