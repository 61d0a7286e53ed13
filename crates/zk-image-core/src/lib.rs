//! # zk-image-core
//!
//! Core library for cataloguing the images of a zettelkasten notebook.
//!
//! Images live as `<notebook>/images/<id>.jpg`; their metadata lives in a
//! single SQLite table next to them. This crate owns identifier generation,
//! configuration, image acquisition and the insert/search/delete flows. The
//! `zk-image` binary is a thin shell around it.
//!
//! ```no_run
//! use zk_image_core::{ConfigManager, ImageCatalog, ImageSource, SqliteStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigManager::load(None)?;
//! let store = SqliteStore::open(&config.database_path())?;
//! let catalog = ImageCatalog::open(store, config.images_dir(), &config.storage.extension)?;
//!
//! let id = catalog.insert(&ImageSource::from_arg("cat.png", false), "a cat", None)?;
//! for record in catalog.search("cat")? {
//!     println!("{} {}", record.id, record.description.unwrap_or_default());
//! }
//! catalog.delete(id.as_str())?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod id;
pub mod record;
pub mod source;
pub mod store;

#[cfg(all(test, feature = "url"))]
mod test_http;

pub use catalog::{CatalogError, CatalogResult, DeleteOutcome, FileRemoval, ImageCatalog};
pub use config::{ConfigError, ConfigManager, ConfigResult, NOTEBOOK_ENV, ZkImageConfig};
pub use id::{IdError, IdResult, ImageId};
pub use record::{ImageRecord, NewImage};
pub use source::{ImageSource, SourceError, SourceResult};
pub use store::{ImageStore, SqliteStore, StoreError, StoreResult};
