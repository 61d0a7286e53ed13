// crates/zk-image-core/src/catalog.rs - Insert, search and delete flows
//
// The catalogue ties together the three places an image lives: the source it
// came from, its file under the images directory, and its metadata row.
//
// ORDERING:
// Insert writes the file before the row. If the row insert fails the file is
// left behind as an orphan; a row never points at a file that was not written.
// Delete removes the row first and then makes a best-effort attempt at the file.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::id::ImageId;
use crate::record::{ImageRecord, NewImage};
use crate::source::{ImageSource, SourceError};
use crate::store::{ImageStore, StoreError};

/// Errors raised by catalogue operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Description of the image must not be empty")]
    EmptyDescription,

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for catalogue operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// What happened to the image file during a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRemoval {
    Removed,
    /// Removal failed (usually because the file was already gone)
    Failed(String),
    /// The id would name a file outside the images directory
    Skipped,
}

/// Outcome of a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub rows_deleted: usize,
    pub file: FileRemoval,
}

/// Image catalogue over a metadata store and an images directory
pub struct ImageCatalog<S: ImageStore> {
    store: S,
    images_dir: PathBuf,
    extension: String,
}

impl<S: ImageStore> ImageCatalog<S> {
    /// Wrap a store and make sure its schema exists
    pub fn open(
        store: S,
        images_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> CatalogResult<Self> {
        store.ensure_schema()?;
        Ok(Self {
            store,
            images_dir: images_dir.into(),
            extension: extension.into(),
        })
    }

    /// Ingest an image under a freshly generated id
    pub fn insert(
        &self,
        source: &ImageSource,
        description: &str,
        image_source: Option<&str>,
    ) -> CatalogResult<ImageId> {
        self.insert_with_id(ImageId::generate(), source, description, image_source)
    }

    /// Ingest an image under the given id
    ///
    /// The description must be non-empty; prompting for it is the caller's job.
    pub fn insert_with_id(
        &self,
        id: ImageId,
        source: &ImageSource,
        description: &str,
        image_source: Option<&str>,
    ) -> CatalogResult<ImageId> {
        if description.trim().is_empty() {
            return Err(CatalogError::EmptyDescription);
        }

        let bytes = source.fetch_bytes()?;

        let path = self.image_path(&id);
        fs::write(&path, &bytes).map_err(|source| CatalogError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "wrote image file");

        self.store.insert(&NewImage {
            id: id.clone(),
            description: description.to_string(),
            source: image_source.map(str::to_string),
        })?;

        tracing::info!(id = %id, from = %source, "inserted image");
        Ok(id)
    }

    /// Records whose description or source contains `term`
    pub fn search(&self, term: &str) -> CatalogResult<Vec<ImageRecord>> {
        Ok(self.store.search(term)?)
    }

    /// Remove the metadata row, then try to remove the image file
    ///
    /// Neither a missing row nor a failed file removal is an error.
    pub fn delete(&self, id: &str) -> CatalogResult<DeleteOutcome> {
        let rows_deleted = self.store.delete(id)?;

        // Rows may predate generated ids, so any id that stays inside the
        // images directory gets its file removed.
        let file = match self.stored_file_path(id) {
            Some(path) => match fs::remove_file(&path) {
                Ok(()) => FileRemoval::Removed,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "image file not removed");
                    FileRemoval::Failed(e.to_string())
                }
            },
            None => {
                tracing::warn!(id, "id does not name a file in the images directory, leaving files untouched");
                FileRemoval::Skipped
            }
        };

        tracing::info!(id, rows_deleted, "deleted image");
        Ok(DeleteOutcome { rows_deleted, file })
    }

    /// Where the image with this id is stored
    pub fn image_path(&self, id: &ImageId) -> PathBuf {
        self.images_dir.join(id.file_name(&self.extension))
    }

    /// `<images_dir>/<id>.<ext>` for any id that cannot leave the images directory
    fn stored_file_path(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
            return None;
        }

        let path = self.images_dir.join(format!("{}.{}", id, self.extension));
        (path.parent() == Some(self.images_dir.as_path())).then_some(path)
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
