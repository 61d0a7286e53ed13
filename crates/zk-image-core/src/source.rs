// crates/zk-image-core/src/source.rs - Where image bytes come from
//
// An image is either a file on the local disk or something hosted on the web.
// Both end up as a byte buffer that the catalogue writes out unchanged.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring image bytes
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to resolve image path {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "url")]
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching images from URLs is not supported by this build: {0}")]
    UrlUnsupported(String),
}

/// Result type for image acquisition
pub type SourceResult<T> = Result<T, SourceError>;

/// Location of an image to ingest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Fetched with an HTTP GET
    Url(String),
    /// Copied from the local filesystem
    LocalPath(PathBuf),
}

impl ImageSource {
    /// Interpret a command-line argument; `is_url` mirrors the `--url` flag
    pub fn from_arg(value: impl Into<String>, is_url: bool) -> Self {
        let value = value.into();
        if is_url {
            Self::Url(value)
        } else {
            Self::LocalPath(PathBuf::from(value))
        }
    }

    /// Read the full image into memory
    ///
    /// Local paths are canonicalized first so symlinks and relative paths
    /// resolve the same way they would in a shell. URLs are fetched with a
    /// blocking GET without timeout or retry; a non-success status is an error.
    pub fn fetch_bytes(&self) -> SourceResult<Vec<u8>> {
        match self {
            Self::LocalPath(path) => {
                let resolved = path.canonicalize().map_err(|source| SourceError::Resolve {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %resolved.display(), "reading local image");
                std::fs::read(&resolved).map_err(|source| SourceError::Read {
                    path: resolved,
                    source,
                })
            }
            Self::Url(url) => fetch_url(url),
        }
    }
}

#[cfg(feature = "url")]
fn fetch_url(url: &str) -> SourceResult<Vec<u8>> {
    let fetch_err = |source| SourceError::Fetch {
        url: url.to_string(),
        source,
    };

    tracing::debug!(url, "fetching remote image");
    let response = reqwest::blocking::get(url)
        .and_then(|res| res.error_for_status())
        .map_err(fetch_err)?;
    let bytes = response.bytes().map_err(fetch_err)?;

    tracing::debug!(url, size = bytes.len(), "fetched remote image");
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "url"))]
fn fetch_url(url: &str) -> SourceResult<Vec<u8>> {
    Err(SourceError::UrlUnsupported(url.to_string()))
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::LocalPath(path) => write!(f, "{}", path.display()),
        }
    }
}
