//! Document storage - where the renderers fetch posts and the index from

use serde::de::DeserializeOwned;
use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Why a fetch did not produce a document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{path} is outside the site root")]
    InvalidPath { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of site documents addressed by relative path (`blogs/<slug>.md`)
pub trait Storage {
    /// Fetch a document as text
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Decode a fetched JSON document
pub fn decode_json<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|source| FetchError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Reads documents from a site directory on disk
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a relative document path to a file under the root
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes || path.is_empty() {
            return Err(FetchError::InvalidPath {
                path: path.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

impl Storage for FsStorage {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        tracing::debug!("Fetching {:?}", file);

        match tokio::fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path.to_string()))
            }
            Err(source) => Err(FetchError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}
