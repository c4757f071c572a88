use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::ad::Ad;
use crate::error::Error;

/// The whole database as persisted on disk. Only `ads` is written by the
/// server, every other top-level collection is kept verbatim and in order.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Document {
    #[serde(default)]
    pub ads: Vec<Ad>,
    #[serde(flatten)]
    pub collections: Map<String, Value>,
}

impl Document {
    /// The records of an untyped collection, empty if it is missing or not
    /// an array.
    pub fn records(&self, collection: &str) -> &[Value] {
        self.collections
            .get(collection)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A json file loaded lazily and cached in memory. All access goes through
/// one lock so each load/mutate/persist sequence runs to completion before
/// the next begins.
#[derive(Debug)]
pub struct JsonDocument {
    path: PathBuf,
    initial_path: PathBuf,
    cache: Mutex<Option<Document>>,
}

impl JsonDocument {
    pub fn new(path: impl Into<PathBuf>, initial_path: impl Into<PathBuf>) -> JsonDocument {
        JsonDocument {
            path: path.into(),
            initial_path: initial_path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn initial_path(&self) -> &Path {
        &self.initial_path
    }

    /// Creates the live document from the initial one if it doesn't exist yet.
    pub async fn initialize(&self) -> Result<(), Error> {
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                info!(
                    path = %self.path.display(),
                    initial_path = %self.initial_path.display(),
                    "creating document from initial state"
                );
                fs::copy(&self.initial_path, &self.path).await?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn read<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Document) -> T,
    {
        let mut cache = self.cache.lock().await;
        let document = self.load(&mut cache).await?;

        Ok(f(document))
    }

    /// Applies `f` to the cached document and writes the whole document back.
    pub async fn mutate<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Document) -> T,
    {
        let mut cache = self.cache.lock().await;
        let document = self.load(&mut cache).await?;
        let result = f(document);

        if let Err(err) = self.persist(document).await {
            // the cached copy no longer matches the file
            *cache = None;
            return Err(err);
        }

        Ok(result)
    }

    /// Overwrites the live document with the initial one, byte for byte, and
    /// drops the cache so the next access reloads it.
    pub async fn reset(&self) -> Result<(), Error> {
        let mut cache = self.cache.lock().await;
        *cache = None;

        let result = async {
            let initial = fs::read(&self.initial_path).await?;
            fs::write(&self.path, initial).await
        }
        .await;

        match result {
            Ok(()) => {
                info!(path = %self.path.display(), "document reset to initial state");
                Ok(())
            }
            Err(err) => {
                error!(
                    path = %self.path.display(),
                    initial_path = %self.initial_path.display(),
                    "failed to reset document: {}",
                    err
                );
                Err(Error::FailedToResetDocument(err))
            }
        }
    }

    async fn load<'a>(&self, cache: &'a mut Option<Document>) -> Result<&'a mut Document, Error> {
        let document = match cache.take() {
            Some(document) => document,
            None => {
                debug!(path = %self.path.display(), "loading document");
                let raw = fs::read(&self.path).await?;
                serde_json::from_slice(&raw)?
            }
        };

        Ok(cache.insert(document))
    }

    async fn persist(&self, document: &Document) -> Result<(), Error> {
        let raw = serde_json::to_vec_pretty(document).map_err(Error::FailedToSerializeDocument)?;
        fs::write(&self.path, raw).await?;
        debug!(path = %self.path.display(), "persisted document");

        Ok(())
    }
}
