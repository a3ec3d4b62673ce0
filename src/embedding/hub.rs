//! Locating model files: explicit directory, download cache, or the hub.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::config::EmbedderConfig;
use super::error::EmbeddingError;
use crate::constants::{MODEL_CONFIG_FILE, MODEL_FILES, MODEL_TOKENIZER_FILE, MODEL_WEIGHTS_FILE};

/// A directory expected to hold one sentence-transformers checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    dir: PathBuf,
}

impl ModelFiles {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> PathBuf {
        self.dir.join(MODEL_CONFIG_FILE)
    }

    pub fn tokenizer(&self) -> PathBuf {
        self.dir.join(MODEL_TOKENIZER_FILE)
    }

    pub fn weights(&self) -> PathBuf {
        self.dir.join(MODEL_WEIGHTS_FILE)
    }

    /// Returns the first required file that is absent.
    pub fn first_missing(&self) -> Option<PathBuf> {
        MODEL_FILES
            .iter()
            .map(|name| self.dir.join(name))
            .find(|path| !path.is_file())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

/// Cache subdirectory for a hub repository id (`org/name` becomes `org--name`).
pub fn cache_dir_for(cache_root: &Path, model_name: &str) -> PathBuf {
    cache_root.join(model_name.replace('/', "--"))
}

/// Resolves the model directory, downloading into the cache when allowed.
pub fn resolve_model_files(config: &EmbedderConfig) -> Result<ModelFiles, EmbeddingError> {
    if let Some(ref dir) = config.model_dir {
        let files = ModelFiles::new(dir);
        return match files.first_missing() {
            None => Ok(files),
            Some(path) => Err(EmbeddingError::ModelNotFound { path }),
        };
    }

    let files = ModelFiles::new(cache_dir_for(&config.cache_dir, &config.model_name));
    if files.is_complete() {
        debug!(dir = %files.dir().display(), "Using cached model files");
        return Ok(files);
    }

    if config.offline {
        return Err(EmbeddingError::ModelNotFound {
            path: files.dir().to_path_buf(),
        });
    }

    download_model(config, &files)?;
    Ok(files)
}

fn download_model(config: &EmbedderConfig, files: &ModelFiles) -> Result<(), EmbeddingError> {
    fs::create_dir_all(files.dir())?;

    let client = Client::builder()
        .timeout(config.load_timeout)
        .build()
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

    let base = config.hub_endpoint.trim_end_matches('/');
    for name in MODEL_FILES {
        let target = files.dir().join(name);
        if target.is_file() {
            continue;
        }

        let url = format!("{base}/{}/resolve/main/{name}", config.model_name);
        info!(url = %url, "Downloading model file");
        fetch_to(&client, &url, files.dir(), &target)?;
    }

    info!(
        model = %config.model_name,
        dir = %files.dir().display(),
        "Model files downloaded"
    );
    Ok(())
}

/// Streams `url` into a temp file next to `target`, then renames it into place
/// so a partial download never looks complete.
fn fetch_to(client: &Client, url: &str, dir: &Path, target: &Path) -> Result<(), EmbeddingError> {
    let download_failed = |reason: String| EmbeddingError::DownloadFailed {
        url: url.to_string(),
        reason,
    };

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| download_failed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(download_failed(format!("HTTP {}", response.status())));
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    let bytes = response
        .copy_to(&mut tmp)
        .map_err(|e| download_failed(e.to_string()))?;
    tmp.persist(target)
        .map_err(|e| EmbeddingError::from(io::Error::from(e)))?;

    debug!(url = %url, bytes, "Model file written");
    Ok(())
}
