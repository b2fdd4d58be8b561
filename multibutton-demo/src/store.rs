//! File-backed storage for the saved selection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use multibutton::{MultiButtonError, SavedState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    State(#[from] MultiButtonError),
}

/// Reads and writes a [`SavedState`] at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved state. A missing file means nothing was saved yet.
    pub fn load(&self) -> Result<Option<SavedState>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = SavedState::from_bytes(&bytes)?;
        debug!("Loaded saved state from {}", self.path.display());
        Ok(Some(state))
    }

    pub fn save(&self, state: &SavedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, state.to_bytes()?)?;
        debug!("Saved state to {}", self.path.display());
        Ok(())
    }

    /// Delete the saved state, if any.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
