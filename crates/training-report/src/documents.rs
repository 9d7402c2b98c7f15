//! Reading and writing the JSON documents a report run consumes and produces.

use crate::workflows::training::Trainee;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads a whole JSON document into `T`.
pub fn read_document<T, P>(path: P) -> Result<T, DocumentError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(file, path)
}

/// Writes `value` as indented JSON, creating parent directories as needed.
pub fn write_document<T, P>(value: &T, path: P) -> Result<(), DocumentError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents =
        serde_json::to_string_pretty(value).map_err(|source| DocumentError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    let write_err = |source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)?;

    debug!(path = %path.display(), "wrote document");
    Ok(())
}

fn from_reader<T, R>(reader: R, origin: &Path) -> Result<T, DocumentError>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(std::io::BufReader::new(reader)).map_err(|source| {
        DocumentError::Parse {
            path: origin.to_path_buf(),
            source,
        }
    })
}

/// Loader for the trainee roster document: a JSON array of trainees.
pub struct RosterDocument;

impl RosterDocument {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Trainee>, DocumentError> {
        let path = path.as_ref();
        let trainees: Vec<Trainee> = read_document(path)?;
        debug!(path = %path.display(), trainees = trainees.len(), "loaded roster");
        Ok(trainees)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Trainee>, DocumentError> {
        from_reader(reader, Path::new("<reader>"))
    }
}
