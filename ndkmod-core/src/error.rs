//! Error types for ndkmod-core

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// The library directory is missing or unreadable.
    #[error("cannot read library directory {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The descriptor could not be created, written or flushed.
    #[error("cannot write descriptor {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Input { path, .. } | Self::Output { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
