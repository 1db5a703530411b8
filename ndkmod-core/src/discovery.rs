//! Library discovery helpers for ndkmod-core

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{GenerateError, Result};

/// Trait for enumerating the raw entry names of a library directory.
pub trait LibraryDiscovery {
    fn discover(&self) -> Result<Vec<OsString>>;
}

/// Non-recursive listing of a single `lib/` directory.
///
/// Every entry kind is reported (files, symlinks, subdirectories). Order is the
/// directory listing order unless sorting is enabled.
#[derive(Debug, Clone)]
pub struct LibDirDiscovery {
    lib_dir: PathBuf,
    sorted: bool,
}

impl LibDirDiscovery {
    pub fn new(lib_dir: impl Into<PathBuf>) -> Self {
        Self {
            lib_dir: lib_dir.into(),
            sorted: false,
        }
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

impl LibraryDiscovery for LibDirDiscovery {
    fn discover(&self) -> Result<Vec<OsString>> {
        let meta = fs::metadata(&self.lib_dir)
            .map_err(|err| GenerateError::input(&self.lib_dir, err))?;
        if !meta.is_dir() {
            return Err(GenerateError::input(
                &self.lib_dir,
                io::Error::other("not a directory"),
            ));
        }

        let mut walker = WalkDir::new(&self.lib_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut found = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| GenerateError::input(&self.lib_dir, err.into()))?;
            found.push(entry.file_name().to_os_string());
        }

        Ok(found)
    }
}
