//! End-to-end descriptor generation for ndkmod-core

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::descriptor::write_descriptor;
use crate::discovery::{LibDirDiscovery, LibraryDiscovery};
use crate::entry::LibraryEntry;
use crate::error::{GenerateError, Result};
use crate::prefix::Prefix;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub prefix: Prefix,
    /// Sort `lib/` entries by file name instead of keeping listing order.
    pub sorted: bool,
}

impl GenerateOptions {
    pub fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            sorted: false,
        }
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

/// Modules that matched the naming convention, in emit order, plus the names that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryScan {
    pub modules: Vec<LibraryEntry>,
    pub skipped: Vec<String>,
}

impl LibraryScan {
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut scan = Self::default();

        for raw in names {
            let Some(name) = raw.to_str() else {
                let lossy = raw.to_string_lossy().into_owned();
                warn!(name = %lossy, "skipping library entry with non UTF-8 name");
                scan.skipped.push(lossy);
                continue;
            };

            match LibraryEntry::parse(name) {
                Some(entry) => scan.modules.push(entry),
                None => {
                    debug!(name, "skipping library entry without a single '-' separator");
                    scan.skipped.push(name.to_string());
                }
            }
        }

        scan
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub descriptor_path: PathBuf,
    pub modules: Vec<LibraryEntry>,
    pub skipped: Vec<String>,
}

/// List `<prefix>/lib` and classify its entries without writing anything.
pub fn scan_libraries(opts: &GenerateOptions) -> Result<LibraryScan> {
    let discovery = LibDirDiscovery::new(opts.prefix.lib_dir()).sorted(opts.sorted);
    scan_with(&discovery)
}

pub fn scan_with(discovery: &impl LibraryDiscovery) -> Result<LibraryScan> {
    Ok(LibraryScan::from_names(discovery.discover()?))
}

/// Write `<prefix>/Android.mk` for every qualifying entry of `<prefix>/lib`.
///
/// The library directory is listed before the descriptor is opened, so an
/// input failure never truncates an existing descriptor.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateReport> {
    let scan = scan_libraries(opts)?;
    let descriptor_path = opts.prefix.descriptor_path();

    let file = File::create(&descriptor_path)
        .map_err(|err| GenerateError::output(&descriptor_path, err))?;
    let mut w = BufWriter::new(file);
    write_descriptor(&scan.modules, &mut w)
        .and_then(|()| w.flush())
        .map_err(|err| GenerateError::output(&descriptor_path, err))?;

    info!(
        path = %descriptor_path.display(),
        modules = scan.modules.len(),
        skipped = scan.skipped.len(),
        "wrote descriptor"
    );

    Ok(GenerateReport {
        descriptor_path,
        modules: scan.modules,
        skipped: scan.skipped,
    })
}

/// Render the descriptor for `<prefix>/lib` into `w` instead of a file.
pub fn generate_to(opts: &GenerateOptions, mut w: impl Write) -> Result<LibraryScan> {
    let scan = scan_libraries(opts)?;
    write_descriptor(&scan.modules, &mut w)
        .and_then(|()| w.flush())
        .map_err(|err| GenerateError::output("<stdout>", err))?;
    Ok(scan)
}
