//! Module listing output helpers for ndkmod-core

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::entry::LibraryEntry;

/// Serialized view of one module, including the source path the descriptor references.
#[derive(Debug, Serialize)]
struct ModuleRecord<'a> {
    module_name: &'a str,
    file_name: &'a str,
    src_file: String,
}

impl<'a> From<&'a LibraryEntry> for ModuleRecord<'a> {
    fn from(entry: &'a LibraryEntry) -> Self {
        Self {
            module_name: &entry.module_name,
            file_name: &entry.file_name,
            src_file: entry.src_file(),
        }
    }
}

/// Write modules as a prettified JSON array.
pub fn write_json_pretty(modules: &[LibraryEntry], mut w: impl Write) -> Result<()> {
    let records: Vec<ModuleRecord<'_>> = modules.iter().map(ModuleRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write modules as newline-delimited JSON (NDJSON).
pub fn write_ndjson(modules: &[LibraryEntry], mut w: impl Write) -> Result<()> {
    for item in modules {
        let line = serde_json::to_string(&ModuleRecord::from(item))?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Write one `module<TAB>lib/file` line per module.
pub fn write_plain(modules: &[LibraryEntry], mut w: impl Write) -> Result<()> {
    for item in modules {
        writeln!(w, "{}\t{}", item.module_name, item.src_file())?;
    }
    Ok(())
}
