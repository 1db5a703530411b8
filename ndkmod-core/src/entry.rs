//! Library naming convention for ndkmod-core

use serde::{Deserialize, Serialize};

/// Separator between the module name and the rest of a library file name.
pub const MODULE_SEPARATOR: char = '-';

/// A file from `lib/` that follows the `<module>-<rest>` naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub module_name: String,
    pub file_name: String,
}

impl LibraryEntry {
    /// Accept `file_name` only when splitting on `-` yields exactly two parts.
    ///
    /// Empty parts still count, so `-x` yields module `""` and `x-` yields module `x`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let mut parts = file_name.split(MODULE_SEPARATOR);
        let module = parts.next()?;
        parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            module_name: module.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Source path as referenced from the descriptor, e.g. `lib/libfoo-1.so`.
    pub fn src_file(&self) -> String {
        format!("{}/{}", crate::prefix::LIB_DIR_NAME, self.file_name)
    }
}
