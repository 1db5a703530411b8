//! Prefix handling for ndkmod-core

use std::path::{Path, PathBuf};

/// File name of the descriptor written under the prefix.
pub const DESCRIPTOR_FILE_NAME: &str = "Android.mk";

/// Name of the directory under the prefix that holds the prebuilt libraries.
pub const LIB_DIR_NAME: &str = "lib";

/// Base directory under which `lib/` is read and `Android.mk` is written.
///
/// An empty prefix means the current directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix {
    root: PathBuf,
}

impl Prefix {
    pub fn new(raw: Option<&str>) -> Self {
        let root = match raw {
            Some(raw) if !raw.is_empty() => PathBuf::from(raw),
            _ => PathBuf::new(),
        };
        Self { root }
    }

    pub fn is_current_dir(&self) -> bool {
        self.root.as_os_str().is_empty()
    }

    /// `<prefix>/Android.mk`, or a bare relative `Android.mk` for the current directory.
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_FILE_NAME)
    }

    /// `<prefix>/lib`, or a bare relative `lib` for the current directory.
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(LIB_DIR_NAME)
    }
}

impl From<&Path> for Prefix {
    fn from(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }
}

impl From<PathBuf> for Prefix {
    fn from(root: PathBuf) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_resolves_to_current_dir() {
        for prefix in [Prefix::new(None), Prefix::new(Some(""))] {
            assert!(prefix.is_current_dir());
            assert_eq!(prefix.descriptor_path(), PathBuf::from("Android.mk"));
            assert_eq!(prefix.lib_dir(), PathBuf::from("lib"));
        }
    }

    #[test]
    fn trailing_separator_is_optional() {
        let bare = Prefix::new(Some("build"));
        let slashed = Prefix::new(Some("build/"));

        assert_eq!(bare.descriptor_path(), PathBuf::from("build/Android.mk"));
        assert_eq!(bare.lib_dir(), PathBuf::from("build/lib"));
        assert_eq!(bare.descriptor_path(), slashed.descriptor_path());
        assert_eq!(bare.lib_dir(), slashed.lib_dir());
    }
}
