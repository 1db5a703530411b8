//! Android.mk rendering for ndkmod-core
//!
//! A descriptor is a fixed header followed by one module block per library:
//!
//! ```text
//! LOCAL_PATH:= $(call my-dir)
//!
//! include $(CLEAR_VARS)
//! LOCAL_MODULE:= libfoo
//! LOCAL_SRC_FILES:= lib/libfoo-1.so
//! LOCAL_EXPORT_C_INCLUDES := $(LOCAL_PATH)/include
//! include $(PREBUILT_SHARED_LIBRARY)
//!
//! ```

use std::io::{self, Write};

use crate::entry::LibraryEntry;

pub const HEADER: &str = "LOCAL_PATH:= $(call my-dir)\n\n";

/// Include path exported to dependents, relative to the descriptor's directory.
pub const EXPORT_INCLUDES: &str = "$(LOCAL_PATH)/include";

/// Write the descriptor header once.
pub fn write_header(mut w: impl Write) -> io::Result<()> {
    w.write_all(HEADER.as_bytes())
}

/// Write the five-directive block for one library, followed by a blank line.
pub fn write_module_block(entry: &LibraryEntry, mut w: impl Write) -> io::Result<()> {
    writeln!(w, "include $(CLEAR_VARS)")?;
    writeln!(w, "LOCAL_MODULE:= {}", entry.module_name)?;
    writeln!(w, "LOCAL_SRC_FILES:= {}", entry.src_file())?;
    writeln!(w, "LOCAL_EXPORT_C_INCLUDES := {EXPORT_INCLUDES}")?;
    writeln!(w, "include $(PREBUILT_SHARED_LIBRARY)")?;
    writeln!(w)
}

/// Write the full descriptor: header, then one block per entry in the given order.
pub fn write_descriptor(entries: &[LibraryEntry], mut w: impl Write) -> io::Result<()> {
    write_header(&mut w)?;
    for entry in entries {
        write_module_block(entry, &mut w)?;
    }
    Ok(())
}

pub fn render_descriptor(entries: &[LibraryEntry]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_descriptor(entries, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
