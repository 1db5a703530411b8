//! End-to-end generation against real directories.
use std::fs;
use std::path::Path;

use ndkmod_core::generate::{generate, scan_libraries, GenerateOptions};
use ndkmod_core::prefix::Prefix;
use ndkmod_core::GenerateError;

const BLOCK_FOO: &str = "include $(CLEAR_VARS)\n\
                         LOCAL_MODULE:= libfoo\n\
                         LOCAL_SRC_FILES:= lib/libfoo-1.so\n\
                         LOCAL_EXPORT_C_INCLUDES := $(LOCAL_PATH)/include\n\
                         include $(PREBUILT_SHARED_LIBRARY)\n\
                         \n";

fn make_lib(prefix: &Path, names: &[&str]) {
    let lib = prefix.join("lib");
    fs::create_dir_all(&lib).unwrap();
    for name in names {
        fs::write(lib.join(name), b"").unwrap();
    }
}

#[test]
fn emits_only_single_separator_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    let prefix = temp.path().join("build");
    make_lib(&prefix, &["libfoo-1.so", "libbar.so", "x-y-z"]);

    let opts = GenerateOptions::new(Prefix::from(prefix.clone()));
    let report = generate(&opts).expect("generate");

    assert_eq!(report.descriptor_path, prefix.join("Android.mk"));
    assert_eq!(report.modules.len(), 1);
    assert_eq!(report.modules[0].module_name, "libfoo");

    let text = fs::read_to_string(prefix.join("Android.mk")).expect("read descriptor");
    assert_eq!(text, format!("LOCAL_PATH:= $(call my-dir)\n\n{BLOCK_FOO}"));
}

#[test]
fn prefix_string_with_trailing_separator() {
    let temp = tempfile::tempdir().expect("tempdir");
    make_lib(temp.path(), &["libfoo-1.so"]);

    let raw = format!("{}/", temp.path().display());
    let report = generate(&GenerateOptions::new(Prefix::new(Some(&raw)))).expect("generate");

    assert!(report.descriptor_path.ends_with("Android.mk"));
    assert!(temp.path().join("Android.mk").is_file());
}

#[test]
fn rerun_is_byte_identical_and_truncates() {
    let temp = tempfile::tempdir().expect("tempdir");
    make_lib(temp.path(), &["libavcodec-57.so", "libavutil-55.so", "libswscale-4.so"]);
    let descriptor = temp.path().join("Android.mk");
    fs::write(&descriptor, "stale content that is much longer than nothing\n".repeat(100)).unwrap();

    let opts = GenerateOptions::new(Prefix::from(temp.path()));
    generate(&opts).expect("first run");
    let first = fs::read(&descriptor).unwrap();
    generate(&opts).expect("second run");
    let second = fs::read(&descriptor).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8_lossy(&first).contains("stale"));
}

#[test]
fn missing_lib_dir_leaves_existing_descriptor_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let descriptor = temp.path().join("Android.mk");
    fs::write(&descriptor, "keep me\n").unwrap();

    let err = generate(&GenerateOptions::new(Prefix::from(temp.path()))).unwrap_err();

    assert!(matches!(err, GenerateError::Input { .. }));
    assert_eq!(fs::read_to_string(&descriptor).unwrap(), "keep me\n");
}

#[test]
fn missing_lib_dir_writes_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");

    let result = generate(&GenerateOptions::new(Prefix::from(temp.path())));

    assert!(result.is_err());
    assert!(!temp.path().join("Android.mk").exists());
}

#[test]
fn unwritable_descriptor_is_an_output_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    make_lib(temp.path(), &["libfoo-1.so"]);
    // A directory where the descriptor should go cannot be opened as a file.
    fs::create_dir(temp.path().join("Android.mk")).unwrap();

    let err = generate(&GenerateOptions::new(Prefix::from(temp.path()))).unwrap_err();

    assert!(matches!(err, GenerateError::Output { .. }));
    assert_eq!(err.path(), &temp.path().join("Android.mk"));
}

#[test]
fn sorted_scan_orders_modules_by_file_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    make_lib(temp.path(), &["libz-1.so", "liba-1.so", "libm-1.so", "README"]);

    let opts = GenerateOptions::new(Prefix::from(temp.path())).sorted(true);
    let scan = scan_libraries(&opts).expect("scan");

    let names: Vec<&str> = scan.modules.iter().map(|m| m.module_name.as_str()).collect();
    assert_eq!(names, vec!["liba", "libm", "libz"]);
    assert_eq!(scan.skipped, vec!["README"]);
}
