//! ndkmod-core: Android.mk generation for directories of prebuilt shared libraries.
//!
//! A prefix directory holds a `lib/` folder of prebuilt `.so` files. Every file
//! named `<module>-<rest>` (exactly one `-`) becomes a prebuilt shared module in
//! `<prefix>/Android.mk`, exporting `$(LOCAL_PATH)/include` to its dependents.
//!
//! ```rust,no_run
//! use ndkmod_core::generate::{generate, GenerateOptions};
//! use ndkmod_core::prefix::Prefix;
//!
//! let opts = GenerateOptions::new(Prefix::new(Some("build/ffmpeg"))).sorted(true);
//! let report = generate(&opts)?;
//!
//! println!("{} modules -> {}", report.modules.len(), report.descriptor_path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod descriptor;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod generate;
pub mod output;
pub mod prefix;

pub use error::GenerateError;
