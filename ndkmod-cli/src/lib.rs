//! ndkmod CLI

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing::debug;

use ndkmod_core::generate::{generate, generate_to, scan_libraries, GenerateOptions};
use ndkmod_core::output::{write_json_pretty, write_ndjson, write_plain};
use ndkmod_core::prefix::Prefix;

mod logger;

/// CLI entrypoint for ndkmod.
#[derive(Debug, Parser)]
#[command(
    name = "ndkmod",
    version,
    about = "Write an Android.mk describing every prebuilt shared library under <prefix>/lib"
)]
pub struct Cli {
    /// Prefix to the directory that contains the built `lib/` folder
    #[arg(
        short = 'p',
        long = "prefix",
        env = "NDKMOD_PREFIX",
        value_hint = ValueHint::DirPath
    )]
    prefix: Option<String>,

    /// Order modules by file name instead of directory listing order
    #[arg(long = "sort", action = ArgAction::SetTrue)]
    sort: bool,

    /// Print the descriptor to stdout instead of writing <prefix>/Android.mk
    #[arg(long = "stdout", action = ArgAction::SetTrue, conflicts_with = "list")]
    stdout: bool,

    /// List the modules that would be emitted without writing a descriptor
    #[arg(long = "list", action = ArgAction::SetTrue)]
    list: bool,

    /// Emit the module list as a single JSON array
    #[arg(
        long = "json",
        action = ArgAction::SetTrue,
        requires = "list",
        conflicts_with = "ndjson"
    )]
    json: bool,

    /// Emit the module list as newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue, requires = "list")]
    ndjson: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        GenerateOptions::new(Prefix::new(self.prefix.as_deref())).sorted(self.sort)
    }
}

/// Parse CLI args and execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    debug!(?cli, "parsed arguments");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(&cli, &mut handle)
}

fn execute(cli: &Cli, mut out: impl Write) -> Result<()> {
    let opts = cli.options();

    if cli.list {
        let scan = scan_libraries(&opts)?;
        if cli.ndjson {
            write_ndjson(&scan.modules, &mut out)?;
        } else if cli.json {
            write_json_pretty(&scan.modules, &mut out)?;
        } else {
            write_plain(&scan.modules, &mut out)?;
        }
        out.flush().context("failed to flush module list")?;
        return Ok(());
    }

    if cli.stdout {
        generate_to(&opts, &mut out)?;
        return Ok(());
    }

    let report = generate(&opts)?;
    debug!(
        path = %report.descriptor_path.display(),
        modules = report.modules.len(),
        "generation finished"
    );
    Ok(())
}
