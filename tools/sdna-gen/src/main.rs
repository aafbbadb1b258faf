// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! sdna-gen - build and inspect binary struct-layout catalogs.
//!
//! `generate` turns a record manifest (the introspection facts a frontend
//! reports) into a serialized catalog file; `dump` prints an existing
//! catalog. Exit statuses keep the output failure modes distinguishable:
//! 0 success, 1 open failure, 2 short write, 3 anything else.

use clap::{Parser, Subcommand};
use sdna::{build_catalog, encode_catalog, write_catalog, MemoryProvider, OutputError};
use sdna_gen::dump::dump_catalog;
use sdna_gen::manifest::{load_manifest, to_records};
use std::path::{Path, PathBuf};

/// Default catalog output file name.
const DEFAULT_OUTPUT: &str = "catalog.dna";

const EXIT_OPEN_FAILURE: i32 = 1;
const EXIT_SHORT_WRITE: i32 = 2;
const EXIT_OTHER_FAILURE: i32 = 3;

/// Build and inspect binary struct-layout catalogs
#[derive(Parser, Debug)]
#[command(name = "sdna-gen")]
#[command(version)]
#[command(about = "Build and inspect binary struct-layout catalogs (SDNA)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a catalog file from a record manifest (JSON or YAML)
    Generate {
        /// Record manifest path
        manifest: PathBuf,

        /// Output catalog path (overwritten if present)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
    },
    /// Decode a catalog file and print its contents
    Dump {
        /// Catalog file path
        catalog: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate { manifest, out } => generate(&manifest, &out),
        Command::Dump { catalog } => dump_catalog(&catalog),
    };

    if let Err(e) = result {
        eprintln!("[ERROR] {e:#}");
        std::process::exit(exit_code(&e));
    }
}

fn generate(manifest_path: &Path, out_path: &Path) -> anyhow::Result<()> {
    tracing::info!("loading manifest {}", manifest_path.display());
    let manifest = load_manifest(manifest_path)?;
    let provider = MemoryProvider::from_records(to_records(manifest));

    tracing::info!("building catalog");
    let catalog = build_catalog(&provider)?;

    tracing::info!("encoding {} structs", catalog.len());
    let bytes = encode_catalog(&catalog)?;

    write_catalog(out_path, &bytes)?;
    tracing::info!("wrote {} bytes to {}", bytes.len(), out_path.display());
    Ok(())
}

/// Map failures to the documented exit statuses; open failure and short
/// write stay distinct from each other and from success.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<OutputError>() {
        Some(OutputError::Open { .. }) => EXIT_OPEN_FAILURE,
        Some(OutputError::ShortWrite { .. }) => EXIT_SHORT_WRITE,
        None => EXIT_OTHER_FAILURE,
    }
}
