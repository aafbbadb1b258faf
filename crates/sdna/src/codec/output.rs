// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Catalog file output.
//!
//! Writes an encoded catalog to its destination path, overwriting existing
//! content. The two failure modes stay distinct so the driver can exit with
//! different statuses for each.

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Output failure modes, kept independently distinguishable.
#[derive(Debug)]
pub enum OutputError {
    /// The destination could not be opened for writing.
    Open {
        /// Destination path.
        path: PathBuf,
        /// Underlying open error.
        source: std::io::Error,
    },
    /// Fewer bytes reached the destination than the encoded buffer holds.
    ShortWrite {
        /// Bytes successfully written.
        written: usize,
        /// Bytes the encoded buffer holds.
        expected: usize,
        /// Underlying write error, if the write failed rather than stalled.
        source: Option<std::io::Error>,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Open { path, source } => {
                write!(f, "failed to open {} for writing: {source}", path.display())
            }
            OutputError::ShortWrite {
                written, expected, ..
            } => write!(f, "short write: {written} of {expected} bytes"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Open { source, .. } => Some(source),
            OutputError::ShortWrite { source, .. } => {
                source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// Write the encoded catalog bytes to `path`, truncating existing content.
pub fn write_catalog(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    let mut file = File::create(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    while written < bytes.len() {
        match file.write(&bytes[written..]) {
            Ok(0) => {
                return Err(OutputError::ShortWrite {
                    written,
                    expected: bytes.len(),
                    source: None,
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                return Err(OutputError::ShortWrite {
                    written,
                    expected: bytes.len(),
                    source: Some(e),
                })
            }
        }
    }

    log::debug!("wrote {} catalog bytes to {}", bytes.len(), path.display());
    Ok(())
}
