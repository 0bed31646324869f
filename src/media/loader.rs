// SPDX-License-Identifier: MPL-2.0
//! Batch loading of the command-line files into an [`ImageCollection`].
//!
//! Policy per path, in argument order:
//! 1. A file that cannot be opened aborts the whole batch.
//! 2. A path without a registered suffix becomes a placeholder entry and a
//!    warning; the batch continues.
//! 3. A recognized file is read whole, decoded, and stored. What happens on
//!    a decode failure depends on [`DecodeFailurePolicy`].

use crate::domain::media::DecodedImage;
use crate::error::{Error, Result};
use crate::media::registry::CodecRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

// =============================================================================
// Collection
// =============================================================================

/// One input file and what it decoded to.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// The path exactly as given on the command line.
    pub path: PathBuf,
    /// Decoded pixels, or a placeholder for undisplayable files.
    pub image: DecodedImage,
}

impl ImageEntry {
    /// Window title for this entry.
    #[must_use]
    pub fn title(&self) -> String {
        self.path.display().to_string()
    }
}

/// Ordered images, one per input path, in argument order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageCollection {
    entries: Vec<ImageEntry>,
}

impl ImageCollection {
    #[must_use]
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }

    /// Index of the first entry with actual pixels.
    #[must_use]
    pub fn first_displayable(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| !entry.image.is_placeholder())
    }

    /// Number of entries with actual pixels.
    #[must_use]
    pub fn displayable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.image.is_placeholder())
            .count()
    }
}

// =============================================================================
// Policy & Reporting
// =============================================================================

/// What to do when a correctly named file fails to decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeFailurePolicy {
    /// Stop the whole run with [`Error::Decode`].
    #[default]
    Abort,
    /// Record a placeholder and a warning, like an unsupported format.
    Placeholder,
}

impl std::str::FromStr for DecodeFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(format!(
                "invalid decode failure policy: {other} (expected abort or placeholder)"
            )),
        }
    }
}

/// Recoverable problems recorded while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// No codec is registered for the path's suffix.
    UnsupportedFormat { path: PathBuf },
    /// The codec rejected the file and the policy asked to continue.
    DecodeFailed { path: PathBuf, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnsupportedFormat { path } => {
                write!(f, "Unknown format: {}", path.display())
            }
            LoadWarning::DecodeFailed { path, reason } => {
                write!(f, "Could not decode {}: {}", path.display(), reason)
            }
        }
    }
}

/// Receives loader side effects (progress and warnings).
pub trait LoadReporter {
    /// Called before decoding entry `index` (1-based) of `total`.
    fn progress(&mut self, index: usize, total: usize);

    fn warning(&mut self, warning: &LoadWarning);

    /// Called once after the last entry was processed.
    fn finished(&mut self) {}
}

/// Prints progress on a single rewritten stdout line and warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    progress_open: bool,
}

impl ConsoleReporter {
    fn close_progress_line(&mut self) {
        if self.progress_open {
            println!();
            self.progress_open = false;
        }
    }
}

impl LoadReporter for ConsoleReporter {
    fn progress(&mut self, index: usize, total: usize) {
        let mut stdout = std::io::stdout().lock();
        // Progress output is best effort; a closed stdout must not abort loading.
        let _ = write!(stdout, "\rDecoding {index:>3}/{total}");
        let _ = stdout.flush();
        self.progress_open = true;
    }

    fn warning(&mut self, warning: &LoadWarning) {
        self.close_progress_line();
        eprintln!("[WARN] {warning}");
    }

    fn finished(&mut self) {
        self.close_progress_line();
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Loads every path into an [`ImageCollection`] of the same length and order.
///
/// # Errors
///
/// - [`Error::FileNotFound`] if any path cannot be opened for reading
/// - [`Error::Decode`] if a recognized file fails to decode and `policy`
///   is [`DecodeFailurePolicy::Abort`]
pub fn load_collection(
    paths: &[PathBuf],
    registry: &CodecRegistry,
    policy: DecodeFailurePolicy,
    reporter: &mut dyn LoadReporter,
) -> Result<ImageCollection> {
    let total = paths.len();
    let mut entries = Vec::with_capacity(total);

    for (position, path) in paths.iter().enumerate() {
        ensure_readable(path)?;

        let image = match registry.codec_for(path) {
            Some(codec) => {
                reporter.progress(position + 1, total);
                // The raw blob lives only for the duration of this decode.
                let bytes = fs::read(path).map_err(|e| Error::file_not_found(path, &e))?;
                match codec.decode(&bytes) {
                    Ok(image) => image,
                    Err(err) => match policy {
                        DecodeFailurePolicy::Abort => return Err(Error::decode(path, &err)),
                        DecodeFailurePolicy::Placeholder => {
                            reporter.warning(&LoadWarning::DecodeFailed {
                                path: path.clone(),
                                reason: err.to_string(),
                            });
                            DecodedImage::placeholder()
                        }
                    },
                }
            }
            None => {
                reporter.warning(&LoadWarning::UnsupportedFormat { path: path.clone() });
                DecodedImage::placeholder()
            }
        };

        entries.push(ImageEntry {
            path: path.clone(),
            image,
        });
    }

    reporter.finished();
    Ok(ImageCollection::new(entries))
}

fn ensure_readable(path: &Path) -> Result<()> {
    File::open(path)
        .map(drop)
        .map_err(|e| Error::file_not_found(path, &e))
}
