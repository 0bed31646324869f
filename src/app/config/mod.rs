// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, read from a
//! `settings.toml` file. The viewer never writes the file.
//!
//! # Configuration Sections
//!
//! - `[loading]` - What to do with files the codec rejects
//! - `[viewer]` - Pixel probe output
//! - `[window]` - Bounds for the initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (`--config-dir`)
//! 3. Set `ICED_PEEK_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_peek::app::config;
//!
//! // Missing files yield defaults; unreadable ones add a warning.
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("[WARN] {message}");
//! }
//! let options = config.session_options();
//! assert!(options.max_initial_size.width >= config::MIN_INITIAL_DIMENSION);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::WindowSize;
use crate::error::Result;
use crate::media::DecodeFailurePolicy;
use crate::viewer::SessionOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadingConfig {
    /// Abort on corrupt files, or replace them with placeholders.
    #[serde(
        default = "default_decode_failure",
        skip_serializing_if = "Option::is_none"
    )]
    pub decode_failure: Option<DecodeFailurePolicy>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            decode_failure: default_decode_failure(),
        }
    }
}

/// Viewer behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Print `(x,y): (r, g, b)` lines while the cursor moves over the image.
    #[serde(
        default = "default_pixel_probe",
        skip_serializing_if = "Option::is_none"
    )]
    pub pixel_probe: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pixel_probe: default_pixel_probe(),
        }
    }
}

/// Window geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_initial_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_initial_height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_initial_width: Some(DEFAULT_MAX_INITIAL_WIDTH),
            max_initial_height: Some(DEFAULT_MAX_INITIAL_HEIGHT),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub loading: LoadingConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Effective decode failure policy.
    #[must_use]
    pub fn decode_failure(&self) -> DecodeFailurePolicy {
        self.loading
            .decode_failure
            .unwrap_or(DEFAULT_DECODE_FAILURE)
    }

    /// Session tunables with defaults filled in and bounds clamped.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        let width = self
            .window
            .max_initial_width
            .unwrap_or(DEFAULT_MAX_INITIAL_WIDTH)
            .max(MIN_INITIAL_DIMENSION);
        let height = self
            .window
            .max_initial_height
            .unwrap_or(DEFAULT_MAX_INITIAL_HEIGHT)
            .max(MIN_INITIAL_DIMENSION);

        SessionOptions {
            max_initial_size: WindowSize::new(width, height),
            pixel_probe: self.viewer.pixel_probe.unwrap_or(DEFAULT_PIXEL_PROBE),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_decode_failure() -> Option<DecodeFailurePolicy> {
    Some(DEFAULT_DECODE_FAILURE)
}

fn default_pixel_probe() -> Option<bool> {
    Some(DEFAULT_PIXEL_PROBE)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Ignoring {}: {}; using defaults",
                            path.display(),
                            err
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
