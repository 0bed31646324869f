// SPDX-License-Identifier: MPL-2.0
//! Suffix-based codec dispatch.

use crate::application::port::ImageCodec;
use crate::infrastructure::WebpCodec;
use std::fmt;
use std::path::Path;

/// Suffix recognized by the default registry.
pub const WEBP_SUFFIX: &str = ".webp";

/// Maps case-sensitive filename suffixes to the codec that decodes them.
///
/// New formats are added with [`CodecRegistry::register`]; neither the
/// loader nor the viewer needs to change.
pub struct CodecRegistry {
    entries: Vec<(&'static str, Box<dyn ImageCodec>)>,
}

impl CodecRegistry {
    /// Creates a registry that recognizes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `codec` for paths ending in `suffix` (e.g. `".webp"`).
    ///
    /// Later registrations for the same suffix take precedence.
    pub fn register(&mut self, suffix: &'static str, codec: impl ImageCodec + 'static) {
        self.entries.insert(0, (suffix, Box::new(codec)));
    }

    /// Returns the codec responsible for `path`, if any suffix matches.
    ///
    /// Matching is byte-wise and case-sensitive: `photo.WEBP` is not a
    /// WebP file for the default registry.
    #[must_use]
    pub fn codec_for(&self, path: &Path) -> Option<&dyn ImageCodec> {
        let name = path.as_os_str().as_encoded_bytes();
        self.entries
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix.as_bytes()))
            .map(|(_, codec)| codec.as_ref())
    }

    /// Returns the recognized suffixes, most recently registered first.
    pub fn suffixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(suffix, _)| *suffix)
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(WEBP_SUFFIX, WebpCodec);
        registry
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(suffix, codec)| (suffix, codec.name())))
            .finish()
    }
}
