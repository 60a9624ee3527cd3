//! Font store resource.
//!
//! A non-send resource that stores loaded fonts keyed by string IDs. Fonts
//! are loaded during setup and referenced by key when the debug overlay
//! renders text.
//!
//! Note: This is a non-send resource because raylib fonts must be accessed
//! from the main thread only.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

/// Map of font keys to loaded fonts.
///
/// Insert with `insert_non_send_resource` and access via `NonSend<FontStore>`
/// in system parameters.
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    /// Create an empty font store.
    pub fn new() -> Self {
        Self {
            fonts: FxHashMap::default(),
        }
    }

    /// Add a font with the given key.
    pub fn add(&mut self, id: impl Into<String>, font: Font) {
        self.fonts.insert(id.into(), font);
    }

    /// Get a font by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Font> {
        self.fonts.get(id.as_ref())
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}
