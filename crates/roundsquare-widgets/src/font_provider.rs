//! Font lookup by asset name.

use roundsquare_core::{Font, FontError, FontMetrics};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves font asset names to fonts.
pub trait FontProvider: Send + Sync {
    /// Look up `name`. A blank name selects the default font.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::NotFound`] if no font is known under `name`.
    fn resolve(&self, name: &str) -> Result<Font, FontError>;
}

/// Provider that only knows the default font.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFontProvider;

impl FontProvider for DefaultFontProvider {
    fn resolve(&self, name: &str) -> Result<Font, FontError> {
        if name.trim().is_empty() {
            Ok(Font::default_font())
        } else {
            Err(FontError::NotFound(name.to_string()))
        }
    }
}

/// In-memory font registry keyed by asset name (e.g. `"digits.ttf"`).
#[derive(Default)]
pub struct FontRegistry {
    fonts: HashMap<String, Font>,
}

impl FontRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font, replacing any previous one with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::InvalidName`] for blank names and names that
    /// contain path components.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        metrics: Arc<dyn FontMetrics>,
    ) -> Result<(), FontError> {
        let name = name.into();
        validate_name(&name)?;
        let font = Font::new(name.clone(), metrics);
        self.fonts.insert(name, font);
        Ok(())
    }

    /// Builder form of [`FontRegistry::register`].
    ///
    /// # Errors
    ///
    /// Same as [`FontRegistry::register`].
    pub fn with_font(
        mut self,
        name: impl Into<String>,
        metrics: Arc<dyn FontMetrics>,
    ) -> Result<Self, FontError> {
        self.register(name, metrics)?;
        Ok(self)
    }

    /// Whether a font is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Number of registered fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no fonts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fonts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FontProvider for FontRegistry {
    fn resolve(&self, name: &str) -> Result<Font, FontError> {
        if name.trim().is_empty() {
            return Ok(Font::default_font());
        }
        self.fonts
            .get(name)
            .cloned()
            .ok_or_else(|| FontError::NotFound(name.to_string()))
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("fonts", &self.names())
            .finish()
    }
}

fn validate_name(name: &str) -> Result<(), FontError> {
    let reason = if name.trim().is_empty() {
        "name is blank"
    } else if name.contains(['/', '\\']) {
        "path separators are not allowed"
    } else if name == "." || name == ".." {
        "relative path components are not allowed"
    } else {
        return Ok(());
    };
    Err(FontError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
