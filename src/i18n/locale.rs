//! Locale type: Flexible, validated locale representation.
//!
//! A `Locale` can only be constructed for codes that exist in the registry
//! and are enabled, so the rest of the crate never has to re-check codes.

use crate::i18n::{LocaleConfig, LocaleRegistry, SiteStrings};
use anyhow::{bail, Result};

/// A validated locale.
///
/// This type represents a locale that has been validated against the registry.
/// It ensures that only supported, enabled locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "es", "en")
    code: &'static str,
}

impl Locale {
    /// The default locale: base content is authored in Spanish.
    pub const SPANISH: Locale = Locale { code: "es" };

    /// English, served under the `/en` path prefix.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "es", "en")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default locale.
    ///
    /// This is the locale all base content is authored in; its paths carry
    /// no locale prefix.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the localized site strings for this locale.
    pub fn strings(&self) -> &'static SiteStrings {
        self.config().strings
    }

    /// Get the English name of the locale (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
