//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales supported by the
//! site. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access. The set is fixed at build time; changing it
//! means redeploying.

use crate::i18n::strings::{self, SiteStrings};
use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its code, names,
/// enabled status, whether it's the default locale, and its site strings.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "es", "en")
    pub code: &'static str,

    /// English name of the locale (e.g., "Spanish", "English")
    pub name: &'static str,

    /// Native name of the locale (e.g., "Español", "English")
    pub native_name: &'static str,

    /// Whether this is the default locale (only one should be true).
    ///
    /// The default locale is the one content is authored in; its paths carry
    /// no locale prefix.
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,

    /// Localized site-level strings for this locale
    pub strings: &'static SiteStrings,
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains immutable
/// thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "es", "en")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry (menu) order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the one all base content is authored in
    /// (Spanish). There should be exactly one default locale.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// Spanish is the default locale (all base content is authored in Spanish);
/// English is served under the `/en` path prefix.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: true,
            enabled: true,
            strings: &strings::SPANISH_STRINGS,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
            strings: &strings::ENGLISH_STRINGS,
        },
    ]
}
