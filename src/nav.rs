//! Navigation model: the static ordered menu and its per-locale rendering.
//!
//! Navigation is stricter than content: every item must carry a label for
//! every enabled locale. A missing label is a configuration defect surfaced
//! at startup (`validate()`), never papered over with a fallback at render
//! time.

use crate::i18n::{Locale, LocaleRegistry};
use crate::routing;
use serde::Serialize;
use thiserror::Error;

/// Navigation configuration defects. These fail startup; they are not
/// runtime conditions to recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavConfigError {
    #[error("navigation item '{canonical_path}' has no label for locale '{locale}'")]
    MissingLabel {
        canonical_path: &'static str,
        locale: &'static str,
    },

    #[error("duplicate canonical path '{0}' in the navigation")]
    DuplicatePath(&'static str),

    #[error("canonical path '{0}' begins with a locale code and would be mis-parsed")]
    LocalePrefixedPath(&'static str),
}

/// A static entry in the site's primary menu.
pub struct NavItem {
    pub canonical_path: &'static str,
    /// (locale code, label) pairs; completeness enforced by `validate()`
    labels: &'static [(&'static str, &'static str)],
}

impl NavItem {
    fn label_for(&self, locale: Locale) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(code, _)| *code == locale.code())
            .map(|(_, label)| *label)
    }
}

/// One rendered menu entry for the active locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub localized_path: String,
    pub label: &'static str,
    pub is_active: bool,
}

/// The site's primary menu, in render order.
const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        canonical_path: "/",
        labels: &[("es", "Inicio"), ("en", "Home")],
    },
    NavItem {
        canonical_path: "/projects",
        labels: &[("es", "Proyectos"), ("en", "Projects")],
    },
    NavItem {
        canonical_path: "/experience",
        labels: &[("es", "Experiencia"), ("en", "Experience")],
    },
    NavItem {
        canonical_path: "/certifications",
        labels: &[("es", "Certificaciones"), ("en", "Certifications")],
    },
    NavItem {
        canonical_path: "/blog",
        labels: &[("es", "Blog"), ("en", "Blog")],
    },
    NavItem {
        canonical_path: "/contact",
        labels: &[("es", "Contacto"), ("en", "Contact")],
    },
];

/// Render the menu for a locale against the observed request path.
///
/// # Panics
/// Panics if a label is missing for the locale. `validate()` runs at
/// startup precisely so this cannot happen in a running server.
pub fn menu_for(locale: Locale, active_path: &str) -> Vec<MenuEntry> {
    let canonical_active = routing::delocalize(active_path);

    NAV_ITEMS
        .iter()
        .map(|item| MenuEntry {
            localized_path: routing::localize(item.canonical_path, locale),
            label: item
                .label_for(locale)
                .expect("Navigation labels are validated at startup"),
            is_active: is_active(item.canonical_path, &canonical_active),
        })
        .collect()
}

/// Active rule: the root item matches exactly only; every other item
/// matches exactly or when the active path is a strict segment descendant
/// (`/blog/post` activates `/blog`; `/blogging` does not).
fn is_active(canonical_path: &str, canonical_active: &str) -> bool {
    if canonical_path == "/" {
        return canonical_active == "/";
    }

    canonical_active == canonical_path
        || canonical_active
            .strip_prefix(canonical_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Check the navigation table against the locale registry.
///
/// Called from `main` before the server binds, and from tests, so label
/// gaps and duplicate paths are caught before any request is served.
pub fn validate() -> Result<(), NavConfigError> {
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        if NAV_ITEMS[..i]
            .iter()
            .any(|other| other.canonical_path == item.canonical_path)
        {
            return Err(NavConfigError::DuplicatePath(item.canonical_path));
        }

        // A canonical path starting with a non-default locale code would
        // collide with the locale prefix and break delocalization
        if let Some(first) = item.canonical_path.trim_start_matches('/').split('/').next() {
            let registry = LocaleRegistry::get();
            if !first.is_empty() && registry.is_enabled(first) {
                if let Some(config) = registry.get_by_code(first) {
                    if !config.is_default {
                        return Err(NavConfigError::LocalePrefixedPath(item.canonical_path));
                    }
                }
            }
        }

        for locale in LocaleRegistry::get().list_enabled() {
            if !item.labels.iter().any(|(code, _)| *code == locale.code) {
                return Err(NavConfigError::MissingLabel {
                    canonical_path: item.canonical_path,
                    locale: locale.code,
                });
            }
        }
    }

    Ok(())
}
