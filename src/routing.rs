//! Path localizer: maps canonical (locale-free) paths to locale-prefixed
//! paths and back, and extracts the active locale from an observed path.
//!
//! Rules are deliberately narrow and testable:
//! - Default-locale paths carry no prefix; non-default paths always do.
//! - Only the first path segment is ever checked against the locale set, so
//!   a canonical segment that happens to equal a locale code anywhere else
//!   is never touched.
//! - `localize(delocalize(p), resolve_locale(p)) == p` for any valid
//!   observed path `p`.
//!
//! An observed path with an unknown leading segment (e.g. `/fr/projects`)
//! is not an error here; it resolves to the default locale and routing-miss
//! handling stays with the caller.

use crate::i18n::{Locale, LocaleRegistry};

/// Normalize a path for comparison: ensure a leading `/`, drop trailing
/// slashes, map empty input to `/`.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Build the localized path for a canonical path and a target locale.
///
/// The default locale returns the canonical path unchanged. For non-default
/// locales the path is prefixed with `/{code}`; the root maps to `/{code}`
/// rather than `/{code}/`.
pub fn localize(canonical_path: &str, locale: Locale) -> String {
    let canonical = normalize(canonical_path);

    if locale.is_default() {
        return canonical;
    }

    if canonical == "/" {
        format!("/{}", locale.code())
    } else {
        format!("/{}{}", locale.code(), canonical)
    }
}

/// Resolve the active locale from an observed request path.
///
/// Only the first segment is inspected; anything that is not an enabled
/// non-default locale code resolves to the default locale.
pub fn resolve_locale(observed_path: &str) -> Locale {
    leading_locale(&normalize(observed_path)).unwrap_or_else(Locale::default_locale)
}

/// Strip the locale prefix from an observed path, returning the canonical
/// path. A bare locale prefix (`/en`) delocalizes to `/`, not to an empty
/// string.
pub fn delocalize(observed_path: &str) -> String {
    let normalized = normalize(observed_path);

    match leading_locale(&normalized) {
        Some(locale) => {
            // Strip "/{code}", keep whatever follows
            let rest = &normalized[1 + locale.code().len()..];
            if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            }
        }
        None => normalized,
    }
}

/// Compute the language-switcher targets for an observed path: for every
/// enabled locale, the localized path pointing at the same page concept.
pub fn alternates(observed_path: &str) -> Vec<(Locale, String)> {
    let canonical = delocalize(observed_path);

    LocaleRegistry::get()
        .list_enabled()
        .iter()
        .map(|config| {
            let locale = Locale::from_code(config.code)
                .expect("Registry-listed locale code should always be valid");
            (locale, localize(&canonical, locale))
        })
        .collect()
}

/// Check the first path segment against the enabled non-default locales.
///
/// The default locale never appears as a prefix, so its code in first
/// position is treated as an ordinary canonical segment.
fn leading_locale(normalized: &str) -> Option<Locale> {
    let first = normalized.strip_prefix('/')?.split('/').next()?;
    if first.is_empty() {
        return None;
    }

    let config = LocaleRegistry::get().get_by_code(first)?;
    if config.enabled && !config.is_default {
        Locale::from_code(config.code).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Normalize Tests ====================

    #[test]
    fn test_normalize_empty_is_root() {
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn test_normalize_root_unchanged() {
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize("/projects/"), "/projects");
        assert_eq!(normalize("/projects///"), "/projects");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize("projects"), "/projects");
    }

    // ==================== Localize Tests ====================

    #[test]
    fn test_localize_default_locale_is_transparent() {
        assert_eq!(localize("/projects", Locale::SPANISH), "/projects");
        assert_eq!(localize("/blog/post", Locale::SPANISH), "/blog/post");
        assert_eq!(localize("/", Locale::SPANISH), "/");
    }

    #[test]
    fn test_localize_non_default_prefixes() {
        assert_eq!(localize("/projects", Locale::ENGLISH), "/en/projects");
        assert_eq!(localize("/blog/post", Locale::ENGLISH), "/en/blog/post");
    }

    #[test]
    fn test_localize_root_non_default() {
        assert_eq!(localize("/", Locale::ENGLISH), "/en");
    }

    #[test]
    fn test_localize_normalizes_input() {
        assert_eq!(localize("/projects/", Locale::ENGLISH), "/en/projects");
        assert_eq!(localize("projects", Locale::ENGLISH), "/en/projects");
    }

    // ==================== Resolve Locale Tests ====================

    #[test]
    fn test_resolve_locale_english_prefix() {
        assert_eq!(resolve_locale("/en/projects"), Locale::ENGLISH);
        assert_eq!(resolve_locale("/en"), Locale::ENGLISH);
        assert_eq!(resolve_locale("/en/"), Locale::ENGLISH);
    }

    #[test]
    fn test_resolve_locale_unprefixed_is_default() {
        assert_eq!(resolve_locale("/projects"), Locale::SPANISH);
        assert_eq!(resolve_locale("/"), Locale::SPANISH);
    }

    #[test]
    fn test_resolve_locale_default_code_is_not_a_prefix() {
        // "es" is the default locale; it never appears as a prefix, so a
        // leading "es" segment is an ordinary canonical segment.
        assert_eq!(resolve_locale("/es/projects"), Locale::SPANISH);
    }

    #[test]
    fn test_resolve_locale_unknown_segment_falls_back() {
        assert_eq!(resolve_locale("/fr/projects"), Locale::SPANISH);
        assert_eq!(resolve_locale("/enx/projects"), Locale::SPANISH);
    }

    #[test]
    fn test_resolve_locale_code_in_second_position_ignored() {
        assert_eq!(resolve_locale("/projects/en"), Locale::SPANISH);
    }

    // ==================== Delocalize Tests ====================

    #[test]
    fn test_delocalize_strips_prefix() {
        assert_eq!(delocalize("/en/projects"), "/projects");
        assert_eq!(delocalize("/en/blog/post"), "/blog/post");
    }

    #[test]
    fn test_delocalize_bare_prefix_is_root() {
        assert_eq!(delocalize("/en"), "/");
        assert_eq!(delocalize("/en/"), "/");
    }

    #[test]
    fn test_delocalize_unprefixed_unchanged() {
        assert_eq!(delocalize("/projects"), "/projects");
        assert_eq!(delocalize("/"), "/");
    }

    #[test]
    fn test_delocalize_never_strips_non_first_segment() {
        assert_eq!(delocalize("/projects/en"), "/projects/en");
        assert_eq!(delocalize("/en/projects/en"), "/projects/en");
    }

    #[test]
    fn test_delocalize_segment_sharing_locale_spelling() {
        // A segment merely starting with a locale code is not a prefix
        assert_eq!(delocalize("/en-masse/projects"), "/en-masse/projects");
    }

    // ==================== Round-Trip Tests ====================

    #[test]
    fn test_round_trip_all_locales() {
        let paths = ["/", "/projects", "/blog", "/blog/some-post", "/contact"];
        for locale in [Locale::SPANISH, Locale::ENGLISH] {
            for path in paths {
                let localized = localize(path, locale);
                assert_eq!(resolve_locale(&localized), locale, "path {}", path);
                assert_eq!(delocalize(&localized), path, "path {}", path);
            }
        }
    }

    #[test]
    fn test_observed_path_round_trip_stability() {
        for observed in ["/", "/en", "/en/projects", "/projects", "/blog/post"] {
            let reconstructed = localize(&delocalize(observed), resolve_locale(observed));
            assert_eq!(reconstructed, normalize(observed));
        }
    }

    // ==================== Alternates Tests ====================

    #[test]
    fn test_alternates_covers_every_enabled_locale() {
        let alts = alternates("/en/projects");
        assert_eq!(alts.len(), 2);
        assert!(alts.contains(&(Locale::SPANISH, "/projects".to_string())));
        assert!(alts.contains(&(Locale::ENGLISH, "/en/projects".to_string())));
    }

    #[test]
    fn test_alternates_from_default_locale_path() {
        let alts = alternates("/projects");
        assert!(alts.contains(&(Locale::ENGLISH, "/en/projects".to_string())));
    }

    #[test]
    fn test_alternates_root() {
        let alts = alternates("/");
        assert!(alts.contains(&(Locale::SPANISH, "/".to_string())));
        assert!(alts.contains(&(Locale::ENGLISH, "/en".to_string())));
    }
}
