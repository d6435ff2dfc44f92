//! Content resolution: slug-keyed lookup with per-locale override merging.
//!
//! Every content collection (projects, blog posts, certifications, work
//! experience) follows the same shape: base records authored in the default
//! locale (Spanish) plus zero or more partial per-locale overrides. A lookup
//! for a non-default locale merges the matching override over the base
//! field-by-field, so the result always has the full base shape — a missing
//! translation falls back to the base value for that field, never to an
//! absent one.
//!
//! Collections are immutable after first access; resolution is pure and
//! deterministic.

mod certifications;
mod experience;
mod posts;
mod projects;

pub use certifications::{certifications, Certification, CertificationGroup};
pub use experience::{experience, ExperienceItem};
pub use posts::{posts, Post};
pub use projects::{projects, Project};

use crate::i18n::Locale;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by content lookups.
///
/// `NotFound` signals a genuine content-authoring gap (typically a broken
/// link) and is reported to the caller rather than silently recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("no record '{slug}' in the '{collection}' collection")]
    NotFound {
        collection: &'static str,
        slug: String,
    },

    #[error("unknown content collection '{0}'")]
    UnknownCollection(String),
}

/// A content record with partial per-locale translations.
///
/// `Override` holds an `Option` per translatable field; `merged_with` takes
/// the override's value where present and the base's value everywhere else.
/// This is the single merge utility shared by every collection — override
/// merging is never reimplemented per content type.
pub trait Localized: Clone {
    type Override: 'static;

    /// Build the resolved record: override field if present, else base field.
    fn merged_with(&self, ov: &Self::Override) -> Self;
}

/// One slug-keyed entry: the default-locale base plus its overrides.
pub struct Entry<T: Localized> {
    pub slug: &'static str,
    pub base: T,
    /// (locale code, partial translation) pairs; at most one per locale
    pub overrides: Vec<(&'static str, T::Override)>,
}

/// A named, immutable content collection.
pub struct Collection<T: Localized> {
    name: &'static str,
    entries: Vec<Entry<T>>,
}

impl<T: Localized> Collection<T> {
    /// Build a collection, enforcing slug uniqueness.
    ///
    /// # Panics
    /// Panics on duplicate slugs — that is a content-authoring defect and
    /// must fail loudly at startup/test time, not surface as wrong lookups.
    pub fn new(name: &'static str, entries: Vec<Entry<T>>) -> Self {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|other| other.slug == entry.slug) {
                panic!("Duplicate slug '{}' in the '{}' collection", entry.slug, name);
            }
        }
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slugs(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.slug).collect()
    }

    /// Resolve one record for a locale.
    ///
    /// Default locale returns the base record as-is. For other locales the
    /// matching override (if any) is merged over the base; with no override
    /// the base record is returned whole. The override itself is never
    /// returned directly since it may be partial.
    pub fn resolve(&self, slug: &str, locale: Locale) -> Result<T, ContentError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.slug == slug)
            .ok_or_else(|| ContentError::NotFound {
                collection: self.name,
                slug: slug.to_string(),
            })?;

        if locale.is_default() {
            return Ok(entry.base.clone());
        }

        match entry
            .overrides
            .iter()
            .find(|(code, _)| *code == locale.code())
        {
            Some((_, ov)) => Ok(entry.base.merged_with(ov)),
            None => Ok(entry.base.clone()),
        }
    }

    /// Resolve every record for a locale, in authored order.
    pub fn list(&self, locale: Locale) -> Vec<T> {
        self.entries
            .iter()
            .map(|entry| {
                self.resolve(entry.slug, locale)
                    .expect("Listed slug should always resolve")
            })
            .collect()
    }
}

/// Resolve a record in a name-addressed collection to JSON.
///
/// This is the dispatch point for the HTTP layer, which only knows the
/// collection by its path segment.
pub fn resolve_json(
    collection: &str,
    slug: &str,
    locale: Locale,
) -> Result<serde_json::Value, ContentError> {
    match collection {
        "projects" => to_json(projects().resolve(slug, locale)?),
        "posts" => to_json(posts().resolve(slug, locale)?),
        "certifications" => to_json(certifications().resolve(slug, locale)?),
        "experience" => to_json(experience().resolve(slug, locale)?),
        other => Err(ContentError::UnknownCollection(other.to_string())),
    }
}

/// List a name-addressed collection for a locale as JSON.
pub fn list_json(collection: &str, locale: Locale) -> Result<serde_json::Value, ContentError> {
    match collection {
        "projects" => to_json(projects().list(locale)),
        "posts" => to_json(posts().list(locale)),
        "certifications" => to_json(certifications().list(locale)),
        "experience" => to_json(experience().list(locale)),
        other => Err(ContentError::UnknownCollection(other.to_string())),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<serde_json::Value, ContentError> {
    // Records are plain static data; serialization cannot fail for them
    Ok(serde_json::to_value(value).expect("Content records should always serialize"))
}
