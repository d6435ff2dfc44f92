//! Blog post collection.

use crate::content::{Collection, Entry, Localized};
use serde::Serialize;
use std::sync::OnceLock;

/// One blog post teaser (full bodies live with the rendering layer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date (YYYY-MM-DD)
    pub published: &'static str,
    pub tags: &'static [&'static str],
    pub reading_minutes: u8,
}

/// Partial translation of a post.
#[derive(Debug, Default)]
pub struct PostOverride {
    pub title: Option<&'static str>,
    pub excerpt: Option<&'static str>,
    pub tags: Option<&'static [&'static str]>,
}

impl Localized for Post {
    type Override = PostOverride;

    fn merged_with(&self, ov: &Self::Override) -> Self {
        Post {
            slug: self.slug,
            title: ov.title.unwrap_or(self.title),
            excerpt: ov.excerpt.unwrap_or(self.excerpt),
            published: self.published,
            tags: ov.tags.unwrap_or(self.tags),
            reading_minutes: self.reading_minutes,
        }
    }
}

static POSTS: OnceLock<Collection<Post>> = OnceLock::new();

/// The blog post collection (initialized lazily, immutable thereafter).
pub fn posts() -> &'static Collection<Post> {
    POSTS.get_or_init(|| Collection::new("posts", post_entries()))
}

fn post_entries() -> Vec<Entry<Post>> {
    vec![
        Entry {
            slug: "migrando-a-rust",
            base: Post {
                slug: "migrando-a-rust",
                title: "Migrando un servicio de pagos a Rust",
                excerpt: "Qué aprendimos al reescribir el núcleo de conciliación: tipos \
                          que encodean invariantes y errores que no se pueden ignorar.",
                published: "2024-11-03",
                tags: &["rust", "backend"],
                reading_minutes: 9,
            },
            overrides: vec![(
                "en",
                PostOverride {
                    title: Some("Migrating a payments service to Rust"),
                    excerpt: Some(
                        "What we learned rewriting the reconciliation core: types that \
                         encode invariants and errors you cannot ignore.",
                    ),
                    ..Default::default()
                },
            )],
        },
        Entry {
            slug: "accesibilidad-practica",
            base: Post {
                slug: "accesibilidad-practica",
                title: "Accesibilidad práctica para equipos pequeños",
                excerpt: "Una lista corta de hábitos que mejoran la accesibilidad sin \
                          detener el roadmap.",
                published: "2024-06-18",
                tags: &["frontend", "a11y"],
                reading_minutes: 6,
            },
            overrides: vec![(
                "en",
                PostOverride {
                    title: Some("Practical accessibility for small teams"),
                    // excerpt pending translation; falls back to Spanish
                    ..Default::default()
                },
            )],
        },
        Entry {
            slug: "postgres-indices",
            base: Post {
                slug: "postgres-indices",
                title: "Índices en PostgreSQL: lo que de verdad importa",
                excerpt: "Cómo leer un plan de ejecución y decidir entre B-tree, GIN y \
                          índices parciales sin adivinar.",
                published: "2023-12-02",
                tags: &["postgres", "performance"],
                reading_minutes: 12,
            },
            overrides: vec![],
        },
    ]
}
