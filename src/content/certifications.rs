//! Certification collection, grouped by area.

use crate::content::{Collection, Entry, Localized};
use serde::Serialize;
use std::sync::OnceLock;

/// A single certification inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: u16,
    pub credential_url: Option<&'static str>,
}

/// A titled group of certifications (e.g. cloud, frontend).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationGroup {
    pub slug: &'static str,
    pub title: &'static str,
    pub items: &'static [Certification],
}

/// Partial translation of a certification group.
///
/// Certification names and issuers are proper nouns and stay untranslated;
/// only the group title is localized in practice.
#[derive(Debug, Default)]
pub struct CertificationGroupOverride {
    pub title: Option<&'static str>,
    pub items: Option<&'static [Certification]>,
}

impl Localized for CertificationGroup {
    type Override = CertificationGroupOverride;

    fn merged_with(&self, ov: &Self::Override) -> Self {
        CertificationGroup {
            slug: self.slug,
            title: ov.title.unwrap_or(self.title),
            items: ov.items.unwrap_or(self.items),
        }
    }
}

static CERTIFICATIONS: OnceLock<Collection<CertificationGroup>> = OnceLock::new();

/// The certification collection (initialized lazily, immutable thereafter).
pub fn certifications() -> &'static Collection<CertificationGroup> {
    CERTIFICATIONS.get_or_init(|| Collection::new("certifications", certification_entries()))
}

fn certification_entries() -> Vec<Entry<CertificationGroup>> {
    vec![
        Entry {
            slug: "cloud",
            base: CertificationGroup {
                slug: "cloud",
                title: "Nube e infraestructura",
                items: &[
                    Certification {
                        name: "AWS Certified Solutions Architect – Associate",
                        issuer: "Amazon Web Services",
                        year: 2023,
                        credential_url: Some("https://aws.amazon.com/verification"),
                    },
                    Certification {
                        name: "CKA: Certified Kubernetes Administrator",
                        issuer: "Cloud Native Computing Foundation",
                        year: 2022,
                        credential_url: None,
                    },
                ],
            },
            overrides: vec![(
                "en",
                CertificationGroupOverride {
                    title: Some("Cloud & infrastructure"),
                    ..Default::default()
                },
            )],
        },
        Entry {
            slug: "desarrollo-web",
            base: CertificationGroup {
                slug: "desarrollo-web",
                title: "Desarrollo web",
                items: &[Certification {
                    name: "Meta Front-End Developer",
                    issuer: "Meta",
                    year: 2021,
                    credential_url: Some("https://coursera.org/verify/example"),
                }],
            },
            overrides: vec![(
                "en",
                CertificationGroupOverride {
                    title: Some("Web development"),
                    ..Default::default()
                },
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_group_title_localized_items_shared() {
        let base = certifications().resolve("cloud", Locale::SPANISH).unwrap();
        let english = certifications().resolve("cloud", Locale::ENGLISH).unwrap();

        assert_eq!(base.title, "Nube e infraestructura");
        assert_eq!(english.title, "Cloud & infrastructure");
        assert_eq!(base.items, english.items);
    }

    #[test]
    fn test_items_carry_issuer_and_year() {
        let group = certifications().resolve("cloud", Locale::SPANISH).unwrap();
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.items[0].issuer, "Amazon Web Services");
        assert_eq!(group.items[1].year, 2022);
    }
}
