//! Work experience collection.

use crate::content::{Collection, Entry, Localized};
use serde::Serialize;
use std::sync::OnceLock;

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceItem {
    pub slug: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Human-readable period (e.g. "2022 — presente")
    pub period: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

/// Partial translation of a position.
#[derive(Debug, Default)]
pub struct ExperienceOverride {
    pub role: Option<&'static str>,
    pub period: Option<&'static str>,
    pub summary: Option<&'static str>,
    pub highlights: Option<&'static [&'static str]>,
}

impl Localized for ExperienceItem {
    type Override = ExperienceOverride;

    fn merged_with(&self, ov: &Self::Override) -> Self {
        ExperienceItem {
            slug: self.slug,
            role: ov.role.unwrap_or(self.role),
            company: self.company,
            period: ov.period.unwrap_or(self.period),
            summary: ov.summary.unwrap_or(self.summary),
            highlights: ov.highlights.unwrap_or(self.highlights),
        }
    }
}

static EXPERIENCE: OnceLock<Collection<ExperienceItem>> = OnceLock::new();

/// The work experience collection (initialized lazily, immutable thereafter).
pub fn experience() -> &'static Collection<ExperienceItem> {
    EXPERIENCE.get_or_init(|| Collection::new("experience", experience_entries()))
}

fn experience_entries() -> Vec<Entry<ExperienceItem>> {
    vec![
        Entry {
            slug: "finpago",
            base: ExperienceItem {
                slug: "finpago",
                role: "Ingeniero de software senior",
                company: "FinPago",
                period: "2022 — presente",
                summary: "Desarrollo del núcleo de pagos y liderazgo técnico del equipo \
                          de integraciones bancarias.",
                highlights: &[
                    "Reducción del tiempo de conciliación de horas a minutos",
                    "Diseño del pipeline de webhooks con entrega garantizada",
                ],
            },
            overrides: vec![(
                "en",
                ExperienceOverride {
                    role: Some("Senior software engineer"),
                    period: Some("2022 — present"),
                    summary: Some(
                        "Built the payments core and led the banking integrations team.",
                    ),
                    highlights: Some(&[
                        "Cut reconciliation time from hours to minutes",
                        "Designed the guaranteed-delivery webhook pipeline",
                    ]),
                },
            )],
        },
        Entry {
            slug: "agencia-norte",
            base: ExperienceItem {
                slug: "agencia-norte",
                role: "Desarrollador full-stack",
                company: "Agencia Norte",
                period: "2019 — 2022",
                summary: "Aplicaciones web a medida para clientes de retail y educación.",
                highlights: &["Más de veinte proyectos entregados en producción"],
            },
            overrides: vec![(
                "en",
                ExperienceOverride {
                    role: Some("Full-stack developer"),
                    summary: Some("Custom web applications for retail and education clients."),
                    // period and highlights pending translation
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
    fn test_experience_full_override() {
        let item = experience().resolve("finpago", Locale::ENGLISH).unwrap();
        assert_eq!(item.role, "Senior software engineer");
        assert_eq!(item.company, "FinPago");
        assert_eq!(item.highlights.len(), 2);
    }

    #[test]
    fn test_experience_partial_override_inherits() {
        let item = experience()
            .resolve("agencia-norte", Locale::ENGLISH)
            .unwrap();
        assert_eq!(item.role, "Full-stack developer");
        // Untranslated fields keep the Spanish base values
        assert_eq!(item.period, "2019 — 2022");
        assert!(item.highlights[0].contains("proyectos"));
    }
}
