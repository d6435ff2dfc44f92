//! Project showcase collection.
//!
//! Base records are authored in Spanish; English overrides translate the
//! text fields. Tech stacks and URLs are shared across locales unless an
//! override redefines them.

use crate::content::{Collection, Entry, Localized};
use serde::Serialize;
use std::sync::OnceLock;

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub year: u16,
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

/// Partial translation of a project.
#[derive(Debug, Default)]
pub struct ProjectOverride {
    pub title: Option<&'static str>,
    pub summary: Option<&'static str>,
    pub description: Option<&'static str>,
    pub tech: Option<&'static [&'static str]>,
}

impl Localized for Project {
    type Override = ProjectOverride;

    fn merged_with(&self, ov: &Self::Override) -> Self {
        Project {
            slug: self.slug,
            title: ov.title.unwrap_or(self.title),
            summary: ov.summary.unwrap_or(self.summary),
            description: ov.description.unwrap_or(self.description),
            tech: ov.tech.unwrap_or(self.tech),
            year: self.year,
            repo_url: self.repo_url,
            demo_url: self.demo_url,
        }
    }
}

static PROJECTS: OnceLock<Collection<Project>> = OnceLock::new();

/// The project collection (initialized lazily, immutable thereafter).
pub fn projects() -> &'static Collection<Project> {
    PROJECTS.get_or_init(|| Collection::new("projects", project_entries()))
}

fn project_entries() -> Vec<Entry<Project>> {
    vec![
        Entry {
            slug: "sepa-platform",
            base: Project {
                slug: "sepa-platform",
                title: "Plataforma de pagos SEPA",
                summary: "Procesamiento de transferencias SEPA para una fintech europea.",
                description: "Backend de pagos que valida, enruta y concilia transferencias \
                              SEPA. Incluye generación de archivos pain.001, seguimiento de \
                              estados por webhook y un panel interno de operaciones.",
                tech: &["Rust", "PostgreSQL", "Kafka", "React"],
                year: 2024,
                repo_url: None,
                demo_url: Some("https://sepa.example.dev"),
            },
            overrides: vec![(
                "en",
                ProjectOverride {
                    title: Some("SEPA payments platform"),
                    summary: Some("SEPA credit transfer processing for a European fintech."),
                    // description intentionally untranslated: resolution must
                    // fall back to the Spanish base for this field
                    ..Default::default()
                },
            )],
        },
        Entry {
            slug: "metrics-board",
            base: Project {
                slug: "metrics-board",
                title: "Tablero de métricas en tiempo real",
                summary: "Visualización de métricas de producto con actualizaciones en vivo.",
                description: "Panel con series temporales agregadas por minuto, alertas \
                              configurables y exportación a CSV. El backend agrega eventos \
                              con ventanas deslizantes y sirve deltas por WebSocket.",
                tech: &["TypeScript", "Node.js", "ClickHouse", "WebSocket"],
                year: 2023,
                repo_url: Some("https://github.com/dramirez/metrics-board"),
                demo_url: None,
            },
            overrides: vec![(
                "en",
                ProjectOverride {
                    title: Some("Real-time metrics board"),
                    summary: Some("Product metrics visualization with live updates."),
                    description: Some(
                        "Dashboard with per-minute aggregated time series, configurable \
                         alerts and CSV export. The backend aggregates events over sliding \
                         windows and serves deltas over WebSocket.",
                    ),
                    ..Default::default()
                },
            )],
        },
        Entry {
            slug: "inventario-pyme",
            base: Project {
                slug: "inventario-pyme",
                title: "Inventario para pymes",
                summary: "Gestión de inventario y facturación para comercios pequeños.",
                description: "Aplicación web para controlar stock, proveedores y facturas \
                              electrónicas, con soporte sin conexión y sincronización al \
                              recuperar la red.",
                tech: &["Vue", "Laravel", "MySQL"],
                year: 2022,
                repo_url: Some("https://github.com/dramirez/inventario-pyme"),
                demo_url: None,
            },
            // No English translation yet: resolution returns the base whole
            overrides: vec![],
        },
    ]
}
