/// All localized site-level strings for a locale
///
/// These are the strings the service itself needs (page metadata, contact
/// email templates, user-facing error messages). Content records live in
/// the content collections, not here.
#[derive(Debug, Clone)]
pub struct SiteStrings {
    // ==================== Page Metadata ====================
    /// Site title shown in the page context
    pub site_title: &'static str,

    /// Short tagline under the title
    pub site_tagline: &'static str,

    /// Meta description for the page head
    pub meta_description: &'static str,

    // ==================== Contact Email ====================
    /// Subject line for contact emails
    /// Placeholders: {name}
    pub contact_subject: &'static str,

    /// Heading line inside the contact email body
    pub contact_body_heading: &'static str,

    /// Label for the project type line in the email body
    pub field_project_type: &'static str,

    /// Label for the timeline line in the email body
    pub field_timeline: &'static str,

    /// Label for the budget line in the email body
    pub field_budget: &'static str,

    // ==================== User-Facing Errors ====================
    /// Generic message returned when the outbound email could not be sent.
    /// Provider detail is never included here.
    pub delivery_failure: &'static str,

    /// Message returned when a content record does not exist
    pub not_found: &'static str,
}

// ==================== Spanish Strings (default locale) ====================

/// Spanish site strings (default locale; base content is authored in Spanish)
pub const SPANISH_STRINGS: SiteStrings = SiteStrings {
    site_title: "Diego Ramírez — Desarrollo de Software",
    site_tagline: "Construyo productos web con foco en rendimiento y detalle",
    meta_description:
        "Portafolio de Diego Ramírez: proyectos, experiencia, certificaciones y blog \
         sobre desarrollo web e ingeniería de software.",

    contact_subject: "Nuevo mensaje de {name} — portafolio",
    contact_body_heading: "Nuevo mensaje desde el formulario de contacto",
    field_project_type: "Tipo de proyecto",
    field_timeline: "Plazo",
    field_budget: "Presupuesto",

    delivery_failure:
        "No pudimos enviar tu mensaje en este momento. Por favor intenta de nuevo más tarde.",
    not_found: "El contenido solicitado no existe.",
};

// ==================== English Strings ====================

/// English site strings
pub const ENGLISH_STRINGS: SiteStrings = SiteStrings {
    site_title: "Diego Ramírez — Software Development",
    site_tagline: "I build web products with a focus on performance and detail",
    meta_description:
        "Diego Ramírez's portfolio: projects, experience, certifications and a blog \
         about web development and software engineering.",

    contact_subject: "New message from {name} — portfolio",
    contact_body_heading: "New message from the contact form",
    field_project_type: "Project type",
    field_timeline: "Timeline",
    field_budget: "Budget",

    delivery_failure: "We couldn't send your message right now. Please try again later.",
    not_found: "The requested content does not exist.",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Spanish Strings Tests ====================

    #[test]
    fn test_spanish_title_not_empty() {
        assert!(!SPANISH_STRINGS.site_title.is_empty());
    }

    #[test]
    fn test_spanish_contact_subject_has_placeholder() {
        assert!(SPANISH_STRINGS.contact_subject.contains("{name}"));
    }

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_title_not_empty() {
        assert!(!ENGLISH_STRINGS.site_title.is_empty());
    }

    #[test]
    fn test_english_contact_subject_has_placeholder() {
        assert!(ENGLISH_STRINGS.contact_subject.contains("{name}"));
    }

    // ==================== Cross-Locale Tests ====================

    #[test]
    fn test_locales_differ_in_user_facing_text() {
        assert_ne!(SPANISH_STRINGS.site_tagline, ENGLISH_STRINGS.site_tagline);
        assert_ne!(
            SPANISH_STRINGS.delivery_failure,
            ENGLISH_STRINGS.delivery_failure
        );
        assert_ne!(SPANISH_STRINGS.not_found, ENGLISH_STRINGS.not_found);
    }
}
