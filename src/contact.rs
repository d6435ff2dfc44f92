//! Contact submission handler.
//!
//! Validates a contact payload and forwards it to the email dispatch
//! boundary. Submissions are transient: validated, forwarded, discarded —
//! nothing is persisted and nothing is retried. When no provider credential
//! is configured the submission is still validated and accepted, and the
//! outcome says so explicitly.

use crate::config::Config;
use crate::email::{self, OutboundEmail};
use crate::i18n::Locale;
use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

/// A contact form payload as posted by the form component.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,

    // Optional classification fields
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
}

/// Client-input validation failures; surfaced as 4xx, never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("email address is not structurally valid")]
    InvalidEmail,
}

/// What happened to a validated submission.
///
/// `NotConfigured` and `DeliveryFailed` are both post-validation outcomes:
/// the submission itself was accepted either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Delivered,
    NotConfigured,
    DeliveryFailed,
}

// Structural email check: local-part "@" domain "." tld-like suffix
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").unwrap())
}

/// Validate a submission.
///
/// Fields are checked in a fixed order (name, email, message); the first
/// missing field is reported. The structural email check only runs once all
/// mandatory fields are present.
pub fn validate(submission: &ContactSubmission) -> Result<(), ContactError> {
    if submission.name.trim().is_empty() {
        return Err(ContactError::MissingField("name"));
    }
    if submission.email.trim().is_empty() {
        return Err(ContactError::MissingField("email"));
    }
    if submission.message.trim().is_empty() {
        return Err(ContactError::MissingField("message"));
    }

    if !email_regex().is_match(submission.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(())
}

/// Validate and forward one submission.
///
/// Validation failures are returned as errors. Dispatch problems are NOT
/// errors at this level: the submission was valid, so the outcome reports
/// `DeliveryFailed` (logged here, without leaking provider detail upward)
/// or `NotConfigured` when there is no provider credential.
pub async fn submit(
    config: &Config,
    client: &reqwest::Client,
    locale: Locale,
    submission: &ContactSubmission,
) -> Result<SubmissionOutcome, ContactError> {
    validate(submission)?;

    if config.resend_api_key.is_none() {
        info!(
            "Email provider not configured; accepting contact submission from '{}' without send",
            submission.name.trim()
        );
        return Ok(SubmissionOutcome::NotConfigured);
    }

    let outbound = build_email(config, locale, submission);

    match email::send(config, client, &outbound).await {
        Ok(()) => {
            info!("Contact email delivered (reply-to {})", outbound.reply_to);
            Ok(SubmissionOutcome::Delivered)
        }
        Err(e) => {
            warn!("Contact email delivery failed: {:#}", e);
            Ok(SubmissionOutcome::DeliveryFailed)
        }
    }
}

/// Build the outbound email for a validated submission.
///
/// Subject and field labels come from the locale's site strings; all
/// visitor-supplied text is HTML-escaped before it lands in the body.
fn build_email(config: &Config, locale: Locale, submission: &ContactSubmission) -> OutboundEmail {
    let strings = locale.strings();
    let name = submission.name.trim();

    let subject = strings.contact_subject.replace("{name}", name);

    let mut html = format!(
        "<h2>{}</h2>\n<p><strong>{}</strong> &lt;{}&gt;</p>\n",
        escape_html(strings.contact_body_heading),
        escape_html(name),
        escape_html(submission.email.trim()),
    );

    for (label, value) in [
        (strings.field_project_type, &submission.project_type),
        (strings.field_timeline, &submission.timeline),
        (strings.field_budget, &submission.budget),
    ] {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            html.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>\n",
                escape_html(label),
                escape_html(value)
            ));
        }
    }

    html.push_str(&format!(
        "<p>{}</p>\n",
        escape_html(submission.message.trim()).replace('\n', "<br>")
    ));

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M UTC");
    html.push_str(&format!("<p><em>{}</em></p>\n", timestamp));

    OutboundEmail {
        from: config.contact_from.clone(),
        to: config.contact_to_email.clone(),
        reply_to: submission.email.trim().to_string(),
        subject,
        html,
    }
}

/// Escape text for inclusion in the HTML email body.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            project_type: None,
            timeline: None,
            budget: None,
        }
    }

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            port: 8080,
            resend_api_key: api_key.map(|k| k.to_string()),
            email_api_base: "https://api.resend.example".to_string(),
            contact_to_email: "owner@example.dev".to_string(),
            contact_from: "Portafolio <no-reply@example.dev>".to_string(),
        }
    }

    // ==================== Validation Order Tests ====================

    #[test]
    fn test_all_fields_missing_reports_name_first() {
        // Name is first in the fixed check order, even though the email is
        // also structurally invalid
        let err = validate(&submission("", "bad", "")).unwrap_err();
        assert_eq!(err, ContactError::MissingField("name"));
    }

    #[test]
    fn test_missing_email_reported_before_message() {
        let err = validate(&submission("Ana", "", "")).unwrap_err();
        assert_eq!(err, ContactError::MissingField("email"));
    }

    #[test]
    fn test_missing_message_reported_last() {
        let err = validate(&submission("Ana", "ana@example.com", "")).unwrap_err();
        assert_eq!(err, ContactError::MissingField("message"));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let err = validate(&submission("   ", "ana@example.com", "Hola")).unwrap_err();
        assert_eq!(err, ContactError::MissingField("name"));

        let err = validate(&submission("Ana", "ana@example.com", " \n\t ")).unwrap_err();
        assert_eq!(err, ContactError::MissingField("message"));
    }

    // ==================== Email Pattern Tests ====================

    #[test]
    fn test_invalid_email_rejected() {
        for bad in ["plainaddress", "a@b", "a @b.com", "a@b .com", "@b.com", "a@.com"] {
            let err = validate(&submission("Ana", bad, "Hola")).unwrap_err();
            assert_eq!(err, ContactError::InvalidEmail, "email {:?}", bad);
        }
    }

    #[test]
    fn test_valid_emails_accepted() {
        for good in [
            "ana@example.com",
            "ana.torres+site@mail.example.co",
            "  ana@example.com  ", // trimmed before the check
        ] {
            assert!(validate(&submission("Ana", good, "Hola")).is_ok(), "email {:?}", good);
        }
    }

    // ==================== Submit Tests ====================

    #[tokio::test]
    async fn test_submit_without_provider_is_accepted() {
        let config = test_config(None);
        let client = reqwest::Client::new();

        let outcome = submit(
            &config,
            &client,
            Locale::SPANISH,
            &submission("Ana", "ana@example.com", "Hello"),
        )
        .await
        .expect("Valid submission must be accepted");

        assert_eq!(outcome, SubmissionOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn test_submit_invalid_payload_never_dispatches() {
        // No provider configured AND invalid input: validation must win
        let config = test_config(None);
        let client = reqwest::Client::new();

        let err = submit(
            &config,
            &client,
            Locale::SPANISH,
            &submission("", "bad", ""),
        )
        .await
        .unwrap_err();

        assert_eq!(err, ContactError::MissingField("name"));
    }

    // ==================== Email Construction Tests ====================

    #[test]
    fn test_build_email_localized_subject() {
        let config = test_config(Some("key"));
        let sub = submission("Ana", "ana@example.com", "Hola");

        let spanish = build_email(&config, Locale::SPANISH, &sub);
        assert_eq!(spanish.subject, "Nuevo mensaje de Ana — portafolio");

        let english = build_email(&config, Locale::ENGLISH, &sub);
        assert_eq!(english.subject, "New message from Ana — portfolio");
    }

    #[test]
    fn test_build_email_reply_to_is_visitor() {
        let config = test_config(Some("key"));
        let email = build_email(
            &config,
            Locale::SPANISH,
            &submission("Ana", "  ana@example.com ", "Hola"),
        );

        assert_eq!(email.reply_to, "ana@example.com");
        assert_eq!(email.to, "owner@example.dev");
        assert_eq!(email.from, "Portafolio <no-reply@example.dev>");
    }

    #[test]
    fn test_build_email_escapes_visitor_text() {
        let config = test_config(Some("key"));
        let mut sub = submission("<b>Ana</b>", "ana@example.com", "1 < 2 & 3 > 2");
        sub.project_type = Some("Web \"app\"".to_string());

        let email = build_email(&config, Locale::ENGLISH, &sub);
        assert!(email.html.contains("&lt;b&gt;Ana&lt;/b&gt;"));
        assert!(email.html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
        assert!(email.html.contains("Web &quot;app&quot;"));
        assert!(!email.html.contains("<b>Ana</b>"));
    }

    #[test]
    fn test_build_email_skips_empty_optional_fields() {
        let config = test_config(Some("key"));
        let mut sub = submission("Ana", "ana@example.com", "Hola");
        sub.timeline = Some("   ".to_string());

        let email = build_email(&config, Locale::ENGLISH, &sub);
        assert!(!email.html.contains("Timeline"));
        assert!(!email.html.contains("Project type"));
    }

    #[test]
    fn test_build_email_message_newlines_become_breaks() {
        let config = test_config(Some("key"));
        let email = build_email(
            &config,
            Locale::SPANISH,
            &submission("Ana", "ana@example.com", "línea uno\nlínea dos"),
        );

        assert!(email.html.contains("línea uno<br>línea dos"));
    }

    // ==================== Escape Helper Tests ====================

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
