//! Outbound email dispatch boundary.
//!
//! Thin wrapper around the transactional email provider's HTTP API
//! (Resend-style `/emails` endpoint). This module only constructs and fires
//! the request: no retry, no queueing, at-most-once per call. Callers decide
//! what a failure means.

use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;

/// The provider request: sender display, recipient, reply-to, subject, body.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Send one email through the configured provider.
///
/// # Errors
/// Fails if no provider credential is configured (callers are expected to
/// check first), if the request cannot be sent, or if the provider returns
/// a non-success status.
pub async fn send(config: &Config, client: &reqwest::Client, email: &OutboundEmail) -> Result<()> {
    let api_key = config
        .resend_api_key
        .as_deref()
        .context("Email provider is not configured")?;

    let url = format!("{}/emails", config.email_api_base);

    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(email)
        .send()
        .await
        .context("Failed to send request to email provider")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Email provider error ({}): {}", status, body);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_email_serialization() {
        let email = OutboundEmail {
            from: "Portafolio <no-reply@example.dev>".to_string(),
            to: "owner@example.dev".to_string(),
            reply_to: "visitor@example.com".to_string(),
            subject: "New message".to_string(),
            html: "<p>Hello</p>".to_string(),
        };

        let json = serde_json::to_value(&email).expect("Should serialize");
        assert_eq!(json["from"], "Portafolio <no-reply@example.dev>");
        assert_eq!(json["reply_to"], "visitor@example.com");
        assert!(json["html"].as_str().unwrap().contains("<p>"));
    }
}
