use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Email provider (Resend). When the key is absent the contact handler
    // still validates submissions but performs no send.
    pub resend_api_key: Option<String>,
    pub email_api_base: String,

    // Contact form routing
    pub contact_to_email: String,
    pub contact_from: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let resend_api_key = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        // The destination is only mandatory once sends are actually enabled
        let contact_to_email = if resend_api_key.is_some() {
            std::env::var("CONTACT_TO_EMAIL").context("CONTACT_TO_EMAIL not set")?
        } else {
            std::env::var("CONTACT_TO_EMAIL").unwrap_or_else(|_| "dev@localhost".to_string())
        };

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            resend_api_key,
            email_api_base: std::env::var("EMAIL_API_BASE")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),

            contact_to_email,
            contact_from: std::env::var("CONTACT_FROM")
                .unwrap_or_else(|_| "Portafolio <no-reply@diegoramirez.dev>".to_string()),
        })
    }
}
