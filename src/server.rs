//! HTTP surface: the JSON API the rendering layer consumes.
//!
//! Every request derives its locale from the observed path (`?path=`) and
//! threads it explicitly through routing, navigation and content lookups —
//! locale is never ambient state.

use crate::config::Config;
use crate::contact::{self, ContactError, ContactSubmission, SubmissionOutcome};
use crate::content::{self, ContentError};
use crate::i18n::Locale;
use crate::{nav, routing};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// Shared request state: configuration plus one reusable HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the state with the outbound client used for email dispatch.
    /// The bounded timeout lives here so no handler can block indefinitely
    /// on the provider.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/page", get(page_context))
        .route("/api/content/:collection", get(list_collection))
        .route("/api/content/:collection/:slug", get(get_content))
        .route("/api/contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Observed-path query parameter shared by the read endpoints.
#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    path: Option<String>,
}

impl PageQuery {
    fn observed_path(&self) -> &str {
        self.path.as_deref().unwrap_or("/")
    }
}

/// Per-request page context: active locale, canonical path, localized site
/// strings, menu and language-switcher targets.
#[derive(Debug, Serialize)]
struct PageContext {
    locale: &'static str,
    canonical_path: String,
    site: SiteMeta,
    menu: Vec<nav::MenuEntry>,
    alternates: Vec<AlternateLink>,
}

#[derive(Debug, Serialize)]
struct SiteMeta {
    title: &'static str,
    tagline: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct AlternateLink {
    locale: &'static str,
    label: &'static str,
    path: String,
}

async fn health() -> &'static str {
    "ok"
}

async fn page_context(Query(query): Query<PageQuery>) -> Json<PageContext> {
    let observed = query.observed_path();
    let locale = routing::resolve_locale(observed);
    let strings = locale.strings();

    let alternates = routing::alternates(observed)
        .into_iter()
        .map(|(alt, path)| AlternateLink {
            locale: alt.code(),
            label: alt.native_name(),
            path,
        })
        .collect();

    Json(PageContext {
        locale: locale.code(),
        canonical_path: routing::delocalize(observed),
        site: SiteMeta {
            title: strings.site_title,
            tagline: strings.site_tagline,
            description: strings.meta_description,
        },
        menu: nav::menu_for(locale, observed),
        alternates,
    })
}

async fn list_collection(
    Path(collection): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let locale = routing::resolve_locale(query.observed_path());

    match content::list_json(&collection, locale) {
        Ok(records) => Json(records).into_response(),
        Err(err) => content_error_response(err, locale),
    }
}

async fn get_content(
    Path((collection, slug)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Response {
    let locale = routing::resolve_locale(query.observed_path());

    match content::resolve_json(&collection, &slug, locale) {
        Ok(record) => Json(record).into_response(),
        Err(err) => content_error_response(err, locale),
    }
}

async fn submit_contact(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    let locale = routing::resolve_locale(query.observed_path());

    match contact::submit(&state.config, &state.http, locale, &submission).await {
        Ok(SubmissionOutcome::DeliveryFailed) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "error": "delivery",
                "message": locale.strings().delivery_failure,
            })),
        )
            .into_response(),
        Ok(outcome) => (StatusCode::ACCEPTED, Json(json!({ "status": outcome }))).into_response(),
        Err(err) => contact_error_response(err),
    }
}

/// Content errors map to 404 with a locale-appropriate message.
fn content_error_response(err: ContentError, locale: Locale) -> Response {
    let kind = match err {
        ContentError::NotFound { .. } => "not_found",
        ContentError::UnknownCollection(_) => "unknown_collection",
    };

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": kind,
            "message": locale.strings().not_found,
        })),
    )
        .into_response()
}

/// Validation errors map to 422 naming the offending field.
fn contact_error_response(err: ContactError) -> Response {
    let body = match err {
        ContactError::MissingField(field) => json!({
            "error": "validation",
            "kind": "missing_field",
            "field": field,
        }),
        ContactError::InvalidEmail => json!({
            "error": "validation",
            "kind": "invalid_email",
            "field": "email",
        }),
    };

    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}
