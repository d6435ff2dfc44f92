//! Internationalization (i18n) module for the bilingual site core.
//!
//! This module owns everything locale-related: the closed set of supported
//! locales, the validated `Locale` type, and the localized site-level strings
//! (titles, contact email templates).
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale type validated against the registry
//! - `strings`: Centralized localized site strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, LocaleRegistry};
//!
//! // The default (base-content) locale is Spanish
//! let default = Locale::default_locale();
//!
//! // Create a locale from a path segment
//! let english = Locale::from_code("en")?;
//!
//! // List all enabled locales
//! let locales = LocaleRegistry::get().list_enabled();
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::SiteStrings;
