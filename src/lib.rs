//! Core of a bilingual (Spanish/English) portfolio site: locale-aware
//! routing, content resolution with per-field translation fallback, the
//! static navigation model, and the contact form handler.
//!
//! Spanish is the default locale; English pages live under the `/en` path
//! prefix. Content is statically defined in code modules and immutable
//! after startup — changing it means redeploying.

pub mod config;
pub mod contact;
pub mod content;
pub mod email;
pub mod i18n;
pub mod nav;
pub mod routing;
pub mod server;
