//! Internationalization (i18n) module for the localized site.
//!
//! All locale-related logic lives here: which locales exist, how a request is
//! mapped to one, and the localized strings the SEO layer consumes.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Validated `Locale` handle used by every builder
//! - `strings`: Localized strings per locale
//! - `routing`: Prefix policy, locale detection and request routing
//!
//! # Example
//!
//! ```rust,ignore
//! use placy_site::i18n::{Locale, LocaleRegistry};
//!
//! let default = Locale::default_locale();
//! let greek = Locale::from_code("el")?;
//! let codes = LocaleRegistry::get().codes();
//! ```

mod locale;
mod registry;
pub mod routing;
mod strings;

pub use locale::Locale;
pub use registry::{Direction, LocaleConfig, LocaleRegistry};
pub use routing::{LocalePrefix, RouteDecision};
pub use strings::LocaleStrings;
