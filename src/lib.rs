pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod seo;
pub mod server;
