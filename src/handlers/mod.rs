// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod accessibility;
pub mod content;
pub mod health;

pub use accessibility::config as accessibility_config;
pub use content::config as content_config;
pub use health::config as health_config;

use crate::errors::CmsError;
use actix_web::web;

/// Malformed JSON bodies answer with the usual error body and toast
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        CmsError::InvalidInput(format!("Invalid request body: {}", err)).into()
    })
}

/// Same for query strings
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        CmsError::InvalidInput(format!("Invalid query string: {}", err)).into()
    })
}
