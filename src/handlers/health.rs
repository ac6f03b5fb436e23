// src/handlers/health.rs
// DOCUMENTATION: Health check and service description
// PURPOSE: Simple endpoints to verify service status

use crate::config::Config;
use crate::services::UiAccessibilityAnalyzer;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /health
/// "degraded" when the analyzer can only serve fallback profiles
pub async fn health_check(
    config: web::Data<Config>,
    analyzer: web::Data<UiAccessibilityAnalyzer>,
) -> impl Responder {
    let model_configured = analyzer.is_model_configured();
    let status = if model_configured { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(json!({
        "status": status,
        "service": "accessible-cms",
        "version": env!("CARGO_PKG_VERSION"),
        "model_configured": model_configured,
        "content_api": config.content_api_url,
    }))
}

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Accessible CMS API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "forms": "/forms/{kind}",
            "content": "/content/{kind}",
            "preview": "/content/{kind}/{id}/preview",
            "regenerate": "/content/{kind}/{id}/regenerate",
            "analyze": "/analyze",
            "css": "/css/{disability_type}",
            "react": "/react/{disability_type}",
            "disability_types": "/disability-types",
            "components": "/components",
            "update_components": "/components/update"
        }
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}
