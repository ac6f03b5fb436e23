// src/handlers/accessibility.rs
// DOCUMENTATION: HTTP handlers for the UI accessibility analyzer
// PURPOSE: Profiles, generated CSS and component modifications per disability type

use super::json_config;
use crate::errors::CmsError;
use crate::models::{
    AnalyzeRequest, CssResponse, DisabilityType, ReactResponse, UiModificationResponse,
    UpdateComponentsRequest,
};
use crate::services::UiAccessibilityAnalyzer;
use actix_web::{web, HttpResponse};
use serde_json::json;

fn parse_type(value: &str) -> Result<DisabilityType, CmsError> {
    value.parse::<DisabilityType>().map_err(CmsError::InvalidInput)
}

/// GET /disability-types
pub async fn disability_types() -> HttpResponse {
    let types: Vec<_> = DisabilityType::all().into_iter().map(|dt| dt.info()).collect();
    HttpResponse::Ok().json(json!({ "disability_types": types }))
}

/// POST /analyze
/// Full profile with its CSS and component modifications
pub async fn analyze(
    analyzer: web::Data<UiAccessibilityAnalyzer>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, CmsError> {
    let dt = parse_type(&body.disability_type)?;
    log::info!("Analyzing UI for {}", dt);

    let profile = analyzer.analyze(dt).await;
    let response = UiModificationResponse {
        disability_type: dt,
        css_modifications: UiAccessibilityAnalyzer::generate_css(&profile),
        react_modifications: UiAccessibilityAnalyzer::generate_react(&profile),
        summary: profile.summary.clone(),
        profile,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// GET /css/{disability_type}
pub async fn css(
    analyzer: web::Data<UiAccessibilityAnalyzer>,
    path: web::Path<String>,
) -> Result<HttpResponse, CmsError> {
    let dt = parse_type(&path)?;
    let profile = analyzer.analyze(dt).await;

    Ok(HttpResponse::Ok().json(CssResponse {
        disability_type: dt,
        css: UiAccessibilityAnalyzer::generate_css(&profile),
        css_class: dt.css_class(),
    }))
}

/// GET /react/{disability_type}
pub async fn react(
    analyzer: web::Data<UiAccessibilityAnalyzer>,
    path: web::Path<String>,
) -> Result<HttpResponse, CmsError> {
    let dt = parse_type(&path)?;
    let profile = analyzer.analyze(dt).await;

    Ok(HttpResponse::Ok().json(ReactResponse {
        disability_type: dt,
        modifications: UiAccessibilityAnalyzer::generate_react(&profile),
    }))
}

/// GET /components
pub async fn components(analyzer: web::Data<UiAccessibilityAnalyzer>) -> HttpResponse {
    let catalog = analyzer.catalog().await;
    HttpResponse::Ok().json(json!({
        "total_categories": catalog.len(),
        "components": catalog,
    }))
}

/// POST /components/update
pub async fn update_components(
    analyzer: web::Data<UiAccessibilityAnalyzer>,
    body: web::Json<UpdateComponentsRequest>,
) -> Result<HttpResponse, CmsError> {
    let response = analyzer
        .update_components(body.into_inner().components)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/disability-types", web::get().to(disability_types))
        .route("/analyze", web::post().to(analyze))
        .route("/css/{disability_type}", web::get().to(css))
        .route("/react/{disability_type}", web::get().to(react))
        .route("/components", web::get().to(components))
        .route("/components/update", web::post().to(update_components));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ProfileCache;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UiAccessibilityAnalyzer::new(
                        None,
                        Arc::new(ProfileCache::new(60)),
                        10,
                    )))
                    .configure(config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_disability_types() {
        let app = app!();
        let req = test::TestRequest::get().uri("/disability-types").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let types = body["disability_types"].as_array().unwrap();
        assert_eq!(types.len(), 5);
        assert_eq!(types[0]["value"], "wheelchair_user");
    }

    #[actix_web::test]
    async fn test_analyze_without_model_serves_fallback() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({ "disability_type": "low_vision" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["disability_type"], "low_vision");
        assert_eq!(body["profile"]["source"], "fallback");
        assert!(body["css_modifications"]
            .as_str()
            .unwrap()
            .starts_with(".persona-low-vision {"));
    }

    #[actix_web::test]
    async fn test_unknown_type_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::get().uri("/css/colour_blind").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Invalid disability type: colour_blind"));
    }

    #[actix_web::test]
    async fn test_update_components() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/components/update")
            .set_json(json!({
                "components": {
                    "navigation": [{
                        "component_name": "navbar",
                        "element_type": "link",
                        "current_value": "text-sm",
                        "description": "Navigation links",
                        "css_property": "font-size",
                        "importance": "medium"
                    }]
                }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["updated_categories"], json!(["navigation"]));

        let req = test::TestRequest::get().uri("/components").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["components"]["navigation"][0]["component_name"], "navbar");
    }

    #[actix_web::test]
    async fn test_update_with_bad_importance_is_rejected() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/components/update")
            .set_json(json!({
                "components": {
                    "navigation": [{
                        "component_name": "navbar",
                        "element_type": "link",
                        "current_value": "text-sm",
                        "description": "Navigation links",
                        "css_property": "font-size",
                        "importance": "urgent"
                    }]
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_analyze_without_type_is_json_error() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("disability_type"));
    }
}
