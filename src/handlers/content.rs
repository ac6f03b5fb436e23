// src/handlers/content.rs
// DOCUMENTATION: HTTP handlers for content records and their forms
// PURPOSE: Parse requests, dispatch on content kind, call ContentService

use super::{json_config, query_config};
use crate::config::Config;
use crate::errors::CmsError;
use crate::models::{
    schema_for, CareService, CareServiceForm, ContentKind, DisabilityType, Hotel, HotelForm, Tour,
    TourForm,
};
use crate::services::{ContentApiClient, ContentService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};

/// Query string of the preview endpoint
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub tab: Option<String>,
}

/// Optional body of the regenerate endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RegenerateBody {
    #[serde(default)]
    pub disability_types: Vec<DisabilityType>,
}

/// An empty body means the defaults; anything else must be a valid RegenerateBody
fn parse_regenerate_body(body: &[u8]) -> Result<RegenerateBody, CmsError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RegenerateBody::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn parse_kind(segment: &str) -> Result<ContentKind, CmsError> {
    ContentKind::from_path_segment(segment)
        .ok_or_else(|| CmsError::NotFound(format!("Unknown content type: {}", segment)))
}

/// GET /content/{kind}
/// List records, with sample data when the backend is down
pub async fn list_content(
    client: web::Data<ContentApiClient>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, CmsError> {
    let fallback = config.mock_fallback;
    let response = match parse_kind(&path)? {
        ContentKind::Hotel => {
            HttpResponse::Ok().json(ContentService::list::<Hotel>(&client, fallback).await?)
        }
        ContentKind::Tour => {
            HttpResponse::Ok().json(ContentService::list::<Tour>(&client, fallback).await?)
        }
        ContentKind::CareService => {
            HttpResponse::Ok().json(ContentService::list::<CareService>(&client, fallback).await?)
        }
    };
    Ok(response)
}

/// GET /content/{kind}/{id}
pub async fn get_content(
    client: web::Data<ContentApiClient>,
    config: web::Data<Config>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CmsError> {
    let (kind, id) = path.into_inner();
    let fallback = config.mock_fallback;
    let response = match parse_kind(&kind)? {
        ContentKind::Hotel => {
            HttpResponse::Ok().json(ContentService::get::<Hotel>(&client, &id, fallback).await?)
        }
        ContentKind::Tour => {
            HttpResponse::Ok().json(ContentService::get::<Tour>(&client, &id, fallback).await?)
        }
        ContentKind::CareService => HttpResponse::Ok()
            .json(ContentService::get::<CareService>(&client, &id, fallback).await?),
    };
    Ok(response)
}

/// POST /content/{kind}
/// Submit a create form; body is the raw form input
pub async fn create_content(
    client: web::Data<ContentApiClient>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, CmsError> {
    let body = body.into_inner();
    let response = match parse_kind(&path)? {
        ContentKind::Hotel => {
            let form: HotelForm = serde_json::from_value(body)?;
            HttpResponse::Created().json(ContentService::create(&client, form).await?)
        }
        ContentKind::Tour => {
            let form: TourForm = serde_json::from_value(body)?;
            HttpResponse::Created().json(ContentService::create(&client, form).await?)
        }
        ContentKind::CareService => {
            let form: CareServiceForm = serde_json::from_value(body)?;
            HttpResponse::Created().json(ContentService::create(&client, form).await?)
        }
    };
    Ok(response)
}

/// PUT /content/{kind}/{id}
/// Submit an edit form
pub async fn update_content(
    client: web::Data<ContentApiClient>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, CmsError> {
    let (kind, id) = path.into_inner();
    let body = body.into_inner();
    let response = match parse_kind(&kind)? {
        ContentKind::Hotel => {
            let form: HotelForm = serde_json::from_value(body)?;
            HttpResponse::Ok().json(ContentService::update(&client, &id, form).await?)
        }
        ContentKind::Tour => {
            let form: TourForm = serde_json::from_value(body)?;
            HttpResponse::Ok().json(ContentService::update(&client, &id, form).await?)
        }
        ContentKind::CareService => {
            let form: CareServiceForm = serde_json::from_value(body)?;
            HttpResponse::Ok().json(ContentService::update(&client, &id, form).await?)
        }
    };
    Ok(response)
}

/// DELETE /content/{kind}/{id}
pub async fn delete_content(
    client: web::Data<ContentApiClient>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CmsError> {
    let (kind, id) = path.into_inner();
    let toast = ContentService::delete(&client, parse_kind(&kind)?, &id).await?;
    Ok(HttpResponse::Ok().json(json!({ "toast": toast })))
}

/// POST /content/{kind}/{id}/regenerate
/// Body is optional; no disability types means all of them
pub async fn regenerate_content(
    client: web::Data<ContentApiClient>,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> Result<HttpResponse, CmsError> {
    let (kind, id) = path.into_inner();
    let kind = parse_kind(&kind)?;
    let types = parse_regenerate_body(&body)?.disability_types;

    let result = ContentService::regenerate(&client, kind, &id, types).await?;
    Ok(HttpResponse::Accepted().json(result))
}

/// GET /content/{kind}/{id}/preview?tab=
pub async fn preview_content(
    client: web::Data<ContentApiClient>,
    config: web::Data<Config>,
    path: web::Path<(String, String)>,
    query: web::Query<PreviewQuery>,
) -> Result<HttpResponse, CmsError> {
    let (kind, id) = path.into_inner();
    let tab = query.tab.as_deref();
    let fallback = config.mock_fallback;

    let preview = match parse_kind(&kind)? {
        ContentKind::Hotel => ContentService::preview::<Hotel>(&client, &id, tab, fallback).await?,
        ContentKind::Tour => ContentService::preview::<Tour>(&client, &id, tab, fallback).await?,
        ContentKind::CareService => {
            ContentService::preview::<CareService>(&client, &id, tab, fallback).await?
        }
    };
    Ok(HttpResponse::Ok().json(preview))
}

/// GET /forms/{kind}
/// Empty form schema
pub async fn form_schema(path: web::Path<String>) -> Result<HttpResponse, CmsError> {
    let kind = parse_kind(&path)?;
    Ok(HttpResponse::Ok().json(schema_for(kind)))
}

/// GET /forms/{kind}/{id}
/// Edit form pre-filled from an existing record
pub async fn edit_form(
    client: web::Data<ContentApiClient>,
    config: web::Data<Config>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CmsError> {
    let (kind, id) = path.into_inner();
    let fallback = config.mock_fallback;
    let response = match parse_kind(&kind)? {
        ContentKind::Hotel => HttpResponse::Ok()
            .json(ContentService::edit_form::<HotelForm>(&client, &id, fallback).await?),
        ContentKind::Tour => HttpResponse::Ok()
            .json(ContentService::edit_form::<TourForm>(&client, &id, fallback).await?),
        ContentKind::CareService => HttpResponse::Ok()
            .json(ContentService::edit_form::<CareServiceForm>(&client, &id, fallback).await?),
    };
    Ok(response)
}

/// Configuration for content and form routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/content")
                .route("/{kind}", web::get().to(list_content))
                .route("/{kind}", web::post().to(create_content))
                .route("/{kind}/{id}", web::get().to(get_content))
                .route("/{kind}/{id}", web::put().to(update_content))
                .route("/{kind}/{id}", web::delete().to(delete_content))
                .route("/{kind}/{id}/regenerate", web::post().to(regenerate_content))
                .route("/{kind}/{id}/preview", web::get().to(preview_content)),
        )
        .service(
            web::scope("/forms")
                .route("/{kind}", web::get().to(form_schema))
                .route("/{kind}/{id}", web::get().to(edit_form)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_backend;
    use actix_web::{http::header, http::StatusCode, test, App};

    fn offline_client() -> ContentApiClient {
        ContentApiClient::new("http://127.0.0.1:1", 2).unwrap()
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(offline_client()))
                    .app_data(web::Data::new(Config::default()))
                    .configure(config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_form_schema() {
        let app = app!();
        let req = test::TestRequest::get().uri("/forms/tours").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["kind"], "tour");
        assert_eq!(body["fields"][0]["name"], "name");
        assert_eq!(body["fields"][0]["required"], true);
    }

    #[actix_web::test]
    async fn test_unknown_kind() {
        let app = app!();
        let req = test::TestRequest::get().uri("/forms/castles").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_served_from_mock_when_backend_down() {
        let app = app!();
        let req = test::TestRequest::get().uri("/content/care-services").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["source"], "mock");
        assert_eq!(body["items"][0]["id"], "mock-care-1");
        assert_eq!(body["notice"]["variant"], "info");
    }

    #[actix_web::test]
    async fn test_create_with_empty_required_fields_is_rejected() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/content/hotels")
            .set_json(json!({
                "name": "",
                "location": "Lisbon",
                "description": "Rooms",
                "prices": [{ "key": "Single", "value": "90" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["toast"]["variant"], "error");
    }

    #[actix_web::test]
    async fn test_preview_tabs() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/content/tours/mock-tour-1/preview?tab=cognitive_impairment")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["tabs"]["selected"], "cognitive_impairment");
        assert_eq!(body["panel"]["title"], "Old Town Walk");

        let req = test::TestRequest::get()
            .uri("/content/tours/mock-tour-1/preview?tab=purple")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_edit_form_prefills_pairs() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/forms/hotels/mock-hotel-1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], "mock-hotel-1");
        assert_eq!(body["values"]["prices"][0], json!({ "key": "Double room", "value": "140 EUR" }));
    }

    #[actix_web::test]
    async fn test_delete_when_backend_down_is_bad_gateway() {
        let app = app!();
        let req = test::TestRequest::delete()
            .uri("/content/hotels/mock-hotel-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_malformed_json_gets_error_body_and_toast() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/content/hotels")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        assert_eq!(body["toast"]["variant"], "error");
    }

    #[actix_web::test]
    async fn test_regenerate_rejects_unknown_disability_type() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/content/hotels/h-1/regenerate")
            .set_json(json!({ "disability_types": ["colour_blind"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[actix_web::test]
    async fn test_regenerate_without_body_means_all_types() {
        let backend = test_backend::start();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentApiClient::new(&backend.url, 5).unwrap()))
                .app_data(web::Data::new(Config::default()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/content/tours/t-1/regenerate")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["content_id"], "t-1");
        assert_eq!(body["toast"]["title"], "Regeneration started");

        let sent = backend.last("POST", "/api/regenerate-content").unwrap().body;
        assert_eq!(sent["content_type"], "tour");
        assert_eq!(sent["disability_types"], json!([]));
    }

    #[actix_web::test]
    async fn test_dot_segment_id_is_rejected() {
        let app = app!();
        let req = test::TestRequest::delete()
            .uri("/content/hotels/%2E%2E")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
