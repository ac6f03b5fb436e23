// src/services/test_backend.rs
// DOCUMENTATION: In-process content backend for tests
// PURPOSE: Serve canned records on a local port and record every call made to it

use actix_web::{http::Method, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// One call received by the stub
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Value,
}

pub(crate) struct StubBackend {
    /// Base URL to hand to ContentApiClient, ends in `/api`
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Last request with the given method and path
    pub fn last(&self, method: &str, path: &str) -> Option<RecordedRequest> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }
}

pub(crate) fn stored_hotel() -> Value {
    json!({
        "id": "h-1",
        "name": "Harbour Hotel",
        "location": "Porto",
        "description": "Quiet rooms by the river",
        "star_rating": 4,
        "prices": { "Double room": "120 EUR" },
        "accessibility_features": ["Roll-in shower"],
        "variants": {
            "low_vision": { "description": "Large print room guide" }
        }
    })
}

pub(crate) fn stored_tour() -> Value {
    json!({
        "id": "t-1",
        "name": "River Cruise",
        "location": "Porto",
        "description": "Six bridges by boat",
        "duration": "1 hour"
    })
}

async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    requests: web::Data<Arc<Mutex<Vec<RecordedRequest>>>>,
) -> HttpResponse {
    let path = req.path().to_string();
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: path.clone(),
        body: body.clone(),
    });

    let segments: Vec<&str> = path.trim_start_matches("/api/").split('/').collect();
    match (req.method().clone(), segments.as_slice()) {
        (Method::POST, ["regenerate-content"]) => HttpResponse::Accepted().finish(),
        (Method::GET, ["hotels"]) => HttpResponse::Ok().json(json!({ "data": [stored_hotel()] })),
        (Method::GET, ["tours"]) => HttpResponse::Ok().json(json!([stored_tour()])),
        (Method::GET, ["hotels", "h-1"]) => HttpResponse::Ok().json(stored_hotel()),
        (Method::POST, [_kind]) => HttpResponse::Created().json(with_id(body, "new-1")),
        (Method::PUT, [_kind, id]) => HttpResponse::Ok().json(with_id(body, id)),
        (Method::DELETE, [_kind, _id]) => HttpResponse::NoContent().finish(),
        _ => HttpResponse::NotFound().json(json!({ "detail": "Not found" })),
    }
}

fn with_id(mut body: Value, id: &str) -> Value {
    if let Some(object) = body.as_object_mut() {
        object.insert("id".to_string(), json!(id));
    }
    body
}

/// Bind on an ephemeral port and serve on the current actix system
pub(crate) fn start() -> StubBackend {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let data = web::Data::new(requests.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .default_service(web::to(handle))
    })
    .listen(listener)
    .unwrap()
    .workers(1)
    .disable_signals()
    .run();
    actix_web::rt::spawn(server);

    StubBackend {
        url: format!("http://127.0.0.1:{}/api", port),
        requests,
    }
}
