// src/services/content_client.rs
// DOCUMENTATION: Content backend REST client
// PURPOSE: CRUD and regeneration calls for hotels, tours and care services

use crate::errors::CmsError;
use crate::models::{ContentKind, ContentRecord, RegenerateRequest, RegenerateResult};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Content backend client
/// DOCUMENTATION: Thin wrapper over reqwest; the backend owns persistence and AI generation
#[derive(Clone)]
pub struct ContentApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL, without trailing slash (e.g., "http://localhost:8080/api")
    base_url: Url,
}

/// List payloads come either bare or wrapped in `data`
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { data } => data,
        }
    }
}

/// Record ids travel as one path segment; dot segments would escape the collection
fn check_id(id: &str) -> Result<&str, CmsError> {
    match id.trim() {
        "" | "." | ".." => Err(CmsError::InvalidInput(format!("Invalid record id: {:?}", id))),
        _ => Ok(id),
    }
}

impl ContentApiClient {
    /// Create new content backend client
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, CmsError> {
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            CmsError::InternalError(format!("Invalid content API URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CmsError::InternalError(format!(
                "Content API URL cannot be a base: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CmsError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL plus `segments`, each percent-encoded as a single path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CmsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CmsError::InternalError(format!("Content API URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn collection_url(&self, kind: ContentKind) -> Result<Url, CmsError> {
        self.endpoint(&[kind.path()])
    }

    fn item_url(&self, kind: ContentKind, id: &str) -> Result<Url, CmsError> {
        self.endpoint(&[kind.path(), check_id(id)?])
    }

    /// GET /{kind}
    pub async fn list<T: ContentRecord>(&self) -> Result<Vec<T>, CmsError> {
        let url = self.collection_url(T::KIND)?;
        log::debug!("Listing {} from {}", T::KIND.path(), url);

        let response = self.send(self.client.get(url.clone()), &url).await?;
        let envelope: ListEnvelope<T> = Self::parse(response).await?;
        let items = envelope.into_items();

        log::info!("Content backend returned {} {}", items.len(), T::KIND.path());
        Ok(items)
    }

    /// GET /{kind}/{id}
    pub async fn get<T: ContentRecord>(&self, id: &str) -> Result<T, CmsError> {
        let url = self.item_url(T::KIND, id)?;
        let response = self.send(self.client.get(url.clone()), &url).await?;
        Self::parse(response).await
    }

    /// POST /{kind}
    pub async fn create<T: ContentRecord>(&self, record: &T) -> Result<T, CmsError> {
        let url = self.collection_url(T::KIND)?;
        log::info!("Creating {} '{}'", T::KIND.label(), record.name());

        let response = self.send(self.client.post(url.clone()).json(record), &url).await?;
        Self::parse(response).await
    }

    /// PUT /{kind}/{id}
    pub async fn update<T: ContentRecord>(&self, id: &str, record: &T) -> Result<T, CmsError> {
        let url = self.item_url(T::KIND, id)?;
        log::info!("Updating {} {}", T::KIND.label(), id);

        let response = self.send(self.client.put(url.clone()).json(record), &url).await?;
        Self::parse(response).await
    }

    /// DELETE /{kind}/{id}
    pub async fn delete(&self, kind: ContentKind, id: &str) -> Result<(), CmsError> {
        let url = self.item_url(kind, id)?;
        log::info!("Deleting {} {}", kind.label(), id);

        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }

    /// POST /regenerate-content
    /// DOCUMENTATION: Asks the backend to rebuild the disability variants of one record
    pub async fn regenerate(&self, request: &RegenerateRequest) -> Result<RegenerateResult, CmsError> {
        check_id(&request.content_id)?;
        let url = self.endpoint(&["regenerate-content"])?;
        log::info!(
            "Requesting variant regeneration for {} {}",
            request.content_type.label(),
            request.content_id
        );

        let response = self.send(self.client.post(url.clone()).json(request), &url).await?;

        // Some backends answer 202 with an empty body
        let body = response.text().await.map_err(|e| {
            CmsError::ExternalApiError(format!("Failed to read response: {}", e))
        })?;
        if body.trim().is_empty() {
            return Ok(RegenerateResult::default());
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse regeneration response: {}", e);
            CmsError::ExternalApiError(format!("Parse error: {}", e))
        })
    }

    /// Send a request and map non-success statuses to CmsError
    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> Result<Response, CmsError> {
        let response = request.send().await.map_err(|e| {
            log::error!("Content backend request to {} failed: {}", url, e);
            CmsError::ExternalApiError(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("Content backend error {} for {}: {}", status, url, body);
        Err(Self::map_status(status, body, url.as_str()))
    }

    fn map_status(status: StatusCode, body: String, url: &str) -> CmsError {
        match status {
            StatusCode::NOT_FOUND => CmsError::NotFound(url.to_string()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                CmsError::ValidationError(body)
            }
            StatusCode::TOO_MANY_REQUESTS => CmsError::RateLimitExceeded,
            _ => CmsError::ExternalApiError(format!("API error {}: {}", status, body)),
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, CmsError> {
        response.json().await.map_err(|e| {
            log::error!("Failed to parse content backend response: {}", e);
            CmsError::ExternalApiError(format!("Parse error: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hotel;
    use serde_json::json;

    #[test]
    fn test_urls() {
        let client = ContentApiClient::new("http://backend.local/api/", 5).unwrap();
        assert_eq!(client.base_url(), "http://backend.local/api");
        assert_eq!(
            client.collection_url(ContentKind::CareService).unwrap().as_str(),
            "http://backend.local/api/care-services"
        );
        assert_eq!(
            client.item_url(ContentKind::Tour, "t-7").unwrap().as_str(),
            "http://backend.local/api/tours/t-7"
        );
    }

    #[test]
    fn test_item_url_keeps_id_inside_collection() {
        let client = ContentApiClient::new("http://backend.local/api", 5).unwrap();

        for id in ["..", ".", "", "  "] {
            assert!(matches!(
                client.item_url(ContentKind::Hotel, id),
                Err(CmsError::InvalidInput(_))
            ));
        }

        assert_eq!(
            client.item_url(ContentKind::Hotel, "a?b=1").unwrap().as_str(),
            "http://backend.local/api/hotels/a%3Fb=1"
        );
        assert_eq!(
            client.item_url(ContentKind::Hotel, "x#frag").unwrap().as_str(),
            "http://backend.local/api/hotels/x%23frag"
        );
        assert_eq!(
            client.item_url(ContentKind::Hotel, "../admin").unwrap().as_str(),
            "http://backend.local/api/hotels/..%2Fadmin"
        );
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(ContentApiClient::new("not a url", 5).is_err());
        assert!(ContentApiClient::new("mailto:cms@example.com", 5).is_err());
    }

    #[test]
    fn test_status_mapping() {
        let url = "http://backend.local/api/hotels/x";
        assert!(matches!(
            ContentApiClient::map_status(StatusCode::NOT_FOUND, String::new(), url),
            CmsError::NotFound(_)
        ));
        assert!(matches!(
            ContentApiClient::map_status(StatusCode::UNPROCESSABLE_ENTITY, "name".into(), url),
            CmsError::ValidationError(ref body) if body == "name"
        ));
        assert!(matches!(
            ContentApiClient::map_status(StatusCode::TOO_MANY_REQUESTS, String::new(), url),
            CmsError::RateLimitExceeded
        ));
        assert!(matches!(
            ContentApiClient::map_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into(), url),
            CmsError::ExternalApiError(_)
        ));
    }

    #[test]
    fn test_list_envelopes() {
        let hotel = json!({ "name": "A", "location": "B", "description": "C" });

        let bare: ListEnvelope<Hotel> = serde_json::from_value(json!([hotel.clone()])).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let wrapped: ListEnvelope<Hotel> =
            serde_json::from_value(json!({ "data": [hotel.clone(), hotel] })).unwrap();
        assert_eq!(wrapped.into_items().len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_external_error() {
        // port 1 is never served in test environments
        let client = ContentApiClient::new("http://127.0.0.1:1", 2).unwrap();
        let result = client.list::<Hotel>().await;
        assert!(matches!(result, Err(CmsError::ExternalApiError(_))));
    }
}
