// src/services/content_service.rs
// DOCUMENTATION: Business logic for content records
// PURPOSE: Intermediary between handlers and the content backend: validation,
// payload shaping, mock fallback and toast notices

use crate::errors::CmsError;
use crate::models::{
    ContentForm, ContentKind, ContentListResponse, ContentPreview, ContentRecord, DataSource,
    DisabilityType, EditFormResponse, MutationResponse, RegenerateRequest, RegenerateResponse,
    Toast,
};
use crate::services::mock_data::{find_mock, MockContent};
use crate::services::preview::build_preview;
use crate::services::ContentApiClient;

pub struct ContentService;

impl ContentService {
    /// List records, falling back to sample data when the backend fails
    pub async fn list<T: MockContent>(
        client: &ContentApiClient,
        fallback: bool,
    ) -> Result<ContentListResponse<T>, CmsError> {
        match client.list::<T>().await {
            Ok(items) => Ok(ContentListResponse {
                total: items.len(),
                items,
                source: DataSource::Backend,
                notice: None,
            }),
            Err(e) if fallback => {
                log::warn!(
                    "Listing {} failed ({}); serving sample data",
                    T::KIND.path(),
                    e
                );
                let items = T::mock_records();
                Ok(ContentListResponse {
                    total: items.len(),
                    items,
                    source: DataSource::Mock,
                    notice: Some(Toast::info(
                        "Showing sample data",
                        format!("The content service is unavailable: {}", e),
                    )),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Get one record; a backend outage falls back to a sample record with the same id
    pub async fn get<T: MockContent>(
        client: &ContentApiClient,
        id: &str,
        fallback: bool,
    ) -> Result<T, CmsError> {
        match client.get::<T>(id).await {
            Ok(record) => Ok(record),
            Err(CmsError::NotFound(url)) => Err(CmsError::NotFound(url)),
            Err(e) if fallback => match find_mock::<T>(id) {
                Some(record) => {
                    log::warn!(
                        "Fetching {} {} failed ({}); serving sample record",
                        T::KIND.label(),
                        id,
                        e
                    );
                    Ok(record)
                }
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    /// Validate a create form, shape it and POST it
    pub async fn create<F: ContentForm>(
        client: &ContentApiClient,
        form: F,
    ) -> Result<MutationResponse<F::Record>, CmsError> {
        let record = form.into_record()?;
        let created = client.create(&record).await?;

        let kind = <F::Record as ContentRecord>::KIND;
        Ok(MutationResponse {
            toast: Toast::success(
                format!("{} created", kind.label()),
                format!(
                    "'{}' was saved. Accessible versions will be generated shortly.",
                    created.name()
                ),
            ),
            record: created,
        })
    }

    /// Validate an edit form, shape it and PUT it
    pub async fn update<F: ContentForm>(
        client: &ContentApiClient,
        id: &str,
        form: F,
    ) -> Result<MutationResponse<F::Record>, CmsError> {
        let record = form.into_record()?;
        let updated = client.update(id, &record).await?;

        let kind = <F::Record as ContentRecord>::KIND;
        Ok(MutationResponse {
            toast: Toast::success(
                format!("{} updated", kind.label()),
                format!("'{}' was saved.", updated.name()),
            ),
            record: updated,
        })
    }

    pub async fn delete(client: &ContentApiClient, kind: ContentKind, id: &str) -> Result<Toast, CmsError> {
        client.delete(kind, id).await?;
        Ok(Toast::success(
            format!("{} deleted", kind.label()),
            format!("{} {} was removed.", kind.label(), id),
        ))
    }

    /// Ask the backend to regenerate the disability variants of a record
    pub async fn regenerate(
        client: &ContentApiClient,
        kind: ContentKind,
        id: &str,
        disability_types: Vec<DisabilityType>,
    ) -> Result<RegenerateResponse, CmsError> {
        let request = RegenerateRequest {
            content_type: kind,
            content_id: id.to_string(),
            disability_types,
        };
        let result = client.regenerate(&request).await?;

        let description = result
            .message
            .clone()
            .unwrap_or_else(|| "Accessible versions are being regenerated.".to_string());

        Ok(RegenerateResponse {
            content_type: kind,
            content_id: id.to_string(),
            result,
            toast: Toast::success("Regeneration started", description),
        })
    }

    /// Fetch a record and pre-fill its edit form
    pub async fn edit_form<F>(
        client: &ContentApiClient,
        id: &str,
        fallback: bool,
    ) -> Result<EditFormResponse<F>, CmsError>
    where
        F: ContentForm,
        F::Record: MockContent,
    {
        let record = Self::get::<F::Record>(client, id, fallback).await?;
        Ok(EditFormResponse {
            schema: F::schema(),
            id: id.to_string(),
            values: F::from_record(&record),
        })
    }

    /// Fetch a record and render its tabbed preview
    pub async fn preview<T: MockContent>(
        client: &ContentApiClient,
        id: &str,
        tab: Option<&str>,
        fallback: bool,
    ) -> Result<ContentPreview, CmsError> {
        let record = Self::get::<T>(client, id, fallback).await?;
        build_preview(&record, tab)
    }
}
