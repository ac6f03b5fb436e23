// src/models/content.rs
// DOCUMENTATION: Content records managed through the CMS
// PURPOSE: Serialization models shared with the content backend

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{DisabilityType, PreviewSection, Toast};

/// Variant map as stored by the backend, one adaptation per disability type
pub type Variants = BTreeMap<DisabilityType, ContentVariant>;

/// Kind of content record
/// DOCUMENTATION: Wire value is singular ("care_service"), REST path is plural ("care-services")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Hotel,
    Tour,
    CareService,
}

impl ContentKind {
    pub fn all() -> [ContentKind; 3] {
        [ContentKind::Hotel, ContentKind::Tour, ContentKind::CareService]
    }

    /// Collection path on the content backend and on this service
    pub fn path(&self) -> &'static str {
        match self {
            ContentKind::Hotel => "hotels",
            ContentKind::Tour => "tours",
            ContentKind::CareService => "care-services",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Hotel => "Hotel",
            ContentKind::Tour => "Tour",
            ContentKind::CareService => "Care service",
        }
    }

    /// Parse a collection path segment ("hotels", "tours", "care-services")
    pub fn from_path_segment(segment: &str) -> Option<ContentKind> {
        ContentKind::all()
            .into_iter()
            .find(|kind| kind.path() == segment)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// AI-generated adaptation of a record's text for one disability type
/// DOCUMENTATION: Produced by the backend; this service only displays it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentVariant {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Short bullet points highlighted in the preview
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// Hotel record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Backend identifier; absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub location: String,

    pub description: String,

    #[serde(default)]
    pub star_rating: Option<u8>,

    /// Room type -> price
    #[serde(default)]
    pub prices: BTreeMap<String, String>,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub accessibility_features: Vec<String>,

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,

    /// Owned by the backend; never sent from forms
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: Variants,
}

/// Guided tour record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub location: String,

    pub description: String,

    /// Free-form duration ("3 hours", "2 days")
    pub duration: String,

    /// Ticket type -> price
    #[serde(default)]
    pub prices: BTreeMap<String, String>,

    /// Ordered stops
    #[serde(default)]
    pub itinerary: Vec<String>,

    /// What the ticket includes
    #[serde(default)]
    pub included: Vec<String>,

    #[serde(default)]
    pub accessibility_features: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub max_group_size: Option<u32>,

    /// Owned by the backend; never sent from forms
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: Variants,
}

/// Care service record (assistance, transport, equipment rental, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub location: String,

    pub description: String,

    pub service_type: String,

    /// Service -> price
    #[serde(default)]
    pub prices: BTreeMap<String, String>,

    #[serde(default)]
    pub services_offered: Vec<String>,

    /// Day -> opening hours
    #[serde(default)]
    pub availability: BTreeMap<String, String>,

    /// Channel (phone, email, ...) -> value
    #[serde(default)]
    pub contact: BTreeMap<String, String>,

    #[serde(default)]
    pub accessibility_features: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Owned by the backend; never sent from forms
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: Variants,
}

/// Behaviour shared by every content record
/// DOCUMENTATION: Lets the REST client, mock fallback and preview code work on any kind
pub trait ContentRecord: Serialize + DeserializeOwned + Clone + Send + 'static {
    const KIND: ContentKind;

    fn id(&self) -> Option<&str>;
    fn name(&self) -> &str;
    fn location(&self) -> &str;
    fn description(&self) -> &str;
    fn variants(&self) -> &Variants;
    fn accessibility_features(&self) -> &[String];
    fn images(&self) -> &[String];

    /// Kind-specific preview sections, in display order
    fn detail_sections(&self) -> Vec<PreviewSection>;
}

impl ContentRecord for Hotel {
    const KIND: ContentKind = ContentKind::Hotel;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn variants(&self) -> &Variants {
        &self.variants
    }
    fn accessibility_features(&self) -> &[String] {
        &self.accessibility_features
    }
    fn images(&self) -> &[String] {
        &self.images
    }

    fn detail_sections(&self) -> Vec<PreviewSection> {
        let rating = self
            .star_rating
            .map(|stars| vec![format!("{} stars", stars)])
            .unwrap_or_default();

        vec![
            PreviewSection::new("Rating", rating),
            PreviewSection::from_map("Prices", &self.prices),
            PreviewSection::new("Amenities", self.amenities.clone()),
        ]
    }
}

impl ContentRecord for Tour {
    const KIND: ContentKind = ContentKind::Tour;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn variants(&self) -> &Variants {
        &self.variants
    }
    fn accessibility_features(&self) -> &[String] {
        &self.accessibility_features
    }
    fn images(&self) -> &[String] {
        &self.images
    }

    fn detail_sections(&self) -> Vec<PreviewSection> {
        let mut facts = Vec::new();
        if !self.duration.trim().is_empty() {
            facts.push(format!("Duration: {}", self.duration));
        }
        if let Some(size) = self.max_group_size {
            facts.push(format!("Max group size: {}", size));
        }

        let itinerary = self
            .itinerary
            .iter()
            .enumerate()
            .map(|(i, stop)| format!("{}. {}", i + 1, stop))
            .collect();

        vec![
            PreviewSection::new("Details", facts),
            PreviewSection::from_map("Prices", &self.prices),
            PreviewSection::new("Itinerary", itinerary),
            PreviewSection::new("Included", self.included.clone()),
        ]
    }
}

impl ContentRecord for CareService {
    const KIND: ContentKind = ContentKind::CareService;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn variants(&self) -> &Variants {
        &self.variants
    }
    fn accessibility_features(&self) -> &[String] {
        &self.accessibility_features
    }
    fn images(&self) -> &[String] {
        &self.images
    }

    fn detail_sections(&self) -> Vec<PreviewSection> {
        vec![
            PreviewSection::new("Service type", vec![self.service_type.clone()]),
            PreviewSection::new("Services", self.services_offered.clone()),
            PreviewSection::from_map("Prices", &self.prices),
            PreviewSection::from_map("Availability", &self.availability),
            PreviewSection::from_map("Contact", &self.contact),
        ]
    }
}

/// Body of POST /regenerate-content on the content backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerateRequest {
    pub content_type: ContentKind,
    pub content_id: String,
    /// Empty means every disability type
    #[serde(default)]
    pub disability_types: Vec<DisabilityType>,
}

/// Backend answer to a regeneration request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegenerateResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Present when the backend regenerates synchronously
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: Variants,
}

/// Where a list response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Backend,
    Mock,
}

/// Response DTO for list endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub source: DataSource,
    /// Set when the list had to be served from sample data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Toast>,
}

/// Response DTO for create / update
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse<T> {
    pub record: T,
    pub toast: Toast,
}

/// Response DTO for regeneration
#[derive(Debug, Serialize, Deserialize)]
pub struct RegenerateResponse {
    pub content_type: ContentKind,
    pub content_id: String,
    #[serde(flatten)]
    pub result: RegenerateResult,
    pub toast: Toast,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_paths() {
        assert_eq!(ContentKind::CareService.path(), "care-services");
        assert_eq!(
            ContentKind::from_path_segment("care-services"),
            Some(ContentKind::CareService)
        );
        assert_eq!(ContentKind::from_path_segment("hotel"), None);
        assert_eq!(
            serde_json::to_value(ContentKind::CareService).unwrap(),
            json!("care_service")
        );
    }

    #[test]
    fn test_backend_json_with_missing_collections() {
        let hotel: Hotel = serde_json::from_value(json!({
            "id": "h-1",
            "name": "Harbour View",
            "location": "Lisbon",
            "description": "Rooms over the river",
            "variants": {
                "dyslexia": { "description": "A hotel by the river." }
            }
        }))
        .unwrap();

        assert_eq!(hotel.id(), Some("h-1"));
        assert!(hotel.prices.is_empty());
        assert!(hotel.amenities.is_empty());
        assert_eq!(
            hotel.variants[&DisabilityType::Dyslexia].description,
            "A hotel by the river."
        );
    }

    #[test]
    fn test_new_record_serializes_without_id() {
        let tour = Tour {
            name: "Old town walk".into(),
            location: "Porto".into(),
            description: "Walk".into(),
            duration: "2 hours".into(),
            ..Tour::default()
        };
        let value = serde_json::to_value(&tour).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["duration"], "2 hours");
    }

    #[test]
    fn test_tour_sections_number_itinerary() {
        let tour = Tour {
            duration: "3 hours".into(),
            itinerary: vec!["Cathedral".into(), "Market".into()],
            ..Tour::default()
        };
        let sections = tour.detail_sections();
        let itinerary = sections.iter().find(|s| s.heading == "Itinerary").unwrap();
        assert_eq!(itinerary.lines, vec!["1. Cathedral", "2. Market"]);
    }
}
